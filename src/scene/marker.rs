use std::io::Write;
use std::thread;
use std::time::Duration;

use nalgebra::Point3;

use descent::Trajectory;
use errors::{ChainErr, Result};
use math::{Scalar, ScalarField2};
use scene::surface::SurfacePatch;

/// The rendering collaborator's interface: it receives the surface once and
/// then one marker position per frame, in trajectory order.
pub trait SceneSink {
    fn place_surface(&mut self, surface: &SurfacePatch) -> Result<()>;

    fn move_marker(&mut self, position: &Point3<Scalar>) -> Result<()>;
}

/// Streams scene events as lines of text to any writer, one event per line.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        WriterSink { writer: writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SceneSink for WriterSink<W> {
    fn place_surface(&mut self, surface: &SurfacePatch) -> Result<()> {
        try!(writeln!(self.writer, "surface {} {}", surface.rows(), surface.cols())
            .chain_err(|| "Could not emit the surface header."));
        for vertex in surface.vertices() {
            try!(writeln!(self.writer,
                          "v {} {} {} {} {} {}",
                          vertex.position[0],
                          vertex.position[1],
                          vertex.position[2],
                          vertex.normal[0],
                          vertex.normal[1],
                          vertex.normal[2])
                .chain_err(|| "Could not emit a surface vertex."));
        }
        Ok(())
    }

    fn move_marker(&mut self, position: &Point3<Scalar>) -> Result<()> {
        writeln!(self.writer,
                 "marker {} {} {}",
                 position[0],
                 position[1],
                 position[2])
            .chain_err(|| "Could not emit a marker frame.")
    }
}

/// Replays a trajectory into a scene sink front to back, pausing between
/// frames so a renderer can pace a moving marker.
pub struct MarkerWalk {
    lead_in: Duration,
    frame_delay: Duration,
}

impl MarkerWalk {
    pub fn new(lead_in: Duration, frame_delay: Duration) -> Self {
        MarkerWalk {
            lead_in: lead_in,
            frame_delay: frame_delay,
        }
    }

    pub fn play<Field, Sink>(&self,
                             field: &Field,
                             trajectory: &Trajectory,
                             sink: &mut Sink)
                             -> Result<()>
        where Field: ScalarField2,
              Sink: SceneSink
    {
        let samples = trajectory.lift(field);
        thread::sleep(self.lead_in);
        for sample in samples.iter() {
            try!(sink.move_marker(sample));
            thread::sleep(self.frame_delay);
        }
        Ok(())
    }
}

impl Default for MarkerWalk {
    fn default() -> Self {
        MarkerWalk::new(Duration::from_millis(LEAD_IN_MS),
                        Duration::from_millis(FRAME_DELAY_MS))
    }
}

const LEAD_IN_MS: u64 = 100;
const FRAME_DELAY_MS: u64 = 50;
