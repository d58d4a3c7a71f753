#![recursion_limit = "1024"]

extern crate env_logger;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate log;
extern crate nalgebra;

mod descent;
mod errors;
mod math;
mod scene;

use std::error::Error;
use std::io;
use nalgebra::Point2;

use descent::GradientDescent;
use errors::Result;
use math::{ParaboloidField, Scalar, ScalarField2};
use scene::{MarkerWalk, SceneSink, SurfacePatch, WriterSink};

fn run_scene() -> Result<()> {
    let field = ParaboloidField;
    let walker = GradientDescent::new(LEARNING_RATE, NUM_STEPS, EPSILON);

    info!("Walking {} descent steps from ({}, {}) at learning rate {}",
          NUM_STEPS,
          START_X,
          START_Y,
          LEARNING_RATE);
    let trajectory = try!(walker.trajectory(&field, Point2::new(START_X, START_Y)));
    let end = trajectory.end();
    info!("Final iterate ({}, {}) with field value {}",
          end[0],
          end[1],
          field.value_at(end));

    let surface = SurfacePatch::sample(&field,
                                       SURFACE_RANGE,
                                       SURFACE_RANGE,
                                       SURFACE_RESOLUTION,
                                       EPSILON);

    let stdout = io::stdout();
    let mut sink = WriterSink::new(stdout.lock());
    try!(sink.place_surface(&surface));
    MarkerWalk::default().play(&field, &trajectory, &mut sink)
}

fn main() {
    if let Err(err) = env_logger::init() {
        println!("Could not initialize logger, exiting: {}",
                 err.description());
    } else {
        run_scene().unwrap();
    }
}

const START_X: Scalar = 1.0;
const START_Y: Scalar = 1.0;
const LEARNING_RATE: Scalar = 0.018;
const NUM_STEPS: usize = 200;
const EPSILON: Scalar = 1e-6;
const SURFACE_RANGE: (Scalar, Scalar) = (-1.0, 1.0);
const SURFACE_RESOLUTION: usize = 16;
