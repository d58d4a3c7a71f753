pub mod marker;
pub mod surface;

pub use self::marker::{MarkerWalk, SceneSink, WriterSink};
pub use self::surface::{SurfacePatch, SurfaceVertex};
