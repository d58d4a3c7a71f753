pub mod scalar_field;

pub use self::scalar_field::{ParaboloidField, ScalarField2};

pub type Scalar = f64;
