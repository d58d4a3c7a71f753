use nalgebra::{Point2, Point3};

use errors::{ErrorKind, Result};
use math::{Scalar, ScalarField2};

/// Fixed-step gradient descent over a two-variable scalar field.
///
/// The walk always performs the configured number of steps; there is no
/// convergence check and no divergence guard, so a field that evaluates to a
/// non-finite value poisons every later iterate.
#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: Scalar,
    num_steps: usize,
    epsilon: Scalar,
}

impl GradientDescent {
    pub fn new(learning_rate: Scalar, num_steps: usize, epsilon: Scalar) -> Self {
        GradientDescent {
            learning_rate: learning_rate,
            num_steps: num_steps,
            epsilon: epsilon,
        }
    }

    /// Walks `num_steps` descent steps from `start`, recording every iterate
    /// with the starting point first.
    pub fn trajectory<Field>(&self, field: &Field, start: Point2<Scalar>) -> Result<Trajectory>
        where Field: ScalarField2
    {
        if self.epsilon == 0.0 {
            return Err(ErrorKind::DegenerateStepSize.into());
        }

        let mut points = Vec::with_capacity(self.num_steps + 1);
        let mut current = start;
        points.push(current);
        for _ in 0..self.num_steps {
            let gradient = field.gradient_at(&current, self.epsilon);
            current = Point2::new(current[0] - self.learning_rate * gradient[0],
                                  current[1] - self.learning_rate * gradient[1]);
            points.push(current);
        }
        debug!("Walked {} descent steps to ({}, {})",
               self.num_steps,
               current[0],
               current[1]);
        Ok(Trajectory { points: points })
    }
}

/// The ordered sequence of iterates produced by a descent walk.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    points: Vec<Point2<Scalar>>,
}

impl Trajectory {
    #[inline]
    pub fn points(&self) -> &[Point2<Scalar>] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn end(&self) -> &Point2<Scalar> {
        self.points.last().expect("a trajectory always holds its starting point")
    }

    /// Maps each iterate to the `(x, y, f(x, y))` sample the renderer places
    /// the marker at.
    pub fn lift<Field>(&self, field: &Field) -> Vec<Point3<Scalar>>
        where Field: ScalarField2
    {
        self.points
            .iter()
            .map(|point| Point3::new(point[0], point[1], field.value_at(point)))
            .collect()
    }
}
