use nalgebra::{Point2, Vector2};

use math::Scalar;

pub trait ScalarField2 {
    #[inline]
    fn value_at(&self, position: &Point2<Scalar>) -> Scalar;

    /// Forward-difference estimate of the gradient at `position`. `epsilon`
    /// must be non-zero; callers validate it before walking a trajectory.
    #[inline]
    fn gradient_at(&self, position: &Point2<Scalar>, epsilon: Scalar) -> Vector2<Scalar> {
        let value = self.value_at(position);
        let dx = self.value_at(&Point2::new(position[0] + epsilon, position[1])) - value;
        let dy = self.value_at(&Point2::new(position[0], position[1] + epsilon)) - value;
        Vector2::new(dx / epsilon, dy / epsilon)
    }
}

/// The bowl `x^2 + y^2 - 1`, with its only minimum at the origin.
pub struct ParaboloidField;

impl ScalarField2 for ParaboloidField {
    #[inline]
    fn value_at(&self, position: &Point2<Scalar>) -> Scalar {
        position[0] * position[0] + position[1] * position[1] - 1.0
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::Point2;

    use math::Scalar;
    use super::{ParaboloidField, ScalarField2};

    #[test]
    fn paraboloid_values() {
        let field = ParaboloidField;
        assert_eq!(field.value_at(&Point2::new(0.0, 0.0)), -1.0);
        assert_eq!(field.value_at(&Point2::new(1.0, 1.0)), 1.0);
        assert_eq!(field.value_at(&Point2::new(-2.0, 0.5)), 3.25);
    }

    #[test]
    fn forward_difference_tracks_the_analytic_gradient() {
        let field = ParaboloidField;
        let epsilon: Scalar = 1e-6;
        for &(x, y) in [(1.0, 1.0), (-0.3, 0.8), (0.0, 0.0)].iter() {
            let gradient = field.gradient_at(&Point2::new(x, y), epsilon);
            // The forward difference of x^2 + y^2 - 1 carries an O(epsilon) bias.
            assert!((gradient[0] - 2.0 * x).abs() < 1e-5);
            assert!((gradient[1] - 2.0 * y).abs() < 1e-5);
        }
    }

    #[test]
    fn negative_epsilon_still_forms_a_difference_quotient() {
        let gradient = ParaboloidField.gradient_at(&Point2::new(1.0, 1.0), -1e-6);
        assert!((gradient[0] - 2.0).abs() < 1e-5);
        assert!((gradient[1] - 2.0).abs() < 1e-5);
    }
}
