use nalgebra::{Norm, Point2, Point3, Vector3};

use math::{Scalar, ScalarField2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SurfaceVertex {
    pub position: Point3<Scalar>,
    pub normal: Vector3<Scalar>,
}

/// A rectangular grid of field samples, the raw geometry a renderer draws
/// as the 3D surface plot.
#[derive(Clone, Debug)]
pub struct SurfacePatch {
    vertices: Vec<SurfaceVertex>,
    rows: usize,
    cols: usize,
}

impl SurfacePatch {
    /// Samples `resolution x resolution` vertices over the given ranges,
    /// row-major with x varying fastest. Normals come from the same
    /// finite-difference gradient the descent walk uses.
    pub fn sample<Field>(field: &Field,
                         x_range: (Scalar, Scalar),
                         y_range: (Scalar, Scalar),
                         resolution: usize,
                         epsilon: Scalar)
                         -> Self
        where Field: ScalarField2
    {
        assert!(resolution >= 2, "a surface patch needs two samples per axis");
        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;
        let x_step = (x_max - x_min) / (resolution - 1) as Scalar;
        let y_step = (y_max - y_min) / (resolution - 1) as Scalar;

        let mut vertices = Vec::with_capacity(resolution * resolution);
        for (iy, ix) in iproduct!(0..resolution, 0..resolution) {
            let position = Point2::new(x_min + x_step * ix as Scalar,
                                       y_min + y_step * iy as Scalar);
            let height = field.value_at(&position);
            let gradient = field.gradient_at(&position, epsilon);
            vertices.push(SurfaceVertex {
                position: Point3::new(position[0], position[1], height),
                normal: Vector3::new(-gradient[0], -gradient[1], 1.0).normalize(),
            });
        }

        SurfacePatch {
            vertices: vertices,
            rows: resolution,
            cols: resolution,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[SurfaceVertex] {
        &self.vertices
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Norm, Point2};

    use math::{ParaboloidField, ScalarField2};
    use super::SurfacePatch;

    #[test]
    fn patch_samples_a_full_grid() {
        let patch = SurfacePatch::sample(&ParaboloidField, (-1.0, 1.0), (-1.0, 1.0), 16, 1e-6);
        assert_eq!(patch.rows(), 16);
        assert_eq!(patch.cols(), 16);
        assert_eq!(patch.vertices().len(), 256);
    }

    #[test]
    fn vertices_lie_on_the_field_with_unit_normals() {
        let field = ParaboloidField;
        let patch = SurfacePatch::sample(&field, (-1.0, 1.0), (0.0, 2.0), 5, 1e-6);
        for vertex in patch.vertices() {
            let footprint = Point2::new(vertex.position[0], vertex.position[1]);
            assert_eq!(vertex.position[2], field.value_at(&footprint));
            assert!((vertex.normal.norm() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn grid_is_row_major_with_x_fastest() {
        let patch = SurfacePatch::sample(&ParaboloidField, (-1.0, 1.0), (0.0, 2.0), 5, 1e-6);
        let vertices = patch.vertices();

        let first = vertices[0].position;
        assert_eq!(first[0], -1.0);
        assert_eq!(first[1], 0.0);

        // End of the first row: x has swept its range, y has not moved.
        let row_end = vertices[4].position;
        assert_eq!(row_end[0], 1.0);
        assert_eq!(row_end[1], 0.0);

        let corner = vertices[24].position;
        assert_eq!(corner[0], 1.0);
        assert_eq!(corner[1], 2.0);
    }
}
