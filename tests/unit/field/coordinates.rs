//! Tests for coordinate and colour leaf fields

#[cfg(test)]
mod tests {
    use exprsynth::field::coordinates::{
        CoordinateFields, color_field, random_color, random_color_field,
    };
    use rand::{SeedableRng, rngs::StdRng};

    // Tests X varies along the width axis with exact endpoints
    #[test]
    fn test_x_field_shape_and_values() {
        let fields = CoordinateFields::new(5, 3);
        let x = fields.x_field();

        assert_eq!(x.dim(), (1, 5, 1));
        let values: Vec<f64> = x.iter().copied().collect();
        let expected = [0.0, 0.25, 0.5, 0.75, 1.0];
        for (value, want) in values.iter().zip(expected.iter()) {
            assert!((value - want).abs() < 1e-12, "expected {want}, got {value}");
        }
    }

    // Tests Y varies along the height axis with exact endpoints
    #[test]
    fn test_y_field_shape_and_values() {
        let fields = CoordinateFields::new(5, 3);
        let y = fields.y_field();

        assert_eq!(y.dim(), (3, 1, 1));
        assert_eq!(y.get([0, 0, 0]).copied(), Some(0.0));
        assert_eq!(y.get([1, 0, 0]).copied(), Some(0.5));
        assert_eq!(y.get([2, 0, 0]).copied(), Some(1.0));
        assert_eq!(fields.width(), 5);
        assert_eq!(fields.height(), 3);
    }

    // Tests a single-pixel axis holds the start value only
    #[test]
    fn test_single_pixel_axis() {
        let fields = CoordinateFields::new(1, 1);

        assert_eq!(fields.x_field().dim(), (1, 1, 1));
        assert_eq!(fields.x_field().get([0, 0, 0]).copied(), Some(0.0));
        assert_eq!(fields.y_field().get([0, 0, 0]).copied(), Some(0.0));
    }

    // Tests random colours are in range and reproducible from a seed
    #[test]
    fn test_random_color_range_and_determinism() {
        let mut first = StdRng::seed_from_u64(7);
        let mut second = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let color = random_color(&mut first);
            assert!(color.iter().all(|c| (0.0..1.0).contains(c)));
            assert_eq!(color, random_color(&mut second));
        }
    }

    // Tests colour fields have shape (1, 1, 3) and carry the channel values
    #[test]
    fn test_color_field_shape() {
        let field = color_field([0.1, 0.2, 0.3]);

        assert_eq!(field.dim(), (1, 1, 3));
        assert_eq!(field.get([0, 0, 2]).copied(), Some(0.3));

        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_color_field(&mut rng).dim(), (1, 1, 3));
    }
}
