//! Tests for integer-ratio tiling, quantization and pixel buffer conversion

#[cfg(test)]
mod tests {
    use exprsynth::SynthesisError;
    use exprsynth::field::tiling::{PixelBuffer, finalize, tile_to};
    use ndarray::Array3;

    // Tests a flat colour fills the whole canvas
    #[test]
    fn test_finalize_flat_color() {
        let field = Array3::from_shape_vec((1, 1, 3), vec![0.0, 0.5, 1.0]).unwrap();

        let buffer = finalize(&field, 4, 2, 3).unwrap();

        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.channels(), 3);
        for row in 0..2 {
            for col in 0..4 {
                assert_eq!(buffer.get(row, col, 0), Some(0));
                // 127.5 rounds to the even neighbour
                assert_eq!(buffer.get(row, col, 1), Some(128));
                assert_eq!(buffer.get(row, col, 2), Some(255));
            }
        }
    }

    // Tests values outside [0, 1] are clipped before quantization
    #[test]
    fn test_finalize_clips() {
        let field = Array3::from_shape_vec((1, 1, 3), vec![-4.0, 7.5, 0.2]).unwrap();

        let buffer = finalize(&field, 1, 1, 3).unwrap();

        assert_eq!(buffer.get(0, 0, 0), Some(0));
        assert_eq!(buffer.get(0, 0, 1), Some(255));
        assert_eq!(buffer.get(0, 0, 2), Some(51));
    }

    // Tests tiling repeats the whole block rather than stretching it
    #[test]
    fn test_tile_repeats_block() {
        let field = Array3::from_shape_vec((1, 2, 1), vec![0.0, 1.0]).unwrap();

        let tiled = tile_to(&field, [2, 6, 3]).unwrap();

        assert_eq!(tiled.dim(), (2, 6, 3));
        let second_row: Vec<f64> = (0..6)
            .map(|col| tiled.get([1, col, 2]).copied().unwrap_or(-1.0))
            .collect();
        assert_eq!(second_row, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);
    }

    // Tests the output shape always matches the request for every tileable field shape
    #[test]
    fn test_finalize_shape_invariant() {
        let shapes = [
            (1, 1, 1),
            (1, 1, 3),
            (1, 8, 1),
            (6, 1, 1),
            (6, 8, 1),
            (6, 8, 3),
            (3, 4, 3),
        ];
        for shape in shapes {
            let field = Array3::from_elem(shape, 0.5);
            let buffer = finalize(&field, 8, 6, 3).unwrap();
            assert_eq!(buffer.as_array().dim(), (6, 8, 3), "field shape {shape:?}");
        }
    }

    // Tests a non-integer ratio reports both shapes
    #[test]
    fn test_finalize_shape_mismatch() {
        let field = Array3::from_elem((1, 7, 1), 0.5);

        match finalize(&field, 100, 10, 3) {
            Err(SynthesisError::ShapeMismatch {
                operation,
                field_shape,
                target_shape,
            }) => {
                assert_eq!(operation, "tile");
                assert_eq!(field_shape, [1, 7, 1]);
                assert_eq!(target_shape, [10, 100, 3]);
            }
            other => unreachable!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    // Tests empty field axes and channel ratios are rejected
    #[test]
    fn test_finalize_rejects_empty_and_channel_mismatch() {
        let empty = Array3::<f64>::zeros((0, 1, 1));
        assert!(finalize(&empty, 4, 4, 3).is_err());

        let two_channels = Array3::from_elem((1, 1, 2), 0.5);
        assert!(finalize(&two_channels, 4, 4, 3).is_err());
    }

    // Tests conversion to an RGB image keeps pixel order
    #[test]
    fn test_to_dynamic_image_rgb() {
        let pixels = Array3::from_shape_fn((2, 3, 3), |(row, col, channel)| {
            (row * 100 + col * 10 + channel) as u8
        });
        let buffer = PixelBuffer::from_array(pixels);

        let image = buffer.to_dynamic_image().unwrap().into_rgb8();

        assert_eq!(image.dimensions(), (3, 2));
        assert_eq!(image.get_pixel(2, 1).0, [120, 121, 122]);
    }

    // Tests single-channel buffers become grayscale and other counts fail
    #[test]
    fn test_to_dynamic_image_channel_counts() {
        let gray = PixelBuffer::from_array(Array3::from_elem((2, 2, 1), 9));
        assert_eq!(gray.to_dynamic_image().unwrap().into_luma8().get_pixel(1, 1).0, [9]);

        let four = PixelBuffer::from_array(Array3::from_elem((2, 2, 4), 9));
        assert!(four.to_dynamic_image().is_err());
    }
}
