use rand::rngs::StdRng;
use rand::Rng;

use crate::math::matrix::Matrix;

/// Builds the binary-addition regression task.
///
/// Each example draws two independent addends uniformly from
/// `[0, 2^(output_dim-1))`.  The input row is the two addends encoded as
/// fixed-width `output_dim`-bit vectors side by side (width 2·output_dim);
/// the target row is their sum encoded the same way.  A sum that needs more
/// than `output_dim` bits keeps only its low-order bits, so targets wrap
/// modulo 2^output_dim.
pub fn generate_dataset(
    output_dim: usize,
    num_examples: usize,
    rng: &mut StdRng,
) -> (Matrix, Matrix) {
    assert!(output_dim >= 1 && output_dim <= 63, "output_dim must be in 1..=63");
    assert!(num_examples > 0, "num_examples must be at least 1");

    let addend_bound = 1u64 << (output_dim - 1);

    let mut x = Vec::with_capacity(num_examples);
    let mut y = Vec::with_capacity(num_examples);

    for _ in 0..num_examples {
        let left = rng.gen_range(0..addend_bound);
        let right = rng.gen_range(0..addend_bound);

        let mut row = encode_bits(left, output_dim);
        row.extend(encode_bits(right, output_dim));
        x.push(row);
        y.push(encode_bits(left + right, output_dim));
    }

    (Matrix::from_data(x), Matrix::from_data(y))
}

/// Fixed-width binary encoding as 0.0/1.0 floats, most-significant bit
/// first.  Bits above `dim` are simply not emitted, which is what truncates
/// wide values to their low-order `dim` bits.
pub fn encode_bits(value: u64, dim: usize) -> Vec<f64> {
    (0..dim).rev().map(|i| ((value >> i) & 1) as f64).collect()
}

/// Reads a bit vector back as an unsigned integer, MSB first.  Entries are
/// rounded at 0.5 so network outputs decode the same way exact encodings do.
pub fn decode_bits(bits: &[f64]) -> u64 {
    bits.iter().fold(0, |acc, &b| (acc << 1) | u64::from(b >= 0.5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn encoding_is_msb_first_fixed_width() {
        assert_eq!(encode_bits(5, 4), vec![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(encode_bits(1, 3), vec![0.0, 0.0, 1.0]);
    }

    #[test]
    fn encoding_truncates_to_low_order_bits() {
        // 300 = 0b1_0010_1100; an 8-bit encoding keeps 44 = 0b0010_1100.
        assert_eq!(encode_bits(300, 8), encode_bits(44, 8));
        assert_eq!(decode_bits(&encode_bits(300, 8)), 300 % 256);
    }

    #[test]
    fn decoding_rounds_at_half() {
        assert_eq!(decode_bits(&[0.9, 0.2, 0.51]), 0b101);
        assert_eq!(decode_bits(&[0.0, 0.49999, 1.0]), 0b001);
    }

    #[test]
    fn dataset_has_expected_shapes_and_binary_entries() {
        let mut rng = StdRng::seed_from_u64(3);
        let (x, y) = generate_dataset(8, 40, &mut rng);

        assert_eq!((x.rows, x.cols), (40, 16));
        assert_eq!((y.rows, y.cols), (40, 8));

        for row in x.data.iter().chain(y.data.iter()) {
            for &bit in row {
                assert!(bit == 0.0 || bit == 1.0);
            }
        }
    }

    #[test]
    fn targets_encode_the_wrapped_sum_of_the_addends() {
        let mut rng = StdRng::seed_from_u64(11);
        let (x, y) = generate_dataset(8, 60, &mut rng);

        for i in 0..x.rows {
            let left = decode_bits(&x.data[i][..8]);
            let right = decode_bits(&x.data[i][8..]);
            assert!(left < 128 && right < 128);
            assert_eq!(decode_bits(&y.data[i]), (left + right) % 256);
        }
    }

    #[test]
    fn generation_is_deterministic_under_a_fixed_seed() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(1);
        assert_eq!(generate_dataset(6, 25, &mut rng_a), generate_dataset(6, 25, &mut rng_b));
    }

    #[test]
    #[should_panic]
    fn zero_width_encoding_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let _ = generate_dataset(0, 10, &mut rng);
    }
}
