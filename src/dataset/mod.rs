pub mod binary_addition;

pub use binary_addition::{generate_dataset, decode_bits};
