pub mod math;
pub mod activation;
pub mod dataset;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::activation::ActivationFunction;
pub use dataset::binary_addition::{decode_bits, generate_dataset};
pub use layers::dni::{DniLayer, ForwardPass, SyntheticPass};
pub use network::network::Network;
pub use train::iteration_stats::IterationStats;
pub use train::report::ConsoleReporter;
pub use train::train_config::TrainConfig;
pub use train::trainer::run_training;
