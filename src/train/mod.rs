pub mod trainer;
pub mod iteration_stats;
pub mod train_config;
pub mod report;

pub use trainer::run_training;
pub use iteration_stats::IterationStats;
pub use train_config::TrainConfig;
pub use report::{format_status, ConsoleReporter};
