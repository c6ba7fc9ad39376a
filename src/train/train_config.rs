/// Configuration for a `run_training` run.
///
/// # Fields
/// - `num_examples` — rows in the generated binary-addition dataset
/// - `output_dim`   — bit width of the sum encoding; inputs are 2·output_dim wide
/// - `hidden_dims`  — widths of the hidden layers, input side first
/// - `iterations`   — full passes over the dataset's batches
/// - `batch_size`   — rows per mini-batch; a partial tail batch is dropped
/// - `alpha`        — learning rate, shared by every layer and both of its
///                    weight sets (primary and synthetic estimator)
/// - `seed`         — seeds the single `StdRng` stream that feeds dataset
///                    generation and then weight initialization
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub num_examples: usize,
    pub output_dim: usize,
    pub hidden_dims: Vec<usize>,
    pub iterations: usize,
    pub batch_size: usize,
    pub alpha: f64,
    pub seed: u64,
}

impl TrainConfig {
    /// The full dimension chain, input → hidden… → output, ready for
    /// `Network::new`.
    pub fn dims(&self) -> Vec<usize> {
        let mut dims = Vec::with_capacity(self.hidden_dims.len() + 2);
        dims.push(2 * self.output_dim);
        dims.extend_from_slice(&self.hidden_dims);
        dims.push(self.output_dim);
        dims
    }
}

impl Default for TrainConfig {
    /// The canonical demo run: 8-bit addition, a 16 → 64 → 32 → 8 network,
    /// 10000 iterations over 100 examples in batches of 10.
    fn default() -> TrainConfig {
        TrainConfig {
            num_examples: 100,
            output_dim: 8,
            hidden_dims: vec![64, 32],
            iterations: 10000,
            batch_size: 10,
            alpha: 0.01,
            seed: 1,
        }
    }
}
