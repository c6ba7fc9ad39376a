use rand::rngs::StdRng;

use crate::{
    activation::activation::ActivationFunction,
    layers::dni::DniLayer,
    math::matrix::Matrix,
};

/// An ordered chain of DNI layers.  Built once before training, mutated in
/// place every batch by the trainer, dropped at process exit.
#[derive(Debug)]
pub struct Network {
    pub layers: Vec<DniLayer>,
}

impl Network {
    /// Builds one layer per adjacent pair of `dims`, so chained shapes
    /// agree by construction.  `dims` runs input → hidden… → output;
    /// `alpha` is shared by every layer and both of its weight sets.
    pub fn new(
        dims: &[usize],
        activation: ActivationFunction,
        alpha: f64,
        rng: &mut StdRng,
    ) -> Network {
        assert!(dims.len() >= 2, "a network needs an input and an output dimension");

        let layers = dims.windows(2)
            .map(|pair| DniLayer::new(pair[1], pair[0], activation, alpha, rng))
            .collect();

        Network { layers }
    }

    /// Pure inference pass through every layer; touches no parameters.
    pub fn forward(&self, input: &Matrix) -> Matrix {
        let mut current = input.clone();
        for layer in &self.layers {
            current = layer.forward(&current).output;
        }
        current
    }
}
