use rand::rngs::StdRng;

use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

/// Record of a pure forward call: the tensors the follow-up
/// `normal_update` on the same layer needs.
#[derive(Debug, Clone)]
pub struct ForwardPass {
    pub input: Matrix,
    pub output: Matrix,
}

/// Record of a forward call that also took a synthetic step: the tensors
/// the follow-up `update_synthetic_weights` on the same layer needs.
/// Threading these records through the training loop replaces a hidden
/// per-layer cache, so an update can never observe stale tensors from an
/// earlier batch.
#[derive(Debug, Clone)]
pub struct SyntheticPass {
    pub output: Matrix,
    /// The gradient estimate this layer bet on during the forward call.
    pub synthetic_gradient: Matrix,
}

/// A layer with a decoupled neural interface: alongside its primary
/// weights it owns a linear synthetic-gradient estimator that predicts the
/// gradient the layer will eventually receive from downstream, letting it
/// update itself before that signal exists.
#[derive(Debug)]
pub struct DniLayer {
    pub weights: Matrix,
    pub bias: Matrix,
    pub synthetic_weights: Matrix,
    pub synthetic_bias: Matrix,
    pub activator: ActivationFunction,
    alpha: f64,
}

impl DniLayer {
    pub fn new(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        alpha: f64,
        rng: &mut StdRng,
    ) -> DniLayer {
        let weights = Matrix::random(input_size, size, rng);
        let bias = Matrix::random(1, size, rng);
        // All-zero estimator: the first synthetic gradients are zero, so the
        // primaries hold still until the estimator has seen a real signal.
        let synthetic_weights = Matrix::zeros(size, size);
        let synthetic_bias = Matrix::zeros(1, size);

        DniLayer {
            weights,
            bias,
            synthetic_weights,
            synthetic_bias,
            activator: activation,
            alpha,
        }
    }

    /// Forward propagation only: `activation(input · weights + bias)`.
    /// Touches no parameters.  This is the path for the final layer, which
    /// cannot form any gradient before the true target is seen.
    pub fn forward(&self, input: &Matrix) -> ForwardPass {
        let output = (input.clone() * self.weights.clone())
            .add_row(&self.bias)
            .map(|z| self.activator.function(z));

        ForwardPass {
            input: input.clone(),
            output,
        }
    }

    /// Forward propagation plus the defining trick of the algorithm: an
    /// immediate, unconditional descent step on the primary parameters
    /// driven by this layer's own synthetic gradient, taken as if it were
    /// the real one.
    ///
    /// Returns the gradient estimate handed to the *previous* layer,
    /// `weight_gradient · weightsᵗ`, together with the pass record.  The
    /// estimate is formed against the weights as already updated by this
    /// call, not the pre-step weights.
    pub fn forward_and_synthetic_update(&mut self, input: &Matrix) -> (Matrix, SyntheticPass) {
        let pass = self.forward(input);

        // Linear model over the layer's own output.
        let synthetic_gradient = (pass.output.clone() * self.synthetic_weights.clone())
            .add_row(&self.synthetic_bias);

        // δ = synthetic gradient ⊙ activation'(output)
        let weight_gradient = hadamard(
            &synthetic_gradient,
            &pass.output.map(|o| self.activator.derivative_from_output(o)),
        );

        self.apply_gradient_step(input, &weight_gradient);
        let upstream = weight_gradient * self.weights.transpose();

        let synthetic_pass = SyntheticPass {
            output: pass.output,
            synthetic_gradient,
        };
        (upstream, synthetic_pass)
    }

    /// Descent step from a true gradient at this layer's output (for the
    /// last layer, `prediction - target`).  Returns the gradient to push to
    /// the previous layer, formed against the post-update weights exactly
    /// like `forward_and_synthetic_update`.
    pub fn normal_update(&mut self, pass: &ForwardPass, true_gradient: &Matrix) -> Matrix {
        let grad = hadamard(
            true_gradient,
            &pass.output.map(|o| self.activator.derivative_from_output(o)),
        );

        self.apply_gradient_step(&pass.input, &grad);

        grad * self.weights.transpose()
    }

    /// Regresses the synthetic-gradient estimator toward the gradient this
    /// layer actually received from downstream, on the difference between
    /// the two, with the cached output as the regression input.  Only the
    /// estimator moves; the primary parameters are untouched.  The pass
    /// must be the one this layer produced in the current batch — no other
    /// layer's data may flow into the correction.
    pub fn update_synthetic_weights(&mut self, pass: &SyntheticPass, true_gradient: &Matrix) {
        let delta = pass.synthetic_gradient.clone() - true_gradient.clone();

        let weights_adjustment = pass.output.transpose() * delta.clone();
        self.synthetic_weights =
            self.synthetic_weights.clone() - weights_adjustment.map(|x| x * self.alpha);
        self.synthetic_bias =
            self.synthetic_bias.clone() - delta.column_means().map(|x| x * self.alpha);
    }

    /// The one shared descent rule for the primary parameters:
    /// `weights -= (inputᵗ · grad) · α`, `bias -= column_means(grad) · α`.
    fn apply_gradient_step(&mut self, input: &Matrix, grad: &Matrix) {
        let weights_adjustment = input.transpose() * grad.clone();
        self.weights = self.weights.clone() - weights_adjustment.map(|x| x * self.alpha);
        self.bias = self.bias.clone() - grad.column_means().map(|x| x * self.alpha);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a.data.iter().zip(b.data.iter())
        .map(|(row_a, row_b)| {
            row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect()
        })
        .collect();
    Matrix::from_data(data)
}
