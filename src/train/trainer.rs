use crate::math::matrix::Matrix;
use crate::network::network::Network;
use crate::train::iteration_stats::IterationStats;
use crate::train::train_config::TrainConfig;

/// Trains `network` on the dataset `(x, y)` for `config.iterations`
/// iterations and returns the total absolute output error of the **last
/// completed iteration**.
///
/// # Arguments
/// - `network` — mutable reference to the layer chain; modified in place
/// - `x`       — inputs, one example per row
/// - `y`       — targets, one example per row, aligned with `x`
/// - `config`  — hyperparameters (only `iterations` and `batch_size` are
///               read here; the rest shape the network and dataset upstream)
/// - `report`  — called once per completed iteration with that iteration's
///               stats
///
/// Each iteration walks the dataset's batches in fixed order, no
/// reshuffling; `x.rows / batch_size` batches are taken, so a partial tail
/// batch is dropped.  Per batch, every hidden layer takes its synthetic
/// descent step as the batch flows forward, the final layer waits for the
/// true target, and the true-derived gradient then walks back correcting
/// each hidden layer's synthetic estimator.  There is no convergence
/// criterion and no early stopping.
///
/// # Panics
/// Panics if the network has fewer than 2 layers, `batch_size == 0`,
/// `x`/`y` row counts differ, or the dataset widths disagree with the
/// network's end layers.
pub fn run_training<F>(
    network: &mut Network,
    x: &Matrix,
    y: &Matrix,
    config: &TrainConfig,
    mut report: F,
) -> f64
where
    F: FnMut(&IterationStats),
{
    let n = network.layers.len();
    assert!(n >= 2, "training needs at least two layers");
    assert!(config.batch_size > 0, "batch_size must be at least 1");
    assert_eq!(x.rows, y.rows, "x and y must have equal row counts");
    assert_eq!(
        x.cols, network.layers[0].weights.rows,
        "input width must match the first layer"
    );
    assert_eq!(
        y.cols, network.layers[n - 1].weights.cols,
        "target width must match the last layer"
    );

    let batches = x.rows / config.batch_size;
    let mut last_loss = 0.0;

    for iteration in 0..config.iterations {
        let mut error = 0.0;
        let mut synthetic_error = 0.0;

        for batch in 0..batches {
            let start = batch * config.batch_size;
            let batch_x = x.slice_rows(start, start + config.batch_size);
            let batch_y = y.slice_rows(start, start + config.batch_size);

            // Forward sweep: each hidden layer steps on its own synthetic
            // gradient immediately, before any true signal exists.
            let mut estimates = Vec::with_capacity(n - 1);
            let mut passes = Vec::with_capacity(n - 1);
            let mut current = batch_x;
            for layer in network.layers[..n - 1].iter_mut() {
                let (estimate, pass) = layer.forward_and_synthetic_update(&current);
                current = pass.output.clone();
                estimates.push(estimate);
                passes.push(pass);
            }

            // The last layer cannot form a gradient until the target is seen.
            let last_pass = network.layers[n - 1].forward(&current);
            let output_delta = last_pass.output.clone() - batch_y;
            error += output_delta.abs_sum();

            let true_delta = network.layers[n - 1].normal_update(&last_pass, &output_delta);

            // Mismatch between the bet the topmost hidden layer made and the
            // true-derived gradient it is about to be corrected with.
            synthetic_error +=
                (true_delta.clone() - passes[n - 2].synthetic_gradient.clone()).abs_sum();

            // Backward sweep over the estimators: each hidden layer regresses
            // toward the gradient the layer above actually propagated to it.
            network.layers[n - 2].update_synthetic_weights(&passes[n - 2], &true_delta);
            for i in (0..n - 2).rev() {
                network.layers[i].update_synthetic_weights(&passes[i], &estimates[i + 1]);
            }
        }

        last_loss = error;
        report(&IterationStats {
            iteration,
            loss: error,
            synthetic_loss: synthetic_error,
        });
    }

    last_loss
}
