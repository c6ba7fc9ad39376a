use rand::rngs::StdRng;
use rand::SeedableRng;

use syngrad::{
    generate_dataset, run_training, ActivationFunction, IterationStats, Network, TrainConfig,
};

/// The demo configuration at a reduced iteration count, returning the full
/// stats sequence.
fn run_demo(iterations: usize) -> Vec<IterationStats> {
    let config = TrainConfig {
        iterations,
        ..TrainConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(config.seed);

    let (x, y) = generate_dataset(config.output_dim, config.num_examples, &mut rng);
    let mut network = Network::new(
        &config.dims(),
        ActivationFunction::Sigmoid,
        config.alpha,
        &mut rng,
    );

    let mut stats = Vec::with_capacity(iterations);
    run_training(&mut network, &x, &y, &config, |s| stats.push(s.clone()));
    stats
}

#[test]
fn a_fixed_seed_reproduces_the_stats_sequence() {
    let first = run_demo(50);
    let second = run_demo(50);
    assert_eq!(first, second);
}

#[test]
fn error_decreases_over_thousand_iteration_windows() {
    let stats = run_demo(3000);

    let window_totals: Vec<f64> = stats
        .chunks(1000)
        .map(|window| window.iter().map(|s| s.loss).sum())
        .collect();

    assert_eq!(window_totals.len(), 3);
    for pair in window_totals.windows(2) {
        assert!(
            pair[1] < pair[0],
            "window totals must strictly decrease, got {window_totals:?}"
        );
    }
}

#[test]
fn losses_stay_finite_throughout() {
    for s in run_demo(200) {
        assert!(s.loss.is_finite());
        assert!(s.synthetic_loss.is_finite());
        assert!(s.loss >= 0.0);
        assert!(s.synthetic_loss >= 0.0);
    }
}
