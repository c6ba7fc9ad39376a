use rand::rngs::StdRng;
use rand::SeedableRng;

use syngrad::{
    decode_bits, generate_dataset, run_training, ActivationFunction, ConsoleReporter, Network,
    TrainConfig,
};

fn main() {
    let config = TrainConfig::default();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let (x, y) = generate_dataset(config.output_dim, config.num_examples, &mut rng);
    let mut network = Network::new(
        &config.dims(),
        ActivationFunction::Sigmoid,
        config.alpha,
        &mut rng,
    );

    let mut reporter = ConsoleReporter::new(1000);
    run_training(&mut network, &x, &y, &config, |stats| reporter.update(stats));
    reporter.finish();

    // A handful of examples decoded back to integers.
    let predictions = network.forward(&x);
    for i in 0..x.rows.min(5) {
        let left = decode_bits(&x.data[i][..config.output_dim]);
        let right = decode_bits(&x.data[i][config.output_dim..]);
        let predicted = decode_bits(&predictions.data[i]);
        let target = decode_bits(&y.data[i]);
        println!("{left} + {right} = {predicted} (target {target})");
    }
}
