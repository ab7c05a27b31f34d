use std::error::Error;

use tracing_subscriber::EnvFilter;
use trilayer::{
    ActivationFunction, Configuration, CostFunction, Dataset, NeuralNet, Structure,
    TrainingOptions,
};

fn configuration() -> Result<Configuration, Box<dyn Error>> {
    Ok(Configuration::new(
        ActivationFunction::tanh(),    // for the hidden layer
        ActivationFunction::sigmoid(), // for the output layer
        CostFunction::mean_squared(),
        0.2, // learning rate
        0.9, // momentum
    )?)
}

fn main() -> Result<(), Box<dyn Error>> {
    // RUST_LOG=trilayer=debug shows the validation cost of every epoch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // 2 inputs, 4 hidden units and 1 output
    let structure = Structure::new(2, 4, 1)?;

    // the four rows of the XoR truth table, used for both training and validation
    let dataset = Dataset::xor(structure)?;

    let mut xor_network = NeuralNet::new(structure, configuration()?);

    // Train until the average cost over the validation samples gets below 0.01,
    // giving up after 20000 epochs
    let report = xor_network.train_with(
        &dataset,
        &TrainingOptions {
            error_threshold: 0.01,
            max_epochs: Some(20_000),
            verbose: true, // shows a progress bar
        },
    )?;

    println!(
        "trained for {} epochs, validation cost of {} (converged: {})",
        report.epochs, report.validation_cost, report.converged
    );

    // only the structure and the weights are saved, so the configuration is given again
    // when loading
    xor_network.save_file("xor-network.bin")?;
    let loaded_xor_network = NeuralNet::load_file("xor-network.bin", configuration()?)?;

    for (inputs, labels) in dataset.validation_pairs() {
        let prediction = xor_network.predict(inputs)?;
        let loaded_prediction = loaded_xor_network.predict(inputs)?;

        assert_eq!(prediction, loaded_prediction);
        println!("{:?} -> {:?} (expected {:?})", inputs, prediction, labels);
    }

    Ok(())
}
