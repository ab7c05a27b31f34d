use crate::{
    activations::ActivationFunction,
    configuration::Configuration,
    cost_functions::CostFunction,
    datasets::Dataset,
    neural_net::NeuralNet,
    structure::Structure,
    types::TrainingOptions,
};

fn xor_network(structure: Structure) -> NeuralNet {
    let configuration = Configuration::new(
        ActivationFunction::tanh(),
        ActivationFunction::sigmoid(),
        CostFunction::mean_squared(),
        0.2,
        0.9,
    )
    .unwrap();

    NeuralNet::seeded(structure, configuration, 2022)
}

#[test]
fn should_decrease_error() -> () {
    let structure = Structure::new(2, 3, 1).unwrap();
    let mut network = xor_network(structure);
    let dataset = Dataset::xor(structure).unwrap();

    let initial_cost = network.validation_cost(&dataset).unwrap();

    let report = network
        .train_with(
            &dataset,
            &TrainingOptions {
                error_threshold: 1e-6,
                max_epochs: Some(200),
                verbose: false,
            },
        )
        .unwrap();

    assert!(report.validation_cost < initial_cost);
}

#[test]
fn should_learn_xor() -> () {
    let structure = Structure::new(2, 6, 1).unwrap();
    let mut network = xor_network(structure);
    let dataset = Dataset::xor(structure).unwrap();

    let report = network
        .train_with(
            &dataset,
            &TrainingOptions {
                error_threshold: 0.02,
                max_epochs: Some(20_000),
                verbose: false,
            },
        )
        .unwrap();

    assert!(report.converged);
    assert!(report.validation_cost < 0.02);

    for (inputs, labels) in dataset.validation_pairs() {
        let outputs = network.predict(inputs).unwrap();
        assert_eq!(outputs[0].round(), labels[0]);
    }
}
