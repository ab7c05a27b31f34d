use crate::activations::ActivationFunction;

#[test]
fn should_be_0_when_x_is_negative() {
    let x: Vec<f32> = Vec::from([-30.0, -40.0, -1.0, -0.3, -0.99]);

    let actual_outputs = ActivationFunction::relu().apply_all(&x);

    assert_eq!(actual_outputs, Vec::from([0.0, 0.0, 0.0, 0.0, 0.0]));
}

#[test]
fn should_be_x_when_x_is_positive() {
    let x: Vec<f32> = Vec::from([-30.0, 40.0, 21.0, -0.3, -0.99]);

    let actual_outputs = ActivationFunction::relu().apply_all(&x);

    assert_eq!(actual_outputs, Vec::from([0.0, 40.0, 21.0, 0.0, 0.0]));
}

#[test]
fn differential_should_return_correct_value() {
    let x: Vec<f32> = Vec::from([-30.0, 40.0, 21.0, -0.3, 0.0]);
    let expected_derivatives: Vec<f32> = Vec::from([0.0, 1.0, 1.0, 0.0, 0.0]);

    let activation = ActivationFunction::relu();

    for (input, expected) in x.iter().zip(&expected_derivatives) {
        assert_eq!(activation.derivative(*input), *expected);
    }
}

#[test]
fn leaky_relu_should_scale_negative_values() {
    let activation = ActivationFunction::leaky_relu(0.5);

    assert_eq!(activation.apply_all(&[-4.0, 3.0]), Vec::from([-2.0, 3.0]));
    assert_eq!(activation.derivative(-4.0), 0.5);
    assert_eq!(activation.derivative(3.0), 1.0);
    assert_eq!(activation.name(), "leaky_relu(0.5)");
}
