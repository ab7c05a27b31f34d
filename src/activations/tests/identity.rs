use crate::activations::ActivationFunction;

#[test]
fn should_leave_values_untouched() {
    let activation = ActivationFunction::identity();
    let x: Vec<f32> = Vec::from([-3.5, 0.0, 12.25]);

    assert_eq!(activation.apply_all(&x), x);
    assert!(x.iter().all(|x| activation.derivative(*x) == 1.0));
}

#[test]
fn should_accept_custom_functions() {
    let activation = ActivationFunction::new("square", |x| x * x, |x| 2.0 * x);

    assert_eq!(activation.apply(3.0), 9.0);
    assert_eq!(activation.derivative(3.0), 6.0);
    assert_eq!(format!("{:?}", activation), "ActivationFunction(\"square\")");
}
