/// Asserts that two vectors are approximately equal comparing all of their numbers
/// up to a certain **decimal_place**.
///
/// # Panics
///
/// Panics if the length of both vectors are not equal.
pub(crate) fn assert_approx_equal(a: &[f32], b: &[f32], decimal_place: u32) -> () {
    assert_eq!(a.len(), b.len());

    let power_ten = 10.0_f32.powf(decimal_place as f32);
    let approximate_a: Vec<f32> = a.iter().map(|x| (x * power_ten).round() / power_ten).collect();
    let approximate_b: Vec<f32> = b.iter().map(|x| (x * power_ten).round() / power_ten).collect();

    assert_eq!(approximate_a, approximate_b);
}

/// Asserts if the vectors **a** and **b** are approximately equal
/// being at most **max_dist** of a difference.
///
/// # Panics
///
/// Panics if the length of both vectors are not equal.
pub(crate) fn assert_approx_equal_distance(a: &[f32], b: &[f32], max_dist: f32) -> () {
    assert_eq!(a.len(), b.len());

    a.iter().zip(b).for_each(|(x, y)| {
        assert!(
            (x - y).abs() <= max_dist,
            "{} and {} are further apart than {}",
            x,
            y,
            max_dist
        );
    });
}

/// Approximates the derivative of **function** at **x** with a central difference.
pub(crate) fn numerical_derivative(function: impl Fn(f32) -> f32, x: f32) -> f32 {
    let step = 1e-3_f32;

    (function(x + step) - function(x - step)) / (2.0 * step)
}
