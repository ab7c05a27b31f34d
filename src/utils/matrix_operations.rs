/// Operations over the row-major weight matrices of a network, where the last column of every
/// row is the bias weight of the unit that row belongs to.
pub trait MatrixOperations {
    type Item;

    /// Multiplies the matrix by `[inputs; 1]`, the trailing 1 being the implicit bias input.
    fn dot_with_bias(&self, inputs: &[Self::Item]) -> Vec<Self::Item>;

    /// Multiplies the transpose of the matrix, without its bias column, by **against**.
    ///
    /// This is how the error of a layer flows back into the layer before it.
    fn transposed_dot_without_bias(&self, against: &[Self::Item]) -> Vec<Self::Item>;

    /// Creates a matrix of zeros of the same shape.
    fn zeros_like(&self) -> Self;

    /// Appends all of the values into **flat** row after row.
    fn flatten_into(&self, flat: &mut Vec<Self::Item>);

    fn get_width(&self) -> usize;
}

impl MatrixOperations for Vec<Vec<f32>> {
    type Item = f32;

    fn dot_with_bias(&self, inputs: &[f32]) -> Vec<f32> {
        self.iter()
            .map(|row| {
                let (weights, bias) = row.split_at(row.len() - 1);
                weights
                    .iter()
                    .zip(inputs)
                    .map(|(weight, input)| weight * input)
                    .sum::<f32>()
                    + bias[0]
            })
            .collect()
    }

    fn transposed_dot_without_bias(&self, against: &[f32]) -> Vec<f32> {
        let width = self.get_width() - 1;
        let mut result = vec![0.0_f32; width];

        for (row, factor) in self.iter().zip(against) {
            for (col, weight) in row.iter().take(width).enumerate() {
                result[col] += weight * factor;
            }
        }

        result
    }

    fn zeros_like(&self) -> Self {
        self.iter().map(|row| vec![0.0_f32; row.len()]).collect()
    }

    fn flatten_into(&self, flat: &mut Vec<f32>) {
        for row in self.iter() {
            flat.extend_from_slice(row);
        }
    }

    fn get_width(&self) -> usize {
        self.first().map_or(0, |row| row.len())
    }
}

#[test]
fn should_add_the_bias_column_when_multiplying() {
    let matrix: Vec<Vec<f32>> = Vec::from([
        Vec::from([0.2, 0.4, 1.0]),
        Vec::from([3.1, 9.2, -0.5]),
    ]);
    let vector: Vec<f32> = Vec::from([0.5, 0.25]);

    let expected_result: Vec<f32> = Vec::from([
        vector[0] * matrix[0][0] + vector[1] * matrix[0][1] + matrix[0][2],
        vector[0] * matrix[1][0] + vector[1] * matrix[1][1] + matrix[1][2],
    ]);

    assert_eq!(matrix.dot_with_bias(&vector), expected_result);
}

#[test]
fn should_skip_the_bias_column_when_multiplying_by_the_transpose() {
    let matrix: Vec<Vec<f32>> = Vec::from([
        Vec::from([0.2, 0.4, 100.0]),
        Vec::from([3.0, 9.0, -100.0]),
    ]);
    let vector: Vec<f32> = Vec::from([2.0, 0.5]);

    let expected_result: Vec<f32> = Vec::from([
        vector[0] * matrix[0][0] + vector[1] * matrix[1][0],
        vector[0] * matrix[0][1] + vector[1] * matrix[1][1],
    ]);

    assert_eq!(matrix.transposed_dot_without_bias(&vector), expected_result);
}

#[test]
fn should_flatten_row_after_row() {
    let matrix: Vec<Vec<f32>> = Vec::from([Vec::from([1.0, 2.0]), Vec::from([3.0, 4.0])]);
    let mut flat = Vec::from([0.0]);

    matrix.flatten_into(&mut flat);

    assert_eq!(flat, Vec::from([0.0, 1.0, 2.0, 3.0, 4.0]));
    assert_eq!(matrix.zeros_like(), vec![vec![0.0, 0.0]; 2]);
}
