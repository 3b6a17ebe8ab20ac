use crate::buffer::{Tensor, WeightMatrix};

/// Gradient of each output unit: `(expected - actual) * derive(actual)`.
pub fn output_gradients(output: &Tensor, expected: &[f64], gradients: &mut [f64]) {

    debug_assert_eq!(expected.len(), output.units());
    debug_assert_eq!(gradients.len(), output.size());

    let activation_fn = output.activation_fn();
    for (unit_index, &actual) in output.units_slice().iter().enumerate() {
        gradients[unit_index] = (expected[unit_index] - actual) * activation_fn.derive(actual);
    }
}

/// Gradient of each computed unit of `layer`, the input side of `matrix`:
/// the weighted sum of the downstream gradients scaled by the local
/// derivative. The bias slot gets no gradient.
pub fn hidden_gradients(layer: &Tensor, matrix: &WeightMatrix, downstream: &[f64], gradients: &mut [f64]) {

    debug_assert_eq!(matrix.inputs(), layer.size());
    debug_assert!(downstream.len() > matrix.outputs());
    debug_assert_eq!(gradients.len(), layer.size());

    let activation_fn = layer.activation_fn();
    let inputs = matrix.inputs();
    let weights = matrix.as_slice();

    for (input_index, &value) in layer.units_slice().iter().enumerate() {
        let mut sum = 0.0;
        for output_index in 0..matrix.outputs() {
            sum += weights[input_index + output_index * inputs] * downstream[output_index];
        }
        gradients[input_index] = sum * activation_fn.derive(value);
    }
}

/// Momentum gradient descent on one kernel. Each weight moves by
/// `step_size * input * gradient + momentum * previous_delta`, and that move
/// becomes the next call's previous delta.
pub fn momentum_update(
    input: &Tensor,
    downstream: &[f64],
    matrix: &mut WeightMatrix,
    deltas: &mut [f64],
    step_size: f64,
    momentum: f64,
) {

    debug_assert_eq!(matrix.inputs(), input.size());
    debug_assert_eq!(deltas.len(), matrix.len());

    let inputs = matrix.inputs();
    let outputs = matrix.outputs();
    let input = input.as_slice();
    let weights = matrix.as_mut_slice();

    for output_index in 0..outputs {
        let gradient = downstream[output_index];
        for input_index in 0..inputs {
            let index = input_index + output_index * inputs;
            let delta = step_size * input[input_index] * gradient + momentum * deltas[index];
            weights[index] += delta;
            deltas[index] = delta;
        }
    }
}
