use std::fmt;

use crate::buffer::Tensor;
use crate::error::{NetError, NetResult};

/// Dense `inputs x outputs` connection weights between two layers, stored
/// output-major: the weight from input `i` to output `o` lives at
/// `i + o * inputs`.
#[derive(Clone, PartialEq)]
pub struct WeightMatrix {
    inputs: usize,
    outputs: usize,
    weights: Box<[f64]>,
}

impl fmt::Debug for WeightMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut s = &mut f.debug_struct("WeightMatrix");
        s = s.field("inputs", &self.inputs)
            .field("outputs", &self.outputs);
        if self.weights.len() < 30 {
            s = s.field("weights", &self.weights);
        }
        s.finish()
    }
}

impl WeightMatrix {

    pub fn new(inputs: usize, outputs: usize) -> Self {
        WeightMatrix {
            inputs,
            outputs,
            weights: vec![0.0; inputs * outputs].into_boxed_slice(),
        }
    }

    /// Matrix connecting `input` to the computed units of `output`.
    pub fn between(input: &Tensor, output: &Tensor) -> Self {
        WeightMatrix::new(input.size(), output.units())
    }

    #[inline]
    pub fn inputs(&self) -> usize {
        self.inputs
    }

    #[inline]
    pub fn outputs(&self) -> usize {
        self.outputs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Linear index of `(input_index, output_index)`, both bounds checked so
    /// an out-of-range input can't alias the next output's row.
    #[inline]
    pub fn index(&self, input_index: usize, output_index: usize) -> NetResult<usize> {
        if input_index >= self.inputs {
            return Err(NetError::IndexOutOfRange(input_index, self.inputs));
        }
        if output_index >= self.outputs {
            return Err(NetError::IndexOutOfRange(output_index, self.outputs));
        }
        Ok(input_index + output_index * self.inputs)
    }

    pub fn get(&self, input_index: usize, output_index: usize) -> NetResult<f64> {
        let index = self.index(input_index, output_index)?;
        Ok(self.weights[index])
    }

    pub fn set(&mut self, input_index: usize, output_index: usize, value: f64) -> NetResult<()> {
        let index = self.index(input_index, output_index)?;
        self.weights[index] = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    /// Weights feeding output unit `output_index`, one per input slot.
    pub fn output_row(&self, output_index: usize) -> NetResult<&[f64]> {
        if output_index >= self.outputs {
            return Err(NetError::IndexOutOfRange(output_index, self.outputs));
        }
        let offset = output_index * self.inputs;
        Ok(&self.weights[offset..offset + self.inputs])
    }

    /// Computes every unit of `output` from `input`. The bias slot of `input`
    /// is weighted like any other input; the bias slot of `output` is never
    /// written.
    pub fn forward_pass(&self, input: &Tensor, output: &mut Tensor) {

        debug_assert_eq!(input.size(), self.inputs);
        debug_assert_eq!(output.units(), self.outputs);

        let activation_fn = output.activation_fn();
        let input = input.as_slice();
        let output = output.units_mut();

        for (row, unit) in self.weights.chunks_exact(self.inputs).zip(output.iter_mut()) {
            let mut sum = 0.0;
            for (weight, value) in row.iter().zip(input) {
                sum += weight * value;
            }
            *unit = activation_fn.activate(sum);
        }
    }

}
