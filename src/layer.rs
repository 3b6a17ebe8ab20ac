use crate::buffer::{Tensor, WeightMatrix, DEFAULT_BIAS};
use crate::error::{NetError, NetResult};
use crate::func::ActivationFn;

/// Description of one layer: its unit count, activation and bias value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerConfig {
    pub units: usize,
    pub activation_fn: ActivationFn,
    pub bias: f64,
}

impl LayerConfig {

    pub fn new(units: usize, activation_fn: ActivationFn) -> Self {
        LayerConfig {
            units,
            activation_fn,
            bias: DEFAULT_BIAS,
        }
    }

    /// Input layers receive their values directly, so their activation is
    /// never applied.
    pub fn input(units: usize) -> Self {
        LayerConfig::new(units, ActivationFn::Identity)
    }

    pub fn named(units: usize, activation_name: &str) -> NetResult<Self> {
        Ok(LayerConfig::new(units, activation_name.parse()?))
    }

    pub fn with_bias(self, bias: f64) -> Self {
        LayerConfig {
            bias,
            ..self
        }
    }

    pub fn create_tensor(&self) -> NetResult<Tensor> {
        if self.units == 0 {
            return Err(NetError::InvalidLayerSize(self.units));
        }
        Tensor::new(self.units, self.activation_fn, self.bias)
    }

}

/// One propagation step: the two adjacent layers and the weights between them.
#[derive(Clone, Copy, Debug)]
pub struct Kernel<'a> {
    pub input: &'a Tensor,
    pub output: &'a Tensor,
    pub matrix: &'a WeightMatrix,
}

impl<'a> Kernel<'a> {

    /// `matrix.inputs == input.size` and `matrix.outputs == output.size - 1`.
    pub fn is_well_formed(&self) -> bool {
        self.matrix.inputs() == self.input.size()
            && self.matrix.outputs() == self.output.size() - 1
    }

}
