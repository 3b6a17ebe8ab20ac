use core::slice;

use crate::{
    buffer::{Tensor, WeightMatrix},
    error::{check_len, NetError, NetResult},
    func::ActivationFn,
    layer::{Kernel, LayerConfig},
};

#[derive(Clone, Debug, PartialEq)]
pub struct NetConfig {
    layers: Vec<LayerConfig>,
}

impl NetConfig {

    pub fn new(layers: impl Into<Vec<LayerConfig>>) -> Self {
        NetConfig {
            layers: layers.into()
        }
    }

    pub fn new_fully_connected(
        input_size: usize,
        output_size: usize,
        hidden_layer_sizes: impl AsRef<[usize]>,
        activation_fn: ActivationFn,
    ) -> Self {
        let hidden_layer_sizes = hidden_layer_sizes.as_ref();
        let mut layers: Vec<LayerConfig> = Vec::with_capacity(hidden_layer_sizes.len() + 2);
        layers.push(LayerConfig::input(input_size));
        for layer_size in hidden_layer_sizes {
            layers.push(LayerConfig::new(*layer_size, activation_fn));
        }
        layers.push(LayerConfig::new(output_size, activation_fn));
        NetConfig {
            layers
        }
    }

    #[inline]
    pub fn layers(&self) -> &[LayerConfig] {
        &self.layers
    }

    pub fn create_net(&self) -> NetResult<Net> {
        Net::new(&self.layers)
    }

}

/// Fully connected feed-forward network: `L` layer buffers joined by `L - 1`
/// weight matrices. Kernel `k` reads layer `k` and writes layer `k + 1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Net {
    layers: Vec<Tensor>,
    matrices: Vec<WeightMatrix>,
}

impl Net {

    pub fn new(layer_configs: impl AsRef<[LayerConfig]>) -> NetResult<Self> {

        let layer_configs = layer_configs.as_ref();
        if layer_configs.len() < 2 {
            return Err(NetError::TooFewLayers(layer_configs.len()));
        }

        let layers = layer_configs.iter()
            .map(LayerConfig::create_tensor)
            .collect::<NetResult<Vec<Tensor>>>()?;

        let matrices: Vec<WeightMatrix> = layers.windows(2)
            .map(|pair| WeightMatrix::between(&pair[0], &pair[1]))
            .collect();

        log::debug!(
            "created net with layer sizes {:?}",
            layers.iter().map(Tensor::units).collect::<Vec<usize>>()
        );

        Ok(Net {
            layers,
            matrices
        })

    }

    /// Number of input values, bias excluded.
    #[inline]
    pub fn inputs(&self) -> usize {
        self.layers[0].units()
    }

    /// Number of output values, bias excluded.
    #[inline]
    pub fn outputs(&self) -> usize {
        self.layers[self.layers.len() - 1].units()
    }

    /// Evaluates the network and returns a copy of the output units.
    pub fn forward(&mut self, input: &[f64]) -> NetResult<Vec<f64>> {
        self.forward_in_place(input)?;
        Ok(self.last_layer().units_slice().to_vec())
    }

    /// Like `forward`, but leaves the result in the layer buffers.
    pub(crate) fn forward_in_place(&mut self, input: &[f64]) -> NetResult<()> {

        check_len("input", self.inputs(), input.len())?;

        self.layers[0].units_mut().copy_from_slice(input);

        for (kernel_index, matrix) in self.matrices.iter().enumerate() {
            let (before, after) = self.layers.split_at_mut(kernel_index + 1);
            matrix.forward_pass(&before[kernel_index], &mut after[0]);
        }

        Ok(())
    }

    #[inline]
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn num_kernels(&self) -> usize {
        self.matrices.len()
    }

    #[inline]
    pub fn layer(&self, index: usize) -> &Tensor {
        &self.layers[index]
    }

    #[inline]
    pub fn first_layer(&self) -> &Tensor {
        &self.layers[0]
    }

    #[inline]
    pub fn last_layer(&self) -> &Tensor {
        &self.layers[self.layers.len() - 1]
    }

    #[inline]
    pub fn layer_iter(&self) -> slice::Iter<Tensor> {
        self.layers.iter()
    }

    #[inline]
    pub fn matrix(&self, index: usize) -> &WeightMatrix {
        &self.matrices[index]
    }

    #[inline]
    pub fn matrix_mut(&mut self, index: usize) -> &mut WeightMatrix {
        &mut self.matrices[index]
    }

    #[inline]
    pub fn matrix_iter(&self) -> slice::Iter<WeightMatrix> {
        self.matrices.iter()
    }

    #[inline]
    pub fn matrix_iter_mut(&mut self) -> slice::IterMut<WeightMatrix> {
        self.matrices.iter_mut()
    }

    #[inline]
    pub fn kernel(&self, index: usize) -> Kernel {
        Kernel {
            input: &self.layers[index],
            output: &self.layers[index + 1],
            matrix: &self.matrices[index],
        }
    }

    pub fn kernels(&self) -> impl Iterator<Item=Kernel> + '_ {
        (0..self.matrices.len()).map(move |index| self.kernel(index))
    }

    /// Layers for reading alongside matrices for writing.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&[Tensor], &mut [WeightMatrix]) {
        (&self.layers, &mut self.matrices)
    }

    pub fn get_config(&self) -> NetConfig {
        let layers = self.layer_iter()
            .map(|tensor| LayerConfig {
                units: tensor.units(),
                activation_fn: tensor.activation_fn(),
                bias: tensor.bias(),
            })
            .collect::<Vec<LayerConfig>>();
        NetConfig::new(layers)
    }

}

#[cfg(test)]
mod test {
    use super::*;

    fn xor_config() -> NetConfig {
        NetConfig::new(vec![
            LayerConfig::input(2),
            LayerConfig::new(2, ActivationFn::Tanh),
            LayerConfig::new(1, ActivationFn::Tanh),
        ])
    }

    #[test]
    fn test_shape() {

        let net = NetConfig::new_fully_connected(
            4,
            2,
            [3],
            ActivationFn::Tanh
        ).create_net().unwrap();

        assert_eq!(net.num_layers(), 3);
        assert_eq!(net.num_kernels(), 2);
        assert_eq!(net.inputs(), 4);
        assert_eq!(net.outputs(), 2);
        assert_eq!(net.matrix(0).inputs(), 5);
        assert_eq!(net.matrix(0).outputs(), 3);
        assert_eq!(net.matrix(1).inputs(), 4);
        assert_eq!(net.matrix(1).outputs(), 2);
        assert!(net.kernels().all(|k| k.is_well_formed()));

    }

    #[test]
    fn test_config_round_trip_fully_connected() {

        let config = NetConfig::new_fully_connected(
            4,
            2,
            [5, 4, 3],
            ActivationFn::Relu
        );

        let net = config.create_net().unwrap();
        let config2 = net.get_config();
        let net2 = config2.create_net().unwrap();

        assert_eq!(net2.get_config(), config);

    }

    #[test]
    fn test_construction_errors() {
        match Net::new(vec![LayerConfig::input(2)]) {
            Err(NetError::TooFewLayers(1)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match Net::new(vec![LayerConfig::input(2), LayerConfig::new(0, ActivationFn::Tanh)]) {
            Err(NetError::InvalidLayerSize(0)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_forward_hand_weights() {

        let mut net = Net::new(vec![
            LayerConfig::input(2),
            LayerConfig::new(1, ActivationFn::Identity).with_bias(2.0),
            LayerConfig::new(1, ActivationFn::Identity),
        ]).unwrap();

        // hidden = 0.5*x0 + 0.25*x1 - 1.0*bias(1.0)
        net.matrix_mut(0).set(0, 0, 0.5).unwrap();
        net.matrix_mut(0).set(1, 0, 0.25).unwrap();
        net.matrix_mut(0).set(2, 0, -1.0).unwrap();
        // output = 3*hidden + 0.5*bias(2.0)
        net.matrix_mut(1).set(0, 0, 3.0).unwrap();
        net.matrix_mut(1).set(1, 0, 0.5).unwrap();

        let output = net.forward(&[4.0, 8.0]).unwrap();
        assert_eq!(output, vec![3.0 * 3.0 + 0.5 * 2.0]);
        assert_eq!(net.layer(1).as_slice(), &[3.0, 2.0]);
        assert_eq!(net.first_layer().as_slice(), &[4.0, 8.0, 1.0]);

    }

    #[test]
    fn test_forward_returns_copy() {
        let mut net = xor_config().create_net().unwrap();
        net.matrix_mut(1).set(2, 0, 0.5).unwrap();
        let mut output = net.forward(&[1.0, 0.0]).unwrap();
        output[0] = 100.0;
        assert_eq!(net.last_layer().get(0).unwrap(), 0.5f64.tanh());
        assert_eq!(net.last_layer().bias(), 1.0);
    }

    #[test]
    fn test_forward_shape_mismatch() {
        let mut net = xor_config().create_net().unwrap();
        let before = net.clone();
        match net.forward(&[0.0, 1.0, 2.0]) {
            Err(NetError::ShapeMismatch("input", 2, 3)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(net.forward(&[0.0]).is_err());
        assert_eq!(net, before);
    }

}
