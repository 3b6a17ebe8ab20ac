use crate::{
    net::Net,
    buffer::{RowBuffer, Tensor, WeightMatrix},
};

/// Scratch state of the backward pass.
///
/// `gradients` has one row per layer, sized like the layer buffer (bias slot
/// included but never written). `weight_deltas` has one row per kernel,
/// shaped like that kernel's weight matrix, holding the previous update.
#[derive(Clone, Debug)]
pub struct TrainingBuffers {
    pub gradients: RowBuffer,
    pub weight_deltas: RowBuffer,
}

impl TrainingBuffers {
    pub fn for_net(net: &Net) -> Self {
        let layer_sizes: Vec<usize> = net.layer_iter()
            .map(Tensor::size)
            .collect();
        let matrix_sizes: Vec<usize> = net.matrix_iter()
            .map(WeightMatrix::len)
            .collect();
        TrainingBuffers {
            gradients: RowBuffer::new_with_row_sizes(0.0, &layer_sizes),
            weight_deltas: RowBuffer::new_with_row_sizes(0.0, &matrix_sizes),
        }
    }
}
