use std::time::{Duration, SystemTime};

use crate::{
    data::PreparedDataSet,
    error::{check_len, NetResult},
    func::CompletionFn,
    initializer::LcgNetInitializer,
    net::Net,
    stats::Stats,
    train::{
        backprop::{hidden_gradients, momentum_update, output_gradients},
        buffers::TrainingBuffers,
        epoch::train_backprop_single_threaded,
        error::{compute_error_for_batch, forward_pass_and_compute_error, root_mean_square_error},
        options::TrainerOptions,
    },
};

#[derive(Clone, Debug)]
pub struct TrainingResult {
    pub error_stats: Stats,
    pub epochs: usize,
    pub duration: Duration,
}

/// Owns a net together with the gradient and momentum buffers needed to
/// train it. Building a trainer re-seeds every weight of the net.
#[derive(Clone, Debug)]
pub struct Trainer {
    net: Net,
    options: TrainerOptions,
    buffers: TrainingBuffers,
}

impl Trainer {

    pub fn new(mut net: Net, options: TrainerOptions) -> Self {
        LcgNetInitializer::new(options.seed).initialize_weights(&mut net);
        log::debug!(
            "seeded {} weights with seed {}",
            net.matrix_iter().map(|m| m.len()).sum::<usize>(),
            options.seed
        );
        let buffers = TrainingBuffers::for_net(&net);
        Trainer {
            net,
            options,
            buffers,
        }
    }

    #[inline]
    pub fn net(&self) -> &Net {
        &self.net
    }

    #[inline]
    pub fn into_net(self) -> Net {
        self.net
    }

    #[inline]
    pub fn options(&self) -> &TrainerOptions {
        &self.options
    }

    /// Gradients computed for layer `layer_index` by the last `backward` call.
    #[inline]
    pub fn gradients(&self, layer_index: usize) -> &[f64] {
        self.buffers.gradients.get_row(layer_index)
    }

    /// Weight updates applied to kernel `kernel_index` by the last `backward` call.
    #[inline]
    pub fn deltas(&self, kernel_index: usize) -> &[f64] {
        self.buffers.weight_deltas.get_row(kernel_index)
    }

    pub fn forward(&mut self, input: &[f64]) -> NetResult<Vec<f64>> {
        self.net.forward(input)
    }

    /// Root mean square error of the net's output for `input`.
    pub fn error(&mut self, input: &[f64], expected: &[f64]) -> NetResult<f64> {
        forward_pass_and_compute_error(&mut self.net, input, expected)
    }

    /// One training step on a single example: forward pass, output and
    /// hidden gradients, then a momentum update of every weight.
    pub fn backward(&mut self, input: &[f64], expected: &[f64]) -> NetResult<()> {

        check_len("input", self.net.inputs(), input.len())?;
        check_len("expected", self.net.outputs(), expected.len())?;

        self.net.forward_in_place(input)?;

        log::trace!(
            "backward step, error before update {}",
            root_mean_square_error(expected, self.net.last_layer().units_slice())
        );

        output_gradients(
            self.net.last_layer(),
            expected,
            self.buffers.gradients.get_last_row_mut(),
        );

        // the input layer needs no gradient, so kernel 0 is skipped
        for kernel_index in (1..self.net.num_kernels()).rev() {
            let (gradients, downstream) = self.buffers.gradients.split_rows(kernel_index, kernel_index + 1);
            hidden_gradients(
                self.net.layer(kernel_index),
                self.net.matrix(kernel_index),
                downstream,
                gradients,
            );
        }

        let TrainerOptions { step_size, momentum, .. } = self.options;
        let TrainingBuffers { gradients, weight_deltas } = &mut self.buffers;
        let (layers, matrices) = self.net.split_mut();
        for (kernel_index, matrix) in matrices.iter_mut().enumerate() {
            momentum_update(
                &layers[kernel_index],
                gradients.get_row(kernel_index + 1),
                matrix,
                weight_deltas.get_row_mut(kernel_index),
                step_size,
                momentum,
            );
        }

        Ok(())
    }

    /// Trains once on every row in data set order, then returns the error
    /// stats of the whole data set under the updated weights.
    pub fn train_epoch(&mut self, data: &PreparedDataSet) -> NetResult<Stats> {
        self.check_data_shape(data)?;
        for (input, expected) in data {
            self.backward(input, expected)?;
        }
        compute_error_for_batch(&mut self.net, data)
    }

    /// Repeats `train_epoch` until `completion_fn` says to stop.
    pub fn train(&mut self, data: &PreparedDataSet, completion_fn: CompletionFn) -> NetResult<TrainingResult> {
        let start_time = SystemTime::now();
        let (error_stats, epochs) = train_backprop_single_threaded(self, data, completion_fn)?;
        let duration = SystemTime::now().duration_since(start_time).unwrap_or_default();
        log::info!(
            "trained {} epochs in {}s, mean error {}",
            epochs,
            duration.as_secs_f64(),
            error_stats.mean()
        );
        Ok(TrainingResult {
            error_stats,
            epochs,
            duration,
        })
    }

    fn check_data_shape(&self, data: &PreparedDataSet) -> NetResult<()> {
        check_len("input", self.net.inputs(), data.independent_cols())?;
        check_len("expected", self.net.outputs(), data.dependent_cols())
    }

}
