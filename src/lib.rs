//! A small fully connected feed-forward network trained with back-propagation
//! and momentum gradient descent.
//!
//! ```
//! use momentum_mlp::{LayerConfig, Net, Trainer, TrainerOptions};
//!
//! let net = Net::new(vec![
//!     LayerConfig::input(2),
//!     LayerConfig::named(2, "tanh")?,
//!     LayerConfig::named(1, "tanh")?,
//! ])?;
//! let mut trainer = Trainer::new(net, TrainerOptions::default());
//! trainer.backward(&[1.0, 0.0], &[1.0])?;
//! let output = trainer.forward(&[1.0, 0.0])?;
//! assert_eq!(output.len(), 1);
//! # Ok::<(), momentum_mlp::NetError>(())
//! ```

#[macro_use]
extern crate quick_error;

#[macro_use]
extern crate derive_builder;

mod error;
mod layer;
mod net;
mod initializer;
mod utils;
mod data;
mod stats;
mod train;
mod buffer;
mod func;

pub use crate::{
    error::{NetError, NetResult},
    layer::{Kernel, LayerConfig},
    net::{Net, NetConfig},
    initializer::{Lcg, LcgNetInitializer},
    data::{DataSetError, PreparedDataSet, PreparedDataSetIterator},
    stats::Stats,
    train::{Trainer, TrainerOptions, TrainerOptionsBuilder, TrainingResult},
    buffer::{Tensor, WeightMatrix, DEFAULT_BIAS},
    func::{ActivationFn, CompletionFn},
};
