mod backprop;
mod buffers;
mod epoch;
mod error;
mod options;
mod trainer;

pub use self::{
    backprop::*,
    buffers::*,
    epoch::*,
    error::*,
    options::*,
    trainer::*,
};
