mod activation;
mod completion;

pub use self::{
    activation::*,
    completion::*,
};
