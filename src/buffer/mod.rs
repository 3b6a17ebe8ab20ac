mod tensor;
mod matrix;
mod row;

pub use self::{
    tensor::*,
    matrix::*,
    row::*,
};
