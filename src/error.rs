use std::io;
use std::num::ParseFloatError;

use crate::data::DataSetError;

quick_error! {
    #[derive(Debug)]
    pub enum NetError {
        UnknownActivationKind(name: String) {
            description("Unknown activation kind")
            display("Unknown activation kind: {}", name)
        }
        ShapeMismatch(what: &'static str, expected: usize, actual: usize) {
            description("Vector length does not match the network shape")
            display("Shape mismatch for {}: expected length {}, got {}", what, expected, actual)
        }
        IndexOutOfRange(index: usize, len: usize) {
            description("Index out of range")
            display("Index {} out of range for length {}", index, len)
        }
        InvalidLayerSize(units: usize) {
            description("Layer must have at least one unit")
            display("Invalid layer size {}, layers must have at least one unit", units)
        }
        TooFewLayers(count: usize) {
            description("Network needs an input and an output layer")
            display("Network needs at least 2 layers, got {}", count)
        }
        InvalidOptions(reason: String) {
            description("Invalid trainer options")
            display("Invalid trainer options: {}", reason)
            from()
        }
        DataSet(err: DataSetError) {
            description("Invalid data set")
            display("Invalid data set: {}", err)
            cause(err)
            from()
        }
        Csv(err: csv::Error) {
            description("CSV error")
            display("CSV error: {}", err)
            cause(err)
            from()
        }
        ParseFloat(err: ParseFloatError) {
            description("Failed to parse number")
            display("Failed to parse number: {}", err)
            cause(err)
            from()
        }
        Io(err: io::Error) {
            description("I/O error")
            display("I/O error: {}", err)
            cause(err)
            from()
        }
    }
}

pub type NetResult<T> = Result<T, NetError>;

/// Fails with `ShapeMismatch` unless `actual == expected`.
#[inline]
pub fn check_len(what: &'static str, expected: usize, actual: usize) -> NetResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(NetError::ShapeMismatch(what, expected, actual))
    }
}
