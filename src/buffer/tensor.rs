use std::fmt;

use crate::error::{NetError, NetResult};
use crate::func::ActivationFn;

pub const DEFAULT_BIAS: f64 = 1.0;

/// Activations of one layer. Holds `units + 1` values, the last slot being
/// the bias unit which keeps its construction-time value.
#[derive(Clone, PartialEq)]
pub struct Tensor {
    values: Box<[f64]>,
    activation_fn: ActivationFn,
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let mut s = &mut f.debug_struct("Tensor");
        if self.values.len() < 30 {
            s = s.field("values", &self.values);
        } else {
            s = s.field("size", &self.values.len());
        }
        s.field("activation_fn", &self.activation_fn)
            .finish()
    }
}

impl Tensor {

    pub fn new(units: usize, activation_fn: ActivationFn, bias: f64) -> NetResult<Self> {
        if units == 0 {
            return Err(NetError::InvalidLayerSize(units));
        }
        let mut values = vec![0.0; units + 1];
        values[units] = bias;
        Ok(Tensor {
            values: values.into_boxed_slice(),
            activation_fn,
        })
    }

    pub fn with_activation_name(units: usize, activation_name: &str, bias: f64) -> NetResult<Self> {
        Tensor::new(units, activation_name.parse()?, bias)
    }

    /// Number of slots, bias included.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Number of computed units, bias excluded.
    #[inline]
    pub fn units(&self) -> usize {
        self.values.len() - 1
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    #[inline]
    pub fn activation_fn(&self) -> ActivationFn {
        self.activation_fn
    }

    pub fn get(&self, index: usize) -> NetResult<f64> {
        self.values.get(index)
            .copied()
            .ok_or(NetError::IndexOutOfRange(index, self.values.len()))
    }

    pub fn set(&mut self, index: usize, value: f64) -> NetResult<()> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            },
            None => Err(NetError::IndexOutOfRange(index, len)),
        }
    }

    /// All slots, bias last.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn units_slice(&self) -> &[f64] {
        &self.values[..self.values.len() - 1]
    }

    /// Computed units only, so writers can't reach the bias slot.
    #[inline]
    pub(crate) fn units_mut(&mut self) -> &mut [f64] {
        let units = self.values.len() - 1;
        &mut self.values[..units]
    }

}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_layout() {
        let t = Tensor::new(3, ActivationFn::Tanh, DEFAULT_BIAS).unwrap();
        assert_eq!(t.size(), 4);
        assert_eq!(t.units(), 3);
        assert_eq!(t.as_slice(), &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(t.units_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(t.bias(), 1.0);
        assert_eq!(t.activation_fn(), ActivationFn::Tanh);
    }

    #[test]
    fn test_custom_bias() {
        let t = Tensor::with_activation_name(2, "relu", -0.5).unwrap();
        assert_eq!(t.get(2).unwrap(), -0.5);
        assert_eq!(t.activation_fn(), ActivationFn::Relu);
    }

    #[test]
    fn test_get_set_bounds() {
        let mut t = Tensor::new(2, ActivationFn::Identity, DEFAULT_BIAS).unwrap();
        t.set(1, 4.0).unwrap();
        assert_eq!(t.get(1).unwrap(), 4.0);
        match t.get(3) {
            Err(NetError::IndexOutOfRange(3, 3)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        assert!(t.set(3, 1.0).is_err());
        assert_eq!(t.as_slice(), &[0.0, 4.0, 1.0]);
    }

    #[test]
    fn test_units_mut_excludes_bias() {
        let mut t = Tensor::new(2, ActivationFn::Identity, 0.25).unwrap();
        for v in t.units_mut() {
            *v = 9.0;
        }
        assert_eq!(t.as_slice(), &[9.0, 9.0, 0.25]);
    }

    #[test]
    fn test_invalid_construction() {
        match Tensor::new(0, ActivationFn::Tanh, DEFAULT_BIAS) {
            Err(NetError::InvalidLayerSize(0)) => (),
            other => panic!("unexpected result {:?}", other),
        }
        match Tensor::with_activation_name(2, "softplus", DEFAULT_BIAS) {
            Err(NetError::UnknownActivationKind(_)) => (),
            other => panic!("unexpected result {:?}", other),
        }
    }

}
