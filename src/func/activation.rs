use std::fmt;
use std::str::FromStr;

use crate::error::NetError;

/// Scalar activation applied to every computed unit of a layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationFn {
    Identity,
    Tanh,
    BinaryStep,
    Relu,
}

impl ActivationFn {

    pub const ALL: [ActivationFn; 4] = [
        ActivationFn::Identity,
        ActivationFn::Tanh,
        ActivationFn::BinaryStep,
        ActivationFn::Relu,
    ];

    #[inline]
    pub fn activate(&self, x: f64) -> f64 {
        match self {
            ActivationFn::Identity => x,
            ActivationFn::Tanh => x.tanh(),
            ActivationFn::BinaryStep => if x >= 0.0 { 1.0 } else { 0.0 },
            ActivationFn::Relu => if x >= 0.0 { x } else { 0.0 },
        }
    }

    /// Derivative of the activation, evaluated on the *activated* value `y`.
    ///
    /// This is only exact for activations whose derivative can be written in
    /// terms of their own output (`1 - y^2` for tanh). A new variant must derive
    /// its own expression in `y`, it can't reuse the pre-activation formula.
    #[inline]
    pub fn derive(&self, y: f64) -> f64 {
        match self {
            ActivationFn::Identity => 1.0,
            ActivationFn::Tanh => 1.0 - y * y,
            ActivationFn::BinaryStep => if y >= 0.0 { 1.0 } else { 0.0 },
            ActivationFn::Relu => if y >= 0.0 { 1.0 } else { 0.0 },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivationFn::Identity => "identity",
            ActivationFn::Tanh => "tanh",
            ActivationFn::BinaryStep => "binary-step",
            ActivationFn::Relu => "relu",
        }
    }

}

impl Default for ActivationFn {
    fn default() -> Self {
        ActivationFn::Identity
    }
}

impl FromStr for ActivationFn {
    type Err = NetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ActivationFn::ALL.iter()
            .find(|f| f.name() == name)
            .copied()
            .ok_or_else(|| NetError::UnknownActivationKind(name.to_string()))
    }
}

impl fmt::Display for ActivationFn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_names() {
        for f in ActivationFn::ALL.iter() {
            assert_eq!(f.name().parse::<ActivationFn>().unwrap(), *f);
        }
        assert_eq!("binary-step".parse::<ActivationFn>().unwrap(), ActivationFn::BinaryStep);
    }

    #[test]
    fn test_unknown_name() {
        match "sigmoid".parse::<ActivationFn>() {
            Err(NetError::UnknownActivationKind(name)) => assert_eq!(name, "sigmoid"),
            other => panic!("unexpected result {:?}", other),
        }
        assert!("Tanh".parse::<ActivationFn>().is_err());
    }

    #[test]
    fn test_identity() {
        let f = ActivationFn::Identity;
        assert_eq!(f.activate(-3.5), -3.5);
        assert_eq!(f.derive(-3.5), 1.0);
    }

    #[test]
    fn test_tanh() {
        let f = ActivationFn::Tanh;
        let x: f64 = 0.3;
        let expected = (x.exp() - (-x).exp()) / (x.exp() + (-x).exp());
        assert!((f.activate(x) - expected).abs() < 1e-12);
        let y = f.activate(x);
        assert!((f.derive(y) - (1.0 - y * y)).abs() < 1e-12);
        assert_eq!(f.derive(0.0), 1.0);
    }

    #[test]
    fn test_binary_step() {
        let f = ActivationFn::BinaryStep;
        assert_eq!(f.activate(0.0), 1.0);
        assert_eq!(f.activate(-0.1), 0.0);
        assert_eq!(f.activate(7.0), 1.0);
        assert_eq!(f.derive(-0.1), 0.0);
        assert_eq!(f.derive(0.5), 1.0);
    }

    #[test]
    fn test_relu() {
        let f = ActivationFn::Relu;
        assert_eq!(f.activate(-2.0), 0.0);
        assert_eq!(f.activate(3.0), 3.0);
        assert_eq!(f.derive(-2.0), 0.0);
        assert_eq!(f.derive(0.0), 1.0);
        assert_eq!(f.derive(3.0), 1.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ActivationFn::BinaryStep.to_string(), "binary-step");
    }

}
