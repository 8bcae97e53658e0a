use std::f64::consts::E;

/// An activation paired with its exact analytic derivative, applied
/// element-wise to a layer's pre-activation values.
///
/// The catalog variants carry their closed-form definitions; `Custom` takes
/// a caller-supplied `(source, derivative)` pair of plain function pointers,
/// so a custom activation is complete by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activation {
    Identity,
    Sigmoid,
    /// Derivative follows the sub-gradient convention: 0 at and below zero,
    /// 1 above zero.
    Relu,
    Arctan,
    ElliotSig,
    Gaussian,
    Sinusoid,
    /// Normalized sinc: 1 at zero, sin(x)/x elsewhere.
    Sinc,
    Softplus,
    Custom {
        source: fn(f64) -> f64,
        derivative: fn(f64) -> f64,
    },
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

impl Activation {
    /// Element-wise forward nonlinearity.
    pub fn source(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => x,
            Activation::Sigmoid => sigmoid(x),
            Activation::Relu => if x > 0.0 { x } else { 0.0 },
            Activation::Arctan => x.atan(),
            Activation::ElliotSig => x / (1.0 + x.abs()),
            Activation::Gaussian => E.powf(-(x * x)),
            Activation::Sinusoid => x.sin(),
            Activation::Sinc => if x == 0.0 { 1.0 } else { x.sin() / x },
            Activation::Softplus => (1.0 + E.powf(x)).ln(),
            Activation::Custom { source, .. } => source(x),
        }
    }

    /// Element-wise derivative, evaluated at the pre-activation value.
    ///
    /// `Sigmoid` re-evaluates the sigmoid internally instead of reading a
    /// stored activated value, so the derivative stays correct no matter
    /// where the caller keeps its forward results.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            Activation::Identity => 1.0,
            Activation::Sigmoid => {
                let fx = sigmoid(x);
                fx * (1.0 - fx)
            }
            Activation::Relu => if x > 0.0 { 1.0 } else { 0.0 },
            Activation::Arctan => 1.0 / (x * x + 1.0),
            Activation::ElliotSig => {
                let d = 1.0 + x.abs();
                1.0 / (d * d)
            }
            Activation::Gaussian => -2.0 * x * E.powf(-(x * x)),
            Activation::Sinusoid => x.cos(),
            Activation::Sinc => {
                if x == 0.0 {
                    0.0
                } else {
                    x.cos() / x - x.sin() / (x * x)
                }
            }
            Activation::Softplus => sigmoid(x),
            Activation::Custom { derivative, .. } => derivative(x),
        }
    }
}
