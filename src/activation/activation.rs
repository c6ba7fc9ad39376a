use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Element-wise activations whose derivative can be written in terms of the
/// function's own output.  The layer never keeps pre-activation values
/// around — its update steps only see post-activation tensors — so every
/// variant here must satisfy that constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    ReLU,
    Identity,
}

impl ActivationFunction {
    /// Element-wise activation.  Sigmoid saturates for large |x|; no clamping.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::ReLU => if x > 0.0 { x } else { 0.0 },
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative expressed in terms of the activation's own
    /// output (`out = function(x)`), avoiding recomputation of the raw
    /// pre-activation.  For Sigmoid this is the logistic identity σ'(x) =
    /// σ(x)·(1 - σ(x)).
    pub fn derivative_from_output(&self, out: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => out * (1.0 - out),
            ActivationFunction::Tanh => 1.0 - out * out,
            ActivationFunction::ReLU => if out > 0.0 { 1.0 } else { 0.0 },
            ActivationFunction::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Symmetric difference quotient of `function` around x.
    fn numerical_derivative(activation: ActivationFunction, x: f64) -> f64 {
        let h = 1e-5;
        (activation.function(x + h) - activation.function(x - h)) / (2.0 * h)
    }

    #[test]
    fn sigmoid_output_stays_in_unit_interval() {
        for x in [-30.0, -2.5, 0.0, 1.0, 30.0] {
            let s = ActivationFunction::Sigmoid.function(x);
            assert!(s > 0.0 && s < 1.0, "sigmoid({x}) = {s} left (0, 1)");
        }
    }

    #[test]
    fn sigmoid_derivative_matches_numerical_derivative() {
        for x in [-4.0, -0.5, 0.0, 0.5, 4.0] {
            let out = ActivationFunction::Sigmoid.function(x);
            let analytic = ActivationFunction::Sigmoid.derivative_from_output(out);
            let numeric = numerical_derivative(ActivationFunction::Sigmoid, x);
            assert!((analytic - numeric).abs() < 1e-6);
        }
    }

    #[test]
    fn tanh_derivative_matches_numerical_derivative() {
        for x in [-2.0, -0.3, 0.0, 0.3, 2.0] {
            let out = ActivationFunction::Tanh.function(x);
            let analytic = ActivationFunction::Tanh.derivative_from_output(out);
            let numeric = numerical_derivative(ActivationFunction::Tanh, x);
            assert!((analytic - numeric).abs() < 1e-6);
        }
    }

    #[test]
    fn variants_serialize_as_snake_case_tags() {
        assert_eq!(
            serde_json::to_string(&ActivationFunction::Sigmoid).unwrap(),
            "\"sigmoid\""
        );
        let back: ActivationFunction = serde_json::from_str("\"tanh\"").unwrap();
        assert_eq!(back, ActivationFunction::Tanh);
    }

    #[test]
    fn relu_and_identity_derivatives() {
        assert_eq!(ActivationFunction::ReLU.derivative_from_output(3.0), 1.0);
        assert_eq!(ActivationFunction::ReLU.derivative_from_output(0.0), 0.0);
        assert_eq!(ActivationFunction::Identity.derivative_from_output(-7.0), 1.0);
    }
}
