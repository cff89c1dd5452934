use crate::activation::sigmoid::{sigmoid, sigmoid_prime};
use crate::layers::weights::WeightStore;

/// Forward pass over one window of features.
///
/// `hidden[i] = sigmoid(sum_j features[j] * synapse0[j][i] + bias0)`, then
/// `output[k] = sigmoid(sum_j hidden[j] * synapse1[j][k] + bias1)`.
/// Both buffers are overwritten.
pub fn feed_forward(
    weights: &WeightStore,
    features: &[f64],
    hidden: &mut [f64],
    output: &mut [f64],
) {
    let hidden_sums = weights.synapse0.left_mul(features);
    for (h, z) in hidden.iter_mut().zip(hidden_sums) {
        *h = sigmoid(z + weights.bias0);
    }

    let output_sums = weights.synapse1.left_mul(hidden);
    for (o, z) in output.iter_mut().zip(output_sums) {
        *o = sigmoid(z + weights.bias1);
    }
}

/// Local gradients for both layers, computed before any weight moves.
///
/// `delta1[k] = sigmoid_prime(output[k]) * (target[k] - output[k])` and
/// `delta0[i] = sigmoid_prime(hidden[i]) * sum_k synapse1[i][k] * delta1[k]`.
pub fn compute_deltas(
    weights: &WeightStore,
    hidden: &[f64],
    output: &[f64],
    target: &[f64],
    delta0: &mut [f64],
    delta1: &mut [f64],
) {
    for ((d, &o), &t) in delta1.iter_mut().zip(output).zip(target) {
        *d = sigmoid_prime(o) * (t - o);
    }

    let back = weights.synapse1.mul_vec(delta1);
    for ((d, &h), s) in delta0.iter_mut().zip(hidden).zip(back) {
        *d = sigmoid_prime(h) * s;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    fn fixed_weights() -> WeightStore {
        WeightStore {
            synapse0: Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, -1.0]]),
            synapse1: Matrix::from_data(vec![vec![0.5], vec![0.5]]),
            bias0: 0.0,
            bias1: 0.0,
        }
    }

    #[test]
    fn forward_matches_hand_computation() {
        let w = fixed_weights();
        let mut hidden = [0.0; 2];
        let mut output = [0.0; 1];

        feed_forward(&w, &[2.0, 3.0], &mut hidden, &mut output);

        assert_eq!(hidden, [sigmoid(2.0), sigmoid(-3.0)]);
        let expected = sigmoid(0.5 * sigmoid(2.0) + 0.5 * sigmoid(-3.0));
        assert!((output[0] - expected).abs() < 1e-15);
    }

    #[test]
    fn zero_features_give_half_hidden() {
        let w = fixed_weights();
        let mut hidden = [0.0; 2];
        let mut output = [0.0; 1];

        feed_forward(&w, &[0.0, 0.0], &mut hidden, &mut output);

        assert_eq!(hidden, [0.5, 0.5]);
        assert_eq!(output[0], sigmoid(0.5));
    }

    #[test]
    fn deltas_apply_prime_to_activations() {
        let w = fixed_weights();
        let hidden = [0.8, 0.3];
        let output = [0.6];
        let mut delta0 = [0.0; 2];
        let mut delta1 = [0.0; 1];

        compute_deltas(&w, &hidden, &output, &[0.9], &mut delta0, &mut delta1);

        let d1 = sigmoid_prime(0.6) * (0.9 - 0.6);
        assert_eq!(delta1, [d1]);
        assert_eq!(delta0, [sigmoid_prime(0.8) * 0.5 * d1, sigmoid_prime(0.3) * 0.5 * d1]);
    }

    #[test]
    fn on_target_gives_zero_deltas() {
        let w = fixed_weights();
        let mut delta0 = [1.0; 2];
        let mut delta1 = [1.0; 1];

        compute_deltas(&w, &[0.2, 0.7], &[0.4], &[0.4], &mut delta0, &mut delta1);

        assert_eq!(delta1, [0.0]);
        assert_eq!(delta0, [0.0, 0.0]);
    }
}
