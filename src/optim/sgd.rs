use crate::layers::weights::WeightStore;

#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// One online update of both synapses:
    /// `synapse1[j][i] += lr * delta1[i] * hidden[j]` and
    /// `synapse0[j][i] += lr * delta0[i] * features[j]`.
    ///
    /// Biases are left alone.
    pub fn step(
        &self,
        weights: &mut WeightStore,
        features: &[f64],
        hidden: &[f64],
        delta0: &[f64],
        delta1: &[f64],
    ) {
        weights.synapse1.add_scaled_outer(hidden, delta1, self.learning_rate);
        weights.synapse0.add_scaled_outer(features, delta0, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::Matrix;

    #[test]
    fn moves_weights_along_deltas_and_keeps_biases() {
        let mut w = WeightStore {
            synapse0: Matrix::zeros(2, 1),
            synapse1: Matrix::zeros(1, 1),
            bias0: 0.0,
            bias1: 0.0,
        };
        let sgd = Sgd::new(0.5);

        sgd.step(&mut w, &[1.0, 0.0], &[0.5], &[0.25], &[-1.0]);

        assert_eq!(w.synapse1.data, vec![vec![-0.25]]);
        // a zero feature leaves its row untouched
        assert_eq!(w.synapse0.data, vec![vec![0.125], vec![0.0]]);
        assert_eq!((w.bias0, w.bias1), (0.0, 0.0));
    }
}
