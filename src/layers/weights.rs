use rand::Rng;

use crate::math::matrix::Matrix;

/// The two synapses between input, hidden and output, plus the layer biases.
///
/// Biases start at zero and nothing ever updates them.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightStore {
    /// input -> hidden, `input_size x hidden_size`.
    pub synapse0: Matrix,
    /// hidden -> output, `hidden_size x output_size`.
    pub synapse1: Matrix,
    pub bias0: f64,
    pub bias1: f64,
}

impl WeightStore {
    /// Draws every weight from U[0, 1) using `rng`.
    pub fn init<R: Rng + ?Sized>(
        input_size: usize,
        hidden_size: usize,
        output_size: usize,
        rng: &mut R,
    ) -> WeightStore {
        let synapse0 = Matrix::uniform(input_size, hidden_size, rng);
        let synapse1 = Matrix::uniform(hidden_size, output_size, rng);

        WeightStore {
            synapse0,
            synapse1,
            bias0: 0.0,
            bias1: 0.0,
        }
    }
}
