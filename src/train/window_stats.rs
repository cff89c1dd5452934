use serde::{Serialize, Deserialize};

/// Outcome of training on one window, collected by `train_loop`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    /// 0-based window index.
    pub window: usize,
    /// Offset of the window's first element in the input sequence.
    pub start: usize,
    /// Elements actually read from the sequence; less than the window width
    /// only for a short final window.
    pub fresh_inputs: usize,
    /// Backward passes needed to bring the error under the tolerance.
    pub iterations: usize,
    /// Output after the last forward pass.
    pub output: f64,
    /// Squared error after the last forward pass.
    pub error: f64,
    pub elapsed_ms: u64,
}
