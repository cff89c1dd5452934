use std::sync::{Arc, atomic::AtomicBool};
use serde::{Serialize, Deserialize};

/// Per-window convergence settings for `train_loop`.
///
/// # Fields
/// - `tolerance`      — a window is done once `|error| <= tolerance`
/// - `max_iterations` — backward passes allowed per window before the loop
///                      gives up with `ConvergenceTimeout`; `None` loops until
///                      the error drops, which may never happen
/// - `stop_flag`      — optional atomic flag; when set from another thread the
///                      loop returns `Stopped` before its next backward pass
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub tolerance: f64,
    pub max_iterations: Option<usize>,
    #[serde(skip)]
    pub stop_flag: Option<Arc<AtomicBool>>,
}

pub const DEFAULT_TOLERANCE: f64 = 1e-5;
pub const DEFAULT_MAX_ITERATIONS: usize = 200_000;

impl TrainConfig {
    /// Creates a `TrainConfig` with no stop flag.
    pub fn new(tolerance: f64, max_iterations: Option<usize>) -> Self {
        TrainConfig {
            tolerance,
            max_iterations,
            stop_flag: None,
        }
    }

    /// Same tolerance, no iteration cap.
    pub fn unbounded() -> Self {
        TrainConfig::new(DEFAULT_TOLERANCE, None)
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(DEFAULT_TOLERANCE, Some(DEFAULT_MAX_ITERATIONS))
    }
}
