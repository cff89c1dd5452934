use thiserror::Error;

/// Failures surfaced by the engine at its API boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A caller-supplied value has the wrong shape or range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Normalisation found a constant sequence (`max == min`); the rescaled
    /// values are NaN.
    #[error("numeric degeneracy: every input value equals {value}, normalisation divides by zero")]
    NumericDegeneracy { value: f64 },

    /// The per-window loop reached its iteration cap without the error
    /// dropping under the tolerance.
    #[error("window {window} did not converge after {iterations} iterations (error {error:e})")]
    ConvergenceTimeout {
        window: usize,
        iterations: usize,
        error: f64,
    },

    /// A forward pass produced NaN, so the error can never be compared with
    /// the tolerance.
    #[error("window {window} produced a non-finite output ({output})")]
    NonFiniteOutput { window: usize, output: f64 },

    /// The stop flag was raised while training `window`.
    #[error("training stopped during window {window}")]
    Stopped { window: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl EngineError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        EngineError::InvalidArgument(msg.into())
    }
}
