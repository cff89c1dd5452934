use serde::{Serialize, Deserialize};

use crate::error::EngineError;

/// Which elements the preprocessor rewrites after scanning for min/max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationScope {
    /// Rewrite only the first window; later windows stay raw.
    #[default]
    FirstWindow,
    /// Rewrite every element. Changes the numeric behaviour of every
    /// multi-window input compared to `FirstWindow`.
    Full,
}

/// Range found by the scan, kept for reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub min: f64,
    pub max: f64,
}

/// Min-max rescaling of `input` into [0, 1].
///
/// The range is taken over the whole sequence. With
/// `NormalizationScope::FirstWindow` only the first `width` elements are
/// rewritten as `(x - min) / (max - min)`.
///
/// A constant sequence is still divided through (leaving NaN in the rewritten
/// slots) and then reported as `NumericDegeneracy`.
pub fn normalize(
    input: &mut [f64],
    width: usize,
    scope: NormalizationScope,
) -> Result<Normalization, EngineError> {
    if input.is_empty() {
        return Err(EngineError::invalid("cannot normalise an empty sequence"));
    }

    let min = input.iter().copied().fold(f64::INFINITY, f64::min);
    let max = input.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let difference = max - min;

    let end = match scope {
        NormalizationScope::FirstWindow => width.min(input.len()),
        NormalizationScope::Full => input.len(),
    };
    for x in &mut input[..end] {
        *x = (*x - min) / difference;
    }

    if difference == 0.0 {
        tracing::warn!(value = min, "constant input, normalisation produced NaN");
        return Err(EngineError::NumericDegeneracy { value: min });
    }

    Ok(Normalization { min, max })
}
