use serde::{Serialize, Deserialize};

use crate::data::preprocess::NormalizationScope;
use crate::error::EngineError;
use crate::train::train_config::TrainConfig;

/// Window width used when no spec says otherwise.
pub const DEFAULT_INPUT_SIZE: usize = 30;
pub const DEFAULT_LEARNING_RATE: f64 = 0.2;

/// Everything needed to build a `Network` apart from its input sequence.
///
/// Only configuration lives here; trained weights are never written out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    /// Window width, which is also the number of input features.
    pub input_size: usize,
    pub learning_rate: f64,
    pub normalization: NormalizationScope,
    /// Seed for weight initialisation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub training: TrainConfig,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            input_size: DEFAULT_INPUT_SIZE,
            learning_rate: DEFAULT_LEARNING_RATE,
            normalization: NormalizationScope::default(),
            seed: None,
            training: TrainConfig::default(),
        }
    }
}

impl NetworkSpec {
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.input_size == 0 {
            return Err(EngineError::invalid("input_size must be at least 1"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(EngineError::invalid(format!(
                "learning_rate must be positive and finite, got {}",
                self.learning_rate
            )));
        }
        let tolerance = self.training.tolerance;
        if !(tolerance.is_finite() && tolerance >= 0.0) {
            return Err(EngineError::invalid(format!(
                "tolerance must be non-negative and finite, got {tolerance}"
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<(), EngineError> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkSpec` from a JSON file. Missing fields take
    /// their default values.
    pub fn load_json(path: &str) -> Result<NetworkSpec, EngineError> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_engine_constants() {
        let spec = NetworkSpec::default();
        assert_eq!(spec.input_size, 30);
        assert_eq!(spec.learning_rate, 0.2);
        assert_eq!(spec.normalization, NormalizationScope::FirstWindow);
        assert_eq!(spec.training.tolerance, 1e-5);
        assert_eq!(spec.training.max_iterations, Some(200_000));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let spec: NetworkSpec =
            serde_json::from_str(r#"{ "seed": 9, "training": { "max_iterations": null } }"#).unwrap();
        assert_eq!(spec.seed, Some(9));
        assert_eq!(spec.input_size, 30);
        assert_eq!(spec.training.max_iterations, None);
        assert_eq!(spec.training.tolerance, 1e-5);
    }

    #[test]
    fn rejects_bad_values() {
        let mut spec = NetworkSpec::default();
        spec.input_size = 0;
        assert!(matches!(spec.validate(), Err(EngineError::InvalidArgument(_))));

        let mut spec = NetworkSpec::default();
        spec.learning_rate = f64::NAN;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("cephalo-spec-{}.json", std::process::id()));
        let path = path.to_str().unwrap();

        let mut spec = NetworkSpec::default();
        spec.seed = Some(42);
        spec.normalization = NormalizationScope::Full;
        spec.save_json(path).unwrap();

        let loaded = NetworkSpec::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();

        assert_eq!(loaded.seed, Some(42));
        assert_eq!(loaded.normalization, NormalizationScope::Full);
        assert_eq!(loaded.training.max_iterations, spec.training.max_iterations);
    }
}
