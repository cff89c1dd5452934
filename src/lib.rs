pub mod math;
pub mod activation;
pub mod data;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod error;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use activation::sigmoid::{sigmoid, sigmoid_prime};
pub use data::preprocess::NormalizationScope;
pub use layers::weights::WeightStore;
pub use network::network::Network;
pub use network::spec::NetworkSpec;
pub use train::progress::{LogSink, NullSink, ProgressSink};
pub use train::train_config::TrainConfig;
pub use train::window_stats::WindowStats;
pub use error::EngineError;
