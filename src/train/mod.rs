pub mod loop_fn;
pub mod progress;
pub mod train_config;
pub mod window_stats;

pub use loop_fn::train_loop;
pub use progress::{LogSink, NullSink, ProgressSink};
pub use train_config::TrainConfig;
pub use window_stats::WindowStats;
