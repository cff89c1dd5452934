pub mod preprocess;
pub mod window;

pub use preprocess::{normalize, Normalization, NormalizationScope};
pub use window::{window_count, Cursor};
