pub mod pass;
pub mod weights;

pub use weights::WeightStore;
