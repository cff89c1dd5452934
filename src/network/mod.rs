pub mod network;
pub mod spec;

pub use network::{Network, OUTPUT_SIZE};
pub use spec::NetworkSpec;
