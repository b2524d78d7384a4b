mod filter;
mod generator;
pub mod incidence;
mod random;

pub use filter::{filter, filtered};
pub use generator::{generate, jitter};
pub use random::{ConstantSource, RandomSource, RngSource};
