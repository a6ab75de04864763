pub mod collector;
pub mod sampler;
pub mod snapshot;
pub mod store;
