pub mod engine;
pub mod sampler;
pub mod table;
