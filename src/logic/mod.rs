pub mod conversion;
pub mod formatting;
pub mod gate;
pub mod sampler;
