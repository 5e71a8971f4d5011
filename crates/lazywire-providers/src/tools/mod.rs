//! Tool runner providers

pub mod null;
pub mod static_runner;

pub use null::NullToolRunner;
pub use static_runner::StaticToolRunner;
