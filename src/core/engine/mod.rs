pub mod cancellation;
pub mod generate;
pub mod kernel;
