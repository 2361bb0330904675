pub mod snapshot;
pub mod viewport;
