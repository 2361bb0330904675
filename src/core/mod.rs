pub mod data;
pub mod engine;
pub mod shade;
pub mod util;
