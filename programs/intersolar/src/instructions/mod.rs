pub mod initialize;
pub mod rename;

pub use initialize::*;
pub use rename::*;
