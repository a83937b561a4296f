//! CLI command implementations.

pub mod ftth;
pub mod voice;
