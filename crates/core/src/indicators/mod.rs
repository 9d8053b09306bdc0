//! Last-move highlight and check marker

mod detector;
mod types;

pub use detector::*;
pub use types::*;
