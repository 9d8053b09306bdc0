//! Board coordinate system: axes, squares, colours and display placement

mod layout;
mod types;

pub use layout::*;
pub use types::*;
