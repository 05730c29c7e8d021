//! Shared terminal utilities.
//!
//! Box drawing, slider and strength rendering, raw mode management.

mod output;
mod raw_mode;

pub use output::*;
pub use raw_mode::*;
