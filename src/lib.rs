//! Recolor a logo with a vertical blue gradient, clear its white background
//! and put a soft glow beneath it.

pub mod logo_recolor;
pub mod palette;
