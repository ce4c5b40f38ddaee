#![forbid(unsafe_code)]

//! Color kernel for S2 Pass theming: RGBA values, hex parsing, perceived
//! luminance, and the black-or-white label-contrast policy.

pub mod color;
pub mod contrast;

pub use color::{InvalidColorFormat, Rgba};
pub use contrast::{CONTRAST_THRESHOLD, ContrastPolicy, LabelColor};
