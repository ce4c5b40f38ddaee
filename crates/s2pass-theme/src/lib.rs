#![forbid(unsafe_code)]

//! Theming for S2 Pass surfaces: semantic color slots, presets, and the
//! shared accent state every themed control reads.
//!
//! This crate is also the public facade: it re-exports the color kernel so
//! presentation code needs a single dependency.
//!
//! # Example
//! ```
//! use s2pass_theme::prelude::*;
//!
//! let accent = AccentState::default();
//! assert_eq!(accent.label(), LabelColor::Black); // amber is bright
//!
//! accent.set(Rgba::from_hex("#1B2A4A").unwrap());
//! assert_eq!(accent.label(), LabelColor::White); // navy is dark
//! ```

pub mod accent;
pub mod theme;

pub use accent::AccentState;
pub use theme::{Theme, ThemeBuilder, ThemeSlot, themes};

// --- Color kernel re-exports -----------------------------------------------

pub use s2pass_color::{CONTRAST_THRESHOLD, ContrastPolicy, InvalidColorFormat, LabelColor, Rgba};

pub use s2pass_color as color;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        AccentState, ContrastPolicy, InvalidColorFormat, LabelColor, Rgba, Theme, ThemeBuilder,
        themes,
    };
}
