#![forbid(unsafe_code)]

//! Black-or-white label selection against a background color.
//!
//! Every themed control (buttons, chips, pills) picks its text and icon
//! color with this policy: backgrounds brighter than the threshold get
//! black labels, everything else gets white. The threshold is calibrated
//! for the S2 accent palette and deliberately exposed for tuning.

use crate::color::Rgba;

/// Luminance above which a background gets a black label.
///
/// Exactly this value is treated as "not brighter", selecting white.
pub const CONTRAST_THRESHOLD: f32 = 0.55;

/// The foreground color chosen for legibility against a background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelColor {
    /// Black labels, for bright backgrounds.
    Black,
    /// White labels, for dark backgrounds.
    White,
}

impl LabelColor {
    /// Select a label color from a luminance score using the default
    /// threshold.
    #[must_use]
    pub fn for_luminance(luma: f32) -> Self {
        ContrastPolicy::default().pick_luminance(luma)
    }

    /// Select a label color for a background using the default threshold.
    #[must_use]
    pub fn for_background(background: Rgba) -> Self {
        Self::for_luminance(background.luminance())
    }

    /// The concrete color value for this label.
    #[must_use]
    pub const fn as_rgba(self) -> Rgba {
        match self {
            Self::Black => Rgba::BLACK,
            Self::White => Rgba::WHITE,
        }
    }
}

/// A contrast policy with a tunable luminance threshold.
///
/// [`CONTRAST_THRESHOLD`] suits the stock S2 palette; apps with their own
/// accent palettes can carry a policy with a different cutoff instead of
/// shadowing the constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastPolicy {
    /// Luminance above which labels are black.
    pub threshold: f32,
}

impl ContrastPolicy {
    /// Create a policy with a custom threshold.
    #[must_use]
    pub const fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// Select a label color from a luminance score.
    ///
    /// The boundary is exclusive on the black side: a score equal to the
    /// threshold selects white.
    #[must_use]
    pub fn pick_luminance(self, luma: f32) -> LabelColor {
        if luma > self.threshold {
            LabelColor::Black
        } else {
            LabelColor::White
        }
    }

    /// Select a label color for a background color.
    #[must_use]
    pub fn pick(self, background: Rgba) -> LabelColor {
        self.pick_luminance(background.luminance())
    }
}

impl Default for ContrastPolicy {
    fn default() -> Self {
        Self::new(CONTRAST_THRESHOLD)
    }
}
