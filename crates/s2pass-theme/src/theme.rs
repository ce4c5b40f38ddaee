#![forbid(unsafe_code)]

//! Theme with semantic color slots.
//!
//! A Theme maps semantic slot names (accent, surface, card, text) to actual
//! colors, so surfaces style themselves consistently and a school's brand
//! can be swapped in one place.
//!
//! # Example
//! ```
//! use s2pass_theme::theme::{Theme, themes};
//! use s2pass_theme::{LabelColor, Rgba};
//!
//! // Stock S2 amber theme
//! let theme = Theme::default();
//! assert_eq!(theme.accent_label(), LabelColor::Black);
//!
//! // Custom brand on top of a preset
//! let custom = Theme::builder()
//!     .accent(Rgba::from_rgb8(27, 42, 74))
//!     .build();
//! assert_eq!(custom.accent_label(), LabelColor::White);
//! ```

use s2pass_color::{ContrastPolicy, LabelColor, Rgba};

/// Default brand accent, the S2 amber (`#F5A623`).
pub const DEFAULT_ACCENT: Rgba = Rgba::from_rgb8(0xF5, 0xA6, 0x23);

/// A theme with semantic color slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Brand accent applied to buttons, chips, and tab highlighting.
    pub accent: Rgba,
    /// Main background color.
    pub surface: Rgba,
    /// Card and panel background.
    pub card: Rgba,
    /// Primary text color.
    pub text_primary: Rgba,
    /// Secondary text color (subtitles, captions).
    pub text_secondary: Rgba,
    /// Drop-shadow color for cards.
    pub shadow: Rgba,
}

/// Identifier for one of a theme's color slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeSlot {
    /// Brand accent.
    Accent,
    /// Main background.
    Surface,
    /// Card background.
    Card,
    /// Primary text.
    TextPrimary,
    /// Secondary text.
    TextSecondary,
    /// Card shadow.
    Shadow,
}

impl Theme {
    /// Create a new theme builder starting from the stock amber theme.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::new()
    }

    /// The color stored in a slot.
    #[must_use]
    pub const fn slot(&self, slot: ThemeSlot) -> Rgba {
        match slot {
            ThemeSlot::Accent => self.accent,
            ThemeSlot::Surface => self.surface,
            ThemeSlot::Card => self.card,
            ThemeSlot::TextPrimary => self.text_primary,
            ThemeSlot::TextSecondary => self.text_secondary,
            ThemeSlot::Shadow => self.shadow,
        }
    }

    /// The black-or-white label color for content drawn on a slot.
    #[must_use]
    pub fn label_for(&self, slot: ThemeSlot) -> LabelColor {
        ContrastPolicy::default().pick(self.slot(slot))
    }

    /// The label color for accent-filled controls. Shorthand for
    /// `label_for(ThemeSlot::Accent)`.
    #[must_use]
    pub fn accent_label(&self) -> LabelColor {
        self.label_for(ThemeSlot::Accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        themes::s2_amber()
    }
}

/// Builder for custom themes.
#[derive(Debug, Clone)]
pub struct ThemeBuilder {
    theme: Theme,
}

impl ThemeBuilder {
    /// Create a builder starting from the stock amber theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: themes::s2_amber(),
        }
    }

    /// Start from an existing theme.
    #[must_use]
    pub fn from_theme(theme: Theme) -> Self {
        Self { theme }
    }

    /// Set the accent color.
    #[must_use]
    pub fn accent(mut self, color: Rgba) -> Self {
        self.theme.accent = color;
        self
    }

    /// Set the surface color.
    #[must_use]
    pub fn surface(mut self, color: Rgba) -> Self {
        self.theme.surface = color;
        self
    }

    /// Set the card color.
    #[must_use]
    pub fn card(mut self, color: Rgba) -> Self {
        self.theme.card = color;
        self
    }

    /// Set the primary text color.
    #[must_use]
    pub fn text_primary(mut self, color: Rgba) -> Self {
        self.theme.text_primary = color;
        self
    }

    /// Set the secondary text color.
    #[must_use]
    pub fn text_secondary(mut self, color: Rgba) -> Self {
        self.theme.text_secondary = color;
        self
    }

    /// Set the shadow color.
    #[must_use]
    pub fn shadow(mut self, color: Rgba) -> Self {
        self.theme.shadow = color;
        self
    }

    /// Build the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        self.theme
    }
}

impl Default for ThemeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built-in theme presets.
pub mod themes {
    use super::*;

    /// Stock S2 theme: amber accent on light surfaces.
    #[must_use]
    pub fn s2_amber() -> Theme {
        Theme {
            accent: DEFAULT_ACCENT,
            surface: Rgba::WHITE,
            card: Rgba::from_rgb8(242, 242, 247),
            text_primary: Rgba::BLACK,
            text_secondary: Rgba::from_rgb8(60, 60, 67).with_alpha(0.6),
            shadow: Rgba::BLACK.with_alpha(0.12),
        }
    }

    /// Solid Rock HS branding: tan accent (`#C7B589`) on the light surfaces.
    #[must_use]
    pub fn solid_rock() -> Theme {
        Theme {
            accent: Rgba::from_rgb8(0xC7, 0xB5, 0x89),
            ..s2_amber()
        }
    }

    /// Dark variant: amber accent on near-black surfaces.
    #[must_use]
    pub fn dark() -> Theme {
        Theme {
            accent: DEFAULT_ACCENT,
            surface: Rgba::BLACK,
            card: Rgba::from_rgb8(28, 28, 30),
            text_primary: Rgba::WHITE,
            text_secondary: Rgba::from_rgb8(235, 235, 245).with_alpha(0.6),
            shadow: Rgba::BLACK.with_alpha(0.4),
        }
    }
}
