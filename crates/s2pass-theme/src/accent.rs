#![forbid(unsafe_code)]

//! Shared accent state read by every themed surface.
//!
//! The original prototype held the current accent in a process-wide
//! mutable, which makes isolated testing impossible. Here the accent lives
//! in an explicit handle that presentation code passes down: cloning shares
//! the underlying value, forking copies it.
//!
//! # Thread Safety
//!
//! The color sits behind an `RwLock`, so many surfaces can read
//! concurrently while a settings action writes. Readers never observe a
//! partially-written value.

use std::sync::{Arc, RwLock};

use s2pass_color::{LabelColor, Rgba};

use crate::theme::DEFAULT_ACCENT;

/// Handle to the current accent color.
///
/// `Clone` produces another handle to the same value; use [`AccentState::fork`]
/// for an independent copy (e.g. a preview that must not touch the live
/// accent).
#[derive(Debug, Clone)]
pub struct AccentState {
    current: Arc<RwLock<Rgba>>,
}

impl AccentState {
    /// Create accent state holding the given initial color.
    #[must_use]
    pub fn new(initial: Rgba) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    /// Snapshot of the current accent.
    #[must_use]
    pub fn current(&self) -> Rgba {
        *self.current.read().expect("accent lock poisoned")
    }

    /// Replace the accent color.
    ///
    /// Any color is accepted unchecked, including fully transparent or
    /// black; validation and fallback policy belong to the caller.
    pub fn set(&self, color: Rgba) {
        let mut slot = self.current.write().expect("accent lock poisoned");
        *slot = color;
        #[cfg(feature = "tracing")]
        tracing::debug!(accent = %color, "accent changed");
    }

    /// The label color for controls filled with the current accent.
    #[must_use]
    pub fn label(&self) -> LabelColor {
        LabelColor::for_background(self.current())
    }

    /// Independent copy of this state, starting at the current color.
    ///
    /// Later writes to either handle do not affect the other.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self::new(self.current())
    }
}

impl Default for AccentState {
    /// Fresh state holding the stock S2 amber accent.
    fn default() -> Self {
        Self::new(DEFAULT_ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accent_is_amber() {
        let state = AccentState::default();
        assert_eq!(state.current(), Rgba::from_hex("#F5A623").unwrap());
        assert_eq!(state.label(), LabelColor::Black);
    }

    #[test]
    fn set_then_current_round_trips() {
        let state = AccentState::default();
        let navy = Rgba::from_rgb8(27, 42, 74);
        state.set(navy);
        assert_eq!(state.current(), navy);
    }

    #[test]
    fn set_accepts_transparent_and_black() {
        let state = AccentState::default();
        state.set(Rgba::TRANSPARENT);
        assert_eq!(state.current(), Rgba::TRANSPARENT);
        state.set(Rgba::BLACK);
        assert_eq!(state.current(), Rgba::BLACK);
    }

    #[test]
    fn label_tracks_accent_changes() {
        let state = AccentState::default();
        assert_eq!(state.label(), LabelColor::Black);
        state.set(Rgba::from_hex("#1B2A4A").unwrap());
        assert_eq!(state.label(), LabelColor::White);
    }

    #[test]
    fn clones_share_the_same_value() {
        let settings = AccentState::default();
        let surface = settings.clone();
        settings.set(Rgba::from_rgb8(199, 181, 137));
        assert_eq!(surface.current(), Rgba::from_rgb8(199, 181, 137));
    }

    #[test]
    fn forks_are_independent() {
        let live = AccentState::default();
        let preview = live.fork();
        preview.set(Rgba::BLACK);
        assert_eq!(live.current(), DEFAULT_ACCENT);
        assert_eq!(preview.current(), Rgba::BLACK);
    }

    #[test]
    fn instances_are_isolated() {
        let a = AccentState::default();
        let b = AccentState::default();
        a.set(Rgba::WHITE);
        assert_eq!(b.current(), DEFAULT_ACCENT);
    }

    #[test]
    fn concurrent_reads_never_observe_torn_values() {
        use std::thread;

        // Writer flips between two colors while readers snapshot; every
        // snapshot must be exactly one of the two.
        let state = AccentState::new(Rgba::BLACK);
        let writer = {
            let state = state.clone();
            thread::spawn(move || {
                for i in 0..500 {
                    state.set(if i % 2 == 0 { Rgba::WHITE } else { Rgba::BLACK });
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let state = state.clone();
                thread::spawn(move || {
                    for _ in 0..500 {
                        let seen = state.current();
                        assert!(
                            seen == Rgba::BLACK || seen == Rgba::WHITE,
                            "torn accent value: {seen}"
                        );
                    }
                })
            })
            .collect();

        writer.join().unwrap();
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
