//! Input model: the paint mode state machine and keyboard keys.
//!
//! Painting and map dragging both consume pointer drags, so they are mutually
//! exclusive. [`PaintMode`] is the single source of truth for which one owns
//! the pointer: while `Idle` the map drags and pointer input is ignored here;
//! while `Painting` the map's dragging is disabled and pointer drags paint in
//! the variant's color. The pressed flag only exists inside `Painting`, so a
//! pressed pointer can never be observed while the map is draggable.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::color::Color;

/// A keyboard key as reported by the host (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the key that leaves painting mode.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape" || self.0 == "Esc"
    }
}

/// Which intent left painting mode. Only used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitTrigger {
    /// The active swatch was clicked again, or deselected by the host.
    Deselect,
    /// The escape key.
    Escape,
    /// The explicit "exit painting mode" command.
    ExitCommand,
}

/// Result of a swatch selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeChange {
    /// Painting started, or switched to a new color.
    Painting(Color),
    /// The active swatch was selected again; back to idle.
    Idle,
}

/// Whether pointer drags paint or pan the map.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PaintMode {
    /// Map dragging active; pointer events fall through to the map.
    #[default]
    Idle,
    /// Pointer drags paint in `color`; map dragging disabled.
    Painting {
        /// Color bound to every mark sampled in this mode.
        color: Color,
        /// A stroke is in progress (pointer held down on the overlay).
        pressed: bool,
    },
}

impl PaintMode {
    #[must_use]
    pub fn is_painting(&self) -> bool {
        matches!(self, Self::Painting { .. })
    }

    /// The selected swatch color, if painting.
    #[must_use]
    pub fn active_color(&self) -> Option<&Color> {
        match self {
            Self::Painting { color, .. } => Some(color),
            Self::Idle => None,
        }
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        matches!(self, Self::Painting { pressed: true, .. })
    }

    /// Whether the map should accept drag-to-pan in this mode.
    #[must_use]
    pub fn dragging_enabled(&self) -> bool {
        !self.is_painting()
    }

    /// Color for the next sample, if a stroke is in progress.
    #[must_use]
    pub fn stroke_color(&self) -> Option<&Color> {
        match self {
            Self::Painting { color, pressed: true } => Some(color),
            _ => None,
        }
    }

    /// A swatch was clicked: toggle off if it is the active one, otherwise
    /// switch to painting in its color.
    ///
    /// Any stroke in progress ends; the next one needs a fresh pointer-down.
    pub fn select(&mut self, color: Color) -> ModeChange {
        if self.active_color() == Some(&color) {
            *self = Self::Idle;
            ModeChange::Idle
        } else {
            *self = Self::Painting { color: color.clone(), pressed: false };
            ModeChange::Painting(color)
        }
    }

    /// Leave painting mode. Returns `false` if already idle.
    pub fn exit(&mut self) -> bool {
        if self.is_painting() {
            *self = Self::Idle;
            true
        } else {
            false
        }
    }

    /// Pointer pressed. Returns the stroke color when this starts a stroke.
    pub fn press(&mut self) -> Option<Color> {
        match self {
            Self::Painting { color, pressed } => {
                *pressed = true;
                Some(color.clone())
            }
            Self::Idle => None,
        }
    }

    /// Pointer released. Returns `true` when this ends a stroke.
    pub fn release(&mut self) -> bool {
        match self {
            Self::Painting { pressed, .. } => std::mem::replace(pressed, false),
            Self::Idle => false,
        }
    }
}
