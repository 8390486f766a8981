#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use uuid::Uuid;

use crate::color::Color;
use crate::input::PaintMode;
use crate::store::AnnotationStore;

/// Identifier of one map-view session, used to correlate log lines.
pub type SessionId = Uuid;

/// Everything painted in one map view, plus the current paint mode.
///
/// Lives exactly as long as the engine that owns it.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    pub marks: AnnotationStore,
    pub mode: PaintMode,
}

impl Session {
    /// Start an empty, idle session.
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4(), marks: AnnotationStore::new(), mode: PaintMode::Idle }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// The selected swatch color; `None` whenever not painting.
    #[must_use]
    pub fn active_color(&self) -> Option<&Color> {
        self.mode.active_color()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
