//! Navigation chrome state: dropdown toggles and the embedded media flag.
//!
//! Pure in-memory toggles with no derived data; kept in the core so the
//! presentation layer stays stateless.

// ---------------------------------------------------------------------------
// DropdownState
// ---------------------------------------------------------------------------

/// At most one dropdown is open at a time. Toggling the open id closes it;
/// toggling a different id switches to it.
#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    open: Option<String>,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, dropdown_id: &str) {
        if self.open.as_deref() == Some(dropdown_id) {
            self.open = None;
        } else {
            self.open = Some(dropdown_id.to_string());
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self, dropdown_id: &str) -> bool {
        self.open.as_deref() == Some(dropdown_id)
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

// ---------------------------------------------------------------------------
// MediaState
// ---------------------------------------------------------------------------

/// Opaque play/pause flag for the embedded video panel. The player itself is
/// an external collaborator; only the boolean crosses the boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaState {
    playing: bool,
}

impl MediaState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }
}
