use crate::model::gate_status;
use crate::session::Session;

/// UI-only state wrapped around the session. Owned by the UI loop; no
/// cross-thread mutation.
pub struct UiState {
    pub tab: usize,
    /// Whether keystrokes go into the notes editor.
    pub editing: bool,
    pub info: String,
    pub session: Session,
}

impl UiState {
    pub fn new(session: Session) -> Self {
        Self {
            tab: 0,
            editing: true,
            info: "Ready for new analysis.".into(),
            session,
        }
    }

    /// Refresh the status line from the completion gate after an edit.
    pub fn show_gate_status(&mut self) {
        self.info = gate_status(self.session.gate());
    }
}
