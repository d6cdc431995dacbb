//! UI state - focus, pickers, error dialogs and the status line

use crate::picker::PickerState;
use crate::registry::ViewId;
use crate::resize::Part;

// ============================================================================
// Focus
// ============================================================================

/// What currently holds keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// A layout part with no particular view focused
    Part(Part),
    /// A view inside some container; its hosting part counts as focused
    View(ViewId),
    /// Status bar, title bar, activity bar and the like
    Elsewhere,
}

impl Default for FocusTarget {
    fn default() -> Self {
        FocusTarget::Part(Part::Editor)
    }
}

// ============================================================================
// Modal System
// ============================================================================

/// Identifies which modal is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalId {
    /// Move-view quick pick
    Picker,
}

/// Union of all modal states
#[derive(Debug, Clone)]
pub enum ModalState {
    Picker(PickerState),
}

impl ModalState {
    pub fn id(&self) -> ModalId {
        match self {
            ModalState::Picker(_) => ModalId::Picker,
        }
    }
}

/// Single-button error notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDialog {
    pub message: String,
    /// Label of the acknowledgement button
    pub action: &'static str,
}

impl ErrorDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            action: "OK",
        }
    }
}

/// UI state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    pub focus: FocusTarget,
    /// Currently active modal (if any)
    pub active_modal: Option<ModalState>,
    /// Error waiting for acknowledgement
    pub error_dialog: Option<ErrorDialog>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a modal is currently active
    pub fn has_modal(&self) -> bool {
        self.active_modal.is_some()
    }

    pub fn open_modal(&mut self, state: ModalState) {
        self.active_modal = Some(state);
    }

    /// Close the active modal, handing back its state
    pub fn close_modal(&mut self) -> Option<ModalState> {
        self.active_modal.take()
    }

    /// The open picker, if the active modal is one
    pub fn picker(&self) -> Option<&PickerState> {
        match &self.active_modal {
            Some(ModalState::Picker(state)) => Some(state),
            None => None,
        }
    }

    pub fn picker_mut(&mut self) -> Option<&mut PickerState> {
        match &mut self.active_modal {
            Some(ModalState::Picker(state)) => Some(state),
            None => None,
        }
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_dialog = Some(ErrorDialog::new(message));
    }

    pub fn dismiss_error(&mut self) {
        self.error_dialog = None;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerPurpose;

    #[test]
    fn test_close_modal_returns_picker() {
        let mut ui = UiState::new();
        assert!(ui.close_modal().is_none());

        ui.open_modal(ModalState::Picker(PickerState::new(
            PickerPurpose::SelectView,
            "Select a View to Move",
            vec![],
        )));
        assert!(ui.has_modal());

        let closed = ui.close_modal();
        assert!(matches!(
            closed,
            Some(ModalState::Picker(PickerState {
                purpose: PickerPurpose::SelectView,
                ..
            }))
        ));
        assert!(!ui.has_modal());
        assert!(ui.picker().is_none());
    }
}
