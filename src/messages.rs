//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::FocusTarget;
use crate::placement::Destination;
use crate::registry::ViewId;
use crate::resize::ResizeAxis;

/// View placement messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementMsg {
    /// Ask which view to move, then where (Move View)
    MoveView,
    /// Ask where the given or focused view goes (Move Focused View)
    MoveFocusedView(Option<ViewId>),
    /// Move without asking; the destination is re-validated
    MoveViewTo {
        view: ViewId,
        destination: Destination,
    },
    /// Return the focused view to its default container
    ResetFocusedViewLocation,
    /// Return a specific view to its default container
    ResetViewLocation(ViewId),
    /// Return every view to its default container
    ResetViewLocations,
}

/// Part resize messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeMsg {
    Increase(ResizeAxis),
    Decrease(ResizeAxis),
}

/// Modal-specific messages (the move-view picker)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMsg {
    /// Replace the filter text
    SetInput(String),
    /// Insert character into the filter text
    InsertChar(char),
    /// Delete character from the filter text (backspace)
    DeleteBackward,
    /// Move selection up in the list
    SelectPrevious,
    /// Move selection down in the list
    SelectNext,
    /// Accept the highlighted item (Enter)
    Confirm,
    /// Dismiss the picker (Escape)
    Close,
}

/// UI-specific messages (focus, modals, dialogs)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Set status bar message
    SetStatus(String),
    /// Move keyboard focus
    Focus(FocusTarget),
    /// Modal messages
    Modal(ModalMsg),
    /// Acknowledge the error dialog
    DismissError,
}

/// Application-level messages (window events)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Quit the application
    Quit,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// View placement (move, reset)
    Placement(PlacementMsg),
    /// Part resizing
    Resize(ResizeMsg),
    /// UI messages (focus, pickers, dialogs)
    Ui(UiMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn focus(target: FocusTarget) -> Self {
        Msg::Ui(UiMsg::Focus(target))
    }

    pub fn focus_view(view: impl Into<ViewId>) -> Self {
        Msg::Ui(UiMsg::Focus(FocusTarget::View(view.into())))
    }

    pub fn modal(msg: ModalMsg) -> Self {
        Msg::Ui(UiMsg::Modal(msg))
    }

    pub fn move_view_to(view: impl Into<ViewId>, destination: Destination) -> Self {
        Msg::Placement(PlacementMsg::MoveViewTo {
            view: view.into(),
            destination,
        })
    }
}
