//! UI message handlers (focus, status line, error dialog, picker modal)

use crate::commands::Cmd;
use crate::messages::{ModalMsg, UiMsg};
use crate::model::{AppModel, FocusTarget, ModalState};
use crate::picker::{PickOutcome, PickTarget, PickerPurpose, PickerState};
use crate::placement::PlacementError;

use super::placement::{apply_move, open_destination_picker, report_error};

/// Handle UI messages (focus, dialogs, modals)
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::SetStatus(message) => {
            model.ui.set_status(message);
            Some(Cmd::Redraw)
        }

        UiMsg::Focus(target) => {
            if let FocusTarget::View(view) = &target {
                if !model.registry.views.contains(view) {
                    tracing::warn!("Cannot focus unknown view '{}'", view);
                    return None;
                }
            }
            model.ui.focus = target;
            Some(Cmd::Redraw)
        }

        UiMsg::Modal(modal_msg) => update_modal(model, modal_msg),

        UiMsg::DismissError => {
            if model.ui.error_dialog.is_none() {
                return None;
            }
            model.ui.dismiss_error();
            Some(Cmd::Redraw)
        }
    }
}

/// Handle modal-specific messages
fn update_modal(model: &mut AppModel, msg: ModalMsg) -> Option<Cmd> {
    match msg {
        ModalMsg::Close => {
            if let Some(ModalState::Picker(picker)) = model.ui.close_modal() {
                finish_pick(model, picker.purpose, PickOutcome::Cancelled)
            } else {
                None
            }
        }

        ModalMsg::Confirm => {
            let Some(ModalState::Picker(picker)) = model.ui.close_modal() else {
                return None;
            };
            let outcome = picker.accept();
            finish_pick(model, picker.purpose, outcome)
        }

        msg => {
            let picker = model.ui.picker_mut()?;
            edit_picker(picker, msg);
            Some(Cmd::Redraw)
        }
    }
}

/// Filter and selection changes on an open picker
fn edit_picker(picker: &mut PickerState, msg: ModalMsg) {
    match msg {
        ModalMsg::SetInput(text) => picker.set_input(text),
        ModalMsg::InsertChar(ch) => picker.insert_char(ch),
        ModalMsg::DeleteBackward => picker.delete_backward(),
        ModalMsg::SelectPrevious => picker.select_previous(),
        ModalMsg::SelectNext => picker.select_next(),
        ModalMsg::Confirm | ModalMsg::Close => {}
    }
}

/// Resume the flow that opened the picker
///
/// The picker is already closed. Choosing a view leads to the destination
/// picker; choosing a destination performs the move.
fn finish_pick(
    model: &mut AppModel,
    purpose: PickerPurpose,
    outcome: PickOutcome<PickTarget>,
) -> Option<Cmd> {
    let result = match (purpose, outcome) {
        (_, PickOutcome::Cancelled) => Err(PlacementError::Cancelled),
        (PickerPurpose::SelectView, PickOutcome::Selected(PickTarget::View(view))) => {
            open_destination_picker(model, view).map(|()| Cmd::Redraw)
        }
        (
            PickerPurpose::SelectDestination(view),
            PickOutcome::Selected(PickTarget::Destination(destination)),
        ) => apply_move(model, &view, &destination),
        (purpose, PickOutcome::Selected(target)) => {
            tracing::warn!("Picker for {:?} returned unexpected {:?}", purpose, target);
            Ok(Cmd::Redraw)
        }
    };

    match result {
        Ok(cmd) => Some(cmd),
        // The modal closed either way
        Err(err) => report_error(model, err).or(Some(Cmd::Redraw)),
    }
}
