//! Placement message handlers (move and reset views)
//!
//! Errors are caught here, at the command boundary. User-facing ones become
//! the error dialog; not-found guards, missing defaults and cancellation are
//! logged and dropped.

use crate::commands::Cmd;
use crate::messages::PlacementMsg;
use crate::model::{AppModel, ModalState};
use crate::picker::PickerState;
use crate::placement::{
    candidate_destinations, move_view, movable_views_by_location, reset_all_locations,
    reset_to_default, resolve_target_view, Destination, PlacementError, ResetOutcome,
};
use crate::registry::ViewId;

/// Handle placement messages
pub fn update_placement(model: &mut AppModel, msg: PlacementMsg) -> Option<Cmd> {
    match msg {
        PlacementMsg::MoveView => {
            let picker = {
                let groups = movable_views_by_location(&model.registry, &model.membership);
                if groups.is_empty() {
                    tracing::debug!("Move View: no movable views");
                    model.ui.set_status("No movable views");
                    return Some(Cmd::Redraw);
                }
                PickerState::for_views(&groups)
            };
            model.ui.open_modal(ModalState::Picker(picker));
            Some(Cmd::Redraw)
        }

        PlacementMsg::MoveFocusedView(explicit) => {
            match resolve_target_view(explicit.as_ref(), &*model)
                .and_then(|view| open_destination_picker(model, view))
            {
                Ok(()) => Some(Cmd::Redraw),
                Err(err) => report_error(model, err),
            }
        }

        PlacementMsg::MoveViewTo { view, destination } => {
            match apply_move(model, &view, &destination) {
                Ok(cmd) => Some(cmd),
                Err(err) => report_error(model, err),
            }
        }

        PlacementMsg::ResetFocusedViewLocation => {
            match resolve_target_view(None, &*model).and_then(|view| apply_reset(model, &view)) {
                Ok(cmd) => cmd,
                Err(err) => report_error(model, err),
            }
        }

        PlacementMsg::ResetViewLocation(view) => match apply_reset(model, &view) {
            Ok(cmd) => cmd,
            Err(err) => report_error(model, err),
        },

        PlacementMsg::ResetViewLocations => {
            let moved = reset_all_locations(&model.registry, &mut model.membership);
            if moved == 0 {
                return None;
            }
            model.ui.set_status(format!("Reset {} view locations", moved));
            Some(Cmd::Batch(vec![Cmd::Redraw, Cmd::SaveViewLocations]))
        }
    }
}

/// Open the destination picker for a view
///
/// Also the continuation of Move View once a view has been chosen.
pub(crate) fn open_destination_picker(
    model: &mut AppModel,
    view: ViewId,
) -> Result<(), PlacementError> {
    let entries = candidate_destinations(&model.registry, &model.membership, &view)?;
    model
        .ui
        .open_modal(ModalState::Picker(PickerState::for_destinations(view, entries)));
    Ok(())
}

/// Move a view and reveal it at its new place
pub(crate) fn apply_move(
    model: &mut AppModel,
    view: &ViewId,
    destination: &Destination,
) -> Result<Cmd, PlacementError> {
    move_view(&model.registry, &mut model.membership, view, destination)?;
    model.reveal_view(view);
    Ok(Cmd::Batch(vec![
        Cmd::RevealView { view: view.clone() },
        Cmd::SaveViewLocations,
    ]))
}

fn apply_reset(model: &mut AppModel, view: &ViewId) -> Result<Option<Cmd>, PlacementError> {
    match reset_to_default(&model.registry, &mut model.membership, view)? {
        ResetOutcome::AlreadyAtDefault => {
            tracing::debug!("View '{}' is already in its default container", view);
            Ok(None)
        }
        ResetOutcome::Moved(_) => {
            model.reveal_view(view);
            Ok(Some(Cmd::Batch(vec![
                Cmd::RevealView { view: view.clone() },
                Cmd::SaveViewLocations,
            ])))
        }
    }
}

/// Turn a placement failure into its user-visible outcome
pub(crate) fn report_error(model: &mut AppModel, err: PlacementError) -> Option<Cmd> {
    if err.is_user_facing() {
        tracing::info!("Placement command failed: {}", err);
        model.ui.show_error(err.to_string());
        return Some(Cmd::Redraw);
    }

    if err.is_not_found() {
        tracing::warn!("Ignoring placement command: {}", err);
    } else {
        tracing::debug!("Placement command absorbed: {}", err);
    }
    None
}
