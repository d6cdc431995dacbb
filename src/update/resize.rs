//! Resize message handlers (grow and shrink layout parts)

use crate::commands::Cmd;
use crate::messages::ResizeMsg;
use crate::model::{AppModel, LayoutHost};
use crate::resize::{compute_resize, ResizeIntent};

/// Handle resize messages
///
/// With nothing resizable focused the command does nothing at all.
pub fn update_resize(model: &mut AppModel, msg: ResizeMsg) -> Option<Cmd> {
    let intent = match msg {
        ResizeMsg::Increase(axis) => ResizeIntent::for_command(axis, true),
        ResizeMsg::Decrease(axis) => ResizeIntent::for_command(axis, false),
    };

    let Some(instruction) = compute_resize(intent, &*model) else {
        tracing::debug!("Resize ignored: no resizable part has focus");
        return None;
    };

    model.layout.resize_part(
        instruction.part,
        instruction.width_delta,
        instruction.height_delta,
    );
    Some(Cmd::Redraw)
}
