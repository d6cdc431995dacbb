//! Focus-relative incremental resizing of layout parts
//!
//! Grow and shrink commands carry only a sign per axis. The router picks the
//! part to resize (explicitly, or from whichever part holds focus) and turns
//! the signs into a fixed-size step. Applying the step is the layout host's
//! job, see [`LayoutHost`](crate::model::LayoutHost).

use serde::{Deserialize, Serialize};

use crate::model::FocusProvider;

/// Size of one resize step, in percent of the relevant window dimension
pub const RESIZE_INCREMENT: f32 = 5.0;

/// Top-level layout region that can be resized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    Editor,
    Sidebar,
    Panel,
    AuxiliaryBar,
}

impl Part {
    /// Parts in the order focus inference checks them
    ///
    /// The secondary side bar is only resized when named explicitly.
    pub const FOCUS_PRIORITY: [Part; 3] = [Part::Sidebar, Part::Panel, Part::Editor];

    pub fn display_name(&self) -> &'static str {
        match self {
            Part::Editor => "Editor",
            Part::Sidebar => "Side Bar",
            Part::Panel => "Panel",
            Part::AuxiliaryBar => "Secondary Side Bar",
        }
    }
}

/// Which axes a resize command touches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAxis {
    Both,
    Width,
    Height,
}

/// A single grow/shrink request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeIntent {
    /// Explicit target; `None` infers the part from focus
    pub part: Option<Part>,
    pub width_sign: i8,
    pub height_sign: i8,
}

impl ResizeIntent {
    /// Intent for one of the six resize commands
    ///
    /// Width-only and height-only variants always target the editor;
    /// the both-axes variants follow focus.
    pub fn for_command(axis: ResizeAxis, grow: bool) -> Self {
        let sign: i8 = if grow { 1 } else { -1 };
        match axis {
            ResizeAxis::Both => Self {
                part: None,
                width_sign: sign,
                height_sign: sign,
            },
            ResizeAxis::Width => Self {
                part: Some(Part::Editor),
                width_sign: sign,
                height_sign: 0,
            },
            ResizeAxis::Height => Self {
                part: Some(Part::Editor),
                width_sign: 0,
                height_sign: sign,
            },
        }
    }
}

/// Concrete instruction for the layout host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeInstruction {
    pub part: Part,
    /// Percent of window width
    pub width_delta: f32,
    /// Percent of window height
    pub height_delta: f32,
}

/// Resolve a resize intent against the current focus
///
/// Returns `None` when no explicit part is given and none of the side bar,
/// panel or editor holds focus.
pub fn compute_resize(intent: ResizeIntent, focus: &impl FocusProvider) -> Option<ResizeInstruction> {
    let part = match intent.part {
        Some(part) => part,
        None => Part::FOCUS_PRIORITY
            .into_iter()
            .find(|&part| focus.has_focus(part))?,
    };

    Some(ResizeInstruction {
        part,
        width_delta: step(intent.width_sign),
        height_delta: step(intent.height_sign),
    })
}

fn step(sign: i8) -> f32 {
    f32::from(sign.signum()) * RESIZE_INCREMENT
}
