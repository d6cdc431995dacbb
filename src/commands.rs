//! Command types for the Elm-style architecture
//!
//! `CommandId` is the palette/keybinding surface; `Cmd` represents side
//! effects that should be performed after an update.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::messages::{Msg, PlacementMsg, ResizeMsg};
use crate::registry::ViewId;
use crate::resize::ResizeAxis;

// ============================================================================
// Command Palette Registry
// ============================================================================

/// Identifies a command that can be executed via the command palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    // Placement
    MoveView,
    MoveFocusedView,
    ResetFocusedViewLocation,
    ResetViewLocations,

    // Resize
    IncreaseViewSize,
    DecreaseViewSize,
    IncreaseViewWidth,
    DecreaseViewWidth,
    IncreaseViewHeight,
    DecreaseViewHeight,
}

/// A command definition for the command palette
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub id: CommandId,
    /// Stable identifier used by keymaps and the CLI
    pub key: &'static str,
    pub label: &'static str,
    pub keybinding: Option<&'static str>,
}

/// Static registry of all available commands
pub static COMMANDS: &[CommandDef] = &[
    CommandDef {
        id: CommandId::MoveView,
        key: "view.move",
        label: "View: Move View",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::MoveFocusedView,
        key: "view.moveFocused",
        label: "View: Move Focused View",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ResetFocusedViewLocation,
        key: "view.resetFocusedLocation",
        label: "View: Reset Focused View Location",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::ResetViewLocations,
        key: "view.resetLocations",
        label: "View: Reset View Locations",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::IncreaseViewSize,
        key: "layout.increaseViewSize",
        label: "View: Increase Current View Size",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::DecreaseViewSize,
        key: "layout.decreaseViewSize",
        label: "View: Decrease Current View Size",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::IncreaseViewWidth,
        key: "layout.increaseViewWidth",
        label: "View: Increase Editor Width",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::DecreaseViewWidth,
        key: "layout.decreaseViewWidth",
        label: "View: Decrease Editor Width",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::IncreaseViewHeight,
        key: "layout.increaseViewHeight",
        label: "View: Increase Editor Height",
        keybinding: None,
    },
    CommandDef {
        id: CommandId::DecreaseViewHeight,
        key: "layout.decreaseViewHeight",
        label: "View: Decrease Editor Height",
        keybinding: None,
    },
];

impl CommandId {
    pub fn def(self) -> &'static CommandDef {
        // Every variant has exactly one entry in COMMANDS
        COMMANDS
            .iter()
            .find(|cmd| cmd.id == self)
            .unwrap_or(&COMMANDS[0])
    }

    pub fn key(self) -> &'static str {
        self.def().key
    }

    pub fn label(self) -> &'static str {
        self.def().label
    }

    /// Look up a command by its stable key
    pub fn from_key(key: &str) -> Option<CommandId> {
        COMMANDS.iter().find(|cmd| cmd.key == key).map(|cmd| cmd.id)
    }

    /// The message this command dispatches
    pub fn to_msg(self) -> Msg {
        self.to_msg_with_view(None)
    }

    /// The message this command dispatches, with an optional view argument
    ///
    /// Only Move Focused View takes an argument; others ignore it.
    pub fn to_msg_with_view(self, view: Option<ViewId>) -> Msg {
        match self {
            CommandId::MoveView => Msg::Placement(PlacementMsg::MoveView),
            CommandId::MoveFocusedView => Msg::Placement(PlacementMsg::MoveFocusedView(view)),
            CommandId::ResetFocusedViewLocation => {
                Msg::Placement(PlacementMsg::ResetFocusedViewLocation)
            }
            CommandId::ResetViewLocations => Msg::Placement(PlacementMsg::ResetViewLocations),
            CommandId::IncreaseViewSize => Msg::Resize(ResizeMsg::Increase(ResizeAxis::Both)),
            CommandId::DecreaseViewSize => Msg::Resize(ResizeMsg::Decrease(ResizeAxis::Both)),
            CommandId::IncreaseViewWidth => Msg::Resize(ResizeMsg::Increase(ResizeAxis::Width)),
            CommandId::DecreaseViewWidth => Msg::Resize(ResizeMsg::Decrease(ResizeAxis::Width)),
            CommandId::IncreaseViewHeight => Msg::Resize(ResizeMsg::Increase(ResizeAxis::Height)),
            CommandId::DecreaseViewHeight => Msg::Resize(ResizeMsg::Decrease(ResizeAxis::Height)),
        }
    }
}

/// Filter commands by a search query (fuzzy match on label)
///
/// Best matches first; an empty query returns every command in table order.
pub fn filter_commands(query: &str) -> Vec<&'static CommandDef> {
    let query = query.trim();
    if query.is_empty() {
        return COMMANDS.iter().collect();
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(Config::DEFAULT);
    let mut buf = Vec::new();

    let mut matches: Vec<(&'static CommandDef, u32)> = COMMANDS
        .iter()
        .filter_map(|cmd| {
            pattern
                .score(Utf32Str::new(cmd.label, &mut buf), &mut matcher)
                .map(|score| (cmd, score))
        })
        .collect();

    // Sort by score descending (best matches first)
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    matches.into_iter().map(|(cmd, _)| cmd).collect()
}

// ============================================================================
// Side Effects
// ============================================================================

/// Side effects requested by an update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the UI
    Redraw,
    /// Ask the host to open a view (it is already placed and focused in the model)
    RevealView { view: ViewId },
    /// Persist the membership relation
    SaveViewLocations,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
    /// Request application exit
    Quit,
}

impl Cmd {
    /// Flatten into the list of individual commands
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }

    /// Check whether this command (or any batched command) matches
    pub fn contains(&self, predicate: &impl Fn(&Cmd) -> bool) -> bool {
        match self {
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.contains(predicate)),
            cmd => predicate(cmd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_command_has_unique_key() {
        for cmd in COMMANDS {
            assert_eq!(CommandId::from_key(cmd.key), Some(cmd.id));
            assert_eq!(cmd.id.key(), cmd.key);
        }
        assert_eq!(CommandId::from_key("view.unknown"), None);
    }

    #[test]
    fn test_resize_commands_map_to_axes() {
        assert_eq!(
            CommandId::IncreaseViewWidth.to_msg(),
            Msg::Resize(ResizeMsg::Increase(ResizeAxis::Width))
        );
        assert_eq!(
            CommandId::DecreaseViewSize.to_msg(),
            Msg::Resize(ResizeMsg::Decrease(ResizeAxis::Both))
        );
    }

    #[test]
    fn test_move_focused_view_carries_argument() {
        assert_eq!(
            CommandId::MoveFocusedView.to_msg_with_view(Some("terminal".into())),
            Msg::Placement(PlacementMsg::MoveFocusedView(Some("terminal".into())))
        );
    }

    #[test]
    fn test_filter_commands() {
        assert_eq!(filter_commands("").len(), COMMANDS.len());
        let results = filter_commands("reset locations");
        assert!(!results.is_empty());
        assert!(results.iter().any(|c| c.id == CommandId::ResetViewLocations));
        assert!(filter_commands("xyzzy").is_empty());
    }

    #[test]
    fn test_batch_flattening() {
        let cmd = Cmd::Batch(vec![
            Cmd::Redraw,
            Cmd::Batch(vec![Cmd::SaveViewLocations, Cmd::None]),
        ]);
        assert_eq!(cmd.into_vec(), vec![Cmd::Redraw, Cmd::SaveViewLocations]);
    }
}
