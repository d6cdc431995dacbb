//! Command-line argument parsing for the headless workbench
//!
//! Supports:
//! - Running placement and resize commands by key
//! - Answering pickers non-interactively
//! - Choosing the focus before the first command
//! - Starting from contributed locations instead of saved ones

use clap::Parser;
use std::path::PathBuf;

use crate::commands::{filter_commands, CommandId};
use crate::model::FocusTarget;
use crate::registry::ViewId;
use crate::resize::Part;

/// Drive view placement and part resizing from the command line
#[derive(Parser, Debug)]
#[command(
    name = "viewdock",
    version,
    about = "Move, reset and resize workbench views"
)]
pub struct CliArgs {
    /// Commands to run in order, by key (`view.moveFocused=terminal` passes a view)
    #[arg(value_name = "COMMANDS")]
    pub commands: Vec<String>,

    /// View and container contributions (YAML) replacing the built-in set
    #[arg(long, value_name = "FILE")]
    pub contributions: Option<PathBuf>,

    /// Start from contributed locations (ignore saved view locations)
    #[arg(short = 'n', long)]
    pub fresh: bool,

    /// Focus before running commands: editor, sidebar, panel, auxiliarybar or a view id
    #[arg(long, value_name = "TARGET")]
    pub focus: Option<String>,

    /// Answer the next picker with the entry of this label (repeatable)
    #[arg(long = "pick", value_name = "LABEL")]
    pub picks: Vec<String>,

    /// Print the resulting layout as JSON instead of YAML
    #[arg(long)]
    pub json: bool,

    /// List available commands and exit
    #[arg(long)]
    pub list_commands: bool,
}

/// A command to run with its optional view argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandId,
    pub view: Option<ViewId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub invocations: Vec<Invocation>,
    /// Overrides the contributions file from the config
    pub contributions: Option<PathBuf>,
    /// Restore saved view locations before running commands
    pub restore_locations: bool,
    pub focus: Option<FocusTarget>,
    /// Picker answers, consumed in order
    pub picks: Vec<String>,
    pub output: OutputFormat,
    pub list_commands: bool,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let invocations = self
            .commands
            .iter()
            .map(|arg| parse_invocation(arg))
            .collect::<Result<Vec<_>, _>>()?;

        let focus = self.focus.as_deref().map(parse_focus).transpose()?;

        Ok(StartupConfig {
            invocations,
            contributions: self.contributions,
            restore_locations: !self.fresh,
            focus,
            picks: self.picks,
            output: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Yaml
            },
            list_commands: self.list_commands,
        })
    }
}

/// Parse `key` or `key=view`
fn parse_invocation(arg: &str) -> Result<Invocation, String> {
    let (key, view) = match arg.split_once('=') {
        Some((key, view)) if !view.is_empty() => (key, Some(ViewId::from(view))),
        Some((key, _)) => (key, None),
        None => (arg, None),
    };

    let command = CommandId::from_key(key).ok_or_else(|| {
        match filter_commands(key).first() {
            Some(suggestion) => format!(
                "Unknown command '{}'. Did you mean '{}'?",
                key, suggestion.key
            ),
            None => format!("Unknown command '{}'", key),
        }
    })?;

    if view.is_some() && command != CommandId::MoveFocusedView {
        return Err(format!("Command '{}' takes no view argument", key));
    }

    Ok(Invocation { command, view })
}

fn parse_focus(target: &str) -> Result<FocusTarget, String> {
    let target = target.trim();
    if target.is_empty() {
        return Err("Focus target cannot be empty".to_string());
    }
    let part = match target.to_ascii_lowercase().as_str() {
        "editor" => Some(Part::Editor),
        "sidebar" => Some(Part::Sidebar),
        "panel" => Some(Part::Panel),
        "auxiliarybar" => Some(Part::AuxiliaryBar),
        "none" => return Ok(FocusTarget::Elsewhere),
        _ => None,
    };
    Ok(match part {
        Some(part) => FocusTarget::Part(part),
        None => FocusTarget::View(ViewId::from(target)),
    })
}
