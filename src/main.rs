use anyhow::{Context, Result};
use clap::Parser;

use viewdock::cli::{CliArgs, OutputFormat, StartupConfig};
use viewdock::commands::{Cmd, COMMANDS};
use viewdock::config::WorkbenchConfig;
use viewdock::config_paths;
use viewdock::messages::{ModalMsg, Msg};
use viewdock::model::AppModel;
use viewdock::picker::PickItem;
use viewdock::registry::load_registry;
use viewdock::report::LayoutReport;
use viewdock::state::ViewLocationsState;
use viewdock::update::update;

/// Headless runtime: dispatches messages and executes the resulting commands
struct App {
    model: AppModel,
    /// Picker answers still to be used
    picks: std::vec::IntoIter<String>,
    quit: bool,
}

impl App {
    fn new(startup: &StartupConfig) -> Self {
        let config = WorkbenchConfig::load();
        let contributions = startup
            .contributions
            .clone()
            .or_else(|| config.contributions.clone());
        let registry = load_registry(contributions.as_deref());
        let restore = startup.restore_locations && config.restore_view_locations;

        let mut model = AppModel::new(registry, config);
        if restore {
            restore_view_locations(&mut model);
        }

        Self {
            model,
            picks: startup.picks.clone().into_iter(),
            quit: false,
        }
    }

    /// Dispatch a message, then answer any picker it opened
    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let cmd = update(&mut self.model, msg);
        self.execute(cmd)?;

        while !self.quit {
            let Some(picker) = self.model.ui.picker() else {
                break;
            };
            let answer = self.picks.next();
            let index = answer.as_deref().and_then(|label| {
                picker.entries().iter().position(|item| match item {
                    PickItem::Entry { label: l, .. } => l.eq_ignore_ascii_case(label),
                    PickItem::Separator(_) => false,
                })
            });

            let Some(index) = index else {
                if let Some(label) = answer {
                    tracing::warn!("No picker entry labeled '{}'; dismissing", label);
                }
                let cmd = update(&mut self.model, Msg::modal(ModalMsg::Close));
                self.execute(cmd)?;
                continue;
            };

            for _ in 0..index {
                update(&mut self.model, Msg::modal(ModalMsg::SelectNext));
            }
            let cmd = update(&mut self.model, Msg::modal(ModalMsg::Confirm));
            self.execute(cmd)?;
        }
        Ok(())
    }

    fn execute(&mut self, cmd: Option<Cmd>) -> Result<()> {
        for cmd in cmd.map(Cmd::into_vec).unwrap_or_default() {
            match cmd {
                Cmd::None | Cmd::Redraw | Cmd::Batch(_) => {}
                Cmd::RevealView { view } => {
                    tracing::info!("Revealed view '{}'", view);
                }
                Cmd::SaveViewLocations => self.save_view_locations()?,
                Cmd::Quit => self.quit = true,
            }
        }
        Ok(())
    }

    fn save_view_locations(&self) -> Result<()> {
        let Some(path) = config_paths::view_locations_file() else {
            tracing::warn!("No config directory; view locations not saved");
            return Ok(());
        };
        ViewLocationsState::from_membership(&self.model.membership)
            .save(&path)
            .with_context(|| format!("saving view locations to {}", path.display()))
    }
}

fn restore_view_locations(model: &mut AppModel) {
    let Some(path) = config_paths::view_locations_file() else {
        return;
    };
    if !path.exists() {
        return;
    }
    match ViewLocationsState::load(&path) {
        Ok(state) => {
            let moved = state.apply(&model.registry, &mut model.membership);
            tracing::info!("Restored {} view locations from {}", moved, path.display());
        }
        Err(e) => tracing::warn!("Ignoring saved view locations: {}", e),
    }
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    let startup = args.into_config().map_err(anyhow::Error::msg)?;

    viewdock::tracing::init();

    if startup.list_commands {
        for cmd in COMMANDS {
            println!("{:<28} {}", cmd.key, cmd.label);
        }
        return Ok(());
    }

    let mut app = App::new(&startup);

    if let Some(focus) = startup.focus.clone() {
        app.dispatch(Msg::focus(focus))?;
    }

    for invocation in &startup.invocations {
        if app.quit {
            break;
        }
        tracing::debug!("Running {}", invocation.command.key());
        app.dispatch(invocation.command.to_msg_with_view(invocation.view.clone()))?;
    }

    let report = LayoutReport::from_model(&app.model);
    let output = match startup.output {
        OutputFormat::Yaml => report.to_yaml(),
        OutputFormat::Json => report.to_json(),
    }
    .map_err(anyhow::Error::msg)?;
    println!("{}", output);

    Ok(())
}
