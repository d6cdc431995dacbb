//! Application model - the complete state of the workbench
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod layout;
pub mod membership;
pub mod ui;

pub use layout::{LayoutHost, PartLayout, PartSize};
pub use membership::{ContainerModel, ContainerState, Membership, GENERATED_CONTAINER_PREFIX};
pub use ui::{ErrorDialog, FocusTarget, ModalId, ModalState, UiState};

use crate::config::WorkbenchConfig;
use crate::registry::{Registry, ViewId};
use crate::resize::Part;

/// Reports what holds input focus
///
/// Consumed by the placement engine (which view to act on) and the resize
/// router (which part to resize).
pub trait FocusProvider {
    fn focused_view(&self) -> Option<&ViewId>;

    /// Whether the part, or a view hosted in it, holds focus
    fn has_focus(&self, part: Part) -> bool;
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Contributed views and containers (read-only after startup)
    pub registry: Registry,
    /// Which container each view lives in
    pub membership: Membership,
    /// UI state (focus, pickers, error dialog)
    pub ui: UiState,
    /// Part sizes and visibility
    pub layout: PartLayout,
    /// Persisted workbench configuration
    pub config: WorkbenchConfig,
}

impl AppModel {
    /// Create a model with every view in its contributed container
    pub fn new(registry: Registry, config: WorkbenchConfig) -> Self {
        let membership = Membership::from_registry(&registry);
        let layout =
            PartLayout::default().with_limits(config.min_part_size, config.max_part_fraction);
        Self {
            registry,
            membership,
            ui: UiState::new(),
            layout,
            config,
        }
    }

    /// Model over a registry with default configuration
    pub fn with_registry(registry: Registry) -> Self {
        Self::new(registry, WorkbenchConfig::default())
    }

    /// Part hosting a view's current container
    pub fn part_of_view(&self, view: &ViewId) -> Option<Part> {
        self.membership
            .location_of(&self.registry, view)
            .map(|location| location.part())
    }

    /// Open a view where it currently lives and give it focus
    ///
    /// Makes the view visible and active in its container, shows the hosting
    /// part, and moves focus to the view.
    pub fn reveal_view(&mut self, view: &ViewId) {
        let Some(part) = self.part_of_view(view) else {
            tracing::debug!("Cannot reveal unplaced view '{}'", view);
            return;
        };
        self.membership.set_visible(view, true);
        self.membership.activate(&self.registry, view);
        self.layout.set_part_visible(part, true);
        self.ui.focus = FocusTarget::View(view.clone());
    }

    /// Update window dimensions
    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout.set_window_size(width, height);
    }
}

impl FocusProvider for AppModel {
    fn focused_view(&self) -> Option<&ViewId> {
        match &self.ui.focus {
            FocusTarget::View(view) => Some(view),
            _ => None,
        }
    }

    fn has_focus(&self, part: Part) -> bool {
        match &self.ui.focus {
            FocusTarget::Part(focused) => *focused == part,
            FocusTarget::View(view) => self.part_of_view(view) == Some(part),
            FocusTarget::Elsewhere => false,
        }
    }
}
