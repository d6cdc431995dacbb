//! View and container registries
//!
//! Registries are built once at startup from static contributions and then
//! only read. They are passed by reference into placement and resize logic.
//!
//! - `ViewRegistry`: view id → descriptor (name, movability, default container)
//! - `ContainerRegistry`: container id → descriptor (title, location, reject flag)
//! - `contributions`: YAML loading and the embedded stock workbench

mod container;
mod contributions;
mod view;

pub use container::{ContainerDescriptor, ContainerId, ContainerRegistry, ViewLocation};
pub use contributions::{
    default_contributions, load_contributions_file, load_registry, parse_contributions_yaml,
    ContainerContribution, ContributionError, Contributions, ViewContribution,
};
pub use view::{ViewDescriptor, ViewId, ViewRegistry};

use crate::placement::PlacementError;

/// Both registries, as handed to the placement engine
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub views: ViewRegistry,
    pub containers: ContainerRegistry,
}

impl Registry {
    pub fn new(views: ViewRegistry, containers: ContainerRegistry) -> Self {
        Self { views, containers }
    }

    pub fn resolve_view(&self, id: &ViewId) -> Result<&ViewDescriptor, PlacementError> {
        self.views
            .get(id)
            .ok_or_else(|| PlacementError::ViewNotFound(id.clone()))
    }

    /// Resolve a contributed container (generated ones live in `Membership`)
    pub fn resolve_container(
        &self,
        id: &ContainerId,
    ) -> Result<&ContainerDescriptor, PlacementError> {
        self.containers
            .get(id)
            .ok_or_else(|| PlacementError::ContainerNotFound(id.clone()))
    }
}
