//! View containers and the locations that host them

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::resize::Part;

/// Screen region a container can be pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewLocation {
    Sidebar,
    Panel,
    AuxiliaryBar,
}

impl ViewLocation {
    /// All locations, in the order pickers list them
    pub const ALL: [ViewLocation; 3] = [
        ViewLocation::Sidebar,
        ViewLocation::Panel,
        ViewLocation::AuxiliaryBar,
    ];

    /// Separator label used in pickers
    pub fn label(&self) -> &'static str {
        match self {
            ViewLocation::Sidebar => "Side Bar",
            ViewLocation::Panel => "Panel",
            ViewLocation::AuxiliaryBar => "Secondary Side Bar",
        }
    }

    /// The layout part that hosts this location
    pub fn part(&self) -> Part {
        match self {
            ViewLocation::Sidebar => Part::Sidebar,
            ViewLocation::Panel => Part::Panel,
            ViewLocation::AuxiliaryBar => Part::AuxiliaryBar,
        }
    }

    /// Short name used in generated container ids and the CLI
    pub fn key(&self) -> &'static str {
        match self {
            ViewLocation::Sidebar => "sidebar",
            ViewLocation::Panel => "panel",
            ViewLocation::AuxiliaryBar => "auxiliarybar",
        }
    }
}

/// Unique identifier of a view container
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerId(String);

impl ContainerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContainerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ContainerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Static description of a view container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    pub id: ContainerId,
    /// Title shown on the container's tab and as picker separator
    pub title: String,
    pub location: ViewLocation,
    /// Refuses views relocated from elsewhere
    pub reject_added_views: bool,
    /// Pinned containers are offered as move destinations
    pub pinned: bool,
    /// Created at runtime by a "new entry" move rather than contributed
    pub generated: bool,
}

impl ContainerDescriptor {
    pub fn new(id: impl Into<ContainerId>, title: impl Into<String>, location: ViewLocation) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location,
            reject_added_views: false,
            pinned: true,
            generated: false,
        }
    }

    /// Mark this container as refusing relocated views (builder pattern)
    pub fn rejecting_added_views(mut self) -> Self {
        self.reject_added_views = true;
        self
    }

    /// Set the pinned flag (builder pattern)
    pub fn with_pinned(mut self, pinned: bool) -> Self {
        self.pinned = pinned;
        self
    }

    /// Descriptor for a container created by moving a view into a new entry
    pub fn generated(id: ContainerId, title: impl Into<String>, location: ViewLocation) -> Self {
        Self {
            id,
            title: title.into(),
            location,
            reject_added_views: false,
            pinned: true,
            generated: true,
        }
    }
}

/// Registered containers, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct ContainerRegistry {
    containers: Vec<ContainerDescriptor>,
    index: HashMap<ContainerId, usize>,
}

impl ContainerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container. Returns false if the id is already taken.
    pub fn register(&mut self, descriptor: ContainerDescriptor) -> bool {
        if self.index.contains_key(&descriptor.id) {
            return false;
        }
        self.index
            .insert(descriptor.id.clone(), self.containers.len());
        self.containers.push(descriptor);
        true
    }

    pub fn get(&self, id: &ContainerId) -> Option<&ContainerDescriptor> {
        self.index.get(id).map(|&i| &self.containers[i])
    }

    pub fn contains(&self, id: &ContainerId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContainerDescriptor> {
        self.containers.iter()
    }

    /// Containers registered at a location, in registration order
    pub fn by_location(&self, location: ViewLocation) -> impl Iterator<Item = &ContainerDescriptor> {
        self.containers
            .iter()
            .filter(move |c| c.location == location)
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_parts() {
        assert_eq!(ViewLocation::Sidebar.part(), Part::Sidebar);
        assert_eq!(ViewLocation::Panel.part(), Part::Panel);
        assert_eq!(ViewLocation::AuxiliaryBar.part(), Part::AuxiliaryBar);
    }

    #[test]
    fn test_location_serde_names() {
        let yaml = serde_yaml::to_string(&ViewLocation::AuxiliaryBar).unwrap();
        assert_eq!(yaml.trim(), "auxiliarybar");
        let parsed: ViewLocation = serde_yaml::from_str("panel").unwrap();
        assert_eq!(parsed, ViewLocation::Panel);
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = ContainerRegistry::new();
        assert!(registry.register(ContainerDescriptor::new(
            "explorer",
            "Explorer",
            ViewLocation::Sidebar
        )));
        assert!(!registry.register(ContainerDescriptor::new(
            "explorer",
            "Other",
            ViewLocation::Panel
        )));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&"explorer".into()).map(|c| c.title.as_str()),
            Some("Explorer")
        );
    }

    #[test]
    fn test_by_location_keeps_registration_order() {
        let mut registry = ContainerRegistry::new();
        registry.register(ContainerDescriptor::new("a", "A", ViewLocation::Panel));
        registry.register(ContainerDescriptor::new("b", "B", ViewLocation::Sidebar));
        registry.register(ContainerDescriptor::new("c", "C", ViewLocation::Panel));

        let panel: Vec<&str> = registry
            .by_location(ViewLocation::Panel)
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(panel, vec!["a", "c"]);
    }
}
