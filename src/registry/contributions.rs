//! Static view and container contributions
//!
//! Contributions are read once at startup. The embedded `views.yaml`
//! describes a stock workbench; a user file replaces it entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::container::{ContainerDescriptor, ContainerId, ViewLocation};
use super::view::{ViewDescriptor, ViewId};
use super::Registry;

/// Default contributions embedded at compile time
const DEFAULT_CONTRIBUTIONS_YAML: &str = include_str!("../../views.yaml");

/// Root of a contributions file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contributions {
    #[serde(default)]
    pub containers: Vec<ContainerContribution>,
    #[serde(default)]
    pub views: Vec<ViewContribution>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerContribution {
    pub id: String,
    pub title: String,
    pub location: ViewLocation,
    #[serde(default)]
    pub reject_added_views: bool,
    #[serde(default = "default_true")]
    pub pinned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewContribution {
    pub id: String,
    pub name: String,
    pub container: String,
    /// Reset target; defaults to `container`
    #[serde(default)]
    pub default_container: Option<String>,
    #[serde(default = "default_true")]
    pub can_move: bool,
    #[serde(default)]
    pub hidden_by_default: bool,
}

fn default_true() -> bool {
    true
}

/// Errors that can occur when loading contributions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContributionError {
    IoError(String),
    ParseError(String),
    DuplicateContainer(String),
    DuplicateView(String),
    /// A view names a container that is not contributed
    UnknownContainer { view: String, container: String },
}

impl std::fmt::Display for ContributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContributionError::IoError(e) => write!(f, "IO error: {}", e),
            ContributionError::ParseError(e) => write!(f, "Parse error: {}", e),
            ContributionError::DuplicateContainer(id) => {
                write!(f, "Container '{}' is contributed twice", id)
            }
            ContributionError::DuplicateView(id) => write!(f, "View '{}' is contributed twice", id),
            ContributionError::UnknownContainer { view, container } => {
                write!(f, "View '{}' names unknown container '{}'", view, container)
            }
        }
    }
}

impl std::error::Error for ContributionError {}

/// Parse contributions from a YAML string
pub fn parse_contributions_yaml(yaml: &str) -> Result<Contributions, ContributionError> {
    serde_yaml::from_str(yaml).map_err(|e| ContributionError::ParseError(e.to_string()))
}

/// Load contributions from a YAML file
pub fn load_contributions_file(path: &Path) -> Result<Contributions, ContributionError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ContributionError::IoError(e.to_string()))?;
    parse_contributions_yaml(&content)
}

/// The embedded stock contributions
pub fn default_contributions() -> Contributions {
    match parse_contributions_yaml(DEFAULT_CONTRIBUTIONS_YAML) {
        Ok(contributions) => contributions,
        Err(e) => {
            tracing::warn!("Failed to parse embedded contributions: {}", e);
            Contributions::default()
        }
    }
}

/// Build the registry from a user file, falling back to the embedded defaults
pub fn load_registry(path: Option<&Path>) -> Registry {
    if let Some(path) = path {
        match load_contributions_file(path).and_then(|c| c.into_registry()) {
            Ok(registry) => {
                tracing::info!(
                    "Loaded contributions from {} ({} views, {} containers)",
                    path.display(),
                    registry.views.len(),
                    registry.containers.len()
                );
                return registry;
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load contributions from {}: {}, using defaults",
                    path.display(),
                    e
                );
            }
        }
    }

    default_contributions().into_registry().unwrap_or_else(|e| {
        tracing::warn!("Embedded contributions are invalid: {}", e);
        Registry::default()
    })
}

impl Contributions {
    /// Validate and register everything
    ///
    /// Containers register first so views can be checked against them.
    pub fn into_registry(self) -> Result<Registry, ContributionError> {
        let mut registry = Registry::default();

        for c in self.containers {
            let mut descriptor = ContainerDescriptor::new(c.id.as_str(), c.title, c.location)
                .with_pinned(c.pinned);
            descriptor.reject_added_views = c.reject_added_views;
            if !registry.containers.register(descriptor) {
                return Err(ContributionError::DuplicateContainer(c.id));
            }
        }

        for v in self.views {
            let container = ContainerId::new(v.container.as_str());
            if !registry.containers.contains(&container) {
                return Err(ContributionError::UnknownContainer {
                    view: v.id,
                    container: v.container,
                });
            }

            let default_container = match v.default_container {
                Some(id) => {
                    let id = ContainerId::new(id);
                    if !registry.containers.contains(&id) {
                        return Err(ContributionError::UnknownContainer {
                            view: v.id,
                            container: id.to_string(),
                        });
                    }
                    id
                }
                None => container.clone(),
            };

            let descriptor = ViewDescriptor {
                id: ViewId::new(v.id.as_str()),
                name: v.name,
                container_id: container,
                default_container_id: Some(default_container),
                can_move_view: v.can_move,
                hidden_by_default: v.hidden_by_default,
            };
            if !registry.views.register(descriptor) {
                return Err(ContributionError::DuplicateView(v.id));
            }
        }

        Ok(registry)
    }
}
