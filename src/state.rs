//! Saved view locations
//!
//! The membership relation is written to `view-locations.json` after every
//! placement change and applied on the next start.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::Membership;
use crate::registry::{ContainerDescriptor, ContainerId, Registry, ViewId, ViewLocation};

/// Current on-disk format version
pub const STATE_VERSION: u32 = 1;

/// Where one view was, in container display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlacement {
    pub view: ViewId,
    pub container: ContainerId,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedContainer {
    pub id: ContainerId,
    pub title: String,
    pub location: ViewLocation,
}

/// Serialized membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLocationsState {
    pub version: u32,
    #[serde(default)]
    pub generated: Vec<SavedContainer>,
    #[serde(default)]
    pub views: Vec<SavedPlacement>,
}

/// Errors that can occur when reading or writing saved locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    IoError(String),
    ParseError(String),
    UnsupportedVersion(u32),
}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::IoError(e) => write!(f, "IO error: {}", e),
            StateError::ParseError(e) => write!(f, "Parse error: {}", e),
            StateError::UnsupportedVersion(v) => {
                write!(f, "Unsupported view locations version: {}", v)
            }
        }
    }
}

impl std::error::Error for StateError {}

impl ViewLocationsState {
    pub fn from_membership(membership: &Membership) -> Self {
        let generated = membership
            .generated_containers()
            .iter()
            .map(|c| SavedContainer {
                id: c.id.clone(),
                title: c.title.clone(),
                location: c.location,
            })
            .collect();

        let views = membership
            .states()
            .flat_map(|state| {
                state.views.iter().map(|view| SavedPlacement {
                    view: view.clone(),
                    container: state.id.clone(),
                    visible: membership.is_visible(view),
                })
            })
            .collect();

        Self {
            version: STATE_VERSION,
            generated,
            views,
        }
    }

    /// Apply saved placements on top of a fresh membership
    ///
    /// Unknown views and containers are skipped, leaving the view where it is.
    /// Restored generated containers nobody lands in are dropped. Returns the
    /// number of views that moved.
    pub fn apply(&self, registry: &Registry, membership: &mut Membership) -> usize {
        for saved in &self.generated {
            membership.register_generated(ContainerDescriptor::generated(
                saved.id.clone(),
                saved.title.clone(),
                saved.location,
            ));
        }

        let mut moved = 0;
        for placement in &self.views {
            let view = &placement.view;
            if !registry.views.contains(view) {
                tracing::warn!("Skipping saved location of unknown view '{}'", view);
                continue;
            }
            if membership.descriptor(registry, &placement.container).is_none() {
                tracing::warn!(
                    "Saved container '{}' for view '{}' no longer exists",
                    placement.container,
                    view
                );
                continue;
            }
            if membership.container_of(view) != Some(&placement.container) {
                moved += 1;
            }
            // Relocating within the same container re-appends, which replays saved order
            membership.reorder_to_end(view, &placement.container);
            membership.set_visible(view, placement.visible);
        }

        membership.drop_empty_generated();
        moved
    }

    pub fn load(path: &Path) -> Result<Self, StateError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| StateError::IoError(e.to_string()))?;
        let state: Self =
            serde_json::from_str(&content).map_err(|e| StateError::ParseError(e.to_string()))?;
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion(state.version));
        }
        Ok(state)
    }

    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StateError::IoError(e.to_string()))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StateError::ParseError(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| StateError::IoError(e.to_string()))?;
        tracing::debug!("Saved view locations to {}", path.display());
        Ok(())
    }
}
