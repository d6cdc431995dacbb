//! View descriptors and the view registry

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::container::ContainerId;

/// Unique identifier of a view
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ViewId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Static description of a contributed view
///
/// Descriptors never change after registration. Where a view currently
/// lives is tracked by [`Membership`](crate::model::Membership).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    pub id: ViewId,
    /// Display name
    pub name: String,
    /// Container the view is contributed into (its starting place)
    pub container_id: ContainerId,
    /// Container the view returns to on reset
    pub default_container_id: Option<ContainerId>,
    /// Whether the user may relocate this view
    pub can_move_view: bool,
    /// Whether the view starts hidden in its container
    pub hidden_by_default: bool,
}

impl ViewDescriptor {
    /// Create a movable view whose default container is the one it is contributed into
    pub fn new(
        id: impl Into<ViewId>,
        name: impl Into<String>,
        container_id: impl Into<ContainerId>,
    ) -> Self {
        let container_id = container_id.into();
        Self {
            id: id.into(),
            name: name.into(),
            default_container_id: Some(container_id.clone()),
            container_id,
            can_move_view: true,
            hidden_by_default: false,
        }
    }

    /// Mark the view as fixed in place (builder pattern)
    pub fn immovable(mut self) -> Self {
        self.can_move_view = false;
        self
    }

    /// Drop the reset target (builder pattern)
    pub fn without_default_container(mut self) -> Self {
        self.default_container_id = None;
        self
    }

    /// Start hidden (builder pattern)
    pub fn hidden(mut self) -> Self {
        self.hidden_by_default = true;
        self
    }
}

/// Registered views, kept in registration order
#[derive(Debug, Clone, Default)]
pub struct ViewRegistry {
    views: Vec<ViewDescriptor>,
    index: HashMap<ViewId, usize>,
}

impl ViewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a view. Returns false if the id is already taken.
    pub fn register(&mut self, descriptor: ViewDescriptor) -> bool {
        if self.index.contains_key(&descriptor.id) {
            return false;
        }
        self.index.insert(descriptor.id.clone(), self.views.len());
        self.views.push(descriptor);
        true
    }

    pub fn get(&self, id: &ViewId) -> Option<&ViewDescriptor> {
        self.index.get(id).map(|&i| &self.views[i])
    }

    pub fn contains(&self, id: &ViewId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ViewDescriptor> {
        self.views.iter()
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_defaults_to_its_container() {
        let view = ViewDescriptor::new("search", "Search", "explorer");
        assert_eq!(view.container_id, ContainerId::from("explorer"));
        assert_eq!(view.default_container_id, Some(ContainerId::from("explorer")));
        assert!(view.can_move_view);
        assert!(!view.hidden_by_default);
    }

    #[test]
    fn test_builders() {
        let view = ViewDescriptor::new("chat", "Chat", "chat")
            .immovable()
            .without_default_container()
            .hidden();
        assert!(!view.can_move_view);
        assert_eq!(view.default_container_id, None);
        assert!(view.hidden_by_default);
    }

    #[test]
    fn test_registry_order_and_lookup() {
        let mut registry = ViewRegistry::new();
        assert!(registry.register(ViewDescriptor::new("b", "B", "x")));
        assert!(registry.register(ViewDescriptor::new("a", "A", "x")));
        assert!(!registry.register(ViewDescriptor::new("a", "Again", "y")));

        let ids: Vec<&str> = registry.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(registry.get(&"a".into()).map(|v| v.name.as_str()), Some("A"));
        assert!(registry.get(&"missing".into()).is_none());
    }
}
