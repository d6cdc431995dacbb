//! View ↔ container membership
//!
//! Every registered view sits in exactly one container. Containers keep their
//! views in display order and remember which one is active. Containers created
//! by "new entry" moves are owned here, not by the registry, and disappear as
//! soon as they are emptied.

use std::collections::{HashMap, HashSet};

use crate::registry::{
    ContainerDescriptor, ContainerId, Registry, ViewDescriptor, ViewId, ViewLocation,
};

/// Prefix of ids given to containers created at runtime
pub const GENERATED_CONTAINER_PREFIX: &str = "viewdock.generated";

/// Mutable per-container state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerState {
    pub id: ContainerId,
    /// All views in display order, hidden ones included
    pub views: Vec<ViewId>,
    pub active_view: Option<ViewId>,
}

impl ContainerState {
    fn new(id: ContainerId) -> Self {
        Self {
            id,
            views: Vec::new(),
            active_view: None,
        }
    }
}

/// Read-only view of a container for pickers: title plus visible views
#[derive(Debug, Clone)]
pub struct ContainerModel<'a> {
    pub descriptor: &'a ContainerDescriptor,
    pub title: &'a str,
    pub views: Vec<&'a ViewDescriptor>,
}

/// The membership relation and the runtime-generated containers
#[derive(Debug, Clone, Default)]
pub struct Membership {
    placement: HashMap<ViewId, ContainerId>,
    /// Contributed containers first (registration order), then generated ones
    containers: Vec<ContainerState>,
    generated: Vec<ContainerDescriptor>,
    hidden: HashSet<ViewId>,
    active_containers: HashMap<ViewLocation, ContainerId>,
    next_generated_id: u32,
}

impl Membership {
    /// Place every registered view in the container it is contributed into
    pub fn from_registry(registry: &Registry) -> Self {
        let mut membership = Self {
            containers: registry
                .containers
                .iter()
                .map(|c| ContainerState::new(c.id.clone()))
                .collect(),
            ..Self::default()
        };

        for view in registry.views.iter() {
            if view.hidden_by_default {
                membership.hidden.insert(view.id.clone());
            }
            if !membership.insert(&view.id, &view.container_id) {
                tracing::warn!(
                    "View '{}' names unregistered container '{}', leaving it unplaced",
                    view.id,
                    view.container_id
                );
            }
        }

        membership.refresh_active_views();
        membership
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Container currently hosting a view
    pub fn container_of(&self, view: &ViewId) -> Option<&ContainerId> {
        self.placement.get(view)
    }

    /// All views of a container in display order (empty for unknown ids)
    pub fn views_in(&self, container: &ContainerId) -> &[ViewId] {
        self.state(container)
            .map(|s| s.views.as_slice())
            .unwrap_or(&[])
    }

    pub fn state(&self, container: &ContainerId) -> Option<&ContainerState> {
        self.containers.iter().find(|s| &s.id == container)
    }

    /// Container states in display order
    pub fn states(&self) -> impl Iterator<Item = &ContainerState> {
        self.containers.iter()
    }

    /// Descriptor of a contributed or generated container
    pub fn descriptor<'a>(
        &'a self,
        registry: &'a Registry,
        id: &ContainerId,
    ) -> Option<&'a ContainerDescriptor> {
        registry
            .containers
            .get(id)
            .or_else(|| self.generated.iter().find(|c| &c.id == id))
    }

    /// Containers at a location: contributed ones first, then generated ones
    pub fn containers_at<'a>(
        &'a self,
        registry: &'a Registry,
        location: ViewLocation,
    ) -> Vec<&'a ContainerDescriptor> {
        registry
            .containers
            .by_location(location)
            .chain(self.generated.iter().filter(|c| c.location == location))
            .collect()
    }

    /// Title and visible views of a container
    pub fn container_model<'a>(
        &'a self,
        registry: &'a Registry,
        id: &ContainerId,
    ) -> Option<ContainerModel<'a>> {
        let descriptor = self.descriptor(registry, id)?;
        let views = self
            .views_in(id)
            .iter()
            .filter(|v| self.is_visible(v))
            .filter_map(|v| registry.views.get(v))
            .collect();
        Some(ContainerModel {
            descriptor,
            title: &descriptor.title,
            views,
        })
    }

    /// Location a view is currently shown in
    pub fn location_of(&self, registry: &Registry, view: &ViewId) -> Option<ViewLocation> {
        let container = self.container_of(view)?;
        self.descriptor(registry, container).map(|c| c.location)
    }

    /// True if the view is the only one in its container
    pub fn is_solo(&self, view: &ViewId) -> bool {
        self.container_of(view)
            .map(|c| self.views_in(c).len() == 1)
            .unwrap_or(false)
    }

    pub fn is_visible(&self, view: &ViewId) -> bool {
        !self.hidden.contains(view)
    }

    pub fn active_view(&self, container: &ContainerId) -> Option<&ViewId> {
        self.state(container).and_then(|s| s.active_view.as_ref())
    }

    /// Container last activated at a location
    pub fn active_container(&self, location: ViewLocation) -> Option<&ContainerId> {
        self.active_containers.get(&location)
    }

    pub fn generated_containers(&self) -> &[ContainerDescriptor] {
        &self.generated
    }

    /// Iterate (view, container) pairs in no particular order
    pub fn placements(&self) -> impl Iterator<Item = (&ViewId, &ContainerId)> {
        self.placement.iter()
    }

    /// Every registered view resolves to exactly one known container, and
    /// container lists agree with the placement map.
    pub fn is_consistent(&self, registry: &Registry) -> bool {
        let mut seen = HashSet::new();
        for state in &self.containers {
            if self.descriptor(registry, &state.id).is_none() {
                return false;
            }
            for view in &state.views {
                if !seen.insert(view) || self.placement.get(view) != Some(&state.id) {
                    return false;
                }
            }
        }

        registry.views.iter().all(|v| {
            self.placement
                .get(&v.id)
                .is_some_and(|c| self.descriptor(registry, c).is_some())
        }) && seen.len() == self.placement.len()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_visible(&mut self, view: &ViewId, visible: bool) {
        if visible {
            self.hidden.remove(view);
        } else {
            self.hidden.insert(view.clone());
        }
    }

    /// Make a view the active one in its container and its container the
    /// active one at its location.
    pub fn activate(&mut self, registry: &Registry, view: &ViewId) {
        let Some(container) = self.placement.get(view).cloned() else {
            return;
        };
        if let Some(location) = self.descriptor(registry, &container).map(|c| c.location) {
            self.active_containers.insert(location, container.clone());
        }
        if let Some(state) = self.state_mut(&container) {
            state.active_view = Some(view.clone());
        }
    }

    /// Create an empty generated container at a location
    pub fn create_generated(&mut self, location: ViewLocation, title: &str) -> ContainerId {
        self.next_generated_id += 1;
        let id = ContainerId::new(format!(
            "{}.{}.{}",
            GENERATED_CONTAINER_PREFIX,
            location.key(),
            self.next_generated_id
        ));
        self.register_generated(ContainerDescriptor::generated(id.clone(), title, location));
        id
    }

    /// Register a generated container restored from saved state
    pub fn register_generated(&mut self, descriptor: ContainerDescriptor) {
        if self.state(&descriptor.id).is_some() {
            return;
        }
        if let Some(n) = descriptor
            .id
            .as_str()
            .rsplit('.')
            .next()
            .and_then(|n| n.parse::<u32>().ok())
        {
            self.next_generated_id = self.next_generated_id.max(n);
        }
        self.containers.push(ContainerState::new(descriptor.id.clone()));
        self.generated.push(descriptor);
    }

    /// Move a view to the end of another container
    ///
    /// No validation beyond existence; callers check movability and
    /// destination rules. Returns the previous container. An emptied
    /// generated container is dropped.
    pub fn relocate(&mut self, view: &ViewId, to: &ContainerId) -> Option<ContainerId> {
        if self.state(to).is_none() {
            return None;
        }
        let from = self.placement.get(view).cloned()?;
        if &from == to {
            return Some(from);
        }

        if let Some(state) = self.state_mut(&from) {
            state.views.retain(|v| v != view);
            if state.active_view.as_ref() == Some(view) {
                state.active_view = None;
            }
        }
        self.insert(view, to);
        self.drop_if_empty_generated(&from);
        self.refresh_active_views();
        Some(from)
    }

    /// Move a view to the end of a container, even the one it is already in
    pub fn reorder_to_end(&mut self, view: &ViewId, to: &ContainerId) {
        if self.placement.get(view) != Some(to) {
            self.relocate(view, to);
            return;
        }
        if let Some(state) = self.state_mut(to) {
            state.views.retain(|v| v != view);
            state.views.push(view.clone());
        }
    }

    /// Remove every generated container that holds no views
    pub fn drop_empty_generated(&mut self) {
        let empty: Vec<ContainerId> = self
            .generated
            .iter()
            .filter(|c| self.views_in(&c.id).is_empty())
            .map(|c| c.id.clone())
            .collect();
        for id in &empty {
            self.drop_if_empty_generated(id);
        }
    }

    /// Put every view back where the registry says it belongs
    ///
    /// Views without a default container stay put, unless they sit in a
    /// generated container, in which case they return to the container they
    /// were contributed into. Container order becomes registration order and
    /// every view gets back its contributed visibility. Returns the number of
    /// views whose container or visibility changed.
    pub fn reset(&mut self, registry: &Registry) -> usize {
        let mut changed = 0;
        let mut targets: Vec<(ViewId, ContainerId)> = Vec::with_capacity(registry.views.len());

        for view in registry.views.iter() {
            let current = self.placement.get(&view.id);
            let target = match (&view.default_container_id, current) {
                (Some(default), _) if registry.containers.contains(default) => default.clone(),
                (_, Some(current)) if registry.containers.contains(current) => current.clone(),
                _ => view.container_id.clone(),
            };
            if current != Some(&target)
                || self.hidden.contains(&view.id) != view.hidden_by_default
            {
                changed += 1;
            }
            targets.push((view.id.clone(), target));
        }

        for state in &mut self.containers {
            state.views.clear();
        }
        self.containers.retain(|s| registry.containers.contains(&s.id));
        self.generated.clear();
        self.active_containers
            .retain(|_, id| registry.containers.contains(id));
        self.placement.clear();
        self.hidden = registry
            .views
            .iter()
            .filter(|v| v.hidden_by_default)
            .map(|v| v.id.clone())
            .collect();

        for (view, container) in &targets {
            self.insert(view, container);
        }
        self.refresh_active_views();
        changed
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn state_mut(&mut self, container: &ContainerId) -> Option<&mut ContainerState> {
        self.containers.iter_mut().find(|s| &s.id == container)
    }

    fn insert(&mut self, view: &ViewId, container: &ContainerId) -> bool {
        let Some(state) = self.state_mut(container) else {
            return false;
        };
        state.views.push(view.clone());
        self.placement.insert(view.clone(), container.clone());
        true
    }

    fn drop_if_empty_generated(&mut self, container: &ContainerId) {
        let is_generated = self.generated.iter().any(|c| &c.id == container);
        if is_generated && self.views_in(container).is_empty() {
            self.containers.retain(|s| &s.id != container);
            self.generated.retain(|c| &c.id != container);
            self.active_containers.retain(|_, id| id != container);
        }
    }

    /// Ensure each container's active view is one of its visible views
    fn refresh_active_views(&mut self) {
        let hidden = &self.hidden;
        for state in &mut self.containers {
            let still_valid = state
                .active_view
                .as_ref()
                .is_some_and(|v| state.views.contains(v));
            if !still_valid {
                state.active_view = state.views.iter().find(|v| !hidden.contains(*v)).cloned();
            }
        }
    }
}
