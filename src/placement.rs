//! Placement engine: where a view may live and how it moves
//!
//! All operations take the registry by reference and the membership model
//! by (mutable) reference; nothing here touches focus or UI state. The update
//! layer resolves the target view, calls in here, and turns the outcome into
//! a reveal or an error dialog.
//!
//! Rules enforced on every move:
//! - only views with `can_move_view` are relocated
//! - containers with `reject_added_views` never receive a view
//! - a view alone in a Panel container is not offered "New Panel Entry"
//!   (and likewise for the Side Bar), since the move would change nothing
//! - the current container is never a destination

use crate::model::{FocusProvider, Membership};
use crate::registry::{ContainerDescriptor, ContainerId, Registry, ViewDescriptor, ViewId, ViewLocation};

pub const NEW_PANEL_ENTRY_LABEL: &str = "New Panel Entry";
pub const NEW_SIDEBAR_ENTRY_LABEL: &str = "New Side Bar Entry";

/// Where a view should go
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// A fresh container in the Panel, titled after the view
    NewPanelContainer,
    /// A fresh container in the Side Bar, titled after the view
    NewSidebarContainer,
    ExistingContainer(ContainerId),
}

/// One row of the destination picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationEntry {
    Separator(String),
    Option {
        destination: Destination,
        label: String,
    },
}

impl DestinationEntry {
    pub fn destination(&self) -> Option<&Destination> {
        match self {
            DestinationEntry::Option { destination, .. } => Some(destination),
            DestinationEntry::Separator(_) => None,
        }
    }
}

/// Movable views of one container, listed under the container title
#[derive(Debug, Clone)]
pub struct MovableViewGroup<'a> {
    pub container_id: &'a ContainerId,
    pub title: &'a str,
    pub location: ViewLocation,
    pub views: Vec<&'a ViewDescriptor>,
}

/// Result of resetting one view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The view was already in its default container; nothing changed
    AlreadyAtDefault,
    Moved(ContainerId),
}

/// Errors raised by placement operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    ViewNotFound(ViewId),
    ContainerNotFound(ContainerId),
    /// No explicit view and nothing focused
    NoFocusedView,
    ViewNotMovable(ViewId),
    InvalidDestination { view: ViewId, destination: Destination },
    NoDefaultContainer(ViewId),
    /// The picker was dismissed
    Cancelled,
}

impl PlacementError {
    /// Errors the user is told about; the rest are logged and absorbed
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            PlacementError::NoFocusedView
                | PlacementError::ViewNotMovable(_)
                | PlacementError::InvalidDestination { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PlacementError::ViewNotFound(_) | PlacementError::ContainerNotFound(_)
        )
    }
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::ViewNotFound(id) => write!(f, "Unknown view: {}", id),
            PlacementError::ContainerNotFound(id) => write!(f, "Unknown view container: {}", id),
            PlacementError::NoFocusedView => {
                write!(f, "There is no view currently focused.")
            }
            PlacementError::ViewNotMovable(_) => {
                write!(f, "The currently focused view is not movable.")
            }
            PlacementError::InvalidDestination { view, .. } => {
                write!(f, "View '{}' cannot be moved to the selected location.", view)
            }
            PlacementError::NoDefaultContainer(id) => {
                write!(f, "View '{}' has no default location.", id)
            }
            PlacementError::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Pick the view a command acts on: the explicit one, else the focused one
pub fn resolve_target_view(
    explicit: Option<&ViewId>,
    focus: &impl FocusProvider,
) -> Result<ViewId, PlacementError> {
    explicit
        .or_else(|| focus.focused_view())
        .cloned()
        .ok_or(PlacementError::NoFocusedView)
}

/// Movable, visible views grouped by pinned container
///
/// Side Bar containers come first, then Panel, then the secondary side bar.
/// Containers without a movable visible view are left out.
pub fn movable_views_by_location<'a>(
    registry: &'a Registry,
    membership: &'a Membership,
) -> Vec<MovableViewGroup<'a>> {
    let mut groups = Vec::new();

    for location in ViewLocation::ALL {
        for container in membership.containers_at(registry, location) {
            if !container.pinned {
                continue;
            }
            let Some(model) = membership.container_model(registry, &container.id) else {
                continue;
            };
            let views: Vec<&ViewDescriptor> =
                model.views.into_iter().filter(|v| v.can_move_view).collect();
            if views.is_empty() {
                continue;
            }
            groups.push(MovableViewGroup {
                container_id: &container.id,
                title: &container.title,
                location,
                views,
            });
        }
    }

    groups
}

/// Destinations offered for a view, in picker order
pub fn candidate_destinations(
    registry: &Registry,
    membership: &Membership,
    view_id: &ViewId,
) -> Result<Vec<DestinationEntry>, PlacementError> {
    let view = registry.resolve_view(view_id)?;
    if !view.can_move_view {
        return Err(PlacementError::ViewNotMovable(view_id.clone()));
    }

    let current = membership
        .container_of(view_id)
        .ok_or_else(|| PlacementError::ViewNotFound(view_id.clone()))?;
    let current_location = membership
        .descriptor(registry, current)
        .map(|c| c.location)
        .ok_or_else(|| PlacementError::ContainerNotFound(current.clone()))?;
    let is_solo = membership.is_solo(view_id);

    let mut entries = Vec::new();

    if !(is_solo && current_location == ViewLocation::Panel) {
        entries.push(DestinationEntry::Option {
            destination: Destination::NewPanelContainer,
            label: NEW_PANEL_ENTRY_LABEL.to_string(),
        });
    }
    if !(is_solo && current_location == ViewLocation::Sidebar) {
        entries.push(DestinationEntry::Option {
            destination: Destination::NewSidebarContainer,
            label: NEW_SIDEBAR_ENTRY_LABEL.to_string(),
        });
    }

    for location in ViewLocation::ALL {
        let targets: Vec<&ContainerDescriptor> = membership
            .containers_at(registry, location)
            .into_iter()
            .filter(|c| c.pinned && !c.reject_added_views && &c.id != current)
            .collect();
        if targets.is_empty() {
            continue;
        }
        entries.push(DestinationEntry::Separator(location.label().to_string()));
        entries.extend(targets.into_iter().map(|c| DestinationEntry::Option {
            destination: Destination::ExistingContainer(c.id.clone()),
            label: c.title.clone(),
        }));
    }

    Ok(entries)
}

/// Move a view, re-checking every placement rule
///
/// Returns the container the view now lives in.
pub fn move_view(
    registry: &Registry,
    membership: &mut Membership,
    view_id: &ViewId,
    destination: &Destination,
) -> Result<ContainerId, PlacementError> {
    let view = registry.resolve_view(view_id)?;
    if !view.can_move_view {
        return Err(PlacementError::ViewNotMovable(view_id.clone()));
    }
    let current = membership
        .container_of(view_id)
        .cloned()
        .ok_or_else(|| PlacementError::ViewNotFound(view_id.clone()))?;
    let current_location = membership.location_of(registry, view_id);
    let is_solo = membership.is_solo(view_id);

    let invalid = || PlacementError::InvalidDestination {
        view: view_id.clone(),
        destination: destination.clone(),
    };

    let target = match destination {
        Destination::NewPanelContainer | Destination::NewSidebarContainer => {
            let location = if *destination == Destination::NewPanelContainer {
                ViewLocation::Panel
            } else {
                ViewLocation::Sidebar
            };
            if is_solo && current_location == Some(location) {
                return Err(invalid());
            }
            membership.create_generated(location, &view.name)
        }
        Destination::ExistingContainer(id) => {
            let container = membership
                .descriptor(registry, id)
                .ok_or_else(|| PlacementError::ContainerNotFound(id.clone()))?;
            if container.reject_added_views || *id == current {
                return Err(invalid());
            }
            id.clone()
        }
    };

    membership.relocate(view_id, &target);
    membership.set_visible(view_id, true);
    membership.activate(registry, view_id);

    tracing::info!("Moved view '{}' from '{}' to '{}'", view_id, current, target);
    Ok(target)
}

/// Return a view to its default container
pub fn reset_to_default(
    registry: &Registry,
    membership: &mut Membership,
    view_id: &ViewId,
) -> Result<ResetOutcome, PlacementError> {
    let view = registry.resolve_view(view_id)?;
    let default = view
        .default_container_id
        .as_ref()
        .ok_or_else(|| PlacementError::NoDefaultContainer(view_id.clone()))?;
    registry.resolve_container(default)?;

    if membership.container_of(view_id) == Some(default) {
        return Ok(ResetOutcome::AlreadyAtDefault);
    }

    let previous = membership.relocate(view_id, default);
    membership.set_visible(view_id, true);
    membership.activate(registry, view_id);

    tracing::info!(
        "Reset view '{}' from '{}' to default '{}'",
        view_id,
        previous.map(|c| c.to_string()).unwrap_or_default(),
        default
    );
    Ok(ResetOutcome::Moved(default.clone()))
}

/// Return every view to its default container and contributed visibility
///
/// Returns the number of views that moved or changed visibility.
pub fn reset_all_locations(registry: &Registry, membership: &mut Membership) -> usize {
    let moved = membership.reset(registry);
    tracing::info!("Reset view locations ({} views moved)", moved);
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ContainerRegistry, ViewRegistry};
    use crate::resize::Part;

    fn registry() -> Registry {
        let mut containers = ContainerRegistry::new();
        containers.register(ContainerDescriptor::new("explorer", "Explorer", ViewLocation::Sidebar));
        containers.register(ContainerDescriptor::new("scm", "Source Control", ViewLocation::Sidebar));
        containers.register(ContainerDescriptor::new("panelX", "Panel X", ViewLocation::Panel));
        containers.register(
            ContainerDescriptor::new("chat", "Chat", ViewLocation::AuxiliaryBar)
                .rejecting_added_views(),
        );

        let mut views = ViewRegistry::new();
        views.register(ViewDescriptor::new("files", "Files", "explorer"));
        views.register(ViewDescriptor::new("search", "Search", "explorer"));
        views.register(ViewDescriptor::new("scm", "Changes", "scm").immovable());
        views.register(ViewDescriptor::new("terminal", "Terminal", "panelX"));
        views.register(ViewDescriptor::new("chat", "Chat", "chat"));
        Registry::new(views, containers)
    }

    struct NoFocus;

    impl FocusProvider for NoFocus {
        fn focused_view(&self) -> Option<&ViewId> {
            None
        }

        fn has_focus(&self, _part: Part) -> bool {
            false
        }
    }

    fn labels(entries: &[DestinationEntry]) -> Vec<&str> {
        entries
            .iter()
            .map(|e| match e {
                DestinationEntry::Separator(label) => label.as_str(),
                DestinationEntry::Option { label, .. } => label.as_str(),
            })
            .collect()
    }

    #[test]
    fn test_resolve_target_prefers_explicit() {
        let explicit = ViewId::from("search");
        assert_eq!(resolve_target_view(Some(&explicit), &NoFocus), Ok(explicit));
        assert_eq!(
            resolve_target_view(None, &NoFocus),
            Err(PlacementError::NoFocusedView)
        );
    }

    #[test]
    fn test_candidate_order() {
        let registry = registry();
        let membership = Membership::from_registry(&registry);

        let entries = candidate_destinations(&registry, &membership, &"search".into()).unwrap();
        assert_eq!(
            labels(&entries),
            vec![
                NEW_PANEL_ENTRY_LABEL,
                NEW_SIDEBAR_ENTRY_LABEL,
                "Side Bar",
                "Source Control",
                "Panel",
                "Panel X",
            ]
        );
    }

    #[test]
    fn test_solo_panel_view_not_offered_new_panel_entry() {
        let registry = registry();
        let membership = Membership::from_registry(&registry);

        let entries = candidate_destinations(&registry, &membership, &"terminal".into()).unwrap();
        let destinations: Vec<&Destination> =
            entries.iter().filter_map(|e| e.destination()).collect();
        assert!(!destinations.contains(&&Destination::NewPanelContainer));
        assert!(destinations.contains(&&Destination::NewSidebarContainer));
        // Only container in the Panel is its own, so no Panel group at all
        assert!(!labels(&entries).contains(&"Panel"));
    }

    #[test]
    fn test_solo_sidebar_view_not_offered_new_sidebar_entry() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);
        let own = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::NewSidebarContainer,
        )
        .unwrap();
        assert!(membership.is_solo(&"search".into()));

        let entries = candidate_destinations(&registry, &membership, &"search".into()).unwrap();
        let destinations: Vec<&Destination> =
            entries.iter().filter_map(|e| e.destination()).collect();
        assert!(!destinations.contains(&&Destination::NewSidebarContainer));
        assert!(destinations.contains(&&Destination::NewPanelContainer));
        assert!(!destinations.contains(&&Destination::ExistingContainer(own.clone())));

        let again = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::NewSidebarContainer,
        );
        assert!(matches!(again, Err(PlacementError::InvalidDestination { .. })));
        assert_eq!(membership.container_of(&"search".into()), Some(&own));
        assert_eq!(membership.generated_containers().len(), 1);
    }

    #[test]
    fn test_immovable_view_has_no_candidates() {
        let registry = registry();
        let membership = Membership::from_registry(&registry);
        assert_eq!(
            candidate_destinations(&registry, &membership, &"scm".into()),
            Err(PlacementError::ViewNotMovable("scm".into()))
        );
    }

    #[test]
    fn test_move_into_rejecting_container_fails() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);
        let result = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::ExistingContainer("chat".into()),
        );
        assert!(matches!(result, Err(PlacementError::InvalidDestination { .. })));
        assert_eq!(membership.container_of(&"search".into()), Some(&"explorer".into()));
    }

    #[test]
    fn test_move_to_current_container_fails() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);
        let result = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::ExistingContainer("explorer".into()),
        );
        assert!(matches!(result, Err(PlacementError::InvalidDestination { .. })));
    }

    #[test]
    fn test_move_to_new_panel_entry_creates_container() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);

        let target = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::NewPanelContainer,
        )
        .unwrap();

        let descriptor = membership.descriptor(&registry, &target).unwrap();
        assert_eq!(descriptor.location, ViewLocation::Panel);
        assert_eq!(descriptor.title, "Search");
        assert!(descriptor.generated);
        assert_eq!(membership.active_view(&target), Some(&"search".into()));
        assert!(membership.is_consistent(&registry));

        // Now solo in the Panel: a second new Panel entry would be a no-op
        let again = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::NewPanelContainer,
        );
        assert!(matches!(again, Err(PlacementError::InvalidDestination { .. })));
    }

    #[test]
    fn test_unknown_container_is_not_found() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);
        let result = move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::ExistingContainer("nowhere".into()),
        );
        assert_eq!(result, Err(PlacementError::ContainerNotFound("nowhere".into())));
    }

    #[test]
    fn test_reset_to_default_twice() {
        let registry = registry();
        let mut membership = Membership::from_registry(&registry);
        move_view(
            &registry,
            &mut membership,
            &"search".into(),
            &Destination::ExistingContainer("panelX".into()),
        )
        .unwrap();

        assert_eq!(
            reset_to_default(&registry, &mut membership, &"search".into()),
            Ok(ResetOutcome::Moved("explorer".into()))
        );
        assert_eq!(
            reset_to_default(&registry, &mut membership, &"search".into()),
            Ok(ResetOutcome::AlreadyAtDefault)
        );
    }

    #[test]
    fn test_reset_without_default_container() {
        let mut registry = registry();
        registry
            .views
            .register(ViewDescriptor::new("loose", "Loose", "explorer").without_default_container());
        let mut membership = Membership::from_registry(&registry);
        assert_eq!(
            reset_to_default(&registry, &mut membership, &"loose".into()),
            Err(PlacementError::NoDefaultContainer("loose".into()))
        );
    }

    #[test]
    fn test_movable_views_grouping() {
        let registry = registry();
        let membership = Membership::from_registry(&registry);

        let groups = movable_views_by_location(&registry, &membership);
        let titles: Vec<&str> = groups.iter().map(|g| g.title).collect();
        // scm holds only an immovable view; chat rejects added views but its
        // own view is movable
        assert_eq!(titles, vec!["Explorer", "Panel X", "Chat"]);
        assert_eq!(groups[0].views.len(), 2);
        assert_eq!(groups[2].location, ViewLocation::AuxiliaryBar);
    }

    #[test]
    fn test_error_classification() {
        assert!(PlacementError::NoFocusedView.is_user_facing());
        assert!(PlacementError::ViewNotMovable("x".into()).is_user_facing());
        assert!(!PlacementError::Cancelled.is_user_facing());
        assert!(!PlacementError::NoDefaultContainer("x".into()).is_user_facing());
        assert!(PlacementError::ViewNotFound("x".into()).is_not_found());
    }
}
