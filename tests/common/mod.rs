//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use viewdock::model::{AppModel, FocusTarget};
use viewdock::registry::{
    ContainerDescriptor, ContainerId, ContainerRegistry, Registry, ViewDescriptor, ViewId,
    ViewLocation, ViewRegistry,
};
use viewdock::resize::Part;

/// Small workbench used across integration tests
///
/// Side Bar: `explorer` (files, search, timeline), `scm` (scm, immovable)
/// Panel: `panelContainerX` (terminal, solo), `output` (output)
/// Secondary Side Bar: `chat` (chat, rejects added views)
pub fn test_registry() -> Registry {
    let mut containers = ContainerRegistry::new();
    containers.register(ContainerDescriptor::new("explorer", "Explorer", ViewLocation::Sidebar));
    containers.register(ContainerDescriptor::new(
        "scm",
        "Source Control",
        ViewLocation::Sidebar,
    ));
    containers.register(ContainerDescriptor::new(
        "panelContainerX",
        "Panel X",
        ViewLocation::Panel,
    ));
    containers.register(ContainerDescriptor::new("output", "Output", ViewLocation::Panel));
    containers.register(
        ContainerDescriptor::new("chat", "Chat", ViewLocation::AuxiliaryBar).rejecting_added_views(),
    );

    let mut views = ViewRegistry::new();
    views.register(ViewDescriptor::new("files", "Folders", "explorer"));
    views.register(ViewDescriptor::new("search", "Search", "explorer"));
    views.register(ViewDescriptor::new("timeline", "Timeline", "explorer").without_default_container());
    views.register(ViewDescriptor::new("scm", "Changes", "scm").immovable());
    views.register(ViewDescriptor::new("terminal", "Terminal", "panelContainerX"));
    views.register(ViewDescriptor::new("output", "Output", "output"));
    views.register(ViewDescriptor::new("chat", "Chat", "chat").immovable());

    Registry::new(views, containers)
}

/// Model over [`test_registry`] with the editor focused
pub fn test_model() -> AppModel {
    AppModel::with_registry(test_registry())
}

/// Model with a given view focused
pub fn test_model_focused_on(view: &str) -> AppModel {
    let mut model = test_model();
    model.ui.focus = FocusTarget::View(ViewId::from(view));
    model
}

/// Model with a given part focused
pub fn test_model_with_part_focus(part: Part) -> AppModel {
    let mut model = test_model();
    model.ui.focus = FocusTarget::Part(part);
    model
}

/// Current container of a view
pub fn container_of(model: &AppModel, view: &str) -> Option<ContainerId> {
    model.membership.container_of(&ViewId::from(view)).cloned()
}

/// Labels of the open picker's visible rows
pub fn picker_labels(model: &AppModel) -> Vec<String> {
    model
        .ui
        .picker()
        .map(|picker| {
            picker
                .visible_items()
                .into_iter()
                .map(|item| item.label().to_string())
                .collect()
        })
        .unwrap_or_default()
}
