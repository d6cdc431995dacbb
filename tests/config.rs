//! Configuration system tests
//!
//! Tests for config paths, workbench config, contributions and saved view
//! locations.

mod common;

use common::{container_of, test_model, test_registry};
use viewdock::config::WorkbenchConfig;
use viewdock::config_paths;
use viewdock::messages::Msg;
use viewdock::model::{AppModel, Membership};
use viewdock::placement::Destination;
use viewdock::registry::{
    load_registry, parse_contributions_yaml, ContributionError, ViewId, ViewLocation,
};
use viewdock::state::ViewLocationsState;
use viewdock::update::update;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("viewdock"));
    }
}

#[test]
fn test_state_files_live_in_config_dir() {
    let (Some(config), Some(locations), Some(logs)) = (
        config_paths::config_dir(),
        config_paths::view_locations_file(),
        config_paths::logs_dir(),
    ) else {
        return;
    };
    assert!(locations.starts_with(&config));
    assert!(locations.to_string_lossy().ends_with("view-locations.json"));
    assert!(logs.starts_with(&config));
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

// ========================================================================
// Workbench Config Tests
// ========================================================================

#[test]
fn test_config_defaults() {
    let config = WorkbenchConfig::default();
    assert!(config.restore_view_locations);
    assert_eq!(config.contributions, None);
    assert_eq!(config.min_part_size, 150.0);
    assert_eq!(config.max_part_fraction, 0.8);
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let config = WorkbenchConfig {
        contributions: Some(dir.path().join("views.yaml")),
        restore_view_locations: false,
        min_part_size: 120.0,
        max_part_fraction: 0.5,
    };
    config.save_to(&path).unwrap();

    assert_eq!(WorkbenchConfig::load_from(&path), config);
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "min_part_size: 100\n").unwrap();

    let config = WorkbenchConfig::load_from(&path);
    assert_eq!(config.min_part_size, 100.0);
    assert!(config.restore_view_locations);
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "min_part_size: [not a number\n").unwrap();

    assert_eq!(WorkbenchConfig::load_from(&path), WorkbenchConfig::default());
    assert_eq!(
        WorkbenchConfig::load_from(&dir.path().join("missing.yaml")),
        WorkbenchConfig::default()
    );
}

#[test]
fn test_config_limits_apply_to_layout() {
    let config = WorkbenchConfig {
        min_part_size: 200.0,
        ..WorkbenchConfig::default()
    };
    let model = AppModel::new(test_registry(), config);
    assert_eq!(model.layout.min_size, 200.0);
}

// ========================================================================
// Contributions Tests
// ========================================================================

const CUSTOM_CONTRIBUTIONS: &str = r#"
containers:
  - id: left
    title: Left
    location: sidebar
  - id: bottom
    title: Bottom
    location: panel
views:
  - id: tree
    name: Tree
    container: left
  - id: log
    name: Log
    container: bottom
    default_container: left
    can_move: false
"#;

#[test]
fn test_load_registry_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("views.yaml");
    std::fs::write(&path, CUSTOM_CONTRIBUTIONS).unwrap();

    let registry = load_registry(Some(path.as_path()));
    assert_eq!(registry.views.len(), 2);
    assert_eq!(
        registry.containers.get(&"bottom".into()).map(|c| c.location),
        Some(ViewLocation::Panel)
    );

    let log = registry.views.get(&"log".into()).unwrap();
    assert!(!log.can_move_view);
    assert_eq!(log.container_id, "bottom".into());
    assert_eq!(log.default_container_id, Some("left".into()));
}

#[test]
fn test_load_registry_falls_back_to_embedded_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");

    let registry = load_registry(Some(path.as_path()));
    assert!(registry.containers.contains(&"workbench.view.explorer".into()));
    assert!(registry.views.contains(&"terminal".into()));
}

#[test]
fn test_view_in_unknown_container_is_rejected() {
    let yaml = r#"
containers:
  - id: left
    title: Left
    location: sidebar
views:
  - id: tree
    name: Tree
    container: right
"#;
    let result = parse_contributions_yaml(yaml).unwrap().into_registry();
    assert!(matches!(
        result,
        Err(ContributionError::UnknownContainer { .. })
    ));
}

// ========================================================================
// Saved View Locations Tests
// ========================================================================

#[test]
fn test_saved_locations_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("view-locations.json");

    let mut model = test_model();
    update(&mut model, Msg::move_view_to("search", Destination::NewPanelContainer));
    update(
        &mut model,
        Msg::move_view_to("terminal", Destination::ExistingContainer("explorer".into())),
    );
    ViewLocationsState::from_membership(&model.membership)
        .save(&path)
        .unwrap();

    let mut restarted = test_model();
    let state = ViewLocationsState::load(&path).unwrap();
    let moved = state.apply(&restarted.registry, &mut restarted.membership);

    assert_eq!(moved, 2);
    assert_eq!(container_of(&restarted, "terminal"), Some("explorer".into()));
    assert_eq!(
        container_of(&restarted, "search"),
        container_of(&model, "search")
    );
    assert_eq!(restarted.membership.generated_containers().len(), 1);
    assert!(restarted.membership.is_consistent(&restarted.registry));
}

#[test]
fn test_saved_locations_for_other_registry_are_skipped() {
    let mut model = test_model();
    update(
        &mut model,
        Msg::move_view_to("search", Destination::ExistingContainer("output".into())),
    );
    let state = ViewLocationsState::from_membership(&model.membership);

    // A registry without the `output` container
    let registry = load_registry(None);
    let mut membership = Membership::from_registry(&registry);
    let before: Vec<_> = registry
        .views
        .iter()
        .map(|v| membership.container_of(&v.id).cloned())
        .collect();

    state.apply(&registry, &mut membership);

    let after: Vec<_> = registry
        .views
        .iter()
        .map(|v| membership.container_of(&v.id).cloned())
        .collect();
    assert_eq!(before, after);
    assert!(membership.is_consistent(&registry));
    assert!(!registry.views.contains(&ViewId::from("search")));
}
