//! Shared helpers for benchmarks

use viewdock::model::AppModel;
use viewdock::registry::{
    ContainerDescriptor, ContainerRegistry, Registry, ViewDescriptor, ViewLocation, ViewRegistry,
};

/// Registry with `containers` containers per location and `views` views in each
pub fn make_registry(containers: usize, views: usize) -> Registry {
    let mut container_registry = ContainerRegistry::new();
    let mut view_registry = ViewRegistry::new();

    for location in ViewLocation::ALL {
        for c in 0..containers {
            let container_id = format!("{}.{}", location.key(), c);
            container_registry.register(ContainerDescriptor::new(
                container_id.as_str(),
                format!("{} {}", location.label(), c),
                location,
            ));
            for v in 0..views {
                view_registry.register(ViewDescriptor::new(
                    format!("{}.view{}", container_id, v).as_str(),
                    format!("View {} of {}", v, container_id),
                    container_id.as_str(),
                ));
            }
        }
    }

    Registry::new(view_registry, container_registry)
}

#[allow(dead_code)]
pub fn make_model(containers: usize, views: usize) -> AppModel {
    AppModel::with_registry(make_registry(containers, views))
}
