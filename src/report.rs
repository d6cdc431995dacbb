//! Layout report - a serializable snapshot of where views live
//!
//! Printed by the binary after running commands, as YAML or JSON.

use serde::Serialize;

use crate::model::{AppModel, FocusTarget};
use crate::registry::ViewLocation;
use crate::resize::Part;

#[derive(Debug, Serialize)]
pub struct LayoutReport {
    pub focus: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picker: Option<PickerReport>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub status: String,
    pub locations: Vec<LocationReport>,
    pub parts: Vec<PartReport>,
}

#[derive(Debug, Serialize)]
pub struct PickerReport {
    pub placeholder: String,
    pub items: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LocationReport {
    pub location: ViewLocation,
    pub containers: Vec<ContainerReport>,
}

#[derive(Debug, Serialize)]
pub struct ContainerReport {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub generated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<String>,
    pub views: Vec<ViewReport>,
}

#[derive(Debug, Serialize)]
pub struct ViewReport {
    pub id: String,
    pub name: String,
    pub visible: bool,
}

#[derive(Debug, Serialize)]
pub struct PartReport {
    pub part: Part,
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

impl LayoutReport {
    pub fn from_model(model: &AppModel) -> Self {
        let focus = match &model.ui.focus {
            FocusTarget::Part(part) => part.display_name().to_string(),
            FocusTarget::View(view) => format!("view:{}", view),
            FocusTarget::Elsewhere => "none".to_string(),
        };

        let picker = model.ui.picker().map(|picker| PickerReport {
            placeholder: picker.placeholder.clone(),
            items: picker
                .visible_items()
                .into_iter()
                .map(|item| {
                    if item.is_separator() {
                        format!("--- {} ---", item.label())
                    } else {
                        item.label().to_string()
                    }
                })
                .collect(),
        });

        let locations = ViewLocation::ALL
            .into_iter()
            .map(|location| LocationReport {
                location,
                containers: model
                    .membership
                    .containers_at(&model.registry, location)
                    .into_iter()
                    .map(|container| ContainerReport {
                        id: container.id.to_string(),
                        title: container.title.clone(),
                        generated: container.generated,
                        active: model
                            .membership
                            .active_view(&container.id)
                            .map(|v| v.to_string()),
                        views: model
                            .membership
                            .views_in(&container.id)
                            .iter()
                            .map(|view| ViewReport {
                                id: view.to_string(),
                                name: model
                                    .registry
                                    .views
                                    .get(view)
                                    .map(|d| d.name.clone())
                                    .unwrap_or_default(),
                                visible: model.membership.is_visible(view),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        let parts = [Part::Editor, Part::Sidebar, Part::Panel, Part::AuxiliaryBar]
            .into_iter()
            .map(|part| {
                let size = model.layout.part(part);
                PartReport {
                    part,
                    width: size.width,
                    height: size.height,
                    visible: size.visible,
                }
            })
            .collect();

        Self {
            focus,
            error: model.ui.error_dialog.as_ref().map(|d| d.message.clone()),
            picker,
            status: model.ui.status_message.clone(),
            locations,
            parts,
        }
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        serde_yaml::to_string(self).map_err(|e| e.to_string())
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| e.to_string())
    }
}
