//! Quick-pick state for the move-view flow
//!
//! A picker is opened by a command and then waits: further input arrives as
//! `ModalMsg`s, and the flow resumes when the user confirms an item or
//! dismisses the picker. Rendering is left to the host.

use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::placement::{Destination, DestinationEntry, MovableViewGroup};
use crate::registry::ViewId;

/// What a picker entry resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTarget {
    View(ViewId),
    Destination(Destination),
}

/// A row in a picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickItem {
    /// Group heading, never selectable
    Separator(String),
    Entry { label: String, target: PickTarget },
}

impl PickItem {
    pub fn label(&self) -> &str {
        match self {
            PickItem::Separator(label) => label,
            PickItem::Entry { label, .. } => label,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, PickItem::Separator(_))
    }
}

/// Why the picker is open, and so what happens on confirm
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerPurpose {
    /// Choose which view to move
    SelectView,
    /// Choose where the given view goes
    SelectDestination(ViewId),
}

/// How a pending pick resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome<T> {
    Selected(T),
    Cancelled,
}

/// State of an open picker
#[derive(Debug, Clone)]
pub struct PickerState {
    pub purpose: PickerPurpose,
    pub placeholder: String,
    pub items: Vec<PickItem>,
    /// Filter text
    pub input: String,
    /// Index into the selectable entries of the filtered list
    pub selected_index: usize,
}

impl PickerState {
    pub fn new(purpose: PickerPurpose, placeholder: impl Into<String>, items: Vec<PickItem>) -> Self {
        Self {
            purpose,
            placeholder: placeholder.into(),
            items,
            input: String::new(),
            selected_index: 0,
        }
    }

    /// Picker listing movable views under their container titles
    pub fn for_views(groups: &[MovableViewGroup<'_>]) -> Self {
        let mut items = Vec::new();
        for group in groups {
            items.push(PickItem::Separator(group.title.to_string()));
            items.extend(group.views.iter().map(|view| PickItem::Entry {
                label: view.name.clone(),
                target: PickTarget::View(view.id.clone()),
            }));
        }
        Self::new(PickerPurpose::SelectView, "Select a View to Move", items)
    }

    /// Picker listing where a view can go
    pub fn for_destinations(view_id: ViewId, entries: Vec<DestinationEntry>) -> Self {
        let items = entries
            .into_iter()
            .map(|entry| match entry {
                DestinationEntry::Separator(label) => PickItem::Separator(label),
                DestinationEntry::Option { destination, label } => PickItem::Entry {
                    label,
                    target: PickTarget::Destination(destination),
                },
            })
            .collect();
        Self::new(
            PickerPurpose::SelectDestination(view_id),
            "Select a Destination for the View",
            items,
        )
    }

    /// Items matching the filter text
    ///
    /// Order is preserved. A separator survives only while it heads at least
    /// one matching entry.
    pub fn visible_items(&self) -> Vec<&PickItem> {
        let query = self.input.trim();
        if query.is_empty() {
            return self.items.iter().collect();
        }

        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        let mut result = Vec::new();
        let mut pending_separator: Option<&PickItem> = None;
        for item in &self.items {
            if item.is_separator() {
                pending_separator = Some(item);
                continue;
            }
            let haystack = Utf32Str::new(item.label(), &mut buf);
            if pattern.score(haystack, &mut matcher).is_some() {
                if let Some(separator) = pending_separator.take() {
                    result.push(separator);
                }
                result.push(item);
            }
        }
        result
    }

    /// Selectable entries after filtering
    pub fn entries(&self) -> Vec<&PickItem> {
        self.visible_items()
            .into_iter()
            .filter(|item| !item.is_separator())
            .collect()
    }

    pub fn selected(&self) -> Option<&PickItem> {
        self.entries().get(self.selected_index).copied()
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
        self.selected_index = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
        self.selected_index = 0;
    }

    pub fn delete_backward(&mut self) {
        self.input.pop();
        self.selected_index = 0;
    }

    pub fn select_next(&mut self) {
        let count = self.entries().len();
        if count > 0 {
            self.selected_index = (self.selected_index + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.entries().len();
        if count > 0 {
            self.selected_index = (self.selected_index + count - 1) % count;
        }
    }

    /// Resolve the pick with the highlighted entry
    ///
    /// Confirming with nothing matching counts as a dismissal.
    pub fn accept(&self) -> PickOutcome<PickTarget> {
        match self.selected() {
            Some(PickItem::Entry { target, .. }) => PickOutcome::Selected(target.clone()),
            _ => PickOutcome::Cancelled,
        }
    }
}
