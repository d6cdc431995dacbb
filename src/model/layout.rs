//! Part sizes and visibility - the in-memory layout host
//!
//! The real renderer owns pixel layout. This host keeps just enough state for
//! resize commands and reveal requests to have an observable effect: a
//! logical size and an open flag per part.

use crate::resize::Part;

/// Primitive operations the placement and resize logic needs from a layout
pub trait LayoutHost {
    /// Grow or shrink a part by a percentage of the window size per axis
    ///
    /// Hidden parts are resized too and keep the new size for their next
    /// reveal.
    fn resize_part(&mut self, part: Part, width_delta: f32, height_delta: f32);

    fn is_part_visible(&self, part: Part) -> bool;

    fn set_part_visible(&mut self, part: Part, visible: bool);
}

/// Size of a single part in logical pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartSize {
    pub width: f32,
    pub height: f32,
    pub visible: bool,
}

/// Sizes of all parts for a given window
#[derive(Debug, Clone, PartialEq)]
pub struct PartLayout {
    pub window_size: (u32, u32),
    /// Smallest size a part may shrink to
    pub min_size: f32,
    /// Largest share of the window a side part may take
    pub max_fraction: f32,
    pub editor: PartSize,
    pub sidebar: PartSize,
    pub panel: PartSize,
    pub auxiliary_bar: PartSize,
}

impl PartLayout {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        let (w, h) = (window_width as f32, window_height as f32);
        Self {
            window_size: (window_width, window_height),
            min_size: 150.0,
            max_fraction: 0.8,
            editor: PartSize {
                width: w,
                height: h,
                visible: true,
            },
            sidebar: PartSize {
                width: 250.0,
                height: h,
                visible: true,
            },
            panel: PartSize {
                width: w,
                height: 200.0,
                visible: false,
            },
            auxiliary_bar: PartSize {
                width: 300.0,
                height: h,
                visible: false,
            },
        }
    }

    /// Set the clamping limits (builder pattern)
    pub fn with_limits(mut self, min_size: f32, max_fraction: f32) -> Self {
        self.min_size = min_size;
        self.max_fraction = max_fraction;
        self
    }

    pub fn part(&self, part: Part) -> &PartSize {
        match part {
            Part::Editor => &self.editor,
            Part::Sidebar => &self.sidebar,
            Part::Panel => &self.panel,
            Part::AuxiliaryBar => &self.auxiliary_bar,
        }
    }

    pub fn part_mut(&mut self, part: Part) -> &mut PartSize {
        match part {
            Part::Editor => &mut self.editor,
            Part::Sidebar => &mut self.sidebar,
            Part::Panel => &mut self.panel,
            Part::AuxiliaryBar => &mut self.auxiliary_bar,
        }
    }

    /// Window resized; parts keep their sizes and are re-clamped on next resize
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Side parts are capped at `max_fraction` of the window along the axis
    /// they dock on; every other dimension is capped at the window itself.
    fn clamp(&self, part: Part, value: f32, window_dim: f32, is_width: bool) -> f32 {
        let docked_axis = match part {
            Part::Editor => false,
            Part::Sidebar | Part::AuxiliaryBar => is_width,
            Part::Panel => !is_width,
        };
        let max = if docked_axis {
            window_dim * self.max_fraction
        } else {
            window_dim
        };
        value.max(self.min_size).min(max.max(self.min_size))
    }
}

impl LayoutHost for PartLayout {
    fn resize_part(&mut self, part: Part, width_delta: f32, height_delta: f32) {
        let (win_w, win_h) = (self.window_size.0 as f32, self.window_size.1 as f32);
        let current = *self.part(part);

        let width = self.clamp(part, current.width + win_w * width_delta / 100.0, win_w, true);
        let height = self.clamp(part, current.height + win_h * height_delta / 100.0, win_h, false);

        let size = self.part_mut(part);
        if width_delta != 0.0 {
            size.width = width;
        }
        if height_delta != 0.0 {
            size.height = height;
        }
        tracing::debug!(
            "Resized {:?} to {:.0}x{:.0}",
            part,
            size.width,
            size.height
        );
    }

    fn is_part_visible(&self, part: Part) -> bool {
        self.part(part).visible
    }

    fn set_part_visible(&mut self, part: Part, visible: bool) {
        self.part_mut(part).visible = visible;
    }
}

impl Default for PartLayout {
    fn default() -> Self {
        Self::new(1280, 800)
    }
}
