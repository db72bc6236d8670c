//! Hit areas for drag controls.
//!
//! Controls register their on-screen rect during rendering and the event
//! loop queries the registry to find which control a press landed on.

use ratatui::layout::Rect;

use crate::traits::ControlId;

/// A region of the screen owned by one control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to presses
    pub rect: Rect,
    /// The control drawn in that region
    pub control: ControlId,
}

impl HitArea {
    pub fn new(rect: Rect, control: ControlId) -> Self {
        Self { rect, control }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Registry of control hit areas, rebuilt on every render.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// Registered areas (later entries are on top)
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register the area a control was drawn in.
    pub fn register(&mut self, rect: Rect, control: ControlId) {
        self.areas.push(HitArea::new(rect, control));
    }

    /// Find the topmost control containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ControlId> {
        self.find_index(x, y).map(|i| self.areas[i].control)
    }

    /// Update hover state from a pointer position.
    ///
    /// Returns true if the hovered control changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    /// The control under the pointer, if any.
    pub fn hovered(&self) -> Option<ControlId> {
        self.hovered
            .and_then(|i| self.areas.get(i))
            .map(|area| area.control)
    }

    /// Where a control was last drawn.
    pub fn rect_of(&self, control: ControlId) -> Option<Rect> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.control == control)
            .map(|area| area.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        // Reverse: last registered is topmost
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}
