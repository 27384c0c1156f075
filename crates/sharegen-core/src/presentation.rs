//! Responsive presentation selection for the result area.
//!
//! Desktop viewports render the result area inline next to the form.
//! Constrained viewports render it as a full-viewport overlay that opens on
//! an explicit action and dismisses on close or on any input event outside
//! the overlay's rendered region.

use serde::{Deserialize, Serialize};

/// Breakpoint above which the tablet class ends and desktop begins.
const DESKTOP_MIN_WIDTH: u32 = 769;
/// Breakpoint above which the mobile class ends and tablet begins.
const TABLET_MIN_WIDTH: u32 = 641;

/// Viewport size class, recomputed on every viewport change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewportClass {
    Desktop,
    Tablet,
    Mobile,
}

impl ViewportClass {
    /// Classifies a viewport width in logical pixels.
    pub fn from_width(width: u32) -> Self {
        if width >= DESKTOP_MIN_WIDTH {
            Self::Desktop
        } else if width >= TABLET_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Mobile
        }
    }

    /// Whether the result area renders inline on this class.
    pub fn is_desktop(&self) -> bool {
        matches!(self, Self::Desktop)
    }
}

/// How the result area is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultLayout {
    /// Permanently visible panel next to the form (desktop).
    Inline,
    /// Transient full-viewport overlay (tablet/mobile).
    Overlay,
}

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned region in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Region {
    /// Whether the point falls inside this region.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Presentation state of the result area for one session.
///
/// Overlay visibility defaults to hidden and is retained across viewport
/// class changes; desktop ignores it entirely.
#[derive(Debug, Clone)]
pub struct PresentationState {
    viewport: ViewportClass,
    overlay_visible: bool,
    overlay_region: Option<Region>,
}

impl PresentationState {
    /// Creates presentation state for the given initial viewport class.
    pub fn new(viewport: ViewportClass) -> Self {
        Self {
            viewport,
            overlay_visible: false,
            overlay_region: None,
        }
    }

    /// Current viewport class.
    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    /// Recomputes the viewport class. Overlay visibility keeps its last
    /// value in both directions of a class change.
    pub fn set_viewport(&mut self, viewport: ViewportClass) {
        self.viewport = viewport;
    }

    /// Layout mode for the current viewport class.
    pub fn layout(&self) -> ResultLayout {
        if self.viewport.is_desktop() {
            ResultLayout::Inline
        } else {
            ResultLayout::Overlay
        }
    }

    /// Opens the overlay (the non-desktop "show result" control).
    pub fn show_overlay(&mut self) {
        self.overlay_visible = true;
    }

    /// Closes the overlay (explicit close control).
    pub fn hide_overlay(&mut self) {
        self.overlay_visible = false;
    }

    /// Records the overlay's rendered bounds for outside-click testing.
    pub fn set_overlay_region(&mut self, region: Option<Region>) {
        self.overlay_region = region;
    }

    /// Whether the result area is visible right now.
    ///
    /// Inline layout is always visible; overlay layout is visible only
    /// while the overlay is up.
    pub fn result_visible(&self) -> bool {
        match self.layout() {
            ResultLayout::Inline => true,
            ResultLayout::Overlay => self.overlay_visible,
        }
    }

    /// Feeds an input event for outside-click dismissal.
    ///
    /// Returns `true` when the event dismissed the overlay. Events inside
    /// the overlay's region, on desktop, or while the overlay is hidden
    /// change nothing. With no region registered every point counts as
    /// outside, matching click-away semantics.
    pub fn pointer_event(&mut self, point: Point) -> bool {
        if self.viewport.is_desktop() || !self.overlay_visible {
            return false;
        }
        let inside = self
            .overlay_region
            .is_some_and(|region| region.contains(point));
        if inside {
            return false;
        }
        self.overlay_visible = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_classification() {
        assert_eq!(ViewportClass::from_width(320), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(640), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(641), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(768), ViewportClass::Tablet);
        assert_eq!(ViewportClass::from_width(769), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1920), ViewportClass::Desktop);
    }

    #[test]
    fn test_desktop_ignores_overlay_state() {
        let mut state = PresentationState::new(ViewportClass::Desktop);
        assert_eq!(state.layout(), ResultLayout::Inline);
        assert!(state.result_visible());

        // Visibility flag has no effect inline.
        state.show_overlay();
        assert!(state.result_visible());
        state.hide_overlay();
        assert!(state.result_visible());

        // Outside clicks are inert on desktop.
        state.show_overlay();
        assert!(!state.pointer_event(Point { x: 5000.0, y: 5000.0 }));
    }

    #[test]
    fn test_mobile_result_requires_overlay() {
        let mut state = PresentationState::new(ViewportClass::Mobile);
        assert_eq!(state.layout(), ResultLayout::Overlay);
        assert!(!state.result_visible());
        state.show_overlay();
        assert!(state.result_visible());
        state.hide_overlay();
        assert!(!state.result_visible());
    }

    #[test]
    fn test_outside_click_dismisses() {
        let mut state = PresentationState::new(ViewportClass::Tablet);
        state.show_overlay();
        state.set_overlay_region(Some(Region {
            x: 100.0,
            y: 0.0,
            width: 500.0,
            height: 800.0,
        }));

        // Inside the region: stays up.
        assert!(!state.pointer_event(Point { x: 300.0, y: 400.0 }));
        assert!(state.result_visible());

        // Outside the region: dismissed.
        assert!(state.pointer_event(Point { x: 10.0, y: 400.0 }));
        assert!(!state.result_visible());

        // Further events while hidden change nothing.
        assert!(!state.pointer_event(Point { x: 10.0, y: 400.0 }));
    }

    #[test]
    fn test_unregistered_region_counts_as_outside() {
        let mut state = PresentationState::new(ViewportClass::Mobile);
        state.show_overlay();
        assert!(state.pointer_event(Point { x: 1.0, y: 1.0 }));
        assert!(!state.result_visible());
    }

    #[test]
    fn test_visibility_retained_across_class_changes() {
        let mut state = PresentationState::new(ViewportClass::Mobile);
        state.show_overlay();

        // Growing to desktop does not reset the flag...
        state.set_viewport(ViewportClass::Desktop);
        assert!(state.result_visible());

        // ...so shrinking back finds the overlay still up.
        state.set_viewport(ViewportClass::Mobile);
        assert!(state.result_visible());
    }
}
