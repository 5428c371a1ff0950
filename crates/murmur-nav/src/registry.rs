//! Ordered registry of the active screen's navigable controls.

use heapless::Vec;
use log::{debug, warn};

use crate::control::{ControlId, ControlSpec};
use crate::scroll;
use crate::surface::{ControlSurface, ScrollRegion};

/// Upper bound on registered controls per screen. Device screens carry a
/// handful; the cap exists so a runaway screen cannot grow the list.
pub const MAX_CONTROLS: usize = 16;

/// Identity of the screen's scrollable region, carried for diagnostics.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ContainerId(pub u16);

/// Traversal direction for the two direction keys.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
}

/// Intake filter shared by immediate and deferred registration: drops
/// hidden/disabled controls and truncates past [`MAX_CONTROLS`].
pub(crate) fn bounded_list(controls: &[ControlSpec]) -> Vec<ControlSpec, MAX_CONTROLS> {
    let mut list: Vec<ControlSpec, MAX_CONTROLS> = Vec::new();
    let mut dropped = 0usize;

    for spec in controls {
        if !spec.navigable() {
            debug!("nav: skipping non-navigable control id={}", spec.id.0);
            continue;
        }
        if list.push(*spec).is_err() {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(
            "nav: control list truncated to {} entries, dropped {}",
            MAX_CONTROLS, dropped
        );
    }

    list
}

/// Owns the ordered control list and the index of the focused control.
///
/// Replaced wholesale on every screen transition. If the list is non-empty,
/// exactly one control carries the visual-focus flag and it is the entry at
/// the focused index.
pub struct FocusRegistry {
    controls: Vec<ControlSpec, MAX_CONTROLS>,
    focused: Option<usize>,
    container: Option<ContainerId>,
}

impl FocusRegistry {
    pub(crate) const fn new() -> Self {
        Self {
            controls: Vec::new(),
            focused: None,
            container: None,
        }
    }

    /// Atomically replace the control list and container. Focus lands on the
    /// first control (or nothing when the list is empty). Idempotent; safe to
    /// call repeatedly while a screen's content settles.
    pub(crate) fn initialize<S>(
        &mut self,
        surface: &mut S,
        controls: &[ControlSpec],
        container: Option<ContainerId>,
    ) where
        S: ControlSurface + ScrollRegion,
    {
        for spec in &self.controls {
            surface.set_visual_focus(spec.id, false);
        }

        self.controls = bounded_list(controls);
        self.container = container;

        if self.controls.is_empty() {
            self.focused = None;
            debug!("nav: registry initialized empty");
            return;
        }

        self.focused = Some(0);
        self.apply_exclusive_focus(surface, 0);
        self.scroll_focused_into_view(surface);
        debug!(
            "nav: registry initialized controls={} container={:?}",
            self.controls.len(),
            self.container.map(|c| c.0)
        );
    }

    /// Move focus to the control with the given id. Unknown ids are a logged
    /// no-op; the focus invariant is untouched.
    pub(crate) fn focus_id<S>(&mut self, surface: &mut S, id: ControlId) -> bool
    where
        S: ControlSurface + ScrollRegion,
    {
        let Some(index) = self.controls.iter().position(|spec| spec.id == id) else {
            warn!("nav: focus request for unregistered control id={}", id.0);
            return false;
        };

        self.focus_index(surface, index);
        true
    }

    pub(crate) fn focus_index<S>(&mut self, surface: &mut S, index: usize)
    where
        S: ControlSurface + ScrollRegion,
    {
        let Some(spec) = self.controls.get(index).copied() else {
            warn!("nav: focus index {} out of range", index);
            return;
        };

        self.focused = Some(index);
        self.apply_exclusive_focus(surface, index);
        self.scroll_focused_into_view(surface);
        debug!("nav: focus index={} id={}", index, spec.id.0);
    }

    /// Drop visual focus everywhere, e.g. while a modal takeover owns the
    /// screen with its own registry. The control list stays registered.
    pub(crate) fn clear<S: ControlSurface>(&mut self, surface: &mut S) {
        for spec in &self.controls {
            surface.set_visual_focus(spec.id, false);
        }
        self.focused = None;
    }

    /// Index next to the focused one in `dir`, without wraparound. With
    /// nothing focused, the entry nearest the travel origin is returned.
    pub(crate) fn adjacent(&self, dir: Direction) -> Option<usize> {
        match self.focused {
            Some(index) => match dir {
                Direction::Up => index.checked_sub(1),
                Direction::Down => {
                    let next = index + 1;
                    (next < self.controls.len()).then_some(next)
                }
            },
            None if !self.controls.is_empty() => Some(match dir {
                Direction::Down => 0,
                Direction::Up => self.controls.len() - 1,
            }),
            None => None,
        }
    }

    /// Opposite-end index for wraparound, `None` on an empty list.
    pub(crate) fn wrap_target(&self, dir: Direction) -> Option<usize> {
        if self.controls.is_empty() {
            return None;
        }
        Some(match dir {
            Direction::Down => 0,
            Direction::Up => self.controls.len() - 1,
        })
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.controls.len()
    }

    pub(crate) fn has_container(&self) -> bool {
        self.container.is_some()
    }

    pub(crate) fn focused_entry(&self) -> Option<(usize, ControlSpec)> {
        let index = self.focused?;
        self.controls.get(index).map(|spec| (index, *spec))
    }

    pub(crate) fn control_at(&self, index: usize) -> Option<ControlSpec> {
        self.controls.get(index).copied()
    }

    fn apply_exclusive_focus<S: ControlSurface>(&self, surface: &mut S, index: usize) {
        for (i, spec) in self.controls.iter().enumerate() {
            surface.set_visual_focus(spec.id, i == index);
        }
    }

    fn scroll_focused_into_view<S: ScrollRegion>(&self, surface: &mut S) {
        if self.container.is_none() {
            return;
        }
        let Some(index) = self.focused else {
            return;
        };
        let Some(metrics) = surface.scroll_metrics() else {
            debug!("nav: container metrics unavailable, skipping scroll-into-view");
            return;
        };

        if let Some(target) = scroll::scroll_into_view(self.controls[index].bounds, metrics) {
            surface.set_scroll_offset(target);
        }
    }
}
