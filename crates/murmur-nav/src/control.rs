//! Control descriptors supplied by the active screen.

use bitflags::bitflags;

/// Opaque identity of a navigable control. Compared by value.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlId(pub u16);

bitflags! {
    /// Interaction surfaces a control exposes to the engine.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Capabilities: u8 {
        /// Explicit activation handler, dispatched first on Enter.
        const ACTIVATE = 1 << 0;
        /// Toggle handler, dispatched when no explicit handler exists.
        const TOGGLE = 1 << 1;
        /// Generic activated handler, dispatched last.
        const ACTIVATED = 1 << 2;
        /// Enter starts a modal session where Up/Down adjust an inner value.
        const VALUE_ADJUST = 1 << 3;
        /// Enter toggles scroll mode when the backing region overflows.
        const SCROLL_TOGGLE = 1 << 4;
    }
}

impl Capabilities {
    /// Whether Enter can dispatch any activation handler at all.
    pub fn activatable(self) -> bool {
        self.intersects(Self::ACTIVATE | Self::TOGGLE | Self::ACTIVATED)
    }
}

/// Extent of a control along the scroll axis, relative to the registered
/// container's content origin. Used only for scroll-into-view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Bounds {
    pub top: i32,
    pub extent: i32,
}

impl Bounds {
    pub const fn new(top: i32, extent: i32) -> Self {
        Self { top, extent }
    }

    pub fn bottom(self) -> i32 {
        self.top.saturating_add(self.extent)
    }
}

/// One navigable control as the active screen registers it.
///
/// Screens construct these fresh every time their content settles; the
/// engine never holds a spec across a rebuild.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ControlSpec {
    pub id: ControlId,
    pub caps: Capabilities,
    pub visible: bool,
    pub enabled: bool,
    pub bounds: Bounds,
}

impl ControlSpec {
    /// A visible, enabled control. Hidden/disabled variants set the flags directly.
    pub const fn new(id: ControlId, caps: Capabilities, bounds: Bounds) -> Self {
        Self {
            id,
            caps,
            visible: true,
            enabled: true,
            bounds,
        }
    }

    /// Only visible and enabled controls enter the registry.
    pub fn navigable(&self) -> bool {
        self.visible && self.enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_activation_handler_makes_a_control_activatable() {
        assert!(Capabilities::TOGGLE.activatable());
        assert!(Capabilities::ACTIVATED.activatable());
        assert!(!(Capabilities::VALUE_ADJUST | Capabilities::SCROLL_TOGGLE).activatable());
    }

    #[test]
    fn hidden_or_disabled_controls_are_not_navigable() {
        let mut spec = ControlSpec::new(ControlId(0), Capabilities::ACTIVATE, Bounds::new(0, 40));
        assert!(spec.navigable());
        spec.visible = false;
        assert!(!spec.navigable());
        spec.visible = true;
        spec.enabled = false;
        assert!(!spec.navigable());
    }
}
