//! Navigation engine: mode state machine, key dispatch and screen lifecycle.

use heapless::Vec;
use log::{debug, warn};

use crate::control::{Capabilities, ControlId, ControlSpec};
use crate::input::{KeyEvent, KeyProvider};
use crate::registry::{self, ContainerId, Direction, FocusRegistry, MAX_CONTROLS};
use crate::surface::{ControlSurface, KeyFocusHost, ScrollRegion};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// Engine tunables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EngineConfig {
    /// Pixels the viewport moves per direction-key press while scrolling.
    pub scroll_step: i32,
    /// Cadence of the key-focus ownership safety-net poll.
    pub focus_poll_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scroll_step: 48,
            focus_poll_ms: 1_000,
        }
    }
}

/// How Up/Down/Enter are being interpreted right now. One mode exists for
/// the whole device; there is only one physical input path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Mode {
    Normal,
    ValueAdjust { index: usize },
    ScrollLock { index: usize },
}

/// A rebuild waiting for the next tick. A later request replaces it.
struct PendingRebuild {
    controls: Vec<ControlSpec, MAX_CONTROLS>,
    container: Option<ContainerId>,
}

/// The navigation engine, constructed once at startup.
///
/// Owns the host surface and the key provider the way the device app owns
/// its collaborators; screens talk to it through the lifecycle calls and
/// everything else happens inside [`tick`](Self::tick).
pub struct NavigationEngine<S, K>
where
    S: ControlSurface + ScrollRegion + KeyFocusHost,
    K: KeyProvider,
{
    surface: S,
    keys: K,
    config: EngineConfig,
    registry: FocusRegistry,
    mode: Mode,
    pending_rebuild: Option<PendingRebuild>,
    focus_before_modal: Option<ControlId>,
    warned_empty: bool,
    pending_redraw: bool,
    next_focus_poll_ms: u64,
}

impl<S, K> NavigationEngine<S, K>
where
    S: ControlSurface + ScrollRegion + KeyFocusHost,
    K: KeyProvider,
{
    pub fn new(surface: S, keys: K, config: EngineConfig) -> Self {
        Self {
            surface,
            keys,
            config,
            registry: FocusRegistry::new(),
            mode: Mode::Normal,
            pending_rebuild: None,
            focus_before_modal: None,
            warned_empty: false,
            pending_redraw: false,
            next_focus_poll_ms: 0,
        }
    }

    /// Host surface, for rendering and widget updates outside the engine.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Id of the control currently carrying visual focus.
    pub fn focused_control(&self) -> Option<ControlId> {
        self.registry.focused_entry().map(|(_, spec)| spec.id)
    }

    /// Number of controls the active screen registered.
    pub fn control_count(&self) -> usize {
        self.registry.len()
    }
}

include!("keys.rs");
include!("lifecycle.rs");
