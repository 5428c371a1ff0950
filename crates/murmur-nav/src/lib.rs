//! Three-key focus navigation for the Murmur e-ink assistant.
//!
//! Turns an Up/Down/Enter key stream into deterministic focus traversal,
//! viewport scrolling and modal value/scroll sub-interactions. Rendering,
//! input hardware and the scrollable region live host-side behind the
//! traits in [`surface`] and [`input`].
#![no_std]

pub mod control;
pub mod engine;
pub mod input;
pub mod registry;
pub mod scroll;
pub mod surface;

pub use control::{Bounds, Capabilities, ControlId, ControlSpec};
pub use engine::{EngineConfig, NavigationEngine, TickResult};
pub use registry::{ContainerId, MAX_CONTROLS};
pub use scroll::ScrollMetrics;
