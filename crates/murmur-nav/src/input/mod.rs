//! Key input abstraction layer.
//!
//! Exactly three logical keys exist on the device. Anything else never
//! enters this contract and is left unconsumed for the host framework.

pub mod mock;

/// Logical keys consumed by the navigation engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyEvent {
    Up,
    Down,
    Enter,
}

/// Polled key provider.
pub trait KeyProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error>;
}
