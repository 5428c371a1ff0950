use super::{KeyEvent, KeyProvider};

/// No-hardware key source used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockKeys;

impl MockKeys {
    pub const fn new() -> Self {
        Self
    }
}

impl KeyProvider for MockKeys {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<KeyEvent>, Self::Error> {
        Ok(None)
    }
}
