//! Action tweaks.

use std::fmt;

use crate::tweak::{validate_naming, Tweak, TweakResult};
use crate::value::TweakValue;

/// A tweak whose payload is a zero-argument block of work.
///
/// The block is not data: it is never represented as a
/// [`TweakValue`], never persisted, and [`Tweak::current_value`] is always
/// `None`. Invoking performs whatever side effects the host supplied; the
/// tweak keeps no bookkeeping around invocation.
pub struct ActionTweak {
    identifier: String,
    name: String,
    block: Box<dyn Fn() + Send + Sync>,
}

impl ActionTweak {
    /// Create an action tweak. Fails on an empty identifier or name.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        block: impl Fn() + Send + Sync + 'static,
    ) -> TweakResult<Self> {
        let identifier = identifier.into();
        let name = name.into();
        validate_naming(&identifier, &name)?;
        Ok(Self {
            identifier,
            name,
            block: Box::new(block),
        })
    }

    /// Run the underlying block.
    pub fn invoke(&self) {
        (self.block)();
    }
}

impl Tweak for ActionTweak {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn current_value(&self) -> Option<TweakValue> {
        None
    }
}

impl fmt::Debug for ActionTweak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionTweak")
            .field("identifier", &self.identifier)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
