//! Slots in the host's named value store.
//!
//! A narrow facility for values backed by the host's separate key-value store
//! rather than per-widget configuration. The same lazy-cache pattern as
//! synchronized attributes applies: reads refresh the cache from the host,
//! writes update the cache and push through.

use crate::error::Result;
use crate::host::Host;
use crate::value::Value;

/// A handle to one entry in the host's value store.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSlot {
    key: String,
    cache: Value,
}

impl ValueSlot {
    /// Register the entry in the host's value store with its initial value.
    ///
    /// Key generation for anonymous slots is handled by
    /// [`Context::value_slot`](crate::context::Context::value_slot).
    pub(crate) fn create(host: &mut dyn Host, key: String, initial: Value) -> Result<Self> {
        host.set_value(&key, &initial)?;
        Ok(Self {
            key,
            cache: initial,
        })
    }

    /// The store key this slot is bound to.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the live value from the host, refreshing the cache.
    pub fn get(&mut self, host: &dyn Host) -> Result<Value> {
        let value = host.value(&self.key)?;
        self.cache = value.clone();
        Ok(value)
    }

    /// Write a value to the store and the cache.
    pub fn set(&mut self, host: &mut dyn Host, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        self.cache = value.clone();
        host.set_value(&self.key, &value)?;
        Ok(())
    }

    /// The last-known value without a host round-trip.
    pub fn cached(&self) -> &Value {
        &self.cache
    }
}
