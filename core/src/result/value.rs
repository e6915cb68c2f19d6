use super::{DynError, impl_capabilities, slot::Slot};

/// A result with a possible value of type `V` and a possible [`DynError`] error.
///
/// `V` may itself be optional, `ValueResult<Option<T>>` in an okay state with a
/// `None` value is still okay.
#[derive(Clone, Debug)]
pub struct ValueResult<V> {
    slot: Slot<V, DynError>,
}

impl<V> ValueResult<V> {
    /// Creates a result in an okay state.
    pub fn from_value(value: V) -> Self {
        Self { slot: Slot::Value(value) }
    }

    /// Creates a result in an errored state.
    pub fn from_error(error: DynError) -> Self {
        Self { slot: Slot::Error(error) }
    }

    /// Returns the stored value, or the stored error if the result is in an errored state.
    pub fn try_unwrap(self) -> Result<V, DynError> {
        self.slot.into_result()
    }
}

impl_capabilities!(ValueResult<V>, V, DynError, V);
