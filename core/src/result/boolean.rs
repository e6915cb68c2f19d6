use super::{DynError, impl_capabilities, slot::Slot};

/// A result with a possible [`bool`] value and a possible [`DynError`] error.
#[derive(Clone, Debug)]
pub struct BoolResult {
    slot: Slot<bool, DynError>,
}

impl BoolResult {
    /// Creates a result in an okay state.
    pub fn from_value(value: bool) -> Self {
        Self { slot: Slot::Value(value) }
    }

    /// Creates a result in an errored state.
    pub fn from_error(error: DynError) -> Self {
        Self { slot: Slot::Error(error) }
    }

    /// Returns the stored value, or the stored error if the result is in an errored state.
    pub fn try_unwrap(self) -> Result<bool, DynError> {
        self.slot.into_result()
    }
}

impl_capabilities!(BoolResult, bool, DynError);
