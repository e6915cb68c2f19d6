use super::{impl_capabilities, slot::Slot};

/// A result with a possible value of type `V` and a possible error of type `E`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ValueErrorResult<V, E> {
    slot: Slot<V, E>,
}

impl<V, E> ValueErrorResult<V, E> {
    /// Creates a result in an okay state.
    pub fn from_value(value: V) -> Self {
        Self { slot: Slot::Value(value) }
    }

    /// Creates a result in an errored state.
    pub fn from_error(error: E) -> Self {
        Self { slot: Slot::Error(error) }
    }

    /// Returns the stored value, or the stored error if the result is in an errored state.
    pub fn try_unwrap(self) -> Result<V, E> {
        self.slot.into_result()
    }
}

impl_capabilities!(ValueErrorResult<V, E>, V, E, V, E);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{ErrorCapability, ResultCapability, ValueCapability};

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    enum Rejection {
        TooLarge,
    }

    #[test]
    fn test_joint_queries_on_value() {
        let result = ValueErrorResult::<bool, Rejection>::from_value(true);
        assert_eq!(result.value_or_error(), Ok(&true));
        assert_eq!(result.error_or_value(), Err(&true));
        assert_eq!(result.error(), None);
    }

    #[test]
    fn test_joint_queries_on_error() {
        let result = ValueErrorResult::<bool, Rejection>::from_error(Rejection::TooLarge);
        assert_eq!(result.value_or_error(), Err(&Rejection::TooLarge));
        assert_eq!(result.error_or_value(), Ok(&Rejection::TooLarge));
        assert_eq!(result.value(), None);
        assert_eq!(result.try_unwrap(), Err(Rejection::TooLarge));
    }

    #[test]
    fn test_copy_and_equality() {
        let result = ValueErrorResult::<u64, Rejection>::from_value(42);
        let copy = result;
        assert_eq!(result, copy);
        assert_ne!(result, ValueErrorResult::from_error(Rejection::TooLarge));
        let converted: Result<u64, Rejection> = copy.into();
        assert_eq!(converted, Ok(42));
    }
}
