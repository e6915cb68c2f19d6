/// Storage shared by every result variant. The error side decides the state,
/// the value is only reachable while no error is stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Slot<V, E> {
    Value(V),
    Error(E),
}

impl<V, E> Slot<V, E> {
    #[inline]
    pub(crate) fn is_ok(&self) -> bool {
        matches!(self, Slot::Value(_))
    }

    #[inline]
    pub(crate) fn is_error(&self) -> bool {
        !self.is_ok()
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&V> {
        self.value_or_error().ok()
    }

    #[inline]
    pub(crate) fn error(&self) -> Option<&E> {
        self.value_or_error().err()
    }

    #[inline]
    pub(crate) fn value_or_error(&self) -> Result<&V, &E> {
        match self {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }

    #[inline]
    pub(crate) fn into_result(self) -> Result<V, E> {
        match self {
            Slot::Value(value) => Ok(value),
            Slot::Error(error) => Err(error),
        }
    }
}

impl<V, E> From<Result<V, E>> for Slot<V, E> {
    fn from(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Slot::Value(value),
            Err(error) => Slot::Error(error),
        }
    }
}
