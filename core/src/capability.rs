//!
//! Capability traits describing the two sides of a result.
//!
//! The value side and the error side are split into independent traits so that
//! code interested in only one of them (assertions in particular) can be written
//! against that side alone. [`ResultCapability`] composes both and adds the joint
//! queries that report the two sides in a single call.
//!

/// The value side of a result, without naming the value type.
pub trait ValueState {
    /// Returns `true` if the result is in an okay state.
    fn is_ok(&self) -> bool;
}

/// The value side of a result.
pub trait ValueCapability: ValueState {
    /// The type of the possible value.
    type Value;

    /// Returns the stored value if the result is in an okay state, `None` otherwise.
    fn value(&self) -> Option<&Self::Value>;
}

/// The error side of a result, without naming the error type.
pub trait ErrorState {
    /// Returns `true` if the result is in an errored state.
    fn is_error(&self) -> bool;
}

/// The error side of a result.
pub trait ErrorCapability: ErrorState {
    /// The type of the possible error.
    type Error;

    /// Returns the stored error if the result is in an errored state, `None` otherwise.
    fn error(&self) -> Option<&Self::Error>;
}

/// Both state queries of a result, without naming the value or the error type.
pub trait ResultState: ValueState + ErrorState {}

impl<R: ValueState + ErrorState + ?Sized> ResultState for R {}

/// A result value: exactly one of a value or an error is present.
pub trait ResultCapability: ValueCapability + ErrorCapability {
    /// Borrows whichever side is populated, value first.
    ///
    /// `Ok` is returned if and only if the result is in an okay state.
    fn value_or_error(&self) -> Result<&Self::Value, &Self::Error>;

    /// Borrows whichever side is populated, error first.
    ///
    /// `Ok` is returned if and only if the result is in an errored state, this is
    /// the exact negation of [`ResultCapability::value_or_error`].
    fn error_or_value(&self) -> Result<&Self::Error, &Self::Value> {
        match self.value_or_error() {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }
    }

    /// Consumes the result, returning the stored value or the stored error.
    fn try_unwrap(self) -> Result<Self::Value, Self::Error>
    where
        Self: Sized;
}

/// The value type of a result-capable type.
pub type ValueOf<R> = <R as ValueCapability>::Value;

/// The error type of a result-capable type.
pub type ErrorOf<R> = <R as ErrorCapability>::Error;

impl<V, E> ValueState for Result<V, E> {
    fn is_ok(&self) -> bool {
        Result::is_ok(self)
    }
}

impl<V, E> ValueCapability for Result<V, E> {
    type Value = V;

    fn value(&self) -> Option<&V> {
        self.as_ref().ok()
    }
}

impl<V, E> ErrorState for Result<V, E> {
    fn is_error(&self) -> bool {
        self.is_err()
    }
}

impl<V, E> ErrorCapability for Result<V, E> {
    type Error = E;

    fn error(&self) -> Option<&E> {
        self.as_ref().err()
    }
}

impl<V, E> ResultCapability for Result<V, E> {
    fn value_or_error(&self) -> Result<&V, &E> {
        self.as_ref()
    }

    fn try_unwrap(self) -> Result<V, E> {
        self
    }
}
