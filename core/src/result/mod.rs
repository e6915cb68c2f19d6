//!
//! Concrete result types.
//!
//! All variants store their content in a single tagged slot, so a result holds
//! either a value or an error and never both. Results are immutable once built.
//!

use std::{error::Error, sync::Arc};

mod boolean;
mod slot;
mod value;
mod value_error;

pub use boolean::BoolResult;
pub use value::ValueResult;
pub use value_error::ValueErrorResult;

/// The error type of [`BoolResult`] and [`ValueResult`].
///
/// Shared ownership keeps the identity of the original error across clones
/// and unwraps, use [`Arc::ptr_eq`] to compare two of them.
pub type DynError = Arc<dyn Error + Send + Sync + 'static>;

/// Implements the capability traits for a variant by delegating to its slot.
macro_rules! impl_capabilities {
    ($ty:ty, $value:ty, $error:ty $(, $generic:ident)*) => {
        impl<$($generic),*> $crate::capability::ValueState for $ty {
            #[inline]
            fn is_ok(&self) -> bool {
                self.slot.is_ok()
            }
        }

        impl<$($generic),*> $crate::capability::ValueCapability for $ty {
            type Value = $value;

            #[inline]
            fn value(&self) -> Option<&$value> {
                self.slot.value()
            }
        }

        impl<$($generic),*> $crate::capability::ErrorState for $ty {
            #[inline]
            fn is_error(&self) -> bool {
                self.slot.is_error()
            }
        }

        impl<$($generic),*> $crate::capability::ErrorCapability for $ty {
            type Error = $error;

            #[inline]
            fn error(&self) -> Option<&$error> {
                self.slot.error()
            }
        }

        impl<$($generic),*> $crate::capability::ResultCapability for $ty {
            #[inline]
            fn value_or_error(&self) -> Result<&$value, &$error> {
                self.slot.value_or_error()
            }

            fn try_unwrap(self) -> Result<$value, $error> {
                self.slot.into_result()
            }
        }

        impl<$($generic),*> From<Result<$value, $error>> for $ty {
            fn from(result: Result<$value, $error>) -> Self {
                Self { slot: result.into() }
            }
        }

        impl<$($generic),*> From<$ty> for Result<$value, $error> {
            fn from(result: $ty) -> Self {
                result.slot.into_result()
            }
        }
    };
}

pub(crate) use impl_capabilities;
