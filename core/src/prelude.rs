pub use crate::capability::{ErrorCapability, ErrorOf, ErrorState, ResultCapability, ResultState, ValueCapability, ValueOf, ValueState};
pub use crate::result::{BoolResult, DynError, ValueErrorResult, ValueResult};
#[cfg(feature = "tokio")]
pub use crate::task::{JoinUnwrapError, JoinUnwrapExt};
pub use crate::unwrap::{UnwrapError, UnwrapFallibleFutureExt, UnwrapFutureExt, try_unwrap};
