//!
//! Assertions over the state of verdict results.
//!
//! Assertions check a result and report mismatches to an [`AssertSink`], they
//! return the sink so several checks can be chained. Two families exist:
//! [`ComponentAsserts`] needs only one side of a result, [`ResultAsserts`] needs
//! the combined capability and reports the content of the other side as well.
//!
//! ```ignore
//! use verdict_asserts::{PanicSink, ResultAsserts, call_site};
//! use verdict_core::prelude::*;
//!
//! let result = BoolResult::from_value(true);
//! PanicSink.assert_ok(&result, call_site!(result)).assert_not_error(&result, call_site!(result));
//! ```
//!

extern crate self as verdict_asserts;

pub mod component;
pub mod result;
pub mod sink;
pub mod site;

pub use component::ComponentAsserts;
pub use result::ResultAsserts;
pub use sink::{AssertSink, LogSink, PanicSink, RecordingSink};
pub use site::{CallSite, UNKNOWN_EXPRESSION};
