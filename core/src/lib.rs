extern crate self as verdict_core;

pub mod capability;
pub mod prelude;
pub mod result;
#[cfg(feature = "tokio")]
pub mod task;
pub mod unwrap;
