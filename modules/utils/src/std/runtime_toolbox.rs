//! Toolboxes for hosted targets.
//!
//! [`StdToolbox`] is the one the std aliases of the stream types run on. [`SpinToolbox`] swaps
//! its plain locks for spinning ones and keeps the parking reentrant lock.

mod spin_toolbox;
mod std_mutex_families;
mod std_toolbox;
#[cfg(test)]
mod tests;

pub use spin_toolbox::SpinToolbox;
pub use std_mutex_families::{StdMutexFamily, StdReentrantMutexFamily};
pub use std_toolbox::StdToolbox;
