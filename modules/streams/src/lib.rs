#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::must_use_candidate)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![no_std]

//! Backpressure-aware stream coordination.
//!
//! A [`Source`](crate::core::Source) hands a [`Subscription`](crate::core::Subscription) to a
//! [`Receiver`](crate::core::Receiver), which then advertises how many values it can accept.
//! The [`SinkGeneric`](crate::core::SinkGeneric) adapter bridges one source to one receiver
//! through a [`DemandBufferGeneric`](crate::core::DemandBufferGeneric), which reconciles
//! downstream demand with buffered values and delivers at most one terminal signal.
//! Cancellation is routed through a single-execution primitive so it takes effect exactly once.
//!
//! Everything in `core` is generic over a
//! [`RuntimeToolbox`](flowlatch_utils_rs::core::runtime_toolbox::RuntimeToolbox); the `std`
//! module pins the toolbox and adds a tokio-backed scheduler.

extern crate alloc;

/// Runtime-agnostic stream coordination primitives.
pub mod core;
/// Std-specific aliases and executors.
#[cfg(feature = "std")]
pub mod std;
