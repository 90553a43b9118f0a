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

//! Synchronization utilities shared by the flowlatch crates.
//!
//! The `core` module carries the runtime-agnostic abstractions: mutex traits, the
//! families that construct them, the [`RuntimeToolbox`](crate::core::runtime_toolbox::RuntimeToolbox)
//! that selects a family, and the shared-ownership handles. The `std` module plugs
//! `std::sync::Mutex` and `parking_lot::ReentrantMutex` into those abstractions.

extern crate alloc;

/// Runtime-agnostic abstractions.
pub mod core;
/// Implementations backed by the standard library.
#[cfg(feature = "std")]
pub mod std;
