// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Provider: lazy, type-checked property slots.
//!
//! This crate provides a small primitive for configuration and build
//! orchestration layers: a slot whose value may be known now, known later, or
//! not at all, read through one uniform interface.
//!
//! ## Core Concepts
//!
//! ### Providers
//!
//! A [`Provider<T>`] produces a `T` lazily, at read time:
//!
//! - [`Absent`] - never has a value; one shared [`ABSENT`] constant serves
//!   every value type
//! - [`Fixed`] - always returns a value captured at construction
//! - [`FromFn`] - calls a closure on each read (see [`from_fn`])
//! - anything else implementing the trait
//!
//! ### Properties
//!
//! A [`Property<T>`] is bound to exactly one provider at a time. Assigning a
//! value or a provider swaps the binding; reads are delegated to whatever is
//! bound when the read happens. Nothing is cached between reads.
//!
//! ### Key Operations
//!
//! - `set(value)` / `set_optional(value)` / `clear()` - bind a value or unset
//! - `set_erased(value)` - bind a runtime-typed [`ErasedValue`], type-checked
//! - `set_provider(provider)` / `try_set_provider(provider)` - forward to a provider
//! - `get()` / `get_or_none()` / `is_present()` - read through the binding
//!
//! ## Quick Start
//!
//! ```rust
//! use understory_provider::{ErasedValue, NoValueError, Property, from_fn};
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use std::sync::Arc;
//!
//! let mut jobs = Property::<u32>::new();
//! assert_eq!(jobs.get(), Err(NoValueError));
//!
//! jobs.set(4);
//! assert_eq!(jobs.get(), Ok(4));
//!
//! // The value may instead come from somewhere else, resolved on each read.
//! let detected = Arc::new(AtomicU32::new(8));
//! let source = Arc::clone(&detected);
//! jobs.set_provider(from_fn(move || Some(source.load(Ordering::Relaxed))));
//! assert_eq!(jobs.get(), Ok(8));
//!
//! detected.store(16, Ordering::Relaxed);
//! assert_eq!(jobs.get(), Ok(16));
//!
//! // Values of unknown static type are checked at runtime.
//! let err = jobs.set_erased(ErasedValue::new("many")).unwrap_err();
//! assert_eq!(err.expected.name(), "u32");
//! assert_eq!(jobs.get(), Ok(16));
//! ```
//!
//! ## Errors
//!
//! | Error | Raised by |
//! |-------|-----------|
//! | [`NoValueError`] | `get` on an unset property or absent provider |
//! | [`InvalidTypeError`] | `set_erased` with a value of another type |
//! | [`MissingProviderError`] | `try_set_provider(None)` |
//!
//! All three convert into [`PropertyError`].
//!
//! ## Features
//!
//! - `tracing` - emit `trace` events on every rebinding and `debug` events on
//!   rejected assignments, under the `understory_provider` target.
//! - `std` - forward `std` to dependencies.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

#[cfg(feature = "tracing")]
macro_rules! trace_binding {
    ($ty:expr, $binding:expr) => {
        tracing::trace!(
            target: "understory_provider",
            value_type = %$ty,
            binding = $binding,
            "property rebound"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_binding {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug_rejected {
    ($expected:expr, $actual:expr) => {
        tracing::debug!(
            target: "understory_provider",
            expected = %$expected,
            actual = %$actual,
            "rejected assignment of mismatched type"
        )
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_rejected {
    ($($tt:tt)*) => {};
}

mod error;
mod property;
mod provider;
mod value;

pub use error::{InvalidTypeError, MissingProviderError, NoValueError, PropertyError};
pub use property::{Property, SharedProvider};
pub use provider::{ABSENT, Absent, Fixed, FromFn, Provider, from_fn};
pub use value::{ErasedValue, ValueType};
