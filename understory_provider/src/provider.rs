// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Provider`] capability and its built-in variants.
//!
//! A provider produces a value of some type lazily, at read time. This module
//! defines the trait plus the three shapes a [`Property`](crate::Property)
//! binds to out of the box:
//!
//! - [`Absent`] - never has a value (shared as [`ABSENT`])
//! - [`Fixed`] - always returns one captured value
//! - [`FromFn`] - asks a closure on every read
//!
//! Any other type implementing [`Provider`] can be bound as well.

use alloc::boxed::Box;
use alloc::sync::Arc;
use core::fmt;

use crate::error::NoValueError;

/// A read-only source of a lazily resolved value of type `T`.
///
/// Only [`get_or_none`](Provider::get_or_none) is required. The other reads
/// are derived from it, and implementors that override
/// [`is_present`](Provider::is_present) must keep it in agreement:
/// `is_present()` is `true` exactly when `get_or_none()` is `Some`.
///
/// Providers are resolved on every read and nothing is cached, so a stateful
/// provider may return a different value each time.
///
/// # Example
///
/// ```rust
/// use understory_provider::{ABSENT, Fixed, NoValueError, Provider};
///
/// let fixed = Fixed::new(3_u8);
/// assert_eq!(fixed.get(), Ok(3));
/// assert!(fixed.is_present());
///
/// let absent: &dyn Provider<u8> = &ABSENT;
/// assert_eq!(absent.get(), Err(NoValueError));
/// assert_eq!(absent.get_or_else(7), 7);
/// ```
pub trait Provider<T> {
    /// Returns the current value, or `None` if there is none.
    fn get_or_none(&self) -> Option<T>;

    /// Returns the current value.
    ///
    /// # Errors
    ///
    /// Returns [`NoValueError`] if the provider has no value.
    fn get(&self) -> Result<T, NoValueError> {
        self.get_or_none().ok_or(NoValueError)
    }

    /// Returns `true` if the provider currently has a value.
    fn is_present(&self) -> bool {
        self.get_or_none().is_some()
    }

    /// Returns the current value, or `default` if there is none.
    fn get_or_else(&self, default: T) -> T {
        self.get_or_none().unwrap_or(default)
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for &P {
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        (**self).get_or_none()
    }

    #[inline]
    fn get(&self) -> Result<T, NoValueError> {
        (**self).get()
    }

    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Box<P> {
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        (**self).get_or_none()
    }

    #[inline]
    fn get(&self) -> Result<T, NoValueError> {
        (**self).get()
    }

    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<T, P: Provider<T> + ?Sized> Provider<T> for Arc<P> {
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        (**self).get_or_none()
    }

    #[inline]
    fn get(&self) -> Result<T, NoValueError> {
        (**self).get()
    }

    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

/// The provider that never has a value.
///
/// `Absent` is zero-sized and implements [`Provider<T>`] for every `T`, so a
/// single [`ABSENT`] constant serves every property regardless of its value
/// type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Absent;

/// The shared [`Absent`] provider.
pub const ABSENT: Absent = Absent;

impl<T> Provider<T> for Absent {
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        None
    }

    #[inline]
    fn get(&self) -> Result<T, NoValueError> {
        Err(NoValueError)
    }

    #[inline]
    fn is_present(&self) -> bool {
        false
    }
}

/// A provider that always returns one value captured at construction.
///
/// Reads hand out clones of the captured value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fixed<T> {
    value: T,
}

impl<T> Fixed<T> {
    /// Creates a provider that always returns `value`.
    #[must_use]
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns a reference to the captured value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the provider and returns the captured value.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Clone> Provider<T> for Fixed<T> {
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        Some(self.value.clone())
    }

    #[inline]
    fn get(&self) -> Result<T, NoValueError> {
        Ok(self.value.clone())
    }

    #[inline]
    fn is_present(&self) -> bool {
        true
    }
}

/// A provider that calls a closure on every read.
///
/// Created by [`from_fn`]. The closure returns `None` when no value is
/// available at the time of the read.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Creates a provider that calls `f` on every read.
///
/// # Example
///
/// ```rust
/// use core::sync::atomic::{AtomicU32, Ordering};
/// use understory_provider::{Provider, from_fn};
///
/// let calls = AtomicU32::new(0);
/// let provider = from_fn(|| Some(calls.fetch_add(1, Ordering::Relaxed)));
///
/// assert_eq!(provider.get(), Ok(0));
/// assert_eq!(provider.get(), Ok(1));
/// ```
#[must_use]
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn() -> Option<T>,
{
    FromFn { f }
}

impl<T, F> Provider<T> for FromFn<F>
where
    F: Fn() -> Option<T>,
{
    #[inline]
    fn get_or_none(&self) -> Option<T> {
        (self.f)()
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}
