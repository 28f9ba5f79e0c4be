// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors raised by providers and property assignment.

use thiserror::Error;

use crate::value::ValueType;

/// Error returned when reading a provider that has no value.
///
/// This usually means a property was read before anything was assigned to it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("No value has been specified for this provider.")]
pub struct NoValueError;

/// Error returned when a value of the wrong runtime type is assigned to a
/// property.
///
/// The property keeps whatever it was bound to before the failed assignment.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error(
    "Cannot set the value of a property of type {expected} using an instance of type {actual}."
)]
pub struct InvalidTypeError {
    /// The type the property accepts.
    pub expected: ValueType,
    /// The type of the rejected value.
    pub actual: ValueType,
}

/// Error returned when a property is bound to a provider reference that is
/// missing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Error)]
#[error("Cannot bind a property to a missing provider.")]
pub struct MissingProviderError;

/// Any error produced by this crate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum PropertyError {
    /// See [`NoValueError`].
    #[error(transparent)]
    NoValue(#[from] NoValueError),
    /// See [`InvalidTypeError`].
    #[error(transparent)]
    InvalidType(#[from] InvalidTypeError),
    /// See [`MissingProviderError`].
    #[error(transparent)]
    MissingProvider(#[from] MissingProviderError),
}
