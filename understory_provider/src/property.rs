// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The assignable, typed [`Property`] slot.
//!
//! A property is bound to exactly one [`Provider`] at a time. Assigning to it
//! swaps that binding; reading from it asks whichever provider is bound at the
//! time of the read.
//!
//! # Binding
//!
//! The binding is never empty. An unset property is bound to [`ABSENT`], an
//! assigned value is wrapped in a fresh [`Fixed`], and anything else is held
//! as a shared `dyn Provider<T>`:
//!
//! | Assignment | Bound to |
//! |------------|----------|
//! | [`Property::new`], [`Property::clear`], `set_optional(None)` | [`ABSENT`] |
//! | [`Property::set`], [`Property::set_erased`] | [`Fixed`] |
//! | [`Property::set_provider`] and friends | the given provider |
//!
//! # Type checking
//!
//! Values assigned through [`Property::set`] are checked by the compiler.
//! Values whose static type is unknown arrive as [`ErasedValue`] and are
//! checked against [`Property::expected_type`] at runtime by
//! [`Property::set_erased`].
//!
//! Providers are never checked beyond their `Provider<T>` bound: a provider
//! is only consulted lazily, so its future output cannot be validated when it
//! is bound.

use alloc::sync::Arc;
use core::fmt;

use crate::error::{InvalidTypeError, MissingProviderError, NoValueError};
use crate::provider::{ABSENT, Fixed, Provider};
use crate::value::{ErasedValue, ValueType};

/// A shared, thread-safe provider as held by a [`Property`].
pub type SharedProvider<T> = Arc<dyn Provider<T> + Send + Sync>;

#[derive(Clone)]
enum Binding<T> {
    Absent,
    Fixed(Fixed<T>),
    Provider(SharedProvider<T>),
}

impl<T: Clone> Binding<T> {
    #[inline]
    fn provider(&self) -> &dyn Provider<T> {
        match self {
            Self::Absent => &ABSENT,
            Self::Fixed(fixed) => fixed,
            Self::Provider(provider) => &**provider,
        }
    }
}

#[cfg(feature = "tracing")]
impl<T> Binding<T> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Fixed(_) => "fixed",
            Self::Provider(_) => "provider",
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("Absent"),
            Self::Fixed(fixed) => f.debug_tuple("Fixed").field(fixed.value()).finish(),
            Self::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

/// A mutable, typed slot whose reads are delegated to a [`Provider`].
///
/// # Example
///
/// ```rust
/// use understory_provider::{ErasedValue, NoValueError, Property, from_fn};
///
/// let mut name = Property::<String>::new();
/// assert!(!name.is_present());
/// assert_eq!(name.get(), Err(NoValueError));
///
/// name.set("app".to_string());
/// assert_eq!(name.get().as_deref(), Ok("app"));
///
/// // Runtime-typed values are checked against the property's type.
/// assert!(name.set_erased(ErasedValue::new(7_u32)).is_err());
/// assert_eq!(name.get_or_none().as_deref(), Some("app"));
///
/// // Providers are consulted on every read.
/// name.set_provider(from_fn(|| Some("computed".to_string())));
/// assert_eq!(name.to_string(), "value: computed");
///
/// name.clear();
/// assert_eq!(name.to_string(), "value: null");
/// ```
#[derive(Clone)]
pub struct Property<T> {
    binding: Binding<T>,
}

impl<T: Clone + 'static> Property<T> {
    /// Creates an unset property.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            binding: Binding::Absent,
        }
    }

    /// Returns the type of value this property accepts.
    #[must_use]
    #[inline]
    pub fn expected_type(&self) -> ValueType {
        ValueType::of::<T>()
    }

    /// Binds the property to `value`.
    pub fn set(&mut self, value: T) {
        self.rebind(Binding::Fixed(Fixed::new(value)));
    }

    /// Binds the property to `value`, or unsets it if `value` is `None`.
    pub fn set_optional(&mut self, value: Option<T>) {
        match value {
            Some(value) => self.set(value),
            None => self.clear(),
        }
    }

    /// Unsets the property.
    ///
    /// Afterwards the property behaves exactly like one returned by
    /// [`Property::new`].
    pub fn clear(&mut self) {
        self.rebind(Binding::Absent);
    }

    /// Binds the property to a value whose type is only known at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTypeError`] if `value` is not a `T`. The property keeps
    /// its previous binding in that case.
    pub fn set_erased(&mut self, value: ErasedValue) -> Result<(), InvalidTypeError> {
        match value.downcast::<T>() {
            Ok(value) => {
                self.set(value);
                Ok(())
            }
            Err(value) => {
                let err = InvalidTypeError {
                    expected: self.expected_type(),
                    actual: value.value_type(),
                };
                debug_rejected!(err.expected, err.actual);
                Err(err)
            }
        }
    }

    /// Like [`Property::set_erased`], but `None` unsets the property.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTypeError`] if `value` holds something other than a
    /// `T`. The property keeps its previous binding in that case.
    pub fn set_erased_optional(
        &mut self,
        value: Option<ErasedValue>,
    ) -> Result<(), InvalidTypeError> {
        match value {
            Some(value) => self.set_erased(value),
            None => {
                self.clear();
                Ok(())
            }
        }
    }

    /// Binds the property to `provider`.
    ///
    /// The provider is consulted on every subsequent read; nothing is
    /// evaluated here.
    pub fn set_provider<P>(&mut self, provider: P)
    where
        P: Provider<T> + Send + Sync + 'static,
    {
        self.set_shared_provider(Arc::new(provider));
    }

    /// Binds the property to an already shared provider.
    pub fn set_shared_provider(&mut self, provider: SharedProvider<T>) {
        self.rebind(Binding::Provider(provider));
    }

    /// Binds the property to `provider` if there is one.
    ///
    /// This is for providers obtained from a lookup that may miss. A missing
    /// provider is an error, not a request to unset the property; use
    /// [`Property::clear`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`MissingProviderError`] if `provider` is `None`. The property
    /// keeps its previous binding in that case.
    pub fn try_set_provider(
        &mut self,
        provider: Option<SharedProvider<T>>,
    ) -> Result<(), MissingProviderError> {
        let provider = provider.ok_or(MissingProviderError)?;
        self.set_shared_provider(provider);
        Ok(())
    }

    /// Returns the provider this property is currently bound to.
    #[must_use]
    #[inline]
    pub fn provider(&self) -> &dyn Provider<T> {
        self.binding.provider()
    }

    /// Returns the current value.
    ///
    /// # Errors
    ///
    /// Returns whatever the bound provider returns; [`NoValueError`] when the
    /// property is unset.
    #[inline]
    pub fn get(&self) -> Result<T, NoValueError> {
        self.provider().get()
    }

    /// Returns the current value, or `None` if there is none.
    #[must_use]
    #[inline]
    pub fn get_or_none(&self) -> Option<T> {
        self.provider().get_or_none()
    }

    /// Returns the current value, or `default` if there is none.
    #[must_use]
    #[inline]
    pub fn get_or_else(&self, default: T) -> T {
        self.provider().get_or_else(default)
    }

    /// Returns `true` if the property currently has a value.
    #[must_use]
    #[inline]
    pub fn is_present(&self) -> bool {
        self.provider().is_present()
    }

    fn rebind(&mut self, binding: Binding<T>) {
        trace_binding!(self.expected_type(), binding.kind());
        self.binding = binding;
    }
}

impl<T: Clone + 'static> Default for Property<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> From<T> for Property<T> {
    fn from(value: T) -> Self {
        let mut property = Self::new();
        property.set(value);
        property
    }
}

impl<T: Clone + fmt::Display + 'static> fmt::Display for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_or_none() {
            Some(value) => write!(f, "value: {value}"),
            None => f.write_str("value: null"),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("expected_type", &ValueType::of::<T>())
            .field("binding", &self.binding)
            .finish()
    }
}
