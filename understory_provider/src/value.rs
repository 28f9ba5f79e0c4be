// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runtime type descriptors and type-erased values.
//!
//! [`ValueType`] names the type a [`Property`](crate::Property) accepts, and
//! [`ErasedValue`] carries a value whose static type is not known at the call
//! site, for example a setting handed over by a configuration graph.

use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;
use core::hash::{Hash, Hasher};

/// A runtime type descriptor: a [`TypeId`] plus the type's name.
///
/// Equality and hashing only consider the [`TypeId`]; the name is kept for
/// diagnostics.
///
/// # Example
///
/// ```rust
/// use understory_provider::ValueType;
///
/// let ty = ValueType::of::<u32>();
/// assert!(ty.is::<u32>());
/// assert_eq!(ty.name(), "u32");
/// assert_ne!(ty, ValueType::of::<i32>());
/// ```
#[derive(Copy, Clone)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
}

impl ValueType {
    /// Returns the descriptor of `T`.
    #[must_use]
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the described type.
    #[must_use]
    #[inline]
    pub fn id(self) -> TypeId {
        self.id
    }

    /// Returns the name of the described type.
    ///
    /// This comes from [`core::any::type_name`] and is only meant for
    /// diagnostics.
    #[must_use]
    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    /// Returns `true` if this describes `T`.
    #[must_use]
    #[inline]
    pub fn is<T: ?Sized + 'static>(self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ValueType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl Hash for ValueType {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueType").field(&self.name).finish()
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type-erased value.
///
/// This wraps a value of any `'static + Clone` type, storing it on the heap
/// together with its [`ValueType`] so it can be checked against a
/// property's expected type and downcast later.
///
/// # Example
///
/// ```rust
/// use understory_provider::ErasedValue;
///
/// let value = ErasedValue::new(42_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.downcast_ref::<i32>(), Some(&42));
/// assert_eq!(value.type_name(), "i32");
///
/// let cloned = value.clone_value();
/// assert_eq!(cloned.downcast::<i32>().ok(), Some(42));
/// ```
pub struct ErasedValue {
    inner: Box<dyn ErasedValueTrait>,
    value_type: ValueType,
}

impl ErasedValue {
    /// Creates a new erased value from a concrete value.
    #[must_use]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            value_type: ValueType::of::<T>(),
            inner: Box::new(value),
        }
    }

    /// Returns the [`ValueType`] of the contained value.
    #[must_use]
    #[inline]
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the [`TypeId`] of the contained value.
    #[must_use]
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.value_type.id()
    }

    /// Returns the name of the contained value's type.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.value_type.name()
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.value_type.is::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.inner.as_any().downcast_ref()
        } else {
            None
        }
    }

    /// Attempts to move the contained value out as a `T`.
    ///
    /// # Errors
    ///
    /// Gives `self` back unchanged if the contained value is not of type `T`.
    pub fn downcast<T: 'static>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }
        match self.inner.into_any().downcast::<T>() {
            Ok(value) => Ok(*value),
            // The type id was checked above.
            Err(_) => unreachable!("ErasedValue type id does not match its contents"),
        }
    }

    /// Clones the contained value into a new [`ErasedValue`].
    #[must_use]
    pub fn clone_value(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
            value_type: self.value_type,
        }
    }
}

impl Clone for ErasedValue {
    fn clone(&self) -> Self {
        self.clone_value()
    }
}

impl fmt::Debug for ErasedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedValue")
            .field("value_type", &self.value_type)
            .finish_non_exhaustive()
    }
}

/// Trait object for type-erased values that can be cloned.
trait ErasedValueTrait: Any {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait>;
}

impl<T: Clone + 'static> ErasedValueTrait for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn clone_boxed(&self) -> Box<dyn ErasedValueTrait> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;

    #[test]
    fn value_type_identity() {
        let ty = ValueType::of::<String>();
        assert!(ty.is::<String>());
        assert!(!ty.is::<&str>());
        assert_eq!(ty, ValueType::of::<String>());
        assert_eq!(ty.id(), TypeId::of::<String>());
    }

    #[test]
    fn value_type_display_is_type_name() {
        assert_eq!(format!("{}", ValueType::of::<i32>()), "i32");
        assert_eq!(format!("{:?}", ValueType::of::<i32>()), "ValueType(\"i32\")");
    }

    #[test]
    fn erased_value_i32() {
        let value = ErasedValue::new(42_i32);
        assert!(value.is::<i32>());
        assert!(!value.is::<f64>());
        assert_eq!(value.downcast_ref::<i32>(), Some(&42));
        assert_eq!(value.downcast_ref::<f64>(), None);
        assert_eq!(value.value_type(), ValueType::of::<i32>());
    }

    #[test]
    fn erased_value_downcast_mismatch_gives_value_back() {
        let value = ErasedValue::new(String::from("hello"));
        let value = value.downcast::<u8>().unwrap_err();
        assert_eq!(value.downcast::<String>().ok().as_deref(), Some("hello"));
    }

    /// Panics when cloned.
    struct CloneBomb(u8);

    impl Clone for CloneBomb {
        fn clone(&self) -> Self {
            panic!("CloneBomb({}) was cloned", self.0)
        }
    }

    #[test]
    fn erased_value_downcast_moves_without_cloning() {
        let value = ErasedValue::new(CloneBomb(3));
        let value = value.downcast::<u8>().unwrap_err();
        let CloneBomb(n) = value.downcast::<CloneBomb>().ok().unwrap();
        assert_eq!(n, 3);
    }

    #[test]
    fn erased_value_clone_is_independent() {
        let value = ErasedValue::new(String::from("world"));
        let cloned = value.clone();
        drop(value);
        assert_eq!(
            cloned.downcast_ref::<String>().map(|s| s.as_str()),
            Some("world")
        );
        assert_eq!(cloned.type_name(), core::any::type_name::<String>());
    }

    #[test]
    fn erased_value_debug() {
        let value = ErasedValue::new(42_i32);
        let debug = format!("{:?}", value);
        assert!(debug.contains("ErasedValue"));
        assert!(debug.contains("i32"));
    }
}
