//! A growable array of fixed-size elements with an explicit doubling policy.
//!
//! Capacity starts wherever the caller asks (zero by default) and, when an
//! append finds the array full, becomes `1` if it was `0` and twice the old
//! value otherwise, capped by an optional element limit. Capacity never
//! shrinks. Storage requests are fallible, and a failed append leaves both the
//! length and the existing elements untouched.
use core::{fmt, slice};

use crate::error::{AllocationError, IndexError, PushError};

/// A growable array that owns its elements and doubles when full.
pub struct DynArray<T> {
    items: Vec<T>,
    limit: Option<usize>,
}

impl<T> DynArray<T> {
    /// Creates an empty array with zero capacity.
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            limit: None,
        }
    }

    /// Creates an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocationError> {
        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;
        Ok(Self { items, limit: None })
    }

    /// Creates an empty array that may never hold more than `limit` elements.
    /// Growth stops at the limit instead of doubling past it.
    pub const fn with_limit(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Elements the array can hold before it has to grow.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Size in bytes of one element slot.
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
    }

    /// Appends `value` at index `len()`.
    ///
    /// # Errors
    ///
    /// Returns the value back inside a [`PushError`] if the array was full and
    /// could not grow.
    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        match self.grow_if_full() {
            Ok(()) => {
                self.items.push(value);
                Ok(())
            }
            Err(error) => Err(PushError::new(value, error)),
        }
    }

    /// Removes the last element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down by one. Capacity is kept.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexError> {
        let len = self.len();
        if index >= len {
            return Err(IndexError { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// The element at `index`, or an [`IndexError`] if `index >= len()`.
    /// Reserved but unused capacity is never readable.
    pub fn get(&self, index: usize) -> Result<&T, IndexError> {
        let len = self.len();
        self.items.get(index).ok_or(IndexError { index, len })
    }

    /// Mutable counterpart of [`DynArray::get`].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        let len = self.len();
        self.items.get_mut(index).ok_or(IndexError { index, len })
    }

    /// Overwrites the element at `index`, returning the previous one.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexError> {
        self.get_mut(index).map(|slot| core::mem::replace(slot, value))
    }

    /// The element at index 0.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The most recently appended element still present.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Drops every element; capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// The elements as a slice of length `len()`.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn grow_if_full(&mut self) -> Result<(), AllocationError> {
        let capacity = self.items.capacity();
        if self.items.len() < capacity {
            return Ok(());
        }
        let mut target = if capacity == 0 {
            1
        } else {
            capacity
                .checked_mul(2)
                .ok_or(AllocationError::CapacityOverflow)?
        };
        if let Some(limit) = self.limit {
            let requested = self.items.len() + 1;
            if requested > limit {
                return Err(AllocationError::LimitExceeded { requested, limit });
            }
            target = target.min(limit);
        }
        self.items.try_reserve_exact(target - self.items.len())?;
        log::trace!(
            "dyn array of {}-byte elements grew from {capacity} to {}",
            size_of::<T>(),
            self.items.capacity()
        );
        Ok(())
    }
}

impl<T: PartialEq> DynArray<T> {
    /// Index of the first element equal to `needle`.
    pub fn position(&self, needle: &T) -> Option<usize> {
        self.items.iter().position(|item| item == needle)
    }
}

impl<T: Clone> DynArray<T> {
    /// Creates an array of `len` copies of `value`, with capacity `len`.
    pub fn filled(len: usize, value: T) -> Result<Self, AllocationError> {
        let mut array = Self::with_capacity(len)?;
        array.items.resize(len, value);
        Ok(array)
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            limit: self.limit,
        }
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
