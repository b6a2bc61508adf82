//! Growable array used to host ranking snapshots.

use thiserror::Error;

/// Capacity of an array created with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 4;

/// Errors raised by index-checked [`DynamicArray`] access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A resizable, index-addressable sequence.
///
/// Capacity doubles whenever a push finds the array full, so appends are
/// amortized O(1). The array never shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty array able to hold `capacity` items before growing.
    /// A requested capacity of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Number of stored items.
    pub fn length(&self) -> usize {
        self.items.len()
    }

    /// Items the array can hold before it next grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// `true` when no items are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item, doubling capacity first if the array is full.
    pub fn push_back(&mut self, item: T) {
        if self.items.len() >= self.capacity {
            self.grow();
        }
        self.items.push(item);
    }

    /// Borrow the item at `index`.
    pub fn get(&self, index: usize) -> Result<&T, ArrayError> {
        self.check(index)?;
        Ok(&self.items[index])
    }

    /// Replace the item at `index`.
    pub fn set(&mut self, index: usize, item: T) -> Result<(), ArrayError> {
        self.check(index)?;
        self.items[index] = item;
        Ok(())
    }

    /// Exchange the items at two valid indices in place.
    pub fn swap(&mut self, i: usize, j: usize) -> Result<(), ArrayError> {
        self.check(i)?;
        self.check(j)?;
        self.items.swap(i, j);
        Ok(())
    }

    /// View the stored items as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the stored items in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        self.items.reserve_exact(new_capacity - self.items.len());
        self.capacity = new_capacity;
    }

    fn check(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.push_back(item);
        }
        array
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
