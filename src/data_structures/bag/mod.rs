// Copyright (c) 2025 M269 ADTs Authors
//
// Licensed under the BSD 3-Clause License (LICENSE or https://opensource.org/licenses/BSD-3-Clause)

//! Bag (multiset) ADT
//!
//! An unordered collection that may hold several copies of each item,
//! represented as a map from item to its number of copies.
//!
//! # Invariant
//!
//! Every stored count is at least 1. An item whose last copy is removed is
//! dropped from the map, so absence and zero copies are the same thing.
//!
//! # Example
//!
//! ```
//! use m269_adts_lib::data_structures::Bag;
//!
//! let mut text = Bag::from("to be or not to be");
//! assert_eq!(text.size(), 18);             // number of characters
//! assert_eq!(text.copies(&' ') + 1, 6);    // number of words
//!
//! text.remove(&'o').unwrap();              // remove 1 copy of 'o'
//! text.remove(&'n').unwrap();              // remove the only 'n'
//! text.add('?');
//! assert_eq!(text.copies(&'o'), 3);
//! assert_eq!(text.copies(&'n'), 0);
//! assert_eq!(text.size(), 17);
//! ```

mod error;

use std::borrow::Borrow;
use std::hash::Hash;

use fnv::FnvBuildHasher;

use crate::config::collections::CollectionsConfig;
use crate::config::{ConfigResult, Validate};
pub use error::{BagError, BagResult};

/// Item to copy-count mapping backing a [`Bag`].
pub type BagMap<T> = hashbrown::HashMap<T, usize, FnvBuildHasher>;

/// An unordered collection of items that may contain repeated copies.
///
/// # Type Parameters
///
/// * `T` - Type of the items. Must be hashable and comparable for equality.
#[derive(Debug, Clone)]
pub struct Bag<T> {
    /// Number of copies of each item; never holds a zero
    counts: BagMap<T>,
}

impl<T: Eq + Hash> Bag<T> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty bag with room for `capacity` distinct items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: BagMap::with_capacity_and_hasher(capacity, FnvBuildHasher::default()),
        }
    }

    /// Creates an empty bag sized by the configured `bag_capacity`.
    ///
    /// The section is validated first, so an out-of-range capacity is
    /// reported as a [`ConfigError`] instead of aborting the allocation.
    ///
    /// [`ConfigError`]: crate::error::config::ConfigError
    pub fn from_config(config: &CollectionsConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::with_capacity(config.bag_capacity))
    }

    /// Creates a bag holding one copy of every item in `items`, counting
    /// repetitions.
    ///
    /// An empty sequence gives an empty bag. Complexity: O(number of items).
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut bag = Self::new();
        for item in items {
            bag.add(item);
        }
        bag
    }

    /// Returns how many times `item` occurs in the bag.
    ///
    /// Complexity: O(1).
    pub fn copies<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Returns how many items the bag has, counting every copy.
    ///
    /// Complexity: O(k), with k the number of distinct items.
    pub fn size(&self) -> usize {
        self.counts.values().sum()
    }

    /// Returns how many distinct items the bag has.
    ///
    /// Complexity: O(1).
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if the bag has no items.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Adds one more copy (or the first copy) of `item`.
    ///
    /// Complexity: O(1).
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    /// Removes one copy of `item`.
    ///
    /// Precondition: `self.copies(item) > 0`. Complexity: O(1).
    ///
    /// # Errors
    ///
    /// [`BagError::NotPresent`] if the bag has no copy of `item`; the bag is
    /// left unchanged.
    pub fn remove<Q>(&mut self, item: &Q) -> BagResult<()>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(count) = self.counts.get_mut(item) else {
            tracing::debug!(operation = "remove", "rejected removal of absent bag item");
            return Err(BagError::NotPresent);
        };

        if *count > 1 {
            *count -= 1;
        } else {
            self.counts.remove(item);
        }
        Ok(())
    }

    /// Checks whether every item of `self` occurs at least as often in
    /// `other`.
    ///
    /// Complexity: O(s), with s the number of distinct items in `self`.
    pub fn included_in(&self, other: &Bag<T>) -> bool {
        self.counts
            .iter()
            .all(|(item, &count)| count <= other.copies(item))
    }
}

impl<T: Eq + Hash + Clone> Bag<T> {
    /// Returns a new bag with the items that occur in either bag.
    ///
    /// An item occurring m times in one bag and n times in the other occurs
    /// max(m, n) times in the union.
    ///
    /// Complexity: O(s + o), with s and o the number of distinct items in the
    /// bags.
    pub fn union(&self, other: &Bag<T>) -> Bag<T> {
        let mut result = Self::with_capacity(self.distinct().max(other.distinct()));
        for (item, &count) in &self.counts {
            result
                .counts
                .insert(item.clone(), count.max(other.copies(item)));
        }
        for (item, &count) in &other.counts {
            if !self.counts.contains_key(item) {
                result.counts.insert(item.clone(), count);
            }
        }
        result
    }

    /// Returns a new bag with the items common to both bags.
    ///
    /// An item occurring m times in one bag and n times in the other occurs
    /// min(m, n) times in the intersection.
    ///
    /// Complexity: O(min(s, o)), with s and o the number of distinct items in
    /// the bags.
    pub fn intersection(&self, other: &Bag<T>) -> Bag<T> {
        let (smaller, larger) = if self.distinct() <= other.distinct() {
            (self, other)
        } else {
            (other, self)
        };

        let mut result = Self::with_capacity(smaller.distinct());
        for (item, &count) in &smaller.counts {
            let common = count.min(larger.copies(item));
            if common > 0 {
                result.counts.insert(item.clone(), common);
            }
        }
        result
    }

    /// Returns a new bag with the items of `self` that are not matched in
    /// `other`.
    ///
    /// An item occurring m times in `self` and n times in `other` occurs
    /// max(0, m - n) times in the difference.
    ///
    /// Complexity: O(s), with s the number of distinct items in `self`.
    pub fn difference(&self, other: &Bag<T>) -> Bag<T> {
        let mut result = Self::new();
        for (item, &count) in &self.counts {
            let extra = count.saturating_sub(other.copies(item));
            if extra > 0 {
                result.counts.insert(item.clone(), extra);
            }
        }
        result
    }

    /// Returns a copy of the underlying item to count mapping, for inspecting
    /// or debugging the bag.
    ///
    /// Changing the returned map does not change the bag.
    ///
    /// Complexity: O(k), with k the number of distinct items.
    pub fn as_map(&self) -> BagMap<T> {
        self.counts.clone()
    }
}

impl<T: Eq + Hash> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> PartialEq for Bag<T> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<T: Eq + Hash> Eq for Bag<T> {}

impl<T: Eq + Hash> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

impl From<&str> for Bag<char> {
    /// Creates a bag of the characters of `text`.
    fn from(text: &str) -> Self {
        Self::from_items(text.chars())
    }
}
