//! Keyed multi-value storage for binding records
//!
//! [`Lookup`] files an ordered sequence of values under each
//! [`ServiceIdentifier`]. It is the storage half of a dependency-injection
//! container: resolution reads an identifier's full value sequence, module
//! unloading bulk-evicts values by module origin, and child containers are
//! spawned from structural clones.
//!
//! # Invariants
//!
//! - At most one entry per identifier; an entry exists only while it holds
//!   at least one value
//! - Value order within an entry is insertion order; bulk removal keeps
//!   survivors in their relative order
//! - Entry order across identifiers is not significant

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use ahash::RandomState;

use crate::binding::ModuleScoped;
use crate::error::{BindkitError, Result};
use crate::identifier::ServiceIdentifier;

/// Multi-value map from service identifiers to binding records
///
/// String identifiers compare by value; token and type identifiers compare
/// by identity (see [`ServiceIdentifier`]). Values are opaque to the map
/// except through the [`ModuleScoped`] capability used by
/// [`remove_by_module_id`](Lookup::remove_by_module_id).
///
/// # Clone semantics
///
/// `Clone` copies the entry map and every per-entry vector, so mutating
/// one copy never changes the other's key set or value counts. The stored
/// values themselves are element-cloned; containers store `Arc`-wrapped
/// records, which makes the copy shallow at the value level (both copies
/// share the same records).
///
/// # Examples
///
/// ```rust
/// use bindkit::{Lookup, ServiceIdentifier};
///
/// let mut lookup = Lookup::new();
/// let key = ServiceIdentifier::named("Weapon");
///
/// lookup.add(key.clone(), "katana")?;
/// lookup.add(key.clone(), "shuriken")?;
///
/// assert_eq!(lookup.get(&key)?, &["katana", "shuriken"]);
/// assert!(lookup.has_key(&key)?);
///
/// lookup.remove(&key)?;
/// assert!(!lookup.has_key(&key)?);
/// # Ok::<(), bindkit::BindkitError>(())
/// ```
#[derive(Clone)]
pub struct Lookup<T> {
    entries: HashMap<ServiceIdentifier, Vec<T>, RandomState>,
}

impl<T> Lookup<T> {
    /// Creates an empty lookup
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Creates an empty lookup with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Number of entries (distinct identifiers)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the lookup holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored values across all entries
    pub fn values_len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Appends `value` to the entry for `identifier`, creating the entry
    /// if absent
    ///
    /// There is no upper bound on values per identifier.
    ///
    /// # Errors
    ///
    /// Returns [`BindkitError::NullArgument`] for a blank identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindkit::{Lookup, ServiceIdentifier};
    ///
    /// let mut lookup = Lookup::new();
    /// lookup.add(ServiceIdentifier::named("W"), 1)?;
    /// lookup.add(ServiceIdentifier::named("W"), 2)?;
    ///
    /// assert_eq!(lookup.get(&ServiceIdentifier::named("W"))?, &[1, 2]);
    /// # Ok::<(), bindkit::BindkitError>(())
    /// ```
    pub fn add(&mut self, identifier: ServiceIdentifier, value: T) -> Result<()> {
        identifier.validate()?;
        match self.entries.entry(identifier) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                log::trace!("creating entry for {}", entry.key());
                entry.insert(vec![value]);
            }
        }
        Ok(())
    }

    /// Returns the full ordered value sequence for `identifier`
    ///
    /// The returned slice is an immutable borrow of the entry's storage;
    /// it is never empty.
    ///
    /// # Errors
    ///
    /// Returns [`BindkitError::NullArgument`] for a blank identifier and
    /// [`BindkitError::KeyNotFound`] when no entry exists.
    pub fn get(&self, identifier: &ServiceIdentifier) -> Result<&[T]> {
        identifier.validate()?;
        self.entries
            .get(identifier)
            .map(Vec::as_slice)
            .ok_or_else(|| BindkitError::key_not_found(identifier.to_string()))
    }

    /// Deletes the entire entry for `identifier`, returning its values in
    /// insertion order
    ///
    /// # Errors
    ///
    /// Returns [`BindkitError::NullArgument`] for a blank identifier and
    /// [`BindkitError::KeyNotFound`] when no entry exists.
    pub fn remove(&mut self, identifier: &ServiceIdentifier) -> Result<Vec<T>> {
        identifier.validate()?;
        match self.entries.remove(identifier) {
            Some(values) => {
                log::debug!("removed entry {} ({} values)", identifier, values.len());
                Ok(values)
            }
            None => Err(BindkitError::key_not_found(identifier.to_string())),
        }
    }

    /// Returns whether an entry exists for `identifier`
    ///
    /// Absence is a normal outcome: this never reports
    /// [`BindkitError::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`BindkitError::NullArgument`] for a blank identifier.
    pub fn has_key(&self, identifier: &ServiceIdentifier) -> Result<bool> {
        identifier.validate()?;
        Ok(self.entries.contains_key(identifier))
    }

    /// Removes every value selected by `predicate` across all entries,
    /// returning how many were removed
    ///
    /// Survivors keep their relative order; entries left with no values
    /// are deleted. A predicate that matches nothing is a silent no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindkit::{Lookup, ServiceIdentifier};
    ///
    /// let mut lookup = Lookup::new();
    /// let key = ServiceIdentifier::named("numbers");
    /// for n in 1..=4 {
    ///     lookup.add(key.clone(), n)?;
    /// }
    ///
    /// assert_eq!(lookup.remove_matching(|n| n % 2 == 0), 2);
    /// assert_eq!(lookup.get(&key)?, &[1, 3]);
    /// # Ok::<(), bindkit::BindkitError>(())
    /// ```
    pub fn remove_matching<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        self.entries.retain(|_, values| {
            let before = values.len();
            values.retain(|value| !predicate(value));
            removed += before - values.len();
            !values.is_empty()
        });
        removed
    }

    /// Iterates over the identifiers that currently have an entry
    pub fn keys(&self) -> impl Iterator<Item = &ServiceIdentifier> {
        self.entries.keys()
    }

    /// Iterates over entries as identifier/value-sequence pairs
    pub fn entries(&self) -> impl Iterator<Item = (&ServiceIdentifier, &[T])> {
        self.entries.iter().map(|(key, values)| (key, values.as_slice()))
    }
}

impl<T: ModuleScoped> Lookup<T> {
    /// Removes every value contributed by `module_id`, across all
    /// entries, returning how many were removed
    ///
    /// This is attribute-driven, not key-driven: it scans every entry
    /// regardless of which identifier the values are filed under. Entries
    /// left empty are deleted. An unknown module id is a silent no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bindkit::{Binding, Lookup, ServiceIdentifier};
    ///
    /// let mut lookup = Lookup::new();
    /// let warrior = ServiceIdentifier::named("Warrior");
    ///
    /// lookup.add(warrior.clone(), Binding::new("Warrior", "Ninja").with_module_id("m1"))?;
    /// lookup.add(warrior.clone(), Binding::new("Warrior", "Samurai").with_module_id("m2"))?;
    ///
    /// assert_eq!(lookup.remove_by_module_id("m1"), 1);
    /// assert_eq!(lookup.get(&warrior)?.len(), 1);
    /// # Ok::<(), bindkit::BindkitError>(())
    /// ```
    pub fn remove_by_module_id(&mut self, module_id: &str) -> usize {
        let removed = self.remove_matching(|value| value.module_id() == Some(module_id));
        if removed > 0 {
            log::debug!("module {module_id}: evicted {removed} bindings");
        }
        removed
    }
}

impl<T> Default for Lookup<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Lookup<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for Lookup<T> {}

impl<T: fmt::Debug> fmt::Debug for Lookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
