//! Capabilities of the containers under test.
//!
//! Every container type in the catalog implements [`Container`] plus exactly one of
//! [`SequenceContainer`], [`SetContainer`] or [`MapContainer`]. The drivers are generic over
//! these traits, so adding a container to the benchmark only requires implementing them.
//!
//! Whether a container can pre-allocate capacity is a compile-time capability, expressed via
//! [`Container::RESERVABLE`]. Types without it keep the default no-op [`Container::reserve`]
//! and the drivers skip their reserved phases.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};
use std::hash::BuildHasher;

use smallvec::SmallVec;

use crate::Sample;

/// Inline capacity of the [`SmallVec`] sequence in the catalog.
pub const INLINE_SAMPLES: usize = 16;

/// Operations shared by every container under test.
pub trait Container: Default {
    /// Whether [`reserve`][Self::reserve] actually pre-allocates capacity.
    const RESERVABLE: bool = false;

    /// Pre-allocates capacity for at least `additional` more elements.
    ///
    /// The default implementation does nothing.
    fn reserve(&mut self, additional: usize) {
        _ = additional;
    }

    /// Number of elements (or entries) in the container.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);
}

/// A container that elements can be appended to.
pub trait SequenceContainer: Container {
    /// Appends a sample at the end.
    fn push_back(&mut self, sample: Sample);
}

/// A set of unique samples.
pub trait SetContainer: Container {
    /// Inserts a sample, returning whether it was newly added.
    fn insert(&mut self, sample: Sample) -> bool;

    /// Whether the sample is present.
    fn contains(&self, sample: &Sample) -> bool;

    /// Removes a sample, returning how many elements were removed.
    fn erase(&mut self, sample: &Sample) -> usize;
}

/// A map from unique sample keys to values.
pub trait MapContainer: Container {
    /// The type stored for each key.
    type Value: MapValue;

    /// Inserts the value, overwriting any existing value for the key.
    fn assign(&mut self, key: Sample, value: Self::Value);

    /// Looks up the value stored for the key.
    fn find(&self, key: &Sample) -> Option<&Self::Value>;

    /// Removes a key, returning how many entries were removed.
    fn erase(&mut self, key: &Sample) -> usize;
}

/// A value type that the map driver can derive from a key.
pub trait MapValue {
    /// The value to store for `key`.
    fn from_sample(key: Sample) -> Self;
}

impl MapValue for Sample {
    fn from_sample(key: Sample) -> Self {
        key
    }
}

impl MapValue for String {
    fn from_sample(key: Sample) -> Self {
        key.to_string()
    }
}

fn removed_count(removed: bool) -> usize {
    usize::from(removed)
}

// Sequences

impl Container for Vec<Sample> {
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl SequenceContainer for Vec<Sample> {
    fn push_back(&mut self, sample: Sample) {
        self.push(sample);
    }
}

impl Container for VecDeque<Sample> {
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl SequenceContainer for VecDeque<Sample> {
    fn push_back(&mut self, sample: Sample) {
        Self::push_back(self, sample);
    }
}

impl Container for SmallVec<[Sample; INLINE_SAMPLES]> {
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl SequenceContainer for SmallVec<[Sample; INLINE_SAMPLES]> {
    fn push_back(&mut self, sample: Sample) {
        self.push(sample);
    }
}

impl Container for LinkedList<Sample> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl SequenceContainer for LinkedList<Sample> {
    fn push_back(&mut self, sample: Sample) {
        Self::push_back(self, sample);
    }
}

// Sets

impl<S> Container for HashSet<Sample, S>
where
    S: BuildHasher + Default,
{
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<S> SetContainer for HashSet<Sample, S>
where
    S: BuildHasher + Default,
{
    fn insert(&mut self, sample: Sample) -> bool {
        Self::insert(self, sample)
    }

    fn contains(&self, sample: &Sample) -> bool {
        Self::contains(self, sample)
    }

    fn erase(&mut self, sample: &Sample) -> usize {
        removed_count(self.remove(sample))
    }
}

impl<S> Container for hashbrown::HashSet<Sample, S>
where
    S: BuildHasher + Default,
{
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<S> SetContainer for hashbrown::HashSet<Sample, S>
where
    S: BuildHasher + Default,
{
    fn insert(&mut self, sample: Sample) -> bool {
        Self::insert(self, sample)
    }

    fn contains(&self, sample: &Sample) -> bool {
        Self::contains(self, sample)
    }

    fn erase(&mut self, sample: &Sample) -> usize {
        removed_count(self.remove(sample))
    }
}

impl Container for BTreeSet<Sample> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl SetContainer for BTreeSet<Sample> {
    fn insert(&mut self, sample: Sample) -> bool {
        Self::insert(self, sample)
    }

    fn contains(&self, sample: &Sample) -> bool {
        Self::contains(self, sample)
    }

    fn erase(&mut self, sample: &Sample) -> usize {
        removed_count(self.remove(sample))
    }
}

// Maps

impl<V, S> Container for HashMap<Sample, V, S>
where
    S: BuildHasher + Default,
{
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<V, S> MapContainer for HashMap<Sample, V, S>
where
    V: MapValue,
    S: BuildHasher + Default,
{
    type Value = V;

    fn assign(&mut self, key: Sample, value: V) {
        self.insert(key, value);
    }

    fn find(&self, key: &Sample) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &Sample) -> usize {
        removed_count(self.remove(key).is_some())
    }
}

impl<V, S> Container for hashbrown::HashMap<Sample, V, S>
where
    S: BuildHasher + Default,
{
    const RESERVABLE: bool = true;

    fn reserve(&mut self, additional: usize) {
        Self::reserve(self, additional);
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<V, S> MapContainer for hashbrown::HashMap<Sample, V, S>
where
    V: MapValue,
    S: BuildHasher + Default,
{
    type Value = V;

    fn assign(&mut self, key: Sample, value: V) {
        self.insert(key, value);
    }

    fn find(&self, key: &Sample) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &Sample) -> usize {
        removed_count(self.remove(key).is_some())
    }
}

impl<V> Container for BTreeMap<Sample, V> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }
}

impl<V> MapContainer for BTreeMap<Sample, V>
where
    V: MapValue,
{
    type Value = V;

    fn assign(&mut self, key: Sample, value: V) {
        self.insert(key, value);
    }

    fn find(&self, key: &Sample) -> Option<&V> {
        self.get(key)
    }

    fn erase(&mut self, key: &Sample) -> usize {
        removed_count(self.remove(key).is_some())
    }
}
