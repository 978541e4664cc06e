use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// A keyed accumulator that remembers first-insertion order.
///
/// Every grouping in the engine goes through a `Tally` so that iteration
/// order (and therefore tie-breaking) depends only on input order, never on
/// hash order.
#[derive(Debug, Clone)]
pub struct Tally<K, V> {
    entries: Vec<(K, V)>,
    /// Maps key → index in `entries`
    index: HashMap<K, usize>,
}

/// Values a [`Tally`] can sum. Integer sums saturate instead of overflowing.
pub trait Accumulate: Default {
    fn accumulate(&mut self, amount: Self);
}

impl Accumulate for i64 {
    fn accumulate(&mut self, amount: Self) {
        *self = self.saturating_add(amount);
    }
}

impl Accumulate for usize {
    fn accumulate(&mut self, amount: Self) {
        *self = self.saturating_add(amount);
    }
}

impl Accumulate for f64 {
    fn accumulate(&mut self, amount: Self) {
        *self += amount;
    }
}

impl<K, V> Default for Tally<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Tally<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-register keys in order with a default value.
    pub fn seeded(keys: impl IntoIterator<Item = K>) -> Self
    where
        V: Default,
    {
        let mut tally = Self::new();
        for key in keys {
            tally.entry(key);
        }
        tally
    }

    /// Mutable slot for `key`, inserted with `V::default()` on first use.
    pub fn entry(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let i = match self.index.get(&key) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(key.clone(), i);
                self.entries.push((key, V::default()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn add(&mut self, key: K, amount: V)
    where
        V: Accumulate,
    {
        self.entry(key).accumulate(amount);
    }

    /// Overwrite the value for `key`, keeping its original position.
    pub fn set(&mut self, key: K, value: V)
    where
        V: Default,
    {
        *self.entry(key) = value;
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn into_entries(self) -> Vec<(K, V)> {
        self.entries
    }
}
