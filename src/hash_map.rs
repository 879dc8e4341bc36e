use core::convert::Infallible;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Write;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::hash::Hasher;

use crate::DefaultHashBuilder;
use crate::config::DuplicatePolicy;
use crate::config::TableConfig;
use crate::error::TableError;
use crate::hash_set::HashSet;
use crate::hash_table::Cursor;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;

/// A hash map implemented over the separately chained [`HashTable`].
///
/// `ChainedHashMap<K, V, S>` stores key-value pairs where keys implement
/// `Hash + Eq` and uses a configurable hasher builder `S` to hash keys. Each
/// pair lives in the chain of the slot its key's hash reduces to; the table
/// grows to `2 × capacity + 1` slots whenever the number of pairs exceeds
/// `max_load_factor × capacity`.
///
/// Keys must keep `a == b ⇒ hash(a) == hash(b)`; the map relies on it but
/// cannot check it.
///
/// # Examples
///
/// ```rust
/// use chain_hash::ChainedHashMap;
///
/// let mut map: ChainedHashMap<&str, u32> = ChainedHashMap::new();
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.get(&"a"), Some(&1));
/// assert_eq!(map.remove(&"a"), Some(1));
/// assert!(map.is_empty());
/// ```
#[derive(Clone)]
pub struct ChainedHashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Debug for ChainedHashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

/// Renders `{key=value, key=value}`, walking slots from the highest index
/// down and each chain front to back.
impl<K, V, S> Display for ChainedHashMap<K, V, S>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.table.iter_slots_rev().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}={value}")?;
        }
        f.write_char('}')
    }
}

/// Two maps are equal when they render to the same text.
///
/// This is order-sensitive: equal contents laid out in different slots compare
/// unequal.
impl<K, V, S> PartialEq for ChainedHashMap<K, V, S>
where
    K: Display,
    V: Display,
{
    fn eq(&self, other: &Self) -> bool {
        use alloc::string::ToString;

        core::ptr::eq(self, other) || self.to_string() == other.to_string()
    }
}

impl<K, V, S> Eq for ChainedHashMap<K, V, S>
where
    K: Display,
    V: Display,
{
}

/// Feeds [`content_hash`](ChainedHashMap::content_hash) to the hasher.
///
/// # Caveats
///
/// Equality compares renderings, which do not include the capacity, but the
/// content hash is seeded by it. Two maps that compare equal can hash
/// differently when their capacities differ, so maps used as keys should be
/// built with the same configuration and grown the same way.
impl<K, V, S> Hash for ChainedHashMap<K, V, S>
where
    K: Display,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.content_hash());
    }
}

/// Folds rendered key characters into a base-31 polynomial.
struct KeyFolder {
    hash: u32,
    count: u32,
    seed: u32,
}

impl KeyFolder {
    fn fold(&mut self, c: char) {
        let code = c as u32;
        let term = match self.seed.checked_sub(self.count) {
            Some(exponent) => code.wrapping_mul(31u32.wrapping_pow(exponent)),
            None => 31u32
                .checked_pow(self.count - self.seed)
                .map_or(0, |divisor| code / divisor),
        };
        self.hash = self.hash.wrapping_add(term);
        self.count = self.count.wrapping_add(1);
    }
}

impl Write for KeyFolder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars().for_each(|c| self.fold(c));
        Ok(())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S> {
    /// Returns the number of key-value pairs in the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.len(), 0);
    /// map.put(1, "a");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no key-value pairs.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of slots in the underlying table.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// The configuration the map was built with.
    pub fn config(&self) -> &TableConfig {
        self.table.config()
    }

    /// Removes every pair and shrinks the map back to its initial capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::with_capacity(3);
    /// for i in 0..100 {
    ///     map.put(i, i);
    /// }
    /// assert!(map.capacity() > 3);
    ///
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// Pairs come out slot by slot in ascending index order; no other ordering
    /// is promised.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// map.put(1, "a");
    /// map.put(2, "b");
    ///
    /// for (key, value) in map.entries() {
    ///     println!("{key}: {value}");
    /// }
    /// assert_eq!(map.entries().len(), 2);
    /// ```
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries {
            inner: self.table.iter(),
        }
    }

    /// Returns a cursor over the pairs that can remove the pair it last
    /// returned.
    ///
    /// While the cursor is alive it is the only way to touch the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// for i in 0..10 {
    ///     map.put(i, i * 10);
    /// }
    ///
    /// let mut cursor = map.entries_mut();
    /// while cursor.has_next() {
    ///     let (key, value) = cursor.next()?;
    ///     if key % 2 == 1 {
    ///         cursor.remove()?;
    ///     } else {
    ///         *value += 1;
    ///     }
    /// }
    ///
    /// assert_eq!(map.len(), 5);
    /// assert_eq!(map.get(&4), Some(&41));
    /// # Ok::<(), chain_hash::TableError>(())
    /// ```
    pub fn entries_mut(&mut self) -> EntryCursor<'_, K, V> {
        EntryCursor {
            inner: self.table.cursor(),
        }
    }

    /// Returns `true` if any pair holds a value equal to `value`.
    ///
    /// Values are not indexed, so this scans every chain.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.table.iter().any(|(_, v)| v == value)
    }

    /// Bulk insertion from another mapping.
    ///
    /// # Errors
    ///
    /// Always returns [`TableError::Unsupported`]; the map is left untouched.
    pub fn put_all<I>(&mut self, _entries: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Err(TableError::Unsupported {
            operation: "put_all",
        })
    }

    /// A live view of just the values.
    ///
    /// # Errors
    ///
    /// Always returns [`TableError::Unsupported`]. Use [`entries`] and project
    /// the values instead.
    ///
    /// [`entries`]: ChainedHashMap::entries
    pub fn values(&self) -> Result<Infallible, TableError> {
        Err(TableError::Unsupported {
            operation: "values",
        })
    }

    /// Hash of the map's keys, for using the map itself as a key.
    ///
    /// Walks slots in ascending order and folds the characters of every
    /// rendered key into a base-31 polynomial seeded by the capacity: the
    /// `j`-th character overall contributes `c × 31^(capacity − j)`, or
    /// `c / 31^(j − capacity)` once the exponent would go negative. Values do
    /// not participate.
    ///
    /// Terms and the running sum wrap on `u32` overflow rather than
    /// saturating at `i32::MAX` as a float-to-int narrowing would.
    pub fn content_hash(&self) -> u32
    where
        K: Display,
    {
        let mut folder = KeyFolder {
            hash: 0,
            count: 1,
            seed: u32::try_from(self.table.capacity()).unwrap_or(u32::MAX),
        };
        for (key, _) in self.table.iter() {
            // KeyFolder never reports a write error.
            let _ = write!(folder, "{key}");
        }
        folder.hash
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the default configuration and the given
    /// hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: ChainedHashMap<i32, String, _> = ChainedHashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 101);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Creates an empty map with `capacity` slots and the given hasher
    /// builder. A capacity of zero is raised to one slot.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> Self {
        Self {
            table: HashTable::with_capacity(capacity),
            hash_builder,
        }
    }

    /// Creates an empty map from an explicit configuration and hasher
    /// builder.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the configuration fails
    /// [`TableConfig::validate`].
    pub fn with_config_and_hasher(
        config: TableConfig,
        hash_builder: S,
    ) -> Result<Self, TableError> {
        Ok(Self {
            table: HashTable::with_config(config)?,
            hash_builder,
        })
    }

    /// Returns a reference to the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value stored for `key`.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Stores `value` under `key`, following the map's [`DuplicatePolicy`].
    ///
    /// For a new key the pair is added (possibly rehashing the map) and
    /// `None` is returned. For a key that is already present:
    ///
    /// - [`DuplicatePolicy::KeepExisting`] (the default) leaves the stored
    ///   value in place, drops `value`, and returns a copy of the stored
    ///   value.
    /// - [`DuplicatePolicy::Replace`] stores `value` and returns the value it
    ///   replaced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// # use chain_hash::config::DuplicatePolicy;
    /// # use chain_hash::config::TableConfig;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.put("a", 1), None);
    /// assert_eq!(map.put("a", 2), Some(1));
    /// assert_eq!(map.get(&"a"), Some(&1));
    ///
    /// let config = TableConfig::new().with_duplicate_policy(DuplicatePolicy::Replace);
    /// let mut map = ChainedHashMap::with_config(config)?;
    /// assert_eq!(map.put("a", 1), None);
    /// assert_eq!(map.put("a", 2), Some(1));
    /// assert_eq!(map.get(&"a"), Some(&2));
    /// # Ok::<(), chain_hash::TableError>(())
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V>
    where
        V: Clone,
    {
        let policy = self.table.config().duplicate_policy();
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => match policy {
                DuplicatePolicy::KeepExisting => Some(entry.get().1.clone()),
                DuplicatePolicy::Replace => {
                    Some(core::mem::replace(&mut entry.get_mut().1, value))
                }
            },
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Inserts a key-value pair, always replacing the value of a key that is
    /// already present.
    ///
    /// Unlike [`put`](Self::put) this ignores the duplicate policy and needs
    /// no `Clone` on values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.insert(37, "b"), Some("a"));
    /// assert_eq!(map.get(&37), Some(&"b"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(mut entry) => {
                Some(core::mem::replace(&mut entry.get_mut().1, value))
            }
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                None
            }
        }
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// map.put(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if the map holds a pair for `key`.
    ///
    /// Every chain is scanned, so the answer does not depend on the hasher.
    pub fn contains_key(&self, key: &K) -> bool {
        self.table.iter().any(|(k, _)| k == key)
    }

    /// Returns a snapshot of the keys as a set.
    ///
    /// The set is built with a clone of the map's hasher builder and does not
    /// follow later changes to the map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let mut map = ChainedHashMap::new();
    /// map.put("x", 1);
    /// map.put("y", 2);
    ///
    /// let keys = map.keys();
    /// map.remove(&"x");
    ///
    /// assert_eq!(keys.len(), 2);
    /// assert!(keys.contains(&"x"));
    /// ```
    pub fn keys(&self) -> HashSet<K, S>
    where
        K: Clone,
        S: Clone,
    {
        let mut keys = HashSet::with_capacity_and_hasher(self.len(), self.hash_builder.clone());
        for (key, _) in self.table.iter() {
            keys.insert(key.clone());
        }
        keys
    }
}

#[cfg(any(feature = "foldhash", feature = "std"))]
impl<K, V> ChainedHashMap<K, V, DefaultHashBuilder>
where
    K: Hash + Eq,
{
    /// Creates an empty map with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::ChainedHashMap;
    /// #
    /// let map: ChainedHashMap<i32, String> = ChainedHashMap::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty map with `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }

    /// Creates an empty map from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the configuration fails
    /// [`TableConfig::validate`].
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        Self::with_config_and_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> Default for ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<'a, K, V, S> IntoIterator for &'a ChainedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Entries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// An iterator over the key-value pairs of a `ChainedHashMap`.
pub struct Entries<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Entries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Entries<'_, K, V> {}

impl<K, V> core::iter::FusedIterator for Entries<'_, K, V> {}

/// A cursor over the pairs of a `ChainedHashMap` that can remove the pair it
/// last returned.
///
/// Keys come out as shared references and values as mutable ones, so values
/// can be updated in place during the walk.
pub struct EntryCursor<'a, K, V> {
    inner: Cursor<'a, (K, V)>,
}

impl<K, V> EntryCursor<'_, K, V> {
    /// Returns `true` if [`next`](Self::next) would yield a pair.
    pub fn has_next(&self) -> bool {
        self.inner.has_next()
    }

    /// Advances to the next pair and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IteratorExhausted`] once every pair has been
    /// returned.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<(&K, &mut V), TableError> {
        let (key, value) = self.inner.next()?;
        Ok((&*key, value))
    }

    /// Removes the pair most recently returned by [`next`](Self::next).
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidIteratorState`] if there is no such pair,
    /// either because `next` was never called or because it was already
    /// removed.
    pub fn remove(&mut self) -> Result<(K, V), TableError> {
        self.inner.remove()
    }

    /// Number of pairs currently in the map.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the map holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
