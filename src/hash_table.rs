use alloc::vec::Vec;
use core::fmt::Debug;

use crate::config::TableConfig;
use crate::error::TableError;

/// Maps a hash onto a slot in `0..len`.
///
/// The hash is reinterpreted as signed, so hashers that produce "negative"
/// values still land inside the table after the Euclidean remainder.
#[inline(always)]
pub(crate) fn bucket_index(hash: u64, len: usize) -> usize {
    debug_assert!(len > 0);
    (hash as i64).rem_euclid(len as i64) as usize
}

/// Capacity reached by one rehash. Odd lengths keep common hash multiples
/// from piling into the same slots.
#[inline(always)]
fn grown_capacity(len: usize) -> usize {
    len.saturating_mul(2).saturating_add(1)
}

#[derive(Clone)]
struct Slot<V> {
    hash: u64,
    value: V,
}

type Chain<V> = Vec<Slot<V>>;

/// Debug statistics for hash table analysis.
///
/// Compiled for tests, or with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of slots in the table
    pub capacity: usize,
    /// Number of slots holding a chain
    pub occupied_slots: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Load factor at which the next insert rehashes
    pub max_load_factor: f64,
    /// Slot utilization (occupied_slots / capacity)
    pub slot_utilization: f64,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Chained Hash Table Statistics ===");
        println!(
            "Population: {} over {} slots ({:.2} load factor, rehash above {:.2})",
            self.populated, self.capacity, self.load_factor, self.max_load_factor
        );
        println!(
            "Slot Usage: {}/{} ({:.2}% utilization)",
            self.occupied_slots,
            self.capacity,
            self.slot_utilization * 100.0
        );
        println!("Longest chain: {}", self.longest_chain);
    }
}

/// A hash table using separate chaining.
///
/// `HashTable<V>` stores values of type `V` in a fixed-length array of slots,
/// each slot holding the chain of values whose hashes reduce to it. Like the
/// maps it backs, it does not hash anything itself: every operation takes the
/// hash value and an equality predicate from the caller.
///
/// When an insert pushes the number of elements above
/// `max_load_factor × capacity`, the table synchronously rehashes into
/// `2 × capacity + 1` slots before the insert returns.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<V> {
    buckets: Vec<Option<Chain<V>>>,
    populated: usize,
    config: TableConfig,
}

impl<V> Debug for HashTable<V>
where
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Chains<'a, V>(&'a [Option<Chain<V>>]);

        impl<V: Debug> Debug for Chains<'_, V> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut map = f.debug_map();
                for (index, chain) in self.0.iter().enumerate() {
                    if let Some(chain) = chain {
                        map.entry(&index, &ChainValues(chain));
                    }
                }
                map.finish()
            }
        }

        struct ChainValues<'a, V>(&'a [Slot<V>]);

        impl<V: Debug> Debug for ChainValues<'_, V> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_list()
                    .entries(self.0.iter().map(|slot| &slot.value))
                    .finish()
            }
        }

        f.debug_struct("HashTable")
            .field("populated", &self.populated)
            .field("capacity", &self.buckets.len())
            .field("chains", &Chains(&self.buckets))
            .finish()
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> HashTable<V> {
    /// Creates an empty table with the default configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<u64> = HashTable::new();
    /// assert_eq!(table.capacity(), 101);
    /// ```
    pub fn new() -> Self {
        Self::from_valid_config(TableConfig::new())
    }

    /// Creates an empty table with `capacity` slots and the default load
    /// factor. A capacity of zero is raised to one slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::with_capacity(17);
    /// assert_eq!(table.capacity(), 17);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_valid_config(TableConfig::new().with_initial_capacity(capacity.max(1)))
    }

    /// Creates an empty table from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the configuration fails
    /// [`TableConfig::validate`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::config::TableConfig;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let config = TableConfig::new().with_initial_capacity(5).with_max_load_factor(1.0);
    /// let table: HashTable<u32> = HashTable::with_config(config).unwrap();
    /// assert_eq!(table.capacity(), 5);
    ///
    /// assert!(HashTable::<u32>::with_config(config.with_initial_capacity(0)).is_err());
    /// ```
    pub fn with_config(config: TableConfig) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TableConfig) -> Self {
        Self {
            buckets: empty_buckets(config.initial_capacity()),
            populated: 0,
            config,
        }
    }

    /// The configuration this table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Returns the number of slots in the table.
    ///
    /// This starts at the configured initial capacity and grows by rehashing.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of elements in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    ///
    /// table.entry(1, |&n: &u64| n == 1).or_insert(1);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Removes all elements and shrinks the table back to its initial
    /// capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::with_capacity(2);
    /// for n in 0..32u64 {
    ///     table.entry(n, |&v: &u64| v == n).or_insert(n);
    /// }
    /// assert!(table.capacity() > 2);
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 2);
    /// ```
    pub fn clear(&mut self) {
        tracing::trace!(
            dropped = self.populated,
            capacity = self.config.initial_capacity(),
            "clearing chained table"
        );
        self.buckets = empty_buckets(self.config.initial_capacity());
        self.populated = 0;
    }

    /// Finds a value in the table by hash and equality predicate.
    ///
    /// Only the chain the hash reduces to is scanned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(99, |&n| n == 99), None);
    /// ```
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let index = bucket_index(hash, self.buckets.len());
        self.buckets[index]
            .as_ref()?
            .iter()
            .find(|slot| eq(&slot.value))
            .map(|slot| &slot.value)
    }

    /// Finds a value in the table by hash and equality predicate, returning a
    /// mutable reference.
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let index = bucket_index(hash, self.buckets.len());
        self.buckets[index]
            .as_mut()?
            .iter_mut()
            .find(|slot| eq(&slot.value))
            .map(|slot| &mut slot.value)
    }

    /// Removes and returns a value from the table.
    ///
    /// If this empties the chain, the slot goes back to holding no chain at
    /// all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert!(table.is_empty());
    /// assert_eq!(table.remove(42, |&n| n == 42), None);
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let index = bucket_index(hash, self.buckets.len());
        let position = self.buckets[index]
            .as_ref()?
            .iter()
            .position(|slot| eq(&slot.value))?;
        Some(self.take_slot(index, position).value)
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// The entry is occupied if the chain for `hash` holds a value matching
    /// `eq`, and vacant otherwise. Inserting through a vacant entry may
    /// rehash the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(7, |s: &String| s == "hello") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("hello".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         entry.get_mut().push('!');
    ///     }
    /// }
    ///
    /// let value = table.entry(7, |s: &String| s == "hello").or_insert(String::new());
    /// assert_eq!(value, "hello");
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        let index = bucket_index(hash, self.buckets.len());
        let position = self.buckets[index]
            .as_ref()
            .and_then(|chain| chain.iter().position(|slot| eq(&slot.value)));

        match position {
            Some(position) => Entry::Occupied(OccupiedEntry {
                table: self,
                index,
                position,
            }),
            None => Entry::Vacant(VacantEntry { table: self, hash }),
        }
    }

    /// Returns an iterator over all values.
    ///
    /// Slots are visited in ascending index order and each chain front to
    /// back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// for n in 0..10u64 {
    ///     table.entry(n, |&v: &u64| v == n).or_insert(n);
    /// }
    ///
    /// assert_eq!(table.iter().sum::<u64>(), 45);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.populated,
        }
    }

    /// Returns a cursor that walks the table and can remove the value it
    /// last returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// for n in 0..10u64 {
    ///     table.entry(n, |&v: &u64| v == n).or_insert(n);
    /// }
    ///
    /// let mut cursor = table.cursor();
    /// while cursor.has_next() {
    ///     if *cursor.next().unwrap() % 2 == 0 {
    ///         cursor.remove().unwrap();
    ///     }
    /// }
    /// assert_eq!(table.len(), 5);
    /// ```
    pub fn cursor(&mut self) -> Cursor<'_, V> {
        Cursor {
            table: self,
            slot: 0,
            position: 0,
            last: None,
        }
    }

    /// Values in slot-descending order, each chain front to back.
    pub(crate) fn iter_slots_rev(&self) -> impl Iterator<Item = &V> + '_ {
        self.buckets
            .iter()
            .rev()
            .flatten()
            .flat_map(|chain| chain.iter().map(|slot| &slot.value))
    }

    #[inline]
    fn exceeds_load(&self) -> bool {
        self.populated as f64 > self.config.max_load_factor() * self.buckets.len() as f64
    }

    /// Appends a slot to the chain its hash reduces to and returns where it
    /// landed.
    fn push_slot(&mut self, slot: Slot<V>) -> (usize, usize) {
        let index = bucket_index(slot.hash, self.buckets.len());
        let chain = self.buckets[index].get_or_insert_with(Vec::new);
        chain.push(slot);
        self.populated += 1;
        (index, chain.len() - 1)
    }

    /// Removes the slot at `(index, position)`, dropping the chain if it was
    /// the last one.
    fn take_slot(&mut self, index: usize, position: usize) -> Slot<V> {
        let Some(chain) = self.buckets[index].as_mut() else {
            unreachable!("slot {index} has no chain");
        };
        let slot = chain.remove(position);
        if chain.is_empty() {
            self.buckets[index] = None;
        }
        self.populated -= 1;
        slot
    }

    fn slot_mut(&mut self, index: usize, position: usize) -> &mut Slot<V> {
        match self.buckets[index].as_mut() {
            Some(chain) => &mut chain[position],
            None => unreachable!("slot {index} has no chain"),
        }
    }

    /// Moves every element into a table of `2 × capacity + 1` slots.
    ///
    /// `track` names one element by its current location; its location in the
    /// new table is returned.
    fn rehash(&mut self, track: (usize, usize)) -> (usize, usize) {
        let old_capacity = self.buckets.len();
        let new_capacity = grown_capacity(old_capacity);
        let old = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        self.populated = 0;

        let mut relocated = track;
        for (index, chain) in old.into_iter().enumerate() {
            let Some(chain) = chain else {
                continue;
            };
            for (position, slot) in chain.into_iter().enumerate() {
                let landed = self.push_slot(slot);
                if (index, position) == track {
                    relocated = landed;
                }
            }
        }

        tracing::debug!(
            from = old_capacity,
            to = new_capacity,
            entries = self.populated,
            "rehashed chained table"
        );
        relocated
    }

    /// Counts slots by chain length.
    ///
    /// Index `n` of the result is the number of slots whose chain holds `n`
    /// elements; index 0 counts empty slots.
    #[cfg(any(test, feature = "stats"))]
    pub fn chain_histogram(&self) -> Vec<usize> {
        let longest = self
            .buckets
            .iter()
            .map(|chain| chain.as_ref().map_or(0, Vec::len))
            .max()
            .unwrap_or(0);

        let mut hist = alloc::vec![0usize; longest + 1];
        for chain in &self.buckets {
            hist[chain.as_ref().map_or(0, Vec::len)] += 1;
        }
        hist
    }

    /// Returns load and utilization statistics.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.buckets.len();
        let occupied_slots = self.buckets.iter().filter(|chain| chain.is_some()).count();
        let longest_chain = self
            .buckets
            .iter()
            .flatten()
            .map(Vec::len)
            .max()
            .unwrap_or(0);

        DebugStats {
            populated: self.populated,
            capacity,
            occupied_slots,
            longest_chain,
            load_factor: self.populated as f64 / capacity as f64,
            max_load_factor: self.config.max_load_factor(),
            slot_utilization: occupied_slots as f64 / capacity as f64,
        }
    }

    /// Pretty-prints the chain-length histogram horizontally using stdout.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_chain_histogram(&self) {
        let hist = self.chain_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("chain histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!(
            "chain histogram ({} entries, {} slots):",
            self.populated,
            self.buckets.len()
        );
        for (len, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", len, "█".repeat(width), count);
        }
    }
}

fn empty_buckets<V>(len: usize) -> Vec<Option<Chain<V>>> {
    let mut buckets = Vec::with_capacity(len);
    buckets.resize_with(len, || None);
    buckets
}

/// A view into a single entry in the hash table, which may be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry - no value in the chain matched
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry - a value in the chain matched
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the value in the table.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the value returned by `default` if the entry is vacant and
    /// returns a mutable reference to the value in the table.
    ///
    /// The closure is not called for an occupied entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }
}

/// A view into a vacant entry in the hash table.
///
/// [`entry`]: HashTable::entry
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Appends the value to its chain and returns a mutable reference to it.
    ///
    /// If the insert pushes the table past its load factor, the table is
    /// rehashed, repeatedly if one growth step is not enough, and the returned
    /// reference points into the new slots.
    pub fn insert(self, value: V) -> &'a mut V {
        let table = self.table;
        let mut at = table.push_slot(Slot {
            hash: self.hash,
            value,
        });
        while table.exceeds_load() {
            at = table.rehash(at);
        }
        &mut table.slot_mut(at.0, at.1).value
    }
}

/// A view into an occupied entry in the hash table.
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    index: usize,
    position: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        match self.table.buckets[self.index].as_ref() {
            Some(chain) => &chain[self.position].value,
            None => unreachable!("occupied entry without a chain"),
        }
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.slot_mut(self.index, self.position).value
    }

    /// Converts the entry into a mutable reference tied to the table.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.table.slot_mut(self.index, self.position).value
    }

    /// Removes the value from the table and returns it.
    pub fn remove(self) -> V {
        self.table.take_slot(self.index, self.position).value
    }
}

/// An iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, Option<Chain<V>>>,
    chain: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.chain.next() {
                self.remaining -= 1;
                return Some(&slot.value);
            }
            if let Some(chain) = self.buckets.next()?.as_ref() {
                self.chain = chain.iter();
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> core::iter::FusedIterator for Iter<'_, V> {}

/// A forward-only cursor over a [`HashTable`] that can remove the value it
/// most recently returned.
///
/// The cursor remembers the slot it is in, its position in that slot's chain,
/// and where the last returned value lives. It holds the table mutably, so
/// nothing else can restructure the table while a walk is in progress.
///
/// This struct is created by the [`cursor`] method on [`HashTable`].
///
/// [`cursor`]: HashTable::cursor
pub struct Cursor<'a, V> {
    table: &'a mut HashTable<V>,
    slot: usize,
    position: usize,
    last: Option<(usize, usize)>,
}

impl<'a, V> Cursor<'a, V> {
    /// Returns `true` if [`next`](Self::next) would yield a value.
    ///
    /// Looks past empty slots without moving the cursor.
    pub fn has_next(&self) -> bool {
        let buckets = &self.table.buckets;
        let in_chain = buckets
            .get(self.slot)
            .and_then(Option::as_ref)
            .is_some_and(|chain| self.position < chain.len());
        in_chain
            || buckets
                .iter()
                .skip(self.slot + 1)
                .any(|chain| chain.is_some())
    }

    /// Advances to the next value and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::IteratorExhausted`] once every value has been
    /// returned; further calls keep failing the same way.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&mut V, TableError> {
        let capacity = self.table.buckets.len();
        while self.slot < capacity {
            let in_chain = self.table.buckets[self.slot]
                .as_ref()
                .is_some_and(|chain| self.position < chain.len());
            if in_chain {
                let at = (self.slot, self.position);
                self.last = Some(at);
                self.position += 1;
                return Ok(&mut self.table.slot_mut(at.0, at.1).value);
            }
            self.slot += 1;
            self.position = 0;
        }

        self.last = None;
        Err(TableError::IteratorExhausted)
    }

    /// Removes the value most recently returned by [`next`](Self::next).
    ///
    /// The table's length drops immediately and the walk continues with the
    /// value that followed the removed one.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidIteratorState`] if `next` has not returned
    /// a value since the cursor was created or since the last removal.
    pub fn remove(&mut self) -> Result<V, TableError> {
        let (slot, position) = self.last.take().ok_or(TableError::InvalidIteratorState)?;
        self.position = position;
        Ok(self.table.take_slot(slot, position).value)
    }

    /// Number of values currently in the underlying table.
    pub fn len(&self) -> usize {
        self.table.populated
    }

    /// Returns `true` if the underlying table holds no values.
    pub fn is_empty(&self) -> bool {
        self.table.populated == 0
    }
}
