use crate::error::TableError;

/// Number of slots a table starts with unless configured otherwise.
pub const DEFAULT_INITIAL_CAPACITY: usize = 101;

/// Average chain length a table tolerates before it rehashes.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 3.0;

/// What `put` does when the key is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum DuplicatePolicy {
    /// Leave the stored value untouched and hand back a copy of it.
    #[default]
    KeepExisting,
    /// Overwrite the stored value and hand back the one it replaced.
    Replace,
}

/// Per-table tuning knobs.
///
/// Each table owns its configuration, so tables built side by side can start
/// at different sizes or grow at different thresholds.
///
/// # Examples
///
/// ```rust
/// use chain_hash::config::DuplicatePolicy;
/// use chain_hash::config::TableConfig;
///
/// let config = TableConfig::new()
///     .with_initial_capacity(11)
///     .with_max_load_factor(0.75)
///     .with_duplicate_policy(DuplicatePolicy::Replace);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.initial_capacity(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableConfig {
    initial_capacity: usize,
    max_load_factor: f64,
    duplicates: DuplicatePolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TableConfig {
    /// The default configuration: 101 slots, load factor 3, keep-existing
    /// duplicates.
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
            duplicates: DuplicatePolicy::KeepExisting,
        }
    }

    /// Sets the slot count used at construction and after `clear`.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the ratio of entries to slots above which an insert rehashes.
    pub const fn with_max_load_factor(mut self, max_load_factor: f64) -> Self {
        self.max_load_factor = max_load_factor;
        self
    }

    /// Sets the behaviour of `put` for keys that are already present.
    pub const fn with_duplicate_policy(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Slot count used at construction and after `clear`.
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Ratio of entries to slots above which an insert rehashes.
    pub const fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Behaviour of `put` for keys that are already present.
    pub const fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Checks that a table can be built from this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidConfig`] if the initial capacity is zero or
    /// the load factor is not a finite positive number.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.initial_capacity == 0 {
            return Err(TableError::InvalidConfig {
                reason: "initial capacity must be at least 1",
            });
        }
        if !self.max_load_factor.is_finite() || self.max_load_factor <= 0.0 {
            return Err(TableError::InvalidConfig {
                reason: "max load factor must be finite and positive",
            });
        }
        Ok(())
    }
}
