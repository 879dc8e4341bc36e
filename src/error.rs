use thiserror::Error;

/// Errors reported by the chained hash table.
///
/// Lookups that miss are not errors; they return `None`. The variants here
/// cover operations that fail outright without touching the table.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The operation is part of the mapping surface but intentionally not
    /// implemented.
    #[error("{operation} is not supported by ChainedHashMap")]
    Unsupported {
        /// Name of the rejected operation.
        operation: &'static str,
    },
    /// A cursor was advanced after its last entry.
    #[error("entry cursor has no remaining entries")]
    IteratorExhausted,
    /// A cursor removal was requested without a fresh entry to remove.
    #[error("entry cursor has no current entry; call next() before remove()")]
    InvalidIteratorState,
    /// A `TableConfig` was rejected before any table was built.
    #[error("invalid table configuration: {reason}")]
    InvalidConfig {
        /// Which constraint the configuration violated.
        reason: &'static str,
    },
}
