//! ID generation utilities
//!
//! Account ids come from an [`IdGenerator`] handed to the store, so tests
//! can replace the random generator with a predictable one.

/// Source of fresh account ids
pub trait IdGenerator: Send {
    /// Produce the next id
    fn next_id(&mut self) -> String;
}

/// Random UUID v4 generator (the default)
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        generate_account_id()
    }
}

/// Deterministic generator producing `<prefix>-1`, `<prefix>-2`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    counter: u64,
}

impl SequentialIdGenerator {
    /// Create a generator with the given prefix
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: 0,
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new("account")
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("{}-{}", self.prefix, self.counter)
    }
}

/// Generate an account ID (hyphenated UUID v4, 36 characters)
pub fn generate_account_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
