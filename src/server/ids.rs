//! Identifier generation for task and session ids

use uuid::Uuid;

/// Source of fresh task and session identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    /// Return a new non-empty identifier, unique per call
    fn generate(&self) -> String;
}

/// Random 128-bit identifiers (UUID v4, hyphenated)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
