use thiserror::Error;

/// Failures of the hierarchy functions. Orphaned parents and unknown
/// targets are not errors; they degrade to roots and empty paths.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    #[error("Duplicate workgroup id: {0}")]
    DuplicateId(i32),

    #[error("Cyclic ancestry detected at workgroup {0}")]
    CyclicAncestry(i32),
}
