//! Persistence of the previous match collection between cycles.

pub mod snapshot;

pub use snapshot::SnapshotStore;
