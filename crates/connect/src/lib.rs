//! Net worth connect - HTTP snapshot provider.
//!
//! Implements [`networth_core::SnapshotProviderTrait`] against the snapshot
//! backend so the core pipeline can be fed from a remote service.

pub mod client;

pub use client::{SnapshotApiClient, DEFAULT_SNAPSHOT_API_URL, DEFAULT_TIMEOUT_SECS};
