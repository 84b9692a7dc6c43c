// marquee-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- LAYERS ---

// 1. Domain
// Movie records, the record parser, the catalog builder and the queries.
// Pure code: no filesystem, no environment.
pub mod domain;

// 2. Infrastructure (Adapters)
// Line source over files, YAML configuration, atomic writes.
pub mod infrastructure;

// 3. Application (Use Cases)
// Ingestion, request dispatch, JSON export.
pub mod application;

// --- GLOBAL ERRORS ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::MarqueeError;
