// marquee-core/src/application/mod.rs

pub mod dispatch;
pub mod export;
pub mod ingest;

// --- RE-EXPORTS (FACADE PATTERN) ---
// The CLI only needs:
// `use marquee_core::application::{load_catalog, dispatch, Request, CatalogExporter};`

pub use dispatch::{Request, Response, dispatch};
pub use export::CatalogExporter;
pub use ingest::load_catalog;
