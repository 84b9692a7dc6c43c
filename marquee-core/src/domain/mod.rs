pub mod catalog;
pub mod configuration;
pub mod error;
pub mod movie;
pub mod parser;
pub mod query;

// Re-exports to keep imports short elsewhere
pub use catalog::{BuildReport, Catalog, CatalogBuilder, LineWarning, RejectedLine};
pub use configuration::{MarqueeConfig, OutputFormat, YearBounds};
pub use error::{DomainError, Field, ParseFailure};
pub use movie::{MAX_LANGUAGE_LEN, MAX_LANGUAGES, Movie};
pub use parser::{ParseWarning, ParsedRecord, RecordParser};
pub use query::{LanguageMatch, QueryOutcome, TopRated};
