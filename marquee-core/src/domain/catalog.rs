// marquee-core/src/domain/catalog.rs

use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::error::ParseFailure;
use crate::domain::movie::Movie;
use crate::domain::parser::{ParseWarning, RecordParser};

/// Ordered, read-only collection of accepted movies. Insertion order is
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Movie> {
        self.movies.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Movie;
    type IntoIter = std::slice::Iter<'a, Movie>;

    fn into_iter(self) -> Self::IntoIter {
        self.movies.iter()
    }
}

/// A skipped line. `line_number` is 1-based and counts the header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedLine {
    pub line_number: usize,
    #[serde(serialize_with = "serialize_display")]
    pub failure: ParseFailure,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineWarning {
    pub line_number: usize,
    pub title: String,
    pub warning: ParseWarning,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildReport {
    pub catalog: Catalog,
    pub success_count: usize,
    pub rejected: Vec<RejectedLine>,
    pub warnings: Vec<LineWarning>,
    /// Every line seen, header included.
    pub lines_read: usize,
}

impl BuildReport {
    /// Lines after the header, whether they parsed or not.
    pub fn data_lines(&self) -> usize {
        self.success_count + self.rejected.len()
    }
}

/// Line-by-line ingestion. Feed lines with `push_line`, then `finish`.
#[derive(Debug)]
pub struct CatalogBuilder {
    parser: RecordParser,
    header_pending: bool,
    lines_read: usize,
    movies: Vec<Movie>,
    rejected: Vec<RejectedLine>,
    warnings: Vec<LineWarning>,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new(RecordParser::default())
    }
}

impl CatalogBuilder {
    pub fn new(parser: RecordParser) -> Self {
        Self {
            parser,
            header_pending: true,
            lines_read: 0,
            movies: Vec::new(),
            rejected: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Treat the first line as data instead of a header.
    pub fn without_header(mut self) -> Self {
        self.header_pending = false;
        self
    }

    pub fn push_line(&mut self, line: &str) {
        self.lines_read += 1;
        let line_number = self.lines_read;

        if self.header_pending {
            self.header_pending = false;
            debug!(header = %line.trim_end(), "Skipping header line");
            return;
        }

        match self.parser.parse(line) {
            Ok(record) => {
                for warning in record.warnings {
                    warn!(line = line_number, title = %record.movie.title(), "{}", warning);
                    self.warnings.push(LineWarning {
                        line_number,
                        title: record.movie.title().to_string(),
                        warning,
                    });
                }
                self.movies.push(record.movie);
            }
            Err(failure) => {
                warn!(line = line_number, "Skipping line: {}", failure);
                self.rejected.push(RejectedLine {
                    line_number,
                    failure,
                });
            }
        }
    }

    pub fn finish(self) -> BuildReport {
        let success_count = self.movies.len();
        BuildReport {
            catalog: Catalog {
                movies: self.movies,
            },
            success_count,
            rejected: self.rejected,
            warnings: self.warnings,
            lines_read: self.lines_read,
        }
    }

    /// One-shot ingestion with the default parser: skips the header, parses
    /// the rest.
    pub fn build<I, S>(lines: I) -> BuildReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::default().extend_lines(lines).finish()
    }

    pub fn extend_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.push_line(line.as_ref());
        }
        self
    }
}

fn serialize_display<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
    T: std::fmt::Display,
{
    serializer.collect_str(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::Field;

    const HEADER: &str = "Title,Year,Languages,Rating";

    #[test]
    fn test_build_preserves_input_order() {
        let report = CatalogBuilder::build([
            HEADER,
            "Up,2009,[English;French],8.2",
            "Cars,2006,[English],7.1",
        ]);
        assert_eq!(report.success_count, 2);
        let titles: Vec<&str> = report.catalog.iter().map(Movie::title).collect();
        assert_eq!(titles, ["Up", "Cars"]);
        assert_eq!(report.lines_read, 3);
    }

    #[test]
    fn test_failed_lines_are_skipped_and_recorded() {
        let report = CatalogBuilder::build([
            HEADER,
            "OnlyTitleNoCommas",
            "Up,2009,[English],8.2",
            "",
        ]);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.catalog.len(), 1);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].line_number, 2);
        assert_eq!(
            report.rejected[0].failure,
            ParseFailure::MissingField(Field::Year)
        );
        assert_eq!(
            report.rejected[1].failure,
            ParseFailure::MissingField(Field::Title)
        );
        assert_eq!(report.data_lines(), 3);
    }

    #[test]
    fn test_missing_rating_is_kept_with_warning() {
        let report = CatalogBuilder::build([HEADER, "Test,2020,[English],"]);
        assert_eq!(report.success_count, 1);
        assert_eq!(report.catalog.movies()[0].rating(), 0.0);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].line_number, 2);
        assert_eq!(report.warnings[0].warning, ParseWarning::MissingRating);
    }

    #[test]
    fn test_empty_and_header_only_sources() {
        let empty = CatalogBuilder::build(Vec::<String>::new());
        assert!(empty.catalog.is_empty());
        assert_eq!(empty.success_count, 0);
        assert_eq!(empty.lines_read, 0);

        let header_only = CatalogBuilder::build([HEADER]);
        assert!(header_only.catalog.is_empty());
        assert_eq!(header_only.success_count, 0);
        assert_eq!(header_only.lines_read, 1);
        assert_eq!(header_only.data_lines(), 0);
    }

    #[test]
    fn test_header_is_never_parsed_as_a_record() {
        // A header that happens to look like a record is still skipped.
        let report = CatalogBuilder::build(["Up,2009,[English],8.2"]);
        assert!(report.catalog.is_empty());
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_without_header_parses_first_line() {
        let report = CatalogBuilder::default()
            .without_header()
            .extend_lines(["Up,2009,[English],8.2"])
            .finish();
        assert_eq!(report.success_count, 1);
        assert_eq!(report.rejected.len(), 0);
    }
}
