// marquee-core/src/domain/movie.rs

use serde::Serialize;

use crate::domain::error::{Field, ParseFailure};

/// A movie lists at most this many language tags; extra tags are dropped.
pub const MAX_LANGUAGES: usize = 5;

/// Longest language tag kept, in characters. Longer tags are truncated.
pub const MAX_LANGUAGE_LEN: usize = 19;

/// One accepted catalog record. Fields are private so a `Movie` cannot be
/// changed once it exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Movie {
    title: String,
    year: i32,
    languages: Vec<String>,
    rating: f32,
}

impl Movie {
    /// Builds a record, clamping the language list to `MAX_LANGUAGES` tags of
    /// at most `MAX_LANGUAGE_LEN` characters. Empty tags are skipped. A NaN or
    /// infinite rating is stored as 0.0 so ratings always compare.
    pub fn new<I, S>(
        title: impl Into<String>,
        year: i32,
        languages: I,
        rating: f32,
    ) -> Result<Self, ParseFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(ParseFailure::MissingField(Field::Title));
        }

        let languages = languages
            .into_iter()
            .filter(|tag| !tag.as_ref().is_empty())
            .take(MAX_LANGUAGES)
            .map(|tag| clamp_tag(tag.as_ref()))
            .collect();

        Ok(Self {
            title,
            year,
            languages,
            rating: if rating.is_finite() { rating } else { 0.0 },
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    /// Exact, case-sensitive tag match.
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|tag| tag == language)
    }
}

fn clamp_tag(tag: &str) -> String {
    tag.chars().take(MAX_LANGUAGE_LEN).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_movie_keeps_first_five_languages() -> Result<()> {
        let movie = Movie::new(
            "Babel",
            2006,
            ["English", "Arabic", "Spanish", "Japanese", "Berber", "French"],
            7.5,
        )?;
        assert_eq!(movie.languages().len(), MAX_LANGUAGES);
        assert_eq!(movie.languages()[4], "Berber");
        assert!(!movie.speaks("French"));
        Ok(())
    }

    #[test]
    fn test_movie_truncates_long_tags() -> Result<()> {
        let movie = Movie::new("Long", 2001, ["Abcdefghijklmnopqrstuvwxyz"], 1.0)?;
        assert_eq!(movie.languages()[0], "Abcdefghijklmnopqrs");
        assert_eq!(movie.languages()[0].chars().count(), MAX_LANGUAGE_LEN);
        Ok(())
    }

    #[test]
    fn test_movie_keeps_duplicate_tags() -> Result<()> {
        let movie = Movie::new("Echo", 2014, ["English", "English"], 6.0)?;
        assert_eq!(movie.languages(), ["English", "English"]);
        Ok(())
    }

    #[test]
    fn test_movie_rejects_blank_title() {
        let res = Movie::new("  ", 2014, ["English"], 6.0);
        assert_eq!(res, Err(ParseFailure::MissingField(Field::Title)));
    }

    #[test]
    fn test_non_finite_rating_is_stored_as_zero() -> Result<()> {
        let movie = Movie::new("Void", 2010, ["English"], f32::NAN)?;
        assert_eq!(movie.rating(), 0.0);
        let movie = Movie::new("Void", 2010, ["English"], f32::INFINITY)?;
        assert_eq!(movie.rating(), 0.0);
        Ok(())
    }

    #[test]
    fn test_speaks_is_case_sensitive() -> Result<()> {
        let movie = Movie::new("Amelie", 2001, ["French"], 8.3)?;
        assert!(movie.speaks("French"));
        assert!(!movie.speaks("french"));
        assert!(!movie.speaks("Fren"));
        Ok(())
    }
}
