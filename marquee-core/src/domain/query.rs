// marquee-core/src/domain/query.rs
//
// Read-only queries over a finished Catalog. Single pass each, no state.

use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::catalog::Catalog;
use crate::domain::movie::Movie;

/// A query that matched nothing is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum QueryOutcome<T> {
    Found(T),
    NotFound,
}

impl<T> QueryOutcome<T> {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Vec<T>> for QueryOutcome<Vec<T>> {
    fn from(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::NotFound
        } else {
            Self::Found(items)
        }
    }
}

impl<K, V> From<BTreeMap<K, V>> for QueryOutcome<BTreeMap<K, V>> {
    fn from(entries: BTreeMap<K, V>) -> Self {
        if entries.is_empty() {
            Self::NotFound
        } else {
            Self::Found(entries)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopRated<'a> {
    pub rating: f32,
    pub title: &'a str,
}

impl<'a> From<&'a Movie> for TopRated<'a> {
    fn from(movie: &'a Movie) -> Self {
        Self {
            rating: movie.rating(),
            title: movie.title(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageMatch<'a> {
    pub year: i32,
    pub title: &'a str,
}

/// Titles released in `year`, in catalog order.
pub fn by_year(catalog: &Catalog, year: i32) -> QueryOutcome<Vec<&str>> {
    catalog
        .iter()
        .filter(|movie| movie.year() == year)
        .map(Movie::title)
        .collect::<Vec<_>>()
        .into()
}

/// Best-rated movie for every year present, ascending by year.
/// Ties keep the movie seen first.
pub fn highest_rated_per_year(catalog: &Catalog) -> BTreeMap<i32, TopRated<'_>> {
    let mut best: BTreeMap<i32, TopRated<'_>> = BTreeMap::new();

    for movie in catalog {
        match best.entry(movie.year()) {
            Entry::Vacant(slot) => {
                slot.insert(TopRated::from(movie));
            }
            Entry::Occupied(mut slot) => {
                if movie.rating() > slot.get().rating {
                    slot.insert(TopRated::from(movie));
                }
            }
        }
    }

    best
}

/// Movies tagged with exactly `language`. A movie listing the tag twice
/// still appears once.
pub fn by_language<'a>(
    catalog: &'a Catalog,
    language: &str,
) -> QueryOutcome<Vec<LanguageMatch<'a>>> {
    catalog
        .iter()
        .filter(|movie| movie.speaks(language))
        .map(|movie| LanguageMatch {
            year: movie.year(),
            title: movie.title(),
        })
        .collect::<Vec<_>>()
        .into()
}
