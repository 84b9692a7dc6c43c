// marquee-core/src/application/dispatch.rs
//
// USE CASE: answer one already-validated request against a finished Catalog.

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::domain::catalog::Catalog;
use crate::domain::query::{self, LanguageMatch, QueryOutcome, TopRated};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    ByYear(i32),
    HighestRatedPerYear,
    ByLanguage(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum Response<'a> {
    ByYear {
        year: i32,
        titles: QueryOutcome<Vec<&'a str>>,
    },
    HighestRatedPerYear {
        years: QueryOutcome<BTreeMap<i32, TopRated<'a>>>,
    },
    ByLanguage {
        language: String,
        movies: QueryOutcome<Vec<LanguageMatch<'a>>>,
    },
}

impl Response<'_> {
    pub fn is_not_found(&self) -> bool {
        match self {
            Response::ByYear { titles, .. } => titles.is_not_found(),
            Response::HighestRatedPerYear { years } => years.is_not_found(),
            Response::ByLanguage { movies, .. } => movies.is_not_found(),
        }
    }
}

#[instrument(skip(catalog), fields(catalog.len = catalog.len()))]
pub fn dispatch<'a>(catalog: &'a Catalog, request: &Request) -> Response<'a> {
    let response = match request {
        Request::ByYear(year) => Response::ByYear {
            year: *year,
            titles: query::by_year(catalog, *year),
        },
        Request::HighestRatedPerYear => Response::HighestRatedPerYear {
            years: query::highest_rated_per_year(catalog).into(),
        },
        Request::ByLanguage(language) => Response::ByLanguage {
            language: language.clone(),
            movies: query::by_language(catalog, language),
        },
    };

    debug!(not_found = response.is_not_found(), "Request answered");
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CatalogBuilder;
    use anyhow::Result;

    fn sample() -> Catalog {
        CatalogBuilder::build([
            "Title,Year,Languages,Rating",
            "Up,2009,[English;French],8.2",
            "Cars,2006,[English],7.1",
        ])
        .catalog
    }

    #[test]
    fn test_dispatch_by_year() {
        let catalog = sample();
        let response = dispatch(&catalog, &Request::ByYear(2009));
        assert_eq!(
            response,
            Response::ByYear {
                year: 2009,
                titles: QueryOutcome::Found(vec!["Up"]),
            }
        );
    }

    #[test]
    fn test_dispatch_not_found() {
        let catalog = sample();
        assert!(dispatch(&catalog, &Request::ByYear(1899)).is_not_found());
        assert!(dispatch(&catalog, &Request::ByLanguage("Klingon".into())).is_not_found());
        assert!(dispatch(&Catalog::default(), &Request::HighestRatedPerYear).is_not_found());
    }

    #[test]
    fn test_response_json_shape() -> Result<()> {
        let catalog = sample();
        let response = dispatch(&catalog, &Request::HighestRatedPerYear);
        let json = serde_json::to_value(&response)?;

        assert_eq!(json["query"], "highest_rated_per_year");
        assert_eq!(json["years"]["status"], "found");
        assert_eq!(json["years"]["data"]["2006"]["title"], "Cars");
        assert_eq!(json["years"]["data"]["2009"]["title"], "Up");
        Ok(())
    }

    #[test]
    fn test_not_found_json_shape() -> Result<()> {
        let catalog = sample();
        let response = dispatch(&catalog, &Request::ByLanguage("Hindi".into()));
        let json = serde_json::to_value(&response)?;

        assert_eq!(json["query"], "by_language");
        assert_eq!(json["language"], "Hindi");
        assert_eq!(json["movies"]["status"], "not_found");
        Ok(())
    }
}
