// marquee/src/render.rs
//
// Text rendering of query responses (tables via comfy-table).

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, Table};
use marquee_core::application::Response;
use marquee_core::domain::QueryOutcome;

pub fn response(response: &Response<'_>) -> String {
    match response {
        Response::ByYear { year, titles } => match titles {
            QueryOutcome::Found(titles) => {
                let mut table = table(&["Title"]);
                for title in titles {
                    table.add_row(vec![title.to_string()]);
                }
                table.to_string()
            }
            QueryOutcome::NotFound => {
                format!("No data about movies released in the year {}", year)
            }
        },

        Response::HighestRatedPerYear { years } => match years {
            QueryOutcome::Found(years) => {
                let mut table = table(&["Year", "Rating", "Title"]);
                for (year, top) in years {
                    table.add_row(vec![
                        year.to_string(),
                        format!("{:.1}", top.rating),
                        top.title.to_string(),
                    ]);
                }
                align_right(&mut table, &[0, 1]);
                table.to_string()
            }
            QueryOutcome::NotFound => "No movies in the catalog".to_string(),
        },

        Response::ByLanguage { language, movies } => match movies {
            QueryOutcome::Found(movies) => {
                let mut table = table(&["Year", "Title"]);
                for movie in movies {
                    table.add_row(vec![movie.year.to_string(), movie.title.to_string()]);
                }
                align_right(&mut table, &[0]);
                table.to_string()
            }
            QueryOutcome::NotFound => {
                format!("No data about movies released in {}", language)
            }
        },
    }
}

fn table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED).set_header(header.to_vec());
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for index in columns {
        if let Some(column) = table.column_mut(*index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}
