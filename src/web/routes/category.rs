use askama::Template;
use axum::{extract::Path, response::Html};

use crate::catalog::Catalog;
use crate::models::ActivityRecord;
use crate::web::routes::current_year;

#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate {
    pub activities: Vec<ActivityRecord>,
    pub category_name: String,
    pub categories: Vec<String>,
    pub year: i32,
}

/// Listing for one category. An unknown name renders an empty listing with
/// status 200, never an error page.
pub async fn category_handler(Path(name): Path<String>) -> Html<String> {
    let catalog = Catalog::get();
    let activities: Vec<ActivityRecord> = catalog
        .by_category(&name)
        .into_iter()
        .cloned()
        .collect();

    let template = CategoryTemplate {
        activities,
        category_name: display_name(&name),
        categories: catalog.categories().to_vec(),
        year: current_year(),
    };
    Html(template.render().unwrap())
}

/// Tidy the raw path segment for display: "outdoor" / "OUTDOOR" -> "Outdoor".
fn display_name(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_normalizes_case() {
        assert_eq!(display_name("outdoor"), "Outdoor");
        assert_eq!(display_name("CREATIVE"), "Creative");
        assert_eq!(display_name(""), "");
    }
}
