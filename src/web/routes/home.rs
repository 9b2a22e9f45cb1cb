use askama::Template;
use axum::{extract::State, response::Html};

use crate::catalog::Catalog;
use crate::models::{ActivityRecord, Suggestion};
use crate::services::suggestions::SuggestionClient;
use crate::web::routes::current_year;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub activities: Vec<ActivityRecord>,
    pub featured: Vec<ActivityRecord>,
    pub categories: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub total_activities: usize,
    pub year: i32,
}

pub async fn home_handler(State(suggestions): State<SuggestionClient>) -> Html<String> {
    let catalog = Catalog::get();
    let api_suggestions = suggestions.fetch_suggestions().await;

    let template = IndexTemplate {
        activities: catalog.all().to_vec(),
        featured: catalog.featured().into_iter().cloned().collect(),
        categories: catalog.categories().to_vec(),
        suggestions: api_suggestions,
        total_activities: catalog.all().len(),
        year: current_year(),
    };
    Html(template.render().unwrap())
}
