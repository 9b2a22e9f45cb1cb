use askama::Template;
use axum::{extract::State, response::Html};

use crate::models::ActivitySuggestion;
use crate::services::suggestions::SuggestionClient;
use crate::web::routes::current_year;

#[derive(Template)]
#[template(path = "random.html")]
pub struct RandomTemplate {
    pub activity: Option<ActivitySuggestion>,
    pub year: i32,
}

/// One fresh draw from the activity source. A failed fetch renders the
/// "unavailable" state, still with status 200.
pub async fn random_activity_handler(State(suggestions): State<SuggestionClient>) -> Html<String> {
    let activity = suggestions.fetch_random_activity().await;
    let template = RandomTemplate {
        activity,
        year: current_year(),
    };
    Html(template.render().unwrap())
}
