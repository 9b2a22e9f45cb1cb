use askama::Template;
use axum::{
    extract::Path,
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::catalog::Catalog;
use crate::models::ActivityRecord;
use crate::web::routes::current_year;

#[derive(Template)]
#[template(path = "activity.html")]
pub struct ActivityDetailTemplate {
    pub activity: ActivityRecord,
    pub all_activities: Vec<ActivityRecord>,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub year: i32,
}

pub async fn activity_detail_handler(Path(id): Path<u32>) -> impl IntoResponse {
    let catalog = Catalog::get();

    let Some(activity) = catalog.by_id(id) else {
        let template = NotFoundTemplate {
            year: current_year(),
        };
        return (StatusCode::NOT_FOUND, Html(template.render().unwrap())).into_response();
    };

    let template = ActivityDetailTemplate {
        activity: activity.clone(),
        all_activities: catalog.all().to_vec(),
        year: current_year(),
    };
    Html(template.render().unwrap()).into_response()
}
