pub mod activity;
pub mod category;
pub mod home;
pub mod random;

use chrono::Datelike;

/// Footer year, recomputed per request.
pub(crate) fn current_year() -> i32 {
    chrono::Utc::now().year()
}
