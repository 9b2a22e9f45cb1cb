use std::fmt;

/// One normalized record from an external source, built fresh per request
/// and handed straight to the template.
#[derive(Debug, Clone, PartialEq)]
pub enum Suggestion {
    Activity(ActivitySuggestion),
    Advice(AdviceSuggestion),
    Quote(QuoteSuggestion),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySuggestion {
    pub text: String,
    pub category: String,
    pub participants: u32,
    pub price: Price,
    pub accessibility: f64,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdviceSuggestion {
    pub text: String,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSuggestion {
    pub text: String,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Price {
    Free,
    Paid,
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => f.write_str("Free"),
            Price::Paid => f.write_str("Paid"),
        }
    }
}
