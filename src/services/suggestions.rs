use std::env;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::models::{ActivitySuggestion, AdviceSuggestion, Price, QuoteSuggestion, Suggestion};

const DEFAULT_ACTIVITY_URL: &str = "https://bored-api.appbrewery.com/random";
const DEFAULT_ADVICE_URL: &str = "https://api.adviceslip.com/advice";
const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/random";

const SOURCE_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the three external sources live and how long each call may take.
/// Defaults point at the public APIs; env vars override for local setups.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub activity_url: String,
    pub advice_url: String,
    pub quote_url: String,
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            activity_url: DEFAULT_ACTIVITY_URL.to_string(),
            advice_url: DEFAULT_ADVICE_URL.to_string(),
            quote_url: DEFAULT_QUOTE_URL.to_string(),
            timeout: SOURCE_TIMEOUT,
        }
    }
}

impl SourceConfig {
    pub fn from_env() -> Self {
        let defaults = SourceConfig::default();
        SourceConfig {
            activity_url: env::var("ACTIVITY_API_URL").unwrap_or(defaults.activity_url),
            advice_url: env::var("ADVICE_API_URL").unwrap_or(defaults.advice_url),
            quote_url: env::var("QUOTE_API_URL").unwrap_or(defaults.quote_url),
            timeout: defaults.timeout,
        }
    }
}

/// Best-effort suggestion fetcher over the three external sources. Every
/// source failure is logged and swallowed; a dead upstream only makes the
/// page less rich, it never breaks a render.
#[derive(Clone)]
pub struct SuggestionClient {
    http: reqwest::Client,
    config: SourceConfig,
}

impl SuggestionClient {
    pub fn new(config: SourceConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("reqwest client build failed");
        SuggestionClient { http, config }
    }

    pub fn from_env() -> Self {
        SuggestionClient::new(SourceConfig::from_env())
    }

    /// Fan out all five source calls at once (three activity draws, one
    /// advice, one quote) and keep whatever came back well-formed, in call
    /// order. Returns between 0 and 5 records and never fails.
    pub async fn fetch_suggestions(&self) -> Vec<Suggestion> {
        let (a1, a2, a3, advice, quote) = tokio::join!(
            self.fetch_activity(),
            self.fetch_activity(),
            self.fetch_activity(),
            self.fetch_advice(),
            self.fetch_quote(),
        );

        let mut suggestions = Vec::new();
        for activity in [a1, a2, a3].into_iter().flatten() {
            suggestions.push(Suggestion::Activity(activity));
        }
        if let Some(advice) = advice {
            suggestions.push(Suggestion::Advice(advice));
        }
        if let Some(quote) = quote {
            suggestions.push(Suggestion::Quote(quote));
        }
        suggestions
    }

    /// One fresh activity draw for the /random page, independent of the
    /// home page aggregation.
    pub async fn fetch_random_activity(&self) -> Option<ActivitySuggestion> {
        self.fetch_activity().await
    }

    async fn fetch_activity(&self) -> Option<ActivitySuggestion> {
        let resp = match self.http.get(&self.config.activity_url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("🎲 Activity source unreachable: {}", e);
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!("🎲 Activity source non-OK: {}", resp.status());
            return None;
        }
        let payload: ActivityPayload = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("🎲 Activity source JSON parse failed: {}", e);
                return None;
            }
        };
        Some(ActivitySuggestion {
            text: payload.activity.unwrap_or_default(),
            category: capitalize_first(payload.kind.as_deref().unwrap_or("")),
            participants: payload.participants.unwrap_or(1),
            price: price_of(payload.price.unwrap_or(0.0)),
            accessibility: payload.accessibility.unwrap_or(0.0),
            link: payload.link.unwrap_or_default(),
        })
    }

    async fn fetch_advice(&self) -> Option<AdviceSuggestion> {
        let resp = match self.http.get(&self.config.advice_url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("💡 Advice source unreachable: {}", e);
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!("💡 Advice source non-OK: {}", resp.status());
            return None;
        }
        let payload: AdviceEnvelope = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("💡 Advice source JSON parse failed: {}", e);
                return None;
            }
        };
        // No "slip" key is a valid (if useless) response, not an error.
        let slip = payload.slip?;
        Some(AdviceSuggestion {
            text: slip.advice.unwrap_or_default(),
            id: slip.id.unwrap_or(0),
        })
    }

    async fn fetch_quote(&self) -> Option<QuoteSuggestion> {
        let resp = match self.http.get(&self.config.quote_url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("📜 Quote source unreachable: {}", e);
                return None;
            }
        };
        if !resp.status().is_success() {
            warn!("📜 Quote source non-OK: {}", resp.status());
            return None;
        }
        let payload: Vec<QuotePayload> = match resp.json().await {
            Ok(p) => p,
            Err(e) => {
                warn!("📜 Quote source JSON parse failed: {}", e);
                return None;
            }
        };
        let first = payload.into_iter().next()?;
        Some(QuoteSuggestion {
            text: first.q.unwrap_or_default(),
            author: first.a.unwrap_or_else(|| "Unknown".to_string()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ActivityPayload {
    activity: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    participants: Option<u32>,
    price: Option<f64>,
    accessibility: Option<f64>,
    link: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AdviceEnvelope {
    slip: Option<AdviceSlip>,
}

#[derive(Debug, Deserialize)]
struct AdviceSlip {
    advice: Option<String>,
    id: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct QuotePayload {
    q: Option<String>,
    a: Option<String>,
}

/// First letter uppercased, rest untouched ("recreational" -> "Recreational").
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn price_of(price: f64) -> Price {
    if price == 0.0 {
        Price::Free
    } else {
        Price::Paid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_uppercases_only_the_first_letter() {
        assert_eq!(capitalize_first("recreational"), "Recreational");
        assert_eq!(capitalize_first("diy"), "Diy");
        assert_eq!(capitalize_first("Busywork"), "Busywork");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn zero_price_is_free_everything_else_paid() {
        assert_eq!(price_of(0.0), Price::Free);
        assert_eq!(price_of(0.1), Price::Paid);
        assert_eq!(price_of(1.0), Price::Paid);
    }
}
