//! Runtime configuration.
//!
//! The browser has no process environment, so values are baked in when the
//! bundle is built (`API_BASE_URL=... trunk build`).

#[derive(Clone, PartialEq, Debug, Default)]
pub struct AppConfig {
    /// Backend serving `/auth/*`.
    pub api_base_url: Option<String>,
    /// AI service serving `/ai/chat`. Often the same host as the backend.
    pub ai_base_url: Option<String>,
}

impl AppConfig {
    pub fn new(api_base_url: Option<&str>, ai_base_url: Option<&str>) -> Self {
        Self {
            api_base_url: api_base_url.and_then(clean_url),
            ai_base_url: ai_base_url.and_then(clean_url),
        }
    }

    /// Reads `API_BASE_URL` and `AI_API_BASE_URL` as set at compile time.
    /// The AI URL falls back to the backend URL.
    pub fn from_build_env() -> Self {
        let api = option_env!("API_BASE_URL");
        let ai = option_env!("AI_API_BASE_URL").filter(|v| !v.trim().is_empty()).or(api);
        Self::new(api, ai)
    }
}

/// Empty values count as unset; a trailing slash is dropped so paths can be
/// appended with `format!("{base}/...")`.
fn clean_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
