use serde::{Deserialize, Serialize};

/// Top-level widget configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachConfig {
    pub endpoint: EndpointConfig,
    pub persona: PersonaConfig,
}

/// Where chat requests are posted.
///
/// Resolution happens once at startup, see [`EndpointConfig::resolve`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Explicit URL, wins over everything else when non-empty
    pub override_url: Option<String>,
    /// Used when the page is served from one of `local_hosts`
    pub local_url: String,
    /// Same-origin path used for deployed builds
    pub relative_path: String,
    pub local_hosts: Vec<String>,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            override_url: None,
            local_url: DEFAULT_LOCAL_URL.to_string(),
            relative_path: DEFAULT_RELATIVE_PATH.to_string(),
            local_hosts: vec!["localhost".to_string()],
        }
    }
}

impl EndpointConfig {
    pub fn with_override(mut self, url: Option<&str>) -> Self {
        self.override_url = url.map(str::to_string);
        self
    }

    /// Pick the chat URL for a page served from `hostname`.
    ///
    /// `None` means there is no browser location (headless or tests),
    /// which falls back to the relative path.
    pub fn resolve(&self, hostname: Option<&str>) -> String {
        if let Some(url) = self.override_url.as_deref().map(str::trim) {
            if !url.is_empty() {
                return url.to_string();
            }
        }

        match hostname {
            Some(host) if self.is_local(host) => self.local_url.clone(),
            _ => self.relative_path.clone(),
        }
    }

    fn is_local(&self, host: &str) -> bool {
        self.local_hosts.iter().any(|h| h.eq_ignore_ascii_case(host))
    }
}

/// Scripted text of the coach persona
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonaConfig {
    pub title: String,
    pub tagline: String,
    /// First assistant turn of every session. Empty disables it.
    pub greeting: String,
    /// Assistant turn appended when an exchange fails
    pub fallback_reply: String,
    pub placeholder: String,
    pub thinking_label: String,
    pub footer: String,
}

impl Default for PersonaConfig {
    fn default() -> Self {
        Self {
            title: "🦃 Hot Mess Coach 🍂".to_string(),
            tagline: "Your chaotic Thanksgiving survival guide 🥧".to_string(),
            greeting: DEFAULT_GREETING.to_string(),
            fallback_reply: DEFAULT_FALLBACK_REPLY.to_string(),
            placeholder: "Share your Thanksgiving chaos here... 🎃".to_string(),
            thinking_label: "Coach is thinking...".to_string(),
            footer: "Made with 🧡 and a side of chaos 🦃".to_string(),
        }
    }
}

const DEFAULT_LOCAL_URL: &str = "http://localhost:8000/api/chat";
const DEFAULT_RELATIVE_PATH: &str = "/api/chat";

const DEFAULT_GREETING: &str = "Hey there, Hot Mess! 🦃 I'm your Thanksgiving survival coach. \
Whether you're dealing with family drama, cooking disasters, or just need someone to talk to - \
I'm here! What's on your mind?";

pub const DEFAULT_FALLBACK_REPLY: &str =
    "Oops! 🍂 Looks like I got lost in the cranberry sauce. Can you try that again?";
