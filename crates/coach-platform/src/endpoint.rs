//! Startup endpoint detection.
//!
//! Priority: build-time `COACH_API_URL` → configured override →
//! local dev URL on `localhost` → same-origin relative path.
//! Runs once; the result is injected into [`crate::HttpChatClient`].

use coach_types::config::EndpointConfig;

/// Baked in at compile time, e.g. `COACH_API_URL=https://api.example/chat trunk build`
pub const BUILD_OVERRIDE: Option<&str> = option_env!("COACH_API_URL");

pub fn detect_endpoint(config: &EndpointConfig) -> String {
    let url = resolve_with_override(config, BUILD_OVERRIDE, page_hostname().as_deref());
    log::info!("Chat endpoint: {}", url);
    url
}

/// Pure part of [`detect_endpoint`]
pub fn resolve_with_override(
    config: &EndpointConfig,
    build_override: Option<&str>,
    hostname: Option<&str>,
) -> String {
    match build_override.filter(|u| !u.trim().is_empty()) {
        Some(url) => config.clone().with_override(Some(url)).resolve(hostname),
        None => config.resolve(hostname),
    }
}

/// Hostname of the page, if running under a browser window
#[cfg(target_arch = "wasm32")]
pub fn page_hostname() -> Option<String> {
    let window = web_sys::window()?;
    window.location().hostname().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn page_hostname() -> Option<String> {
    None
}
