//! Port traits — the boundary between the panel and the outside world.
//!
//! These traits are defined here in `coach-core` (pure Rust).
//! Implementations live in `coach-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use coach_types::Result;

// ─── Chat Port ───────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ChatPort {
    /// Send one user message and wait for the assistant's reply text.
    ///
    /// Every failure (transport, status, body) comes back as `Err`;
    /// there is no retry and no timeout.
    async fn send_message(&self, text: &str) -> Result<String>;

    /// The resolved URL requests go to (for logging/debug)
    fn endpoint(&self) -> &str;
}
