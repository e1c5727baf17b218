//! Browser adapters for the coach widget.

pub mod endpoint;
pub mod http;


pub use endpoint::detect_endpoint;
pub use http::HttpChatClient;
