//! Coach core — the chat panel and the ports it talks through.

pub mod mailbox;
pub mod panel;
pub mod ports;

#[cfg(test)]
mod tests;
