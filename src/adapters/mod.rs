//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - record stores (in-memory, JSON files)
//! - `notify` - submission notifiers (webhooks, mock)

pub mod notify;
pub mod storage;

pub use notify::{ChannelKind, MockNotifier, WebhookChannel, WebhookNotifier};
pub use storage::{InMemoryStore, JsonFileStore};
