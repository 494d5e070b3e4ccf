//! Thin wrappers around external HTTP collaborators.
//!
//! - **Notifier** (`notifier`) - Push gateway for user and topic notifications
//! - **Translator** (`translator`) - OpenAI-compatible chat completion translation
//!
//! Both are traits so services can be tested with in-memory fakes.

pub mod notifier;
pub mod translator;
