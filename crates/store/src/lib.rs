//! Askboard Store
//!
//! Persistence layer for the Askboard Q&A site:
//! - SeaORM entities for profiles, questions, answers, tags and votes
//! - Schema creation with the vote uniqueness constraints
//! - Repository with the listing helpers (new, hot, by tag) and CRUD
//! - Avatar storage abstraction
//! - Error types, configuration and metrics

pub mod config;
pub mod db;
pub mod errors;
pub mod media;
pub mod metrics;

// Re-export commonly used types
pub use config::AppConfig;
pub use db::models::Vote;
pub use db::{DbPool, NewQuestion, QuestionEdit, Repository};
pub use errors::{AppError, Result};
pub use media::{AvatarStorage, LocalAvatarStorage};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Avatar reference for profiles that never uploaded one
pub const DEFAULT_AVATAR: &str = "skat.png";

/// Number of tags returned by the hot tags listing
pub const HOT_TAGS_LIMIT: u64 = 15;
