//! social-core: Shared types, configuration, and error handling for the social graph console.
//!
//! This crate provides the foundational types used across the workspace:
//! - Person and friendship types stored in the graph
//! - Configuration management
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use crate::config::{Neo4jSettings, SocialConfig};
pub use error::SocialError;
pub use types::{Friendship, NewPerson, PersonId, PersonSummary};
