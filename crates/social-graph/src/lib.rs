//! Social Graph — Neo4j data access for people and friendships.
//!
//! All reads and writes of `Person` nodes and `FRIEND_OF` relationships
//! flow through this crate. Callers program against [`PeopleStore`], which
//! is implemented by the Neo4j-backed [`GraphClient`] and the in-process
//! [`MemoryStore`].

pub mod client;
pub mod memory;
pub mod mutations;
pub mod queries;
pub mod store;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use memory::MemoryStore;
pub use store::PeopleStore;
