//! The data-access seam used by the console.

use async_trait::async_trait;

use social_core::{NewPerson, PersonId, PersonSummary};

use crate::client::{GraphClient, GraphError};

/// The five operations the console performs against a people graph.
///
/// Each call is an independent unit of work; nothing is combined across
/// calls.
#[async_trait]
pub trait PeopleStore: Send + Sync {
    /// Create a person and return the id assigned by the store.
    async fn add_person(&self, person: &NewPerson) -> Result<PersonId, GraphError>;

    /// Add a directed friendship. Succeeds without effect when either id is unknown.
    async fn add_friendship(&self, from: PersonId, to: PersonId) -> Result<(), GraphError>;

    /// Every person as `(id, name)`, ordered by id.
    async fn list_people(&self) -> Result<Vec<PersonSummary>, GraphError>;

    /// Outgoing friendship targets of `id`, ordered by id.
    async fn list_friends(&self, id: PersonId) -> Result<Vec<PersonSummary>, GraphError>;

    /// Remove a person and every friendship touching it. No-op when unknown.
    async fn remove_person(&self, id: PersonId) -> Result<(), GraphError>;
}

#[async_trait]
impl PeopleStore for GraphClient {
    async fn add_person(&self, person: &NewPerson) -> Result<PersonId, GraphError> {
        self.create_person(person).await
    }

    async fn add_friendship(&self, from: PersonId, to: PersonId) -> Result<(), GraphError> {
        self.create_friendship(from, to).await
    }

    async fn list_people(&self) -> Result<Vec<PersonSummary>, GraphError> {
        self.query_people().await
    }

    async fn list_friends(&self, id: PersonId) -> Result<Vec<PersonSummary>, GraphError> {
        self.query_friends(id).await
    }

    async fn remove_person(&self, id: PersonId) -> Result<(), GraphError> {
        self.detach_delete_person(id).await
    }
}
