//! Write operations for the social graph.
//!
//! People are `Person` nodes identified by the id Neo4j assigns on CREATE.
//! Friendships are directed `FRIEND_OF` relationships. Nothing here is
//! idempotent except deletion: creating the same friendship twice yields two
//! edges.

use neo4rs::query;

use social_core::{NewPerson, PersonId};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// Create a `Person` node and return its store-assigned id.
    pub async fn create_person(&self, person: &NewPerson) -> Result<PersonId, GraphError> {
        let q = query(
            "CREATE (p:Person {name: $name, age: $age, location: $location})
             RETURN id(p) AS id",
        )
        .param("name", person.name.clone())
        .param("age", person.age)
        .param("location", person.location.clone());

        let row = self.query_one(q).await?.ok_or_else(|| {
            GraphError::Serialization("CREATE Person returned no row".to_string())
        })?;
        let id: i64 = row
            .get("id")
            .map_err(|e| GraphError::Serialization(format!("Failed to read person id: {e}")))?;

        tracing::debug!(person_id = id, name = %person.name, "Created person");
        Ok(PersonId(id))
    }

    /// Create a `FRIEND_OF` edge from `from` to `to`.
    ///
    /// When either person is missing the MATCH yields no rows and nothing
    /// is created; this is not an error.
    pub async fn create_friendship(&self, from: PersonId, to: PersonId) -> Result<(), GraphError> {
        let q = query(
            "MATCH (a:Person), (b:Person)
             WHERE id(a) = $from AND id(b) = $to
             CREATE (a)-[:FRIEND_OF]->(b)",
        )
        .param("from", from.0)
        .param("to", to.0);

        self.run(q).await?;
        tracing::debug!(from = from.0, to = to.0, "Created friendship");
        Ok(())
    }

    /// Delete a person together with every relationship touching it.
    pub async fn detach_delete_person(&self, id: PersonId) -> Result<(), GraphError> {
        let q = query(
            "MATCH (p:Person)
             WHERE id(p) = $id
             DETACH DELETE p",
        )
        .param("id", id.0);

        self.run(q).await?;
        tracing::debug!(person_id = id.0, "Removed person");
        Ok(())
    }
}
