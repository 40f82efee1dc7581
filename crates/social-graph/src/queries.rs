//! Read operations for the social graph.

use neo4rs::query;

use social_core::{PersonId, PersonSummary};

use crate::client::{GraphClient, GraphError};

impl GraphClient {
    /// All people, ordered by id.
    pub async fn query_people(&self) -> Result<Vec<PersonSummary>, GraphError> {
        let q = query(
            "MATCH (p:Person)
             RETURN id(p) AS id, p.name AS name
             ORDER BY id",
        );

        let rows = self.query_rows(q).await?;
        let people = rows_to_summaries(rows)?;
        tracing::debug!(count = people.len(), "Listed people");
        Ok(people)
    }

    /// Targets of every outgoing `FRIEND_OF` edge of `id`, ordered by id.
    /// Duplicate edges produce duplicate rows.
    pub async fn query_friends(&self, id: PersonId) -> Result<Vec<PersonSummary>, GraphError> {
        let q = query(
            "MATCH (p:Person)-[:FRIEND_OF]->(friend:Person)
             WHERE id(p) = $id
             RETURN id(friend) AS id, friend.name AS name
             ORDER BY id",
        )
        .param("id", id.0);

        let rows = self.query_rows(q).await?;
        let friends = rows_to_summaries(rows)?;
        tracing::debug!(person_id = id.0, count = friends.len(), "Listed friends");
        Ok(friends)
    }
}

/// Map `id`/`name` rows to summaries. A node without a `name` property
/// lists with an empty name.
fn rows_to_summaries(rows: Vec<neo4rs::Row>) -> Result<Vec<PersonSummary>, GraphError> {
    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let id: i64 = row
            .get("id")
            .map_err(|e| GraphError::Serialization(format!("Failed to read person id: {e}")))?;
        let name: Option<String> = row
            .get("name")
            .map_err(|e| GraphError::Serialization(format!("Failed to read person name: {e}")))?;
        results.push(PersonSummary::new(PersonId(id), name.unwrap_or_default()));
    }
    Ok(results)
}
