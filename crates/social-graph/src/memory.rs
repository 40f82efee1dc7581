//! In-process people store with the same semantics as the Neo4j client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use social_core::{Friendship, NewPerson, PersonId, PersonSummary};

use crate::client::GraphError;
use crate::store::PeopleStore;

#[derive(Default)]
struct State {
    /// Next id to hand out. Ids are never reused.
    next_id: i64,
    people: BTreeMap<PersonId, NewPerson>,
    /// Insertion order; duplicates allowed.
    friendships: Vec<Friendship>,
}

/// In-memory implementation of [`PeopleStore`].
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of friendship edges currently stored.
    pub async fn friendship_count(&self) -> usize {
        self.state.read().await.friendships.len()
    }
}

#[async_trait]
impl PeopleStore for MemoryStore {
    async fn add_person(&self, person: &NewPerson) -> Result<PersonId, GraphError> {
        let mut state = self.state.write().await;
        let id = PersonId(state.next_id);
        state.next_id += 1;
        state.people.insert(id, person.clone());
        Ok(id)
    }

    async fn add_friendship(&self, from: PersonId, to: PersonId) -> Result<(), GraphError> {
        let mut state = self.state.write().await;
        if state.people.contains_key(&from) && state.people.contains_key(&to) {
            state.friendships.push(Friendship { from, to });
        }
        Ok(())
    }

    async fn list_people(&self) -> Result<Vec<PersonSummary>, GraphError> {
        let state = self.state.read().await;
        Ok(state
            .people
            .iter()
            .map(|(id, p)| PersonSummary::new(*id, p.name.clone()))
            .collect())
    }

    async fn list_friends(&self, id: PersonId) -> Result<Vec<PersonSummary>, GraphError> {
        let state = self.state.read().await;
        let mut friends: Vec<PersonSummary> = state
            .friendships
            .iter()
            .filter(|f| f.from == id)
            .filter_map(|f| {
                state
                    .people
                    .get(&f.to)
                    .map(|p| PersonSummary::new(f.to, p.name.clone()))
            })
            .collect();
        friends.sort_by_key(|f| f.id);
        Ok(friends)
    }

    async fn remove_person(&self, id: PersonId) -> Result<(), GraphError> {
        let mut state = self.state.write().await;
        if state.people.remove(&id).is_some() {
            state.friendships.retain(|f| !f.touches(id));
        }
        Ok(())
    }
}
