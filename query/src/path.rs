//! Unweighted shortest connection between two actors.
//!
//! Breadth-first search over the bipartite graph, expanding
//! actor -> movie -> actor as one frontier step so the distance metric counts
//! actors on the path, not movies. Ties between equal-length paths fall to
//! load order (FIFO frontier).

use std::collections::{HashMap, HashSet, VecDeque};

use costar_core::model::{ActorId, MovieId};
use graph::GraphStore;
use serde::{Deserialize, Serialize};

/// One step of a connection: the movie traversed and the actor it reaches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    pub title: String,
    pub year: u16,
    pub actor: String,
}

/// A connection from `start` through `hops` to the last hop's actor.
/// Zero hops means start and end are the same actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorPath {
    pub start: String,
    pub hops: Vec<PathHop>,
}

impl ActorPath {
    /// Number of movies traversed.
    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }
}

/// Back-reference table filled during a search: for each reached actor, the
/// movie used to reach it and the actor the movie was entered from.
pub(crate) type CameFrom = HashMap<ActorId, (MovieId, ActorId)>;

/// Shortest connection by hop count. `None` when either actor is unknown or
/// no connecting chain of movies exists.
pub fn shortest_path(store: &GraphStore, start: &str, end: &str) -> Option<ActorPath> {
    let start_id = store.actor_id(start)?;
    let end_id = store.actor_id(end)?;
    if start_id == end_id {
        return Some(single_actor_path(store, start_id));
    }

    // Search state lives here, keyed by id, never on the shared entities.
    let mut seen_actors: HashSet<ActorId> = HashSet::new();
    let mut seen_movies: HashSet<MovieId> = HashSet::new();
    let mut came_from: CameFrom = HashMap::new();
    let mut frontier: VecDeque<ActorId> = VecDeque::new();

    seen_actors.insert(start_id);
    frontier.push_back(start_id);

    while let Some(current) = frontier.pop_front() {
        for &movie_id in &store.actor(current).movies {
            if !seen_movies.insert(movie_id) {
                continue;
            }
            for &costar in &store.movie(movie_id).cast {
                if !seen_actors.insert(costar) {
                    continue;
                }
                came_from.insert(costar, (movie_id, current));
                if costar == end_id {
                    return rebuild_path(store, start_id, end_id, &came_from);
                }
                frontier.push_back(costar);
            }
        }
    }

    None
}

pub(crate) fn single_actor_path(store: &GraphStore, id: ActorId) -> ActorPath {
    ActorPath {
        start: store.actor(id).name.clone(),
        hops: Vec::new(),
    }
}

/// Walk back-references from `end` to `start`. Every reached actor except the
/// start must have an entry; a missing one is a programming error.
pub(crate) fn rebuild_path(
    store: &GraphStore,
    start_id: ActorId,
    end_id: ActorId,
    came_from: &CameFrom,
) -> Option<ActorPath> {
    let mut hops = Vec::new();
    let mut current = end_id;

    while current != start_id {
        let Some(&(movie_id, prev_actor)) = came_from.get(&current) else {
            debug_assert!(false, "reached actor has no back-reference");
            return None;
        };
        let movie = store.movie(movie_id);
        hops.push(PathHop {
            title: movie.title.clone(),
            year: movie.year,
            actor: store.actor(current).name.clone(),
        });
        current = prev_actor;
    }

    hops.reverse();
    Some(ActorPath {
        start: store.actor(start_id).name.clone(),
        hops,
    })
}
