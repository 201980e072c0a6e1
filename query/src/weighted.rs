//! Recency-weighted shortest connection between two actors.
//!
//! Dijkstra over the bipartite graph, minimizing the sum of movie weights
//! (`1 + (reference_year - year)`) instead of hop count, so recent
//! collaborations are preferred even when they take more steps.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use costar_core::model::ActorId;
use graph::GraphStore;

use crate::path::{rebuild_path, single_actor_path, ActorPath, CameFrom};

/// Minimum-weight connection. Same edge cases as the unweighted search:
/// `None` for an unknown actor or no connecting chain, a zero-hop path when
/// start and end coincide.
pub fn shortest_path(
    store: &GraphStore,
    start: &str,
    end: &str,
    reference_year: u16,
) -> Option<ActorPath> {
    let start_id = store.actor_id(start)?;
    let end_id = store.actor_id(end)?;
    if start_id == end_id {
        return Some(single_actor_path(store, start_id));
    }

    let mut best: HashMap<ActorId, u64> = HashMap::new();
    let mut came_from: CameFrom = HashMap::new();
    // Keyed by (distance, id) so ties pop deterministically.
    let mut heap: BinaryHeap<Reverse<(u64, ActorId)>> = BinaryHeap::new();

    best.insert(start_id, 0);
    heap.push(Reverse((0, start_id)));

    while let Some(Reverse((distance, current))) = heap.pop() {
        // Lazy deletion: an entry superseded by a cheaper push is stale.
        if distance > best.get(&current).copied().unwrap_or(u64::MAX) {
            continue;
        }
        // First pop of an actor carries its true minimum distance.
        if current == end_id {
            return rebuild_path(store, start_id, end_id, &came_from);
        }

        for &movie_id in &store.actor(current).movies {
            let movie = store.movie(movie_id);
            let candidate = distance + u64::from(movie.weight(reference_year));
            for &costar in &movie.cast {
                if candidate < best.get(&costar).copied().unwrap_or(u64::MAX) {
                    best.insert(costar, candidate);
                    came_from.insert(costar, (movie_id, current));
                    heap.push(Reverse((candidate, costar)));
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE_YEAR: u16 = 2019;

    fn chain_store() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_credit("A", "M1", 2000);
        store.add_credit("B", "M1", 2000);
        store.add_credit("B", "M2", 2010);
        store.add_credit("C", "M2", 2010);
        store
    }

    fn total_weight(store: &GraphStore, path: &ActorPath) -> u64 {
        path.hops
            .iter()
            .map(|hop| {
                let id = store.movie_id(&hop.title, hop.year).unwrap();
                u64::from(store.movie(id).weight(REFERENCE_YEAR))
            })
            .sum()
    }

    #[test]
    fn test_chain_weight() {
        let store = chain_store();
        let path = shortest_path(&store, "A", "C", REFERENCE_YEAR).unwrap();
        assert_eq!(path.hop_count(), 2);
        // (1 + 19) + (1 + 9)
        assert_eq!(total_weight(&store, &path), 30);
    }

    #[test]
    fn test_prefers_recent_detour_over_old_direct_movie() {
        let mut store = chain_store();
        // Direct but ancient: weight 1 + 49 = 50, versus 30 through B.
        store.add_credit("A", "Ancient", 1970);
        store.add_credit("C", "Ancient", 1970);

        let path = shortest_path(&store, "A", "C", REFERENCE_YEAR).unwrap();
        assert_eq!(path.hop_count(), 2);
        assert_eq!(path.hops[0].actor, "B");
    }

    #[test]
    fn test_same_actor_is_zero_hops() {
        let store = chain_store();
        let path = shortest_path(&store, "A", "A", REFERENCE_YEAR).unwrap();
        assert_eq!(path.hop_count(), 0);
        assert_eq!(path.start, "A");
    }

    #[test]
    fn test_unknown_or_disconnected_returns_none() {
        let mut store = chain_store();
        store.add_credit("D", "Solo", 2018);
        assert!(shortest_path(&store, "Zzz", "A", REFERENCE_YEAR).is_none());
        assert!(shortest_path(&store, "A", "D", REFERENCE_YEAR).is_none());
    }
}
