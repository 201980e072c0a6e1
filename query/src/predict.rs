//! Collaboration ranking and future-link prediction for one actor.
//!
//! A two-layer expansion, not a general search: the first layer ranks the
//! actors who already share a movie with the queried actor, the second ranks
//! actors exactly two hops out as likely future collaborators.

use std::collections::HashMap;

use costar_core::model::ActorId;
use graph::GraphStore;
use serde::{Deserialize, Serialize};

/// Ranked collaboration lists for one actor. Both lists are empty when the
/// actor is unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Existing co-stars, strongest collaboration first.
    pub collaborators: Vec<String>,
    /// Two-hop actors ranked as likely future collaborators.
    pub candidates: Vec<String>,
}

/// Rank the top `top_k` collaborators and future-collaboration candidates.
///
/// Collaborators order: descending count of distinct shared movies, ties by
/// ascending name. Candidate scores accumulate, per co-appearance with a
/// collaborator, that collaborator's own shared-movie count — a candidate
/// reached through several strong collaborators outranks one reached through
/// a single weak one.
pub fn predict(store: &GraphStore, actor: &str, top_k: usize) -> Prediction {
    let Some(actor_id) = store.actor_id(actor) else {
        return Prediction::default();
    };

    // First layer: distinct shared-movie counts per co-star.
    let mut shared: HashMap<ActorId, u64> = HashMap::new();
    for &movie_id in &store.actor(actor_id).movies {
        for &costar in &store.movie(movie_id).cast {
            if costar != actor_id {
                *shared.entry(costar).or_insert(0) += 1;
            }
        }
    }

    // Second layer: everything one hop past a collaborator, minus the actor
    // and the collaborators themselves.
    let mut scores: HashMap<ActorId, u64> = HashMap::new();
    for (&collaborator, &count) in &shared {
        for &movie_id in &store.actor(collaborator).movies {
            for &candidate in &store.movie(movie_id).cast {
                if candidate == actor_id || shared.contains_key(&candidate) {
                    continue;
                }
                *scores.entry(candidate).or_insert(0) += count;
            }
        }
    }

    Prediction {
        collaborators: ranked_names(store, &shared, top_k),
        candidates: ranked_names(store, &scores, top_k),
    }
}

/// Descending score, ties by ascending name, truncated to `top_k`.
fn ranked_names(store: &GraphStore, scores: &HashMap<ActorId, u64>, top_k: usize) -> Vec<String> {
    let mut ranked: Vec<(&str, u64)> = scores
        .iter()
        .map(|(&id, &score)| (store.actor(id).name.as_str(), score))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(top_k)
        .map(|(name, _)| name.to_string())
        .collect()
}
