//! Minimum-weight structure connecting the whole cast.
//!
//! Kruskal's algorithm over the hypergraph projected to pairwise cast edges:
//! movies are sorted once by ascending recency weight and scanned in a single
//! pass against a per-call disjoint-set union. A movie contributes one edge
//! for every cast pair that still bridges two components when it is reached,
//! so a large ensemble film can stitch several components at once.

use costar_core::model::MovieId;
use graph::GraphStore;
use serde::{Deserialize, Serialize};

/// A chosen tree edge: two actors joined through a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForestEdge {
    pub left: String,
    pub right: String,
    pub title: String,
    pub year: u16,
}

/// Result of the spanning pass. On a disconnected graph this is the forest
/// actually achieved, not an error; `actors_connected` is the size of the
/// largest component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forest {
    pub edges: Vec<ForestEdge>,
    pub actors_connected: usize,
    pub edges_chosen: usize,
    /// Sum of weights of distinct movies that contributed at least one edge.
    pub total_weight: u64,
}

/// Disjoint-set union over actor ids, union by size with path compression.
/// Built fresh for every call; never stored on the actors.
struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
        }
    }

    fn find(&mut self, item: u32) -> u32 {
        let mut root = item;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }
        // Second pass re-points the chain at the root.
        let mut current = item;
        while current != root {
            let next = self.parent[current as usize];
            self.parent[current as usize] = root;
            current = next;
        }
        root
    }

    /// True when two components were merged.
    fn union(&mut self, a: u32, b: u32) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let (small, large) = if self.size[root_a as usize] < self.size[root_b as usize] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parent[small as usize] = large;
        self.size[large as usize] += self.size[small as usize];
        true
    }

    fn largest_component(&mut self) -> usize {
        let mut largest = 0;
        for item in 0..self.parent.len() as u32 {
            let root = self.find(item);
            largest = largest.max(self.size[root as usize] as usize);
        }
        largest
    }
}

/// Build the minimum-weight spanning structure over the whole store.
pub fn build(store: &GraphStore, reference_year: u16) -> Forest {
    let actor_count = store.actor_count();
    if actor_count == 0 {
        return Forest {
            edges: Vec::new(),
            actors_connected: 0,
            edges_chosen: 0,
            total_weight: 0,
        };
    }

    // Cheapest (most recent) movies first; title then year on ties keeps the
    // chosen edge set deterministic.
    let mut order: Vec<MovieId> = store.movies().map(|(id, _)| id).collect();
    order.sort_by(|&a, &b| {
        let (movie_a, movie_b) = (store.movie(a), store.movie(b));
        movie_a
            .weight(reference_year)
            .cmp(&movie_b.weight(reference_year))
            .then_with(|| movie_a.title.cmp(&movie_b.title))
            .then_with(|| movie_a.year.cmp(&movie_b.year))
    });

    let mut dsu = UnionFind::new(actor_count);
    let mut edges = Vec::new();
    let mut total_weight = 0u64;
    let mut components = actor_count;

    'movies: for movie_id in order {
        let movie = store.movie(movie_id);
        let mut contributed = false;

        for (index, &left) in movie.cast.iter().enumerate() {
            for &right in &movie.cast[index + 1..] {
                if !dsu.union(left.0, right.0) {
                    continue;
                }
                contributed = true;
                components -= 1;
                edges.push(ForestEdge {
                    left: store.actor(left).name.clone(),
                    right: store.actor(right).name.clone(),
                    title: movie.title.clone(),
                    year: movie.year,
                });
                if components == 1 {
                    total_weight += u64::from(movie.weight(reference_year));
                    break 'movies;
                }
            }
        }

        if contributed {
            total_weight += u64::from(movie.weight(reference_year));
        }
    }

    Forest {
        edges_chosen: edges.len(),
        actors_connected: dsu.largest_component(),
        total_weight,
        edges,
    }
}
