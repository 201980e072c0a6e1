use std::collections::HashMap;

use costar_core::model::{Actor, ActorId, Movie, MovieId};
use costar_core::record::CastRecord;
use tracing::debug;

/// In-memory bipartite collaboration graph.
///
/// Actors and movies are created lazily on first mention and only grow while
/// loading; queries take `&GraphStore` and keep all search state on their own
/// side. Two records with the same title and year resolve to the same movie
/// even when they denote different films, merging their casts. That collision
/// is an accepted dataset assumption, preserved so results stay comparable
/// with the source data.
#[derive(Debug)]
pub struct GraphStore {
    actors: Vec<Actor>,
    movies: Vec<Movie>,
    actor_ids: HashMap<String, ActorId>,
    movie_ids: HashMap<(String, u16), MovieId>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self {
            actors: Vec::new(),
            movies: Vec::new(),
            actor_ids: HashMap::new(),
            movie_ids: HashMap::new(),
        }
    }

    /// Record one acting credit, creating the actor and movie as needed.
    /// An exact duplicate credit (same actor, same movie) is dropped.
    pub fn add_credit(&mut self, actor: &str, title: &str, year: u16) {
        let actor_id = self.intern_actor(actor);
        let movie_id = self.intern_movie(title, year);

        let movie = &mut self.movies[movie_id.0 as usize];
        if movie.cast.contains(&actor_id) {
            return;
        }
        movie.cast.push(actor_id);
        self.actors[actor_id.0 as usize].movies.push(movie_id);
    }

    /// Bulk [`GraphStore::add_credit`] over already-parsed records.
    pub fn load(&mut self, records: impl IntoIterator<Item = CastRecord>) {
        let mut count = 0usize;
        for record in records {
            self.add_credit(&record.actor, &record.title, record.year);
            count += 1;
        }
        debug!(
            "applied {} credits: {} actors, {} movies",
            count,
            self.actors.len(),
            self.movies.len()
        );
    }

    pub fn actor_id(&self, name: &str) -> Option<ActorId> {
        self.actor_ids.get(name).copied()
    }

    pub fn movie_id(&self, title: &str, year: u16) -> Option<MovieId> {
        self.movie_ids.get(&(title.to_string(), year)).copied()
    }

    /// Ids are only valid for the store that issued them.
    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.0 as usize]
    }

    pub fn movie(&self, id: MovieId) -> &Movie {
        &self.movies[id.0 as usize]
    }

    /// Every actor with its id, in creation order (stable within one load).
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(index, actor)| (ActorId(index as u32), actor))
    }

    /// Every movie with its id, in creation order.
    pub fn movies(&self) -> impl Iterator<Item = (MovieId, &Movie)> {
        self.movies
            .iter()
            .enumerate()
            .map(|(index, movie)| (MovieId(index as u32), movie))
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    fn intern_actor(&mut self, name: &str) -> ActorId {
        if let Some(&id) = self.actor_ids.get(name) {
            return id;
        }
        let id = ActorId(self.actors.len() as u32);
        self.actors.push(Actor::new(name));
        self.actor_ids.insert(name.to_string(), id);
        id
    }

    fn intern_movie(&mut self, title: &str, year: u16) -> MovieId {
        if let Some(&id) = self.movie_ids.get(&(title.to_string(), year)) {
            return id;
        }
        let id = MovieId(self.movies.len() as u32);
        self.movies.push(Movie::new(title, year));
        self.movie_ids.insert((title.to_string(), year), id);
        id
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}
