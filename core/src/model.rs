use serde::{Deserialize, Serialize};

/// Dense index of an actor within the store that created it.
/// Ids from one store are meaningless in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Dense index of a movie within the store that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieId(pub u32);

/// A credited person: one vertex of the bipartite collaboration graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    /// Movies this actor appears in, in load order, without duplicates.
    pub movies: Vec<MovieId>,
}

/// A shared credit connecting its cast: a hyperedge of the graph.
/// Identity is (title, year); same title in a different year is a
/// different movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub year: u16,
    /// Cast in load order, without duplicates.
    pub cast: Vec<ActorId>,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            movies: Vec::new(),
        }
    }
}

impl Movie {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
            cast: Vec::new(),
        }
    }

    /// Recency weight: `1 + (reference_year - year)`, so older movies cost
    /// more to traverse. Years newer than the reference saturate to 1,
    /// keeping every weight positive.
    pub fn weight(&self, reference_year: u16) -> u32 {
        1 + u32::from(reference_year.saturating_sub(self.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_constructor() {
        let movie = Movie::new("Rubber", 2014);
        assert_eq!(movie.title, "Rubber");
        assert_eq!(movie.year, 2014);
        assert!(movie.cast.is_empty());
    }

    #[test]
    fn test_weight_prefers_recent_movies() {
        assert_eq!(Movie::new("Old", 2000).weight(2019), 20);
        assert_eq!(Movie::new("New", 2019).weight(2019), 1);
    }

    #[test]
    fn test_weight_saturates_for_future_years() {
        assert_eq!(Movie::new("Upcoming", 2025).weight(2019), 1);
    }
}
