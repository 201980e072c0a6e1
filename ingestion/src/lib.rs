pub mod loader;
pub mod record;

pub use loader::{load_graph, read_actors, read_pairs, LoadError};
pub use record::{parse_pair, parse_record};
