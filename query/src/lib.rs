pub mod output;
pub mod path;
pub mod predict;
pub mod spanning;
pub mod weighted;

pub use path::{ActorPath, PathHop};
pub use predict::Prediction;
pub use spanning::{Forest, ForestEdge};
