//! Pure renderers from structured query results to their wire formats.
//! No I/O happens here; writers live with the drivers.

use crate::path::ActorPath;
use crate::spanning::{Forest, ForestEdge};

/// `(start)--[title#@year]-->(actor)...`; a zero-hop path renders as the
/// bare `(start)`.
pub fn render_path(path: &ActorPath) -> String {
    let mut out = format!("({})", path.start);
    for hop in &path.hops {
        out.push_str(&format!("--[{}#@{}]-->({})", hop.title, hop.year, hop.actor));
    }
    out
}

/// `(left)<--[title#@year]-->(right)`
pub fn render_forest_edge(edge: &ForestEdge) -> String {
    format!(
        "({})<--[{}#@{}]-->({})",
        edge.left, edge.title, edge.year, edge.right
    )
}

/// The three summary lines reported after the chosen edges.
pub fn render_forest_summary(forest: &Forest) -> [String; 3] {
    [
        format!("#NODE CONNECTED: {}", forest.actors_connected),
        format!("#EDGE CHOSEN: {}", forest.edges_chosen),
        format!("TOTAL EDGE WEIGHTS: {}", forest.total_weight),
    ]
}

/// Tab-separated ranking row.
pub fn render_ranking_row(names: &[String]) -> String {
    names.join("\t")
}
