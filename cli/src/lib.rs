//! Driver routines behind the three command-line tools. Each loads the graph
//! through `ingestion`, runs queries, and writes rendered lines to an output
//! file; no graph logic lives here.

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use costar_core::config::AppConfig;
use costar_core::error::{CostarError, ErrorCode};
use ingestion::LoadError;
use query::{output, path, predict, spanning, weighted};
use tracing::info;

/// Shortest connection for every (start, end) pair in `pair_file`.
/// One line per pair; an unreachable or unknown pair yields an empty line.
pub fn run_pathfinder(
    movie_file: &Path,
    weighted_edges: bool,
    pair_file: &Path,
    out_file: &Path,
) -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let store = ingestion::load_graph(movie_file)?;
    let pairs = ingestion::read_pairs(pair_file)?;
    info!("resolving {} actor pairs", pairs.len());

    let mut lines = Vec::with_capacity(pairs.len());
    for (start, end) in &pairs {
        let found = if weighted_edges {
            weighted::shortest_path(&store, start, end, config.graph.reference_year)
        } else {
            path::shortest_path(&store, start, end)
        };
        lines.push(found.as_ref().map(output::render_path).unwrap_or_default());
    }

    write_lines(out_file, &lines)
}

/// Minimum-weight structure connecting the whole cast, with summary trailer.
pub fn run_movietraveler(movie_file: &Path, out_file: &Path) -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let store = ingestion::load_graph(movie_file)?;

    let forest = spanning::build(&store, config.graph.reference_year);
    info!(
        "spanning structure: {} edges over {} actors",
        forest.edges_chosen, forest.actors_connected
    );

    let mut lines = Vec::with_capacity(forest.edges.len() + 4);
    lines.push("(actor)<--[movie#@year]-->(actor)".to_string());
    for edge in &forest.edges {
        lines.push(output::render_forest_edge(edge));
    }
    lines.extend(output::render_forest_summary(&forest));

    write_lines(out_file, &lines)
}

/// Ranked collaborators and predicted future collaborators for every actor in
/// `actor_file`, written to two output files. Empty rankings produce no row,
/// matching the historical output format.
pub fn run_linkpredictor(
    movie_file: &Path,
    actor_file: &Path,
    collab_out: &Path,
    predict_out: &Path,
) -> Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let store = ingestion::load_graph(movie_file)?;
    let actors = ingestion::read_actors(actor_file)?;
    info!("predicting links for {} actors", actors.len());

    let mut collab_lines = vec!["Actor1,Actor2,Actor3,Actor4".to_string()];
    let mut predict_lines = vec!["Actor1,Actor2,Actor3,Actor4".to_string()];
    for actor in &actors {
        let prediction = predict::predict(&store, actor, config.predict.top_k);
        if !prediction.collaborators.is_empty() {
            collab_lines.push(output::render_ranking_row(&prediction.collaborators));
        }
        if !prediction.candidates.is_empty() {
            predict_lines.push(output::render_ranking_row(&prediction.candidates));
        }
    }

    write_lines(collab_out, &collab_lines)?;
    write_lines(predict_out, &predict_lines)
}

/// Print the error with its code and exit non-zero.
pub fn report_exit(err: anyhow::Error) -> ! {
    let code = err
        .downcast_ref::<LoadError>()
        .map(CostarError::error_code)
        .unwrap_or(ErrorCode::Internal);
    eprintln!("error[{}]: {:#}", code, err);
    process::exit(1);
}

fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
    let mut contents = String::new();
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
