use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use costar_core::error::{CostarError, ErrorCode};
use graph::GraphStore;
use thiserror::Error;
use tracing::{debug, info};

use crate::record::{parse_pair, parse_record};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CostarError for LoadError {
    fn error_code(&self) -> ErrorCode {
        match self {
            LoadError::Io { .. } => ErrorCode::NotFound,
        }
    }
}

/// Build a graph store from a tab-delimited credits file.
///
/// The first line is a header and is skipped. Rows that do not parse are
/// dropped and counted; only an unreadable file fails the load.
pub fn load_graph(path: impl AsRef<Path>) -> Result<GraphStore, LoadError> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut store = GraphStore::new();
    let mut loaded = 0usize;
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        if index == 0 {
            continue;
        }
        match parse_record(&line) {
            Some(record) => {
                store.add_credit(&record.actor, &record.title, record.year);
                loaded += 1;
            }
            None => {
                if !line.is_empty() {
                    debug!("skipping malformed row {}: {:?}", index + 1, line);
                }
                skipped += 1;
            }
        }
    }

    info!(
        "loaded {} credits ({} skipped): {} actors, {} movies",
        loaded,
        skipped,
        store.actor_count(),
        store.movie_count()
    );
    Ok(store)
}

/// Tab-separated (start, end) actor pairs, header skipped, malformed rows
/// dropped.
pub fn read_pairs(path: impl AsRef<Path>) -> Result<Vec<(String, String)>, LoadError> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut pairs = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        if index == 0 {
            continue;
        }
        if let Some(pair) = parse_pair(&line) {
            pairs.push(pair);
        }
    }
    Ok(pairs)
}

/// One actor name per line, header skipped, blank lines dropped.
pub fn read_actors(path: impl AsRef<Path>) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let reader = open(path)?;

    let mut actors = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        if index == 0 {
            continue;
        }
        let name = line.trim_end_matches('\r');
        if !name.is_empty() {
            actors.push(name.to_string());
        }
    }
    Ok(actors)
}

fn open(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    Ok(BufReader::new(file))
}

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        source,
    }
}
