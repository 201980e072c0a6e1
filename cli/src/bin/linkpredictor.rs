use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "linkpredictor")]
#[command(about = "Ranked collaborators and predicted future collaborators")]
struct Args {
    /// Tab-delimited credits file: actor<TAB>title<TAB>year, with header
    movie_file: PathBuf,
    /// Queried actors, one per line, with header
    actor_file: PathBuf,
    /// Output file for existing collaborators
    collab_out: PathBuf,
    /// Output file for predicted future collaborators
    predict_out: PathBuf,
}

fn main() {
    costar_core::init_tracing();
    let args = Args::parse();
    if let Err(err) = cli::run_linkpredictor(
        &args.movie_file,
        &args.actor_file,
        &args.collab_out,
        &args.predict_out,
    ) {
        cli::report_exit(err);
    }
}
