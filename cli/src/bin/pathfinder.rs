use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(about = "Shortest connection between pairs of actors")]
struct Args {
    /// Tab-delimited credits file: actor<TAB>title<TAB>year, with header
    movie_file: PathBuf,
    /// u for unweighted hops, w for recency-weighted edges
    #[arg(value_parser = ["u", "w"])]
    mode: String,
    /// Tab-separated start/end actor pairs, with header
    pair_file: PathBuf,
    /// Output file, one rendered path per pair
    out_file: PathBuf,
}

fn main() {
    costar_core::init_tracing();
    let args = Args::parse();
    let weighted = args.mode == "w";
    if let Err(err) = cli::run_pathfinder(&args.movie_file, weighted, &args.pair_file, &args.out_file)
    {
        cli::report_exit(err);
    }
}
