use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "movietraveler")]
#[command(about = "Minimum-weight structure connecting every actor")]
struct Args {
    /// Tab-delimited credits file: actor<TAB>title<TAB>year, with header
    movie_file: PathBuf,
    /// Output file: chosen edges followed by the summary trailer
    out_file: PathBuf,
}

fn main() {
    costar_core::init_tracing();
    let args = Args::parse();
    if let Err(err) = cli::run_movietraveler(&args.movie_file, &args.out_file) {
        cli::report_exit(err);
    }
}
