use std::io::Write;
use std::path::PathBuf;

use tempfile::TempDir;

const CREDITS: &str = "Actor\tMovie\tYear\n\
    A\tM1\t2000\n\
    B\tM1\t2000\n\
    B\tM2\t2010\n\
    C\tM2\t2010\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn read_lines(path: &PathBuf) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_pathfinder_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let movie_file = write_file(&dir, "credits.tsv", CREDITS);
    let pair_file = write_file(&dir, "pairs.tsv", "Start\tEnd\nA\tC\nA\tZzz\n");
    let out_file = dir.path().join("paths.out");

    cli::run_pathfinder(&movie_file, false, &pair_file, &out_file).unwrap();

    let lines = read_lines(&out_file);
    assert_eq!(
        lines,
        vec![
            "(A)--[M1#@2000]-->(B)--[M2#@2010]-->(C)".to_string(),
            String::new(),
        ]
    );
}

#[test]
fn test_pathfinder_weighted_mode() {
    let dir = tempfile::tempdir().unwrap();
    // Direct but old movie loses to the recent two-hop chain.
    let credits = "Actor\tMovie\tYear\n\
        A\tAncient\t1970\n\
        C\tAncient\t1970\n\
        A\tM1\t2015\n\
        B\tM1\t2015\n\
        B\tM2\t2018\n\
        C\tM2\t2018\n";
    let movie_file = write_file(&dir, "credits.tsv", credits);
    let pair_file = write_file(&dir, "pairs.tsv", "Start\tEnd\nA\tC\n");
    let out_file = dir.path().join("paths.out");

    cli::run_pathfinder(&movie_file, true, &pair_file, &out_file).unwrap();
    let lines = read_lines(&out_file);
    assert_eq!(
        lines,
        vec!["(A)--[M1#@2015]-->(B)--[M2#@2018]-->(C)".to_string()]
    );
}

#[test]
fn test_movietraveler_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let movie_file = write_file(&dir, "credits.tsv", CREDITS);
    let out_file = dir.path().join("tree.out");

    cli::run_movietraveler(&movie_file, &out_file).unwrap();

    let lines = read_lines(&out_file);
    assert_eq!(lines[0], "(actor)<--[movie#@year]-->(actor)");
    assert_eq!(lines.len(), 6);
    assert_eq!(
        &lines[3..],
        &[
            "#NODE CONNECTED: 3".to_string(),
            "#EDGE CHOSEN: 2".to_string(),
            "TOTAL EDGE WEIGHTS: 30".to_string(),
        ]
    );
}

#[test]
fn test_linkpredictor_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let movie_file = write_file(&dir, "credits.tsv", CREDITS);
    let actor_file = write_file(&dir, "actors.tsv", "Actor\nB\nZzz\n");
    let collab_out = dir.path().join("collab.out");
    let predict_out = dir.path().join("predict.out");

    cli::run_linkpredictor(&movie_file, &actor_file, &collab_out, &predict_out).unwrap();

    let collab = read_lines(&collab_out);
    assert_eq!(collab[0], "Actor1,Actor2,Actor3,Actor4");
    assert_eq!(collab[1], "A\tC");
    // The unknown actor produces no row.
    assert_eq!(collab.len(), 2);

    let predictions = read_lines(&predict_out);
    assert_eq!(predictions[0], "Actor1,Actor2,Actor3,Actor4");
    // B's co-stars have no further co-stars, so no candidates either.
    assert_eq!(predictions.len(), 1);
}

#[test]
fn test_missing_credits_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let pair_file = write_file(&dir, "pairs.tsv", "Start\tEnd\n");
    let out_file = dir.path().join("paths.out");

    let err = cli::run_pathfinder(
        &dir.path().join("nope.tsv"),
        false,
        &pair_file,
        &out_file,
    )
    .unwrap_err();
    assert!(err.to_string().contains("nope.tsv"));
}
