use cinerank_core::catalog::load_catalog;
use cinerank_core::{CatalogError, RawRecord, Recommender, VectorizerOptions};
use std::fs;
use tempfile::tempdir;

const TMDB_CSV: &str = r#"budget,genres,id,overview,title
237000000,"[{""id"": 28, ""name"": ""Action""}, {""id"": 878, ""name"": ""Science Fiction""}]",19995,"In the 22nd century, a paraplegic Marine is dispatched to the moon Pandora.",Avatar
0,[],1,,Untitled Project
"#;

#[test]
fn reads_tmdb_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.csv");
    fs::write(&path, TMDB_CSV).unwrap();

    let records = load_catalog(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title.as_deref(), Some("Avatar"));
    assert_eq!(records[0].genres.as_deref(), Some("Action Science Fiction"));
    assert_eq!(records[1].overview, None);
    assert_eq!(records[1].genres.as_deref(), Some(""));
}

#[test]
fn csv_without_title_column_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.csv");
    fs::write(&path, "name,overview\nAvatar,blue people\n").unwrap();
    assert!(matches!(load_catalog(&path), Err(CatalogError::MissingColumn { column: "title", .. })));
}

#[test]
fn reads_json_and_jsonl() {
    let dir = tempdir().unwrap();
    let json = dir.path().join("movies.json");
    fs::write(&json, r#"[{"title": "Heat", "overview": "heist", "genres": ["Crime", "Thriller"]}, {"title": "Alien"}]"#).unwrap();
    let records = load_catalog(&json).unwrap();
    assert_eq!(records[0], RawRecord::new("Heat", "heist", "Crime Thriller"));
    assert_eq!(records[1].overview, None);

    let jsonl = dir.path().join("movies.jsonl");
    fs::write(&jsonl, "{\"title\": \"Heat\", \"genres\": \"Crime\"}\n\n{\"title\": \"Alien\", \"genres\": null}\n").unwrap();
    let records = load_catalog(&jsonl).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].genres, None);
}

#[test]
fn json_scalar_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.json");
    fs::write(&path, "42").unwrap();
    assert!(matches!(load_catalog(&path), Err(CatalogError::NotARecordList(_))));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.parquet");
    fs::write(&path, "").unwrap();
    assert!(matches!(load_catalog(&path), Err(CatalogError::UnsupportedFormat(_))));
}

#[test]
fn loaded_catalog_builds_recommender() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("movies.csv");
    fs::write(&path, TMDB_CSV).unwrap();
    let rec = Recommender::build(load_catalog(&path).unwrap(), VectorizerOptions::default()).unwrap();
    assert_eq!(rec.recommend("avatar", 5), vec!["Untitled Project"]);
}
