//! Reading raw records from catalog files.
//!
//! `.csv` follows the TMDB movies layout; only the `title`, `overview` and
//! `genres` columns are read. `.json` holds an array of objects (or a single
//! object) and `.jsonl` one object per line.

use crate::error::CatalogError;
use crate::RawRecord;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct JsonRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    genres: Option<Value>,
}

impl From<JsonRecord> for RawRecord {
    fn from(rec: JsonRecord) -> Self {
        let genres = match rec.genres {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(flatten_genres(&s)),
            Some(Value::Array(arr)) => Some(genre_names(&arr)),
            Some(other) => Some(other.to_string()),
        };
        RawRecord { title: rec.title, overview: rec.overview, genres }
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Vec<RawRecord>, CatalogError> {
    let path = path.as_ref();
    let records = match path.extension().and_then(|s| s.to_str()) {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        Some("jsonl") => load_jsonl(path)?,
        _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
    };
    tracing::info!(path = %path.display(), num_records = records.len(), "catalog loaded");
    Ok(records)
}

pub fn load_csv(path: &Path) -> Result<Vec<RawRecord>, CatalogError> {
    let csv_err = |source| CatalogError::Csv { path: path.to_path_buf(), source };
    let mut reader = csv::Reader::from_path(path).map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();
    let column = |name: &str| headers.iter().position(|h| h.trim() == name);
    let title_col = column("title").ok_or(CatalogError::MissingColumn { path: path.to_path_buf(), column: "title" })?;
    let overview_col = column("overview");
    let genres_col = column("genres");

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_err)?;
        let cell = |col: Option<usize>| col.and_then(|c| row.get(c)).filter(|v| !v.is_empty()).map(str::to_string);
        records.push(RawRecord {
            title: cell(Some(title_col)),
            overview: cell(overview_col),
            genres: cell(genres_col).map(|g| flatten_genres(&g)),
        });
    }
    Ok(records)
}

pub fn load_json(path: &Path) -> Result<Vec<RawRecord>, CatalogError> {
    let f = File::open(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    let json: Value = serde_json::from_reader(BufReader::new(f))
        .map_err(|source| CatalogError::Json { path: path.to_path_buf(), source })?;
    let values = match json {
        Value::Array(arr) => arr,
        obj @ Value::Object(_) => vec![obj],
        _ => return Err(CatalogError::NotARecordList(path.to_path_buf())),
    };
    values
        .into_iter()
        .map(|v| {
            serde_json::from_value::<JsonRecord>(v)
                .map(RawRecord::from)
                .map_err(|source| CatalogError::Json { path: path.to_path_buf(), source })
        })
        .collect()
}

pub fn load_jsonl(path: &Path) -> Result<Vec<RawRecord>, CatalogError> {
    let f = File::open(path).map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
    let mut records = Vec::new();
    for line in BufReader::new(f).lines() {
        let line = line.map_err(|source| CatalogError::Io { path: path.to_path_buf(), source })?;
        if line.trim().is_empty() { continue; }
        let rec: JsonRecord = serde_json::from_str(&line)
            .map_err(|source| CatalogError::Json { path: path.to_path_buf(), source })?;
        records.push(rec.into());
    }
    Ok(records)
}

/// TMDB stores genres as `[{"id": 28, "name": "Action"}, ...]`. Such lists
/// become `"Action ..."`; anything that is not a JSON list is kept verbatim.
pub fn flatten_genres(raw: &str) -> String {
    let trimmed = raw.trim();
    if !trimmed.starts_with('[') {
        return raw.to_string();
    }
    match serde_json::from_str::<Vec<Value>>(trimmed) {
        Ok(arr) => genre_names(&arr),
        Err(_) => raw.to_string(),
    }
}

fn genre_names(arr: &[Value]) -> String {
    arr.iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s.as_str()),
            Value::Object(obj) => obj.get("name").and_then(Value::as_str),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(" ")
}
