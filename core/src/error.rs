use std::path::PathBuf;

/// Raised while turning raw records into a corpus. The build is all-or-nothing.
#[derive(thiserror::Error, Debug)]
pub enum CorpusError {
    #[error("record {row} has no title")]
    MissingTitle { row: usize },
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{path} has no `{column}` column")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{0} holds neither an array of records nor a single record")]
    NotARecordList(PathBuf),

    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(PathBuf),
}
