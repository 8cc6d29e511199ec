pub mod catalog;
pub mod corpus;
pub mod error;
pub mod recommender;
pub mod similarity;
pub mod title_index;
pub mod tokenizer;
pub mod vectorizer;

use serde::{Deserialize, Serialize};

pub use corpus::Corpus;
pub use error::{CatalogError, CorpusError};
pub use recommender::{Recommendation, Recommender};
pub use similarity::SimilarityMatrix;
pub use title_index::TitleIndex;
pub use vectorizer::{SparseVector, VectorSpace, VectorizerOptions};

pub type TermId = u32;

/// One catalog row as handed over by a loader; every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
}

impl RawRecord {
    pub fn new(title: &str, overview: &str, genres: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            overview: Some(overview.to_string()),
            genres: Some(genres.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub overview: String,
    pub genres: String,
    /// `overview + " " + genres`, the only text fed to the vectorizer.
    pub text: String,
}
