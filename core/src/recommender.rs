use crate::corpus::Corpus;
use crate::error::CorpusError;
use crate::similarity::SimilarityMatrix;
use crate::vectorizer::VectorizerOptions;
use crate::{Item, RawRecord};
use serde::Serialize;
use std::cmp::Ordering;
use std::time::Instant;

pub const DEFAULT_COUNT: usize = 5;
pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 10;

/// Bounds a user-supplied result count to `MIN_COUNT..=MAX_COUNT`.
/// Presentation layers call this; `Recommender` itself takes `n` as given.
pub fn clamp_count(n: usize) -> usize {
    n.clamp(MIN_COUNT, MAX_COUNT)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub index: usize,
    pub title: String,
    pub score: f32,
}

/// Immutable handle over a built corpus and its similarity matrix.
/// Build once and share; queries never mutate it.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    corpus: Corpus,
    matrix: SimilarityMatrix,
}

impl Recommender {
    pub fn build<I>(raw_items: I, options: VectorizerOptions) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let start = Instant::now();
        let corpus = Corpus::build(raw_items, options)?;
        let matrix = SimilarityMatrix::compute(&corpus.space);
        tracing::info!(
            num_items = corpus.len(),
            num_terms = corpus.space.num_terms(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "recommender built"
        );
        Ok(Self { corpus, matrix })
    }

    /// Up to `n` titles most similar to `title`, best first. Empty when the
    /// title is unknown.
    pub fn recommend(&self, title: &str, n: usize) -> Vec<String> {
        self.recommend_scored(title, n)
            .map(|recs| recs.into_iter().map(|r| r.title).collect())
            .unwrap_or_default()
    }

    /// `None` when the title is unknown. Ties keep ascending item order and
    /// the query item is always excluded.
    pub fn recommend_scored(&self, title: &str, n: usize) -> Option<Vec<Recommendation>> {
        let idx = self.lookup(title)?;
        let mut scored: Vec<(usize, f32)> = self
            .matrix
            .row(idx)
            .iter()
            .copied()
            .enumerate()
            .filter(|(j, _)| *j != idx)
            .collect();
        // stable: equal scores stay in index order
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        let recs: Vec<Recommendation> = scored
            .into_iter()
            .take(n)
            .map(|(index, score)| Recommendation { index, title: self.corpus.items[index].title.clone(), score })
            .collect();
        tracing::debug!(query = title, idx, returned = recs.len(), "recommendations ranked");
        Some(recs)
    }

    pub fn lookup(&self, title: &str) -> Option<usize> {
        self.corpus.titles.get(title)
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.corpus.items.get(index)
    }

    pub fn items(&self) -> &[Item] { &self.corpus.items }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn matrix(&self) -> &SimilarityMatrix { &self.matrix }

    pub fn num_items(&self) -> usize { self.corpus.len() }

    pub fn num_terms(&self) -> usize { self.corpus.space.num_terms() }
}
