use crate::tokenizer::{tokenize, tokenize_stemmed};
use crate::TermId;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorizerOptions {
    /// Reduce terms to their English stem before counting.
    pub stem: bool,
    /// Use tf = 1 + ln(count) instead of the raw count.
    pub sublinear_tf: bool,
    /// Use idf = ln((1 + N) / (1 + df)) + 1 instead of ln(N / df) + 1.
    pub smooth_idf: bool,
}

impl Default for VectorizerOptions {
    fn default() -> Self {
        Self { stem: false, sublinear_tf: false, smooth_idf: true }
    }
}

/// L2-normalized tf-idf weights, sorted by term id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(TermId, f32)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|(_, w)| *w == 0.0)
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Merge-join over the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut acc = 0.0f32;
        while i < self.entries.len() && j < other.entries.len() {
            let (ta, wa) = self.entries[i];
            let (tb, wb) = other.entries[j];
            if ta == tb {
                acc += wa * wb;
                i += 1;
                j += 1;
            } else if ta < tb {
                i += 1;
            } else {
                j += 1;
            }
        }
        acc
    }
}

#[derive(Debug, Clone, Default)]
pub struct VectorSpace {
    pub dictionary: HashMap<String, TermId>,
    pub df: Vec<u32>,
    pub idf: Vec<f32>,
    /// One vector per document, in input order.
    pub vectors: Vec<SparseVector>,
}

impl VectorSpace {
    pub fn fit<S: AsRef<str>>(texts: &[S], options: VectorizerOptions) -> Self {
        let mut next_term_id: TermId = 0;
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut counts: Vec<Vec<(TermId, u32)>> = Vec::with_capacity(texts.len());

        for text in texts {
            let tokens = if options.stem { tokenize_stemmed(text.as_ref()) } else { tokenize(text.as_ref()) };
            let mut tf_counts: HashMap<TermId, u32> = HashMap::new();
            for term in tokens {
                let tid = *dictionary.entry(term).or_insert_with(|| {
                    let id = next_term_id;
                    next_term_id += 1;
                    df.push(0);
                    id
                });
                *tf_counts.entry(tid).or_insert(0) += 1;
            }
            for tid in tf_counts.keys() {
                df[*tid as usize] += 1;
            }
            let mut doc: Vec<(TermId, u32)> = tf_counts.into_iter().collect();
            doc.sort_by_key(|(tid, _)| *tid);
            counts.push(doc);
        }

        let n = texts.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&df_t| {
                let df_t = df_t as f32;
                if options.smooth_idf { ((1.0 + n) / (1.0 + df_t)).ln() + 1.0 } else { (n / df_t.max(1.0)).ln() + 1.0 }
            })
            .collect();

        let vectors = counts
            .into_iter()
            .map(|doc| {
                let mut entries: Vec<(TermId, f32)> = doc
                    .into_iter()
                    .map(|(tid, tf_raw)| {
                        let tf = if options.sublinear_tf { 1.0 + (tf_raw as f32).ln() } else { tf_raw as f32 };
                        (tid, tf * idf[tid as usize])
                    })
                    .collect();
                let norm = entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
                if norm > 0.0 {
                    for (_, w) in entries.iter_mut() { *w /= norm; }
                }
                SparseVector { entries }
            })
            .collect();

        tracing::debug!(num_docs = texts.len(), num_terms = dictionary.len(), "fitted tf-idf space");
        Self { dictionary, df, idf, vectors }
    }

    pub fn num_terms(&self) -> usize { self.dictionary.len() }

    pub fn num_docs(&self) -> usize { self.vectors.len() }

    /// Weight of `term` in document `doc`, zero when absent.
    pub fn weight(&self, doc: usize, term: &str) -> f32 {
        let Some(&tid) = self.dictionary.get(term) else { return 0.0 };
        self.vectors
            .get(doc)
            .and_then(|v| v.entries.binary_search_by_key(&tid, |(t, _)| *t).ok().map(|pos| v.entries[pos].1))
            .unwrap_or(0.0)
    }
}
