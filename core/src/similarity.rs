use crate::vectorizer::VectorSpace;

/// Dense, row-major cosine similarity between every pair of documents.
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f32>,
}

impl SimilarityMatrix {
    /// Pairs involving an all-zero vector score 0.0, including the diagonal.
    pub fn compute(space: &VectorSpace) -> Self {
        let n = space.vectors.len();
        let norms: Vec<f32> = space.vectors.iter().map(|v| v.norm()).collect();
        let mut data = vec![0.0f32; n * n];
        for i in 0..n {
            if norms[i] == 0.0 { continue; }
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                if norms[j] == 0.0 { continue; }
                let cos = space.vectors[i].dot(&space.vectors[j]) / (norms[i] * norms[j]);
                let cos = if cos > 1.0 { 1.0 } else if cos > 0.0 { cos } else { 0.0 };
                data[i * n + j] = cos;
                data[j * n + i] = cos;
            }
        }
        Self { n, data }
    }

    pub fn len(&self) -> usize { self.n }

    pub fn is_empty(&self) -> bool { self.n == 0 }

    pub fn get(&self, i: usize, j: usize) -> f32 { self.data[i * self.n + j] }

    pub fn row(&self, i: usize) -> &[f32] { &self.data[i * self.n..(i + 1) * self.n] }
}
