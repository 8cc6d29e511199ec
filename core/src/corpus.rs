use crate::error::CorpusError;
use crate::title_index::TitleIndex;
use crate::vectorizer::{VectorSpace, VectorizerOptions};
use crate::{Item, RawRecord};

impl Item {
    /// Missing overview or genres become empty strings; a missing title is fatal.
    pub fn from_raw(row: usize, raw: RawRecord) -> Result<Self, CorpusError> {
        let title = raw.title.ok_or(CorpusError::MissingTitle { row })?;
        let overview = raw.overview.unwrap_or_default();
        let genres = raw.genres.unwrap_or_default();
        let text = format!("{overview} {genres}");
        Ok(Self { title, overview, genres, text })
    }
}

/// Items in input order together with their tf-idf space and title index.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub items: Vec<Item>,
    pub space: VectorSpace,
    pub titles: TitleIndex,
}

impl Corpus {
    pub fn build<I>(raw_items: I, options: VectorizerOptions) -> Result<Self, CorpusError>
    where
        I: IntoIterator<Item = RawRecord>,
    {
        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(row, raw)| Item::from_raw(row, raw))
            .collect::<Result<Vec<_>, _>>()?;
        let texts: Vec<&str> = items.iter().map(|i| i.text.as_str()).collect();
        let space = VectorSpace::fit(&texts, options);
        let titles = TitleIndex::build(&items);
        if titles.duplicates() > 0 {
            tracing::warn!(duplicates = titles.duplicates(), "catalog contains duplicate titles, first occurrence wins");
        }
        Ok(Self { items, space, titles })
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}
