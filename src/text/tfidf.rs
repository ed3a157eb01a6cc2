use crate::text::{SparseVector, tokenize};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Term-frequency / inverse-document-frequency vectorizer.
///
/// The vocabulary is the sorted set of tokens seen while fitting. Weights use
/// smoothed idf, `ln((1 + n) / (1 + df)) + 1`, and every transformed vector is
/// L2-normalised. Tokens outside the vocabulary are ignored.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let mut df = vec![0usize; self.vocabulary.len()];
        for tokens in &tokenized {
            let seen: BTreeSet<usize> = tokens
                .iter()
                .filter_map(|t| self.vocabulary.get(t).copied())
                .collect();
            for i in seen {
                df[i] += 1;
            }
        }

        let n = documents.len() as f64;
        self.idf = df
            .into_iter()
            .map(|d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();
    }

    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Vec<SparseVector> {
        self.fit(documents);
        documents.iter().map(|d| self.transform(d.as_ref())).collect()
    }

    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokenize(text) {
            if let Some(&i) = self.vocabulary.get(&token) {
                *counts.entry(i).or_insert(0.0) += 1.0;
            }
        }
        let mut v = SparseVector::from_pairs(counts.into_iter().map(|(i, tf)| (i, tf * self.idf[i])));
        v.normalize();
        v
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|i| self.idf[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted() -> TfidfVectorizer {
        let mut v = TfidfVectorizer::new();
        v.fit(&["data sharing", "data retention policy", "profiling"]);
        v
    }

    #[test]
    fn vocabulary_is_sorted() {
        let v = fitted();
        assert_eq!(v.vocabulary_size(), 5);
        assert_eq!(v.index_of("data"), Some(0));
        assert_eq!(v.index_of("sharing"), Some(4));
        assert_eq!(v.index_of("missing"), None);
    }

    #[test]
    fn smoothed_idf() {
        let v = fitted();
        // n = 3, df(data) = 2, df(profiling) = 1
        assert!((v.idf_of("data").unwrap() - ((4.0f64 / 3.0).ln() + 1.0)).abs() < 1e-12);
        assert!((v.idf_of("profiling").unwrap() - (2.0f64.ln() + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn transform_is_unit_length_and_weighted() {
        let v = fitted();
        let x = v.transform("Data sharing data");
        assert!((x.norm() - 1.0).abs() < 1e-12);

        let data = 2.0 * v.idf_of("data").unwrap();
        let sharing = v.idf_of("sharing").unwrap();
        let norm = (data * data + sharing * sharing).sqrt();
        assert!((x.get(0) - data / norm).abs() < 1e-12);
        assert!((x.get(4) - sharing / norm).abs() < 1e-12);
    }

    #[test]
    fn unknown_text_is_empty() {
        let v = fitted();
        assert!(v.transform("entirely novel words").is_empty());
        assert!(v.transform("").is_empty());
    }

    #[test]
    fn fit_transform_matches_transform() {
        let mut v = TfidfVectorizer::new();
        let docs = ["consent withdrawn", "consent obtained"];
        let xs = v.fit_transform(&docs);
        assert_eq!(xs[1], v.transform(docs[1]));
    }
}
