mod sparse;
mod tfidf;
mod tokenizer;

pub use sparse::SparseVector;
pub use tfidf::TfidfVectorizer;
pub use tokenizer::tokenize;
