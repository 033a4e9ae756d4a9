//! Text analysis - tokenization, sentiment polarity, keyword extraction

pub mod keywords;
pub mod lexicon;
pub mod sentiment;
pub mod stopwords;
pub mod tokenize;

pub use keywords::{extract_keywords, KEYWORD_LIMIT};
pub use sentiment::{SentimentAnalyzer, SentimentLabel, SentimentReport};
pub use tokenize::{normalize, tokenize};
