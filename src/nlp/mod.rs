//! Natural Language Processing components
//!
//! This module provides tokenization, sentence segmentation and stopword
//! filtering.

pub mod sentences;
pub mod stopwords;
pub mod tokenizer;
