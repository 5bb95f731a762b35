//! Natural Language Processing components
//!
//! This module provides tokenization, stopword filtering, and sentence
//! splitting.

pub mod sentences;
pub mod stopwords;
pub mod tokenizer;
