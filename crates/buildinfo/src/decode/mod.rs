//! Decoding pipeline: line scanner feeding the replace-aware parser

pub mod parser;
pub mod scanner;
