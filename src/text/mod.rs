// Text normalization: raw extracted text in, comparable token set out.

pub mod normalizer;
pub mod tokens;
