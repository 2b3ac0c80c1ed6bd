// docmatch: compare a document against a fixed set of reference documents.
//
// This is the library root. The CLI in main.rs wires these together:
//   extract -> text (normalize) -> similarity, with reference token sets
//   held by the cache.

pub mod cache;
pub mod compare;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod similarity;
pub mod status;
pub mod text;
