// Similarity scoring between token sets.

pub mod jaccard;

pub use jaccard::jaccard_percent;
