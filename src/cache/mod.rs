// Reference cache: normalized token sets for every configured reference,
// persisted to a flat file so later runs skip extraction entirely.
//
// The store is never patched in place. Deleting it (or `build --refresh`)
// is the only way to pick up changed reference documents.

pub mod manager;
pub mod store;

pub use manager::{CacheManager, CacheOrigin, CacheState, ReferenceCache};
pub use store::{CacheStore, JsonFileStore, ReferenceEntry, StoredCache, FORMAT_VERSION};
