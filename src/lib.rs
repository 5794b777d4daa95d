//! keyset: insertion-ordered, deduplicating sets of integer or string keys,
//! and pure transforms that build them.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small container with exact iteration-order and dedup rules,
//!   plus four single-pass transforms over arbitrary iterables.
//! - Layers:
//!   - `KeyCompatible` / `ArrayKey`: sealed bound restricting elements to
//!     integers and strings, and a mixed int-or-string key.
//!   - `Keyset<T, S>`: dense insertion-ordered storage indexed by a
//!     `hashbrown::HashTable` of positions.
//!   - `transform`: `chunk`, `map`, `map_with_key`, `flatten` (and the
//!     fallible `try_map`, `try_map_with_key`).
//!
//! Constraints
//! - Inserting a present value is a no-op; never an error.
//! - Iteration order is first-insertion order.
//! - Each transform call allocates its own output; no global state.
//! - `T: Hash` runs once per inserted value; resizes reuse stored hashes.
//!
//! Dedup scope
//! - `chunk` dedups within each chunk. Its position counter advances on
//!   every input element, so a chunk that receives a duplicate of its own
//!   value comes out short, and values from earlier chunks may reappear.
//! - `map`, `map_with_key` and `flatten` dedup across the whole output.
//!
//! Errors
//! - `chunk` rejects a zero size with `KeysetError::InvalidArgument` before
//!   consuming any input. Transform errors in the `try_` variants propagate
//!   unchanged and abort the pass.
//!
//! Notes and non-goals
//! - No multiset semantics: duplicate multiplicity is never kept.
//! - Chunk sizes are not evened out after dedup.
//! - No removal API; keysets are built, read, and consumed.

mod error;
mod key;
mod keyset;
mod keyset_proptest;
pub mod transform;

// Public surface
pub use error::{KeysetError, Result};
pub use key::{ArrayKey, KeyCompatible};
pub use keyset::{IntoIter, Iter, Keyset};
pub use transform::{chunk, flatten, map, map_with_key, try_map, try_map_with_key};
