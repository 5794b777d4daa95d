//! Keyset transforms: `chunk`, `map`, `map_with_key`, `flatten`.
//!
//! Every function makes a single pass over its input and returns freshly
//! allocated containers. Deduplication scope differs on purpose:
//! - `chunk` dedups within each chunk only; a value may reappear in a later
//!   chunk.
//! - `map`, `map_with_key` and `flatten` dedup across the whole output.

use crate::error::{KeysetError, Result};
use crate::key::KeyCompatible;
use crate::keyset::Keyset;
use tracing::{debug, trace};

/// Splits `input` into consecutive keysets of up to `size` elements.
///
/// Every input element advances the position counter, duplicates included,
/// so a chunk that receives one of its own values again ends up smaller than
/// `size`. The last chunk holds whatever remains. Empty input gives no
/// chunks.
///
/// Fails with [`KeysetError::InvalidArgument`] when `size` is zero; the
/// input is not touched in that case.
///
/// ```
/// let chunks = keyset::chunk([1, 2, 2, 3, 4], 2).unwrap();
/// let chunks: Vec<Vec<i32>> = chunks.into_iter().map(|c| c.into_vec()).collect();
/// assert_eq!(chunks, vec![vec![1, 2], vec![2, 3], vec![4]]);
/// ```
pub fn chunk<I, T>(input: I, size: usize) -> Result<Vec<Keyset<T>>>
where
    I: IntoIterator<Item = T>,
    T: KeyCompatible,
{
    if size == 0 {
        debug!(size, "rejecting non-positive chunk size");
        return Err(KeysetError::InvalidArgument { size });
    }

    let mut result: Vec<Keyset<T>> = Vec::new();
    let mut seen = 0usize;
    for value in input {
        if seen % size == 0 {
            result.push(Keyset::new());
        }
        if let Some(current) = result.last_mut() {
            current.insert(value);
        }
        seen += 1;
    }
    trace!(seen, chunks = result.len(), size, "chunked input");
    Ok(result)
}

/// Keyset of `transform(v)` for every `v` in `input`.
///
/// `transform` runs exactly once per element, in order, even when its
/// result is already present.
///
/// ```
/// let lens = keyset::map(["a", "bb", "ccc", "dd"], str::len);
/// assert_eq!(lens.into_vec(), vec![1, 2, 3]);
/// ```
pub fn map<I, F, V>(input: I, mut transform: F) -> Keyset<V>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> V,
    V: KeyCompatible,
{
    let mut result = Keyset::new();
    let mut seen = 0usize;
    for value in input {
        result.insert(transform(value));
        seen += 1;
    }
    trace!(seen, len = result.len(), "mapped into keyset");
    result
}

/// Like [`map`], but `transform` also receives each element's key.
///
/// For sequential inputs pass `iter().enumerate()` to receive the index.
pub fn map_with_key<I, K, V1, F, V>(input: I, mut transform: F) -> Keyset<V>
where
    I: IntoIterator<Item = (K, V1)>,
    F: FnMut(K, V1) -> V,
    V: KeyCompatible,
{
    let mut result = Keyset::new();
    let mut seen = 0usize;
    for (key, value) in input {
        result.insert(transform(key, value));
        seen += 1;
    }
    trace!(seen, len = result.len(), "mapped with key into keyset");
    result
}

/// Fallible [`map`]. Stops at the first `Err`, which is returned as is;
/// later elements are never visited.
pub fn try_map<I, F, V, E>(input: I, mut transform: F) -> Result<Keyset<V>, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Result<V, E>,
    V: KeyCompatible,
{
    let mut result = Keyset::new();
    for value in input {
        result.insert(transform(value)?);
    }
    trace!(len = result.len(), "try-mapped into keyset");
    Ok(result)
}

/// Fallible [`map_with_key`].
pub fn try_map_with_key<I, K, V1, F, V, E>(input: I, mut transform: F) -> Result<Keyset<V>, E>
where
    I: IntoIterator<Item = (K, V1)>,
    F: FnMut(K, V1) -> Result<V, E>,
    V: KeyCompatible,
{
    let mut result = Keyset::new();
    for (key, value) in input {
        result.insert(transform(key, value)?);
    }
    trace!(len = result.len(), "try-mapped with key into keyset");
    Ok(result)
}

/// Joins every inner iterable, outer then inner order, into one keyset.
/// Duplicates collapse across all inner collections.
///
/// ```
/// let all = keyset::flatten(vec![vec![1, 2], vec![2, 3]]);
/// assert_eq!(all.into_vec(), vec![1, 2, 3]);
/// ```
pub fn flatten<I, T>(input: I) -> Keyset<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
    T: KeyCompatible,
{
    let mut result = Keyset::new();
    let mut seen = 0usize;
    for inner in input {
        for value in inner {
            result.insert(value);
            seen += 1;
        }
    }
    trace!(seen, len = result.len(), "flattened into keyset");
    result
}
