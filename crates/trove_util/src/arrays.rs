//! Slice helpers.
//!
//! Uniqueness uses `PartialEq`, so these work on [`Value`](trove_foundation::Value)
//! with same-value-zero semantics. Everything returns new vectors except
//! [`remove_item`] and [`remove_where`], which edit in place.

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Splits `items` into consecutive chunks of `size`; the last may be shorter.
///
/// A `size` of zero yields no chunks.
#[must_use]
pub fn chunk<T: Clone>(items: &[T], size: usize) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    items.chunks(size).map(<[T]>::to_vec).collect()
}

/// Keeps the first occurrence of each item.
#[must_use]
pub fn unique<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    unique_by(items, T::clone)
}

/// Keeps the first item for each distinct key.
#[must_use]
pub fn unique_by<T: Clone, K: PartialEq>(items: &[T], key: impl Fn(&T) -> K) -> Vec<T> {
    let mut seen: Vec<K> = Vec::new();
    let mut out = Vec::new();
    for item in items {
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
            out.push(item.clone());
        }
    }
    out
}

/// Groups items by key. Groups appear in first-seen order and keep their
/// items in input order.
#[must_use]
pub fn group_by<T: Clone, K: PartialEq>(items: &[T], key: impl Fn(&T) -> K) -> Vec<(K, Vec<T>)> {
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let k = key(item);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, members)) => members.push(item.clone()),
            None => groups.push((k, vec![item.clone()])),
        }
    }
    groups
}

/// Items of `left` not present in `right`.
#[must_use]
pub fn difference<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    left.iter().filter(|x| !right.contains(x)).cloned().collect()
}

/// Distinct items of `left` that are also in `right`, in `left` order.
#[must_use]
pub fn intersection<T: PartialEq + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let common: Vec<T> = left.iter().filter(|x| right.contains(x)).cloned().collect();
    unique(&common)
}

/// Removes the first occurrence of `item`. Returns true if one was removed.
pub fn remove_item<T: PartialEq>(items: &mut Vec<T>, item: &T) -> bool {
    match items.iter().position(|x| x == item) {
        Some(i) => {
            items.remove(i);
            true
        }
        None => false,
    }
}

/// Removes every item matching `pred` and returns them in order.
pub fn remove_where<T>(items: &mut Vec<T>, mut pred: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut removed = Vec::new();
    let mut kept = Vec::with_capacity(items.len());
    for item in items.drain(..) {
        if pred(&item) {
            removed.push(item);
        } else {
            kept.push(item);
        }
    }
    *items = kept;
    removed
}

/// Returns a shuffled copy. The same seed always gives the same order.
#[must_use]
pub fn shuffle<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out = items.to_vec();
    out.shuffle(&mut rng);
    out
}

/// Picks one item, deterministically for a given seed.
#[must_use]
pub fn sample<T: Clone>(items: &[T], seed: u64) -> Option<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    items.choose(&mut rng).cloned()
}
