//! Coverage checking: does a candidate state include every element of the
//! universe {0, …, N-1}?
//!
//! • [`Coverage`] accumulates elements with O(1) access to the covered count.
//! • [`is_covered`] scans a candidate in sequence order and short-circuits.
//! • [`covering_prefix`] reports where coverage became complete.
//!
//! Elements outside `[0, N-1]` are accepted everywhere and never count.
//! An empty universe is covered before anything is read; a state with
//! fewer than N elements is rejected before any bits are allocated.

use bitvec::prelude::*;
use tracing::{debug, instrument};

/// Covered-set accumulator for a universe of `n` elements.
#[derive(Clone, Debug)]
pub struct Coverage {
    covered: BitVec,
    count:   usize,
}

impl Coverage {
    /// Nothing covered yet.
    pub fn new(n: usize) -> Self {
        Self { covered: bitvec![0; n], count: 0 }
    }

    /* queries */

    #[inline] pub fn universe(&self) -> usize   { self.covered.len() }
    #[inline] pub fn covered(&self) -> usize    { self.count }
    #[inline] pub fn is_complete(&self) -> bool { self.count == self.covered.len() }

    /// Whether `e` has been covered; out-of-range elements never are.
    pub fn contains(&self, e: i64) -> bool {
        self.index(e).is_some_and(|i| self.covered[i])
    }

    /// Uncovered elements in ascending order.
    pub fn missing(&self) -> impl Iterator<Item = usize> + '_ {
        self.covered.iter_zeros()
    }

    /// Covered share of the universe; 1 for an empty universe.
    pub fn fraction(&self) -> f64 {
        if self.covered.is_empty() { 1.0 }
        else { self.count as f64 / self.covered.len() as f64 }
    }

    /* mutators */

    /// Record `e`; returns `true` if it was newly covered.
    pub fn insert(&mut self, e: i64) -> bool {
        let Some(i) = self.index(e) else { return false };
        if self.covered.replace(i, true) { return false; }
        self.count += 1;
        true
    }

    /// Record every element of `elements`.
    pub fn extend<I: IntoIterator<Item = i64>>(&mut self, elements: I) {
        for e in elements {
            self.insert(e);
        }
    }

    pub fn clear(&mut self) {
        self.covered.fill(false);
        self.count = 0;
    }

    /// Record `state` in order until the universe is covered. Returns the
    /// position of the completing element; elements after it are not read.
    pub fn scan<S: AsRef<[i64]>>(&mut self, state: &[S]) -> Option<Position> {
        if self.is_complete() {
            return Some(Position::START);
        }
        for (set, elems) in state.iter().enumerate() {
            for (element, &e) in elems.as_ref().iter().enumerate() {
                if self.insert(e) && self.is_complete() {
                    return Some(Position { set, element });
                }
            }
        }
        None
    }

    #[inline]
    fn index(&self, e: i64) -> Option<usize> {
        usize::try_from(e).ok().filter(|&i| i < self.covered.len())
    }
}

/// Location of an element inside a candidate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    /// Index of the collection in the state.
    pub set:     usize,
    /// Index of the element inside that collection.
    pub element: usize,
}

impl Position {
    pub const START: Position = Position { set: 0, element: 0 };
}

/// Total number of elements across `state`, duplicates and strays included.
pub fn element_count<S: AsRef<[i64]>>(state: &[S]) -> usize {
    state.iter().map(|s| s.as_ref().len()).sum()
}

/// Scan `state` in order and return the position of the element that
/// completed the coverage of `{0, …, n-1}`, or `None` if it never did.
#[instrument(level = "debug", skip(state), fields(sets = state.len()))]
pub fn covering_prefix<S: AsRef<[i64]>>(state: &[S], n: usize) -> Option<Position> {
    if n == 0 {
        return Some(Position::START);
    }
    let total = element_count(state);
    if total < n {
        debug!(total, "too few elements to cover the universe");
        return None;
    }

    let mut cov = Coverage::new(n);
    let pos = cov.scan(state);
    match pos {
        Some(Position { set, element }) => debug!(set, element, "universe covered"),
        None => debug!(covered = cov.covered(), "state exhausted without full coverage"),
    }
    pos
}

/// `true` iff the union of `state` includes every integer in `[0, n-1]`.
pub fn is_covered<S: AsRef<[i64]>>(state: &[S], n: usize) -> bool {
    covering_prefix(state, n).is_some()
}

/*────────────────── tests ──────────────────*/
