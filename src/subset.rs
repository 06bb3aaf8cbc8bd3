//! A subset of the universe {0, …, N-1}, stored as one bit per element.
//!
//! Inserting a member twice is a no-op, so duplicates collapse the way a
//! set would. Members iterate in ascending order.

use bitvec::prelude::*;
use serde::{Serialize, Serializer};

use crate::error::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subset {
    /// `members[e]` is 1 ⇔ e ∈ subset.
    members: BitVec,
}

impl Subset {
    /*────────── constructors ──────────*/

    /// Empty subset of a universe with `n` elements.
    pub fn empty(n: usize) -> Self {
        Self { members: bitvec![0; n] }
    }

    /// Build from explicit members; fails on the first member `>= n`.
    pub fn from_members<I>(n: usize, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        let mut s = Self::empty(n);
        for e in members {
            if e >= n {
                return Err(Error::OutOfUniverse { element: e, size: n });
            }
            s.insert(e);
        }
        Ok(s)
    }

    /*────────── getters ──────────*/

    /// Size of the universe this subset lives in.
    #[inline] pub fn universe(&self) -> usize { self.members.len() }

    /// Number of distinct members.
    #[inline] pub fn len(&self) -> usize { self.members.count_ones() }

    #[inline] pub fn is_empty(&self) -> bool { self.members.not_any() }

    #[inline]
    pub fn contains(&self, e: usize) -> bool {
        self.members.get(e).is_some_and(|b| *b)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter_ones()
    }

    /*────────── mutators ──────────*/

    /// Add `e`; returns `true` if it was not already present.
    ///
    /// Panics if `e` lies outside the universe.
    pub fn insert(&mut self, e: usize) -> bool {
        assert!(e < self.universe(), "element {e} outside universe of size {}", self.universe());
        !self.members.replace(e, true)
    }
}

/*────────── serde: a subset travels as its sorted member list ──────────*/

impl Serialize for Subset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mut s = Subset::empty(5);
        assert!(s.insert(3));
        assert!(!s.insert(3));
        assert!(s.insert(1));
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn from_members_checks_bounds() {
        let s = Subset::from_members(4, [2, 0, 2]).unwrap();
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![0, 2]);
        assert!(s.contains(2));
        assert!(!s.contains(7));
        assert!(matches!(
            Subset::from_members(4, [4]),
            Err(Error::OutOfUniverse { element: 4, size: 4 })
        ));
    }

    #[test]
    fn empty_subset() {
        let s = Subset::empty(3);
        assert!(s.is_empty());
        assert_eq!(s.universe(), 3);
        assert_eq!(serde_json::to_string(&s).unwrap(), "[]");
    }
}
