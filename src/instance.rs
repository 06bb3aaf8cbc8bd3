//! A set-cover instance: a universe size plus an ordered sequence of subsets.
//!
//! `Display` prints the plain nested-list form, e.g.
//! `[[], [1, 2], [0, 3]]`, which is also valid JSON and can be fed back to
//! [`read_state`]. Serde uses the fuller `{"universe": N, "subsets": [...]}`
//! object so the universe size survives a round trip.

use std::fmt;
use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{
    coverage::Coverage,
    error::{Error, Result},
    subset::Subset,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    universe: usize,
    subsets:  Vec<Subset>,
}

/// Wire form before the members are checked against the universe.
#[derive(Deserialize)]
struct RawInstance {
    universe: usize,
    subsets:  Vec<Vec<usize>>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = Error;

    fn try_from(raw: RawInstance) -> Result<Self> {
        Instance::from_lists(raw.universe, raw.subsets)
    }
}

impl Instance {
    /*────────── constructors ──────────*/

    /// No subsets yet.
    pub fn new(universe: usize) -> Self {
        Self { universe, subsets: Vec::new() }
    }

    /// Build from explicit member lists; duplicates collapse.
    pub fn from_lists<L>(universe: usize, lists: impl IntoIterator<Item = L>) -> Result<Self>
    where
        L: IntoIterator<Item = usize>,
    {
        let mut inst = Self::new(universe);
        for list in lists {
            inst.subsets.push(Subset::from_members(universe, list)?);
        }
        Ok(inst)
    }

    /*────────── getters ──────────*/

    #[inline] pub fn universe(&self) -> usize      { self.universe }
    #[inline] pub fn len(&self) -> usize           { self.subsets.len() }
    #[inline] pub fn is_empty(&self) -> bool       { self.subsets.is_empty() }
    #[inline] pub fn subsets(&self) -> &[Subset]   { &self.subsets }

    pub fn iter(&self) -> std::slice::Iter<'_, Subset> {
        self.subsets.iter()
    }

    /// Member lists, each ascending.
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        self.subsets.iter().map(|s| s.iter().collect()).collect()
    }

    /// Whether the subsets together cover the instance's own universe.
    pub fn is_cover(&self) -> bool {
        let mut cov = Coverage::new(self.universe);
        for s in &self.subsets {
            if cov.is_complete() { break; }
            cov.extend(s.iter().map(|e| e as i64));
        }
        cov.is_complete()
    }

    /*────────── mutators ──────────*/

    /// Append a subset. Panics if it belongs to a different universe.
    pub fn push(&mut self, subset: Subset) {
        assert_eq!(subset.universe(), self.universe, "subset universe mismatch");
        self.subsets.push(subset);
    }
}

impl<'a> IntoIterator for &'a Instance {
    type Item = &'a Subset;
    type IntoIter = std::slice::Iter<'a, Subset>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, s) in self.subsets.iter().enumerate() {
            if i > 0 { f.write_str(", ")?; }
            f.write_str("[")?;
            for (j, e) in s.iter().enumerate() {
                if j > 0 { f.write_str(", ")?; }
                write!(f, "{e}")?;
            }
            f.write_str("]")?;
        }
        f.write_str("]")
    }
}

/// Parse a candidate state: a JSON array of integer arrays.
/// Elements may be negative or outside any universe.
pub fn read_state<R: Read>(reader: R) -> Result<Vec<Vec<i64>>> {
    Ok(serde_json::from_reader(reader)?)
}

/*────────────────── tests ──────────────────*/
