// src/params.rs
//! Parameter bundle for the instance generator.
//!
//! Defaults:
//! - subset count      ∈ [N, 5N]
//! - sampling count    ∈ [N div 5, N div 2]
//!
//! Callers normally only choose the universe size N and a seed; the
//! factors below exist so tests can shrink or stretch instances.

use std::ops::RangeInclusive;

use crate::error::{Error, Result};

/// All tunable controls for instance generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Params {
    /// Lower bound of the subset count, as a multiple of N. Default = 1.
    pub min_sets_factor:    usize,

    /// Upper bound of the subset count, as a multiple of N. Default = 5.
    pub max_sets_factor:    usize,

    /// Lower bound of the per-subset sampling count is `N / min_sample_divisor`.
    /// Default = 5.
    pub min_sample_divisor: usize,

    /// Upper bound of the per-subset sampling count is `N / max_sample_divisor`.
    /// Default = 2.
    pub max_sample_divisor: usize,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            min_sets_factor:    1,
            max_sets_factor:    5,
            min_sample_divisor: 5,
            max_sample_divisor: 2,
        }
    }
}

impl Params {
    /// Reject bundles whose ranges would be empty for some N.
    pub fn validate(&self) -> Result<()> {
        if self.min_sample_divisor == 0 || self.max_sample_divisor == 0 {
            return Err(Error::InvalidParams("sample divisors must be non-zero"));
        }
        if self.min_sets_factor > self.max_sets_factor {
            return Err(Error::InvalidParams("min_sets_factor exceeds max_sets_factor"));
        }
        // n / a <= n / b for every n  ⇔  a >= b
        if self.min_sample_divisor < self.max_sample_divisor {
            return Err(Error::InvalidParams(
                "min_sample_divisor must be at least max_sample_divisor",
            ));
        }
        Ok(())
    }

    /// Inclusive range the subset count is drawn from.
    pub fn set_count_range(&self, n: usize) -> Result<RangeInclusive<usize>> {
        let too_large = || Error::UniverseTooLarge { size: n };
        let lo = n.checked_mul(self.min_sets_factor).ok_or_else(too_large)?;
        let hi = n.checked_mul(self.max_sets_factor).ok_or_else(too_large)?;
        Ok(lo..=hi)
    }

    /// Inclusive range each subset's sampling count is drawn from.
    #[inline]
    pub fn sample_count_range(&self, n: usize) -> RangeInclusive<usize> {
        n / self.min_sample_divisor..=n / self.max_sample_divisor
    }
}
