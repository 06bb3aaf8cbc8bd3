//! Random instance generation.
//!
//! • `generate`       – size + optional seed
//! • `generate_with`  – any caller-owned [`RandomSource`] and [`Params`]
//!
//! Draw order is fixed: the subset count first, then per subset its
//! sampling count followed by that many elements. Elements are drawn with
//! replacement, so a subset may end up smaller than its sampling count.

use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    instance::Instance,
    mt::MersenneTwister,
    params::Params,
    source::RandomSource,
    subset::Subset,
};

/*───────────────────────────────────────────────────────────*/
/*  Seeded / entropy entry point                             */
/*───────────────────────────────────────────────────────────*/

/// Generate an instance over `{0, …, n-1}` with default [`Params`].
///
/// With `Some(seed)` the output is reproducible and stable across
/// releases for that seed; with `None` the source is seeded from entropy.
#[instrument(level = "debug")]
pub fn generate(n: usize, seed: Option<u64>) -> Result<Instance> {
    let mut source = match seed {
        Some(s) => MersenneTwister::new(s),
        None    => MersenneTwister::from_entropy(),
    };
    generate_with(n, &mut source, &Params::default())
}

/*───────────────────────────────────────────────────────────*/
/*  Explicit random source                                   */
/*───────────────────────────────────────────────────────────*/

pub fn generate_with<S>(n: usize, source: &mut S, p: &Params) -> Result<Instance>
where
    S: RandomSource + ?Sized,
{
    if n == 0 {
        return Err(Error::EmptyUniverse);
    }
    p.validate()?;

    let sets    = p.set_count_range(n)?;
    let samples = p.sample_count_range(n);

    let count = source.randint(*sets.start(), *sets.end());
    let mut inst = Instance::new(n);
    for _ in 0..count {
        let draws = source.randint(*samples.start(), *samples.end());
        let mut s = Subset::empty(n);
        for _ in 0..draws {
            s.insert(source.randint(0, n - 1));
        }
        inst.push(s);
    }

    debug!(universe = n, subsets = inst.len(), "instance generated");
    Ok(inst)
}

/*──────────────────────── tests ───────────────────────────*/

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn seed_42_instance() {
        let inst = generate(4, Some(42)).unwrap();
        assert_eq!(inst.to_string(), "[[], [1, 2], [], [], [0], [0, 3], []]");
    }

    #[test]
    fn singleton_universe() {
        // every sampling count is 0 when N div 2 == 0
        let inst = generate(1, Some(0)).unwrap();
        assert_eq!(inst.to_lists(), vec![Vec::<usize>::new(); 4]);
    }

    #[test]
    fn unseeded_respects_bounds() {
        for n in 1..30 {
            let inst = generate(n, None).unwrap();
            assert!((n..=5 * n).contains(&inst.len()));
            for s in &inst {
                assert!(s.len() <= n / 2);
                assert!(s.iter().all(|e| e < n));
            }
        }
    }

    #[test]
    fn empty_universe_rejected() {
        assert!(matches!(generate(0, Some(1)), Err(Error::EmptyUniverse)));
        assert!(matches!(generate(0, None), Err(Error::EmptyUniverse)));
    }

    #[test]
    fn oversized_universe_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = generate_with(usize::MAX / 4, &mut rng, &Params::default());
        assert!(matches!(r, Err(Error::UniverseTooLarge { .. })));
    }

    #[test]
    fn bad_params_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let p = Params { max_sets_factor: 0, ..Params::default() };
        assert!(matches!(generate_with(5, &mut rng, &p), Err(Error::InvalidParams(_))));
    }

    #[test]
    fn chacha_source_respects_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let inst = generate_with(20, &mut rng, &Params::default()).unwrap();
        assert!((20..=100).contains(&inst.len()));
        for s in &inst {
            assert!(s.len() <= 10);
            assert!(s.iter().all(|e| e < 20));
        }
    }

    #[test]
    fn custom_params_shape_instance() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let p = Params {
            min_sets_factor: 2,
            max_sets_factor: 2,
            min_sample_divisor: 1,
            max_sample_divisor: 1,
        };
        let inst = generate_with(6, &mut rng, &p).unwrap();
        assert_eq!(inst.len(), 12);
        assert!(inst.iter().all(|s| !s.is_empty() && s.len() <= 6));
    }
}
