//! MT19937 random source with `init_by_array` seeding.
//!
//! Seeding follows `init_by_array` with the seed split into little-endian
//! 32-bit words, and integer draws use rejection sampling on the top
//! `bit_length(width)` bits of each output. Seeded instances depend on
//! this exact draw sequence, so it must not change.

use std::fmt;

use rand::Rng;

use crate::source::RandomSource;

const N: usize = 624;
const M: usize = 397;
const MATRIX_A:   u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister.
#[derive(Clone)]
pub struct MersenneTwister {
    state: Box<[u32; N]>,
    index: usize,
}

impl MersenneTwister {
    /*────────── constructors ──────────*/

    /// Seed from an integer; the seed's non-zero 32-bit words form the key
    /// (least significant first, at least one word).
    pub fn new(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        if hi == 0 {
            Self::from_key(&[lo])
        } else {
            Self::from_key(&[lo, hi])
        }
    }

    /// Seed from an arbitrary key (`init_by_array`). An empty key is
    /// treated as `[0]`.
    pub fn from_key(key: &[u32]) -> Self {
        let key = if key.is_empty() { &[0u32][..] } else { key };
        let mut mt = Self::from_u32(19_650_218);
        let s = &mut mt.state;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(key.len()) {
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            s[i] = (s[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N { s[0] = s[N - 1]; i = 1; }
            if j >= key.len() { j = 0; }
        }
        for _ in 0..N - 1 {
            let prev = s[i - 1] ^ (s[i - 1] >> 30);
            s[i] = (s[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N { s[0] = s[N - 1]; i = 1; }
        }
        s[0] = UPPER_MASK;
        mt
    }

    /// Seed from ambient entropy with a full-length key.
    pub fn from_entropy() -> Self {
        let mut rng = rand::thread_rng();
        let key: Vec<u32> = (0..N).map(|_| rng.r#gen()).collect();
        Self::from_key(&key)
    }

    /// `init_genrand`: linear seeding of the whole state.
    fn from_u32(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1] ^ (state[i - 1] >> 30);
            state[i] = 1_812_433_253u32.wrapping_mul(prev).wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /*────────── raw output ──────────*/

    /// Next tempered 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }

    fn twist(&mut self) {
        let s = &mut self.state;
        for k in 0..N {
            let y = (s[k] & UPPER_MASK) | (s[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            s[k] = s[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    /// `k` random bits (`k <= 64`). Words are consumed least significant
    /// first; a partial word keeps its top bits.
    pub fn getrandbits(&mut self, k: u32) -> u64 {
        assert!(k <= 64, "getrandbits supports at most 64 bits");
        let mut bits  = 0u64;
        let mut shift = 0u32;
        let mut left  = k;
        while left > 0 {
            let mut r = u64::from(self.next_u32());
            if left < 32 { r >>= 32 - left; }
            bits |= r << shift;
            shift += 32;
            left = left.saturating_sub(32);
        }
        bits
    }

    /// Uniform integer in `0..n` by rejection on `bit_length(n)` bits.
    /// `n` must be non-zero.
    pub fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "below() needs a non-empty range");
        let k = u64::BITS - n.leading_zeros();
        loop {
            let r = self.getrandbits(k);
            if r < n { return r; }
        }
    }
}

impl RandomSource for MersenneTwister {
    fn randint(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "cannot sample empty range {low}..={high}");
        let width = (high - low) as u64 + 1;
        low + self.below(width) as usize
    }
}

impl fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}

/*──────────── unit tests ────────────*/
#[cfg(test)]
mod tests {
    use super::*;

    fn first_three(mut mt: MersenneTwister) -> [u32; 3] {
        [mt.next_u32(), mt.next_u32(), mt.next_u32()]
    }

    #[test]
    fn known_outputs() {
        assert_eq!(first_three(MersenneTwister::new(0)),  [3626764237, 1654615998, 3255389356]);
        assert_eq!(first_three(MersenneTwister::new(42)), [2746317213, 478163327, 107420369]);
    }

    #[test]
    fn two_word_seeds() {
        assert_eq!(
            first_three(MersenneTwister::new((1 << 40) + 5)),
            [2166296868, 2220160828, 1153647273]
        );
        assert_eq!(
            first_three(MersenneTwister::new(u64::MAX)),
            [93740670, 1068495656, 1452108352]
        );
    }

    #[test]
    fn survives_regeneration() {
        let mut mt = MersenneTwister::new(1);
        let out: Vec<u32> = (0..700).map(|_| mt.next_u32()).collect();
        assert_eq!(out[623], 802355090);
        assert_eq!(out[624], 1360367077);
        assert_eq!(out[699], 3348972608);
    }

    #[test]
    fn randint_known_sequence() {
        let mut mt = MersenneTwister::new(42);
        let draws: Vec<usize> = (0..10).map(|_| mt.randint(0, 9)).collect();
        assert_eq!(draws, [1, 0, 4, 3, 3, 2, 1, 8, 1, 9]);
    }

    #[test]
    fn wide_draws() {
        let mut mt = MersenneTwister::new(42);
        assert_eq!(mt.getrandbits(40), 123005401501);
        assert_eq!(mt.getrandbits(40), 811856239313);

        let mut mt = MersenneTwister::new(3);
        assert_eq!(mt.below(1 << 33), 2337446730);
        assert_eq!(mt.below(1 << 33), 6888784125);
    }

    #[test]
    fn zero_bits_consume_nothing() {
        let mut a = MersenneTwister::new(9);
        let mut b = a.clone();
        assert_eq!(a.getrandbits(0), 0);
        assert_eq!(a.next_u32(), b.next_u32());
    }

    #[test]
    fn entropy_keys_differ() {
        let a: Vec<u32> = {
            let mut mt = MersenneTwister::from_entropy();
            (0..4).map(|_| mt.next_u32()).collect()
        };
        let b: Vec<u32> = {
            let mut mt = MersenneTwister::from_entropy();
            (0..4).map(|_| mt.next_u32()).collect()
        };
        assert_ne!(a, b);
    }

    #[test]
    fn empty_key_is_zero_key() {
        assert_eq!(
            first_three(MersenneTwister::from_key(&[])),
            first_three(MersenneTwister::new(0))
        );
    }
}
