//! uniform pseudo-random sources
//!
//! a source produces raw integers in `[0, MAX]` which are normalized to the
//! unit interval by a plain division, so both $0$ and $1$ can be drawn.
use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::glibc::{self, GlibcRandom};

/// a seeded generator of uniformly distributed integers in `[0, MAX]`
pub trait UniformSource {
    /// largest raw value the source can return
    const MAX: u32;

    fn next_raw(&mut self) -> u32;

    /// a uniform sample in the closed interval $[0, 1]$
    fn next_unit(&mut self) -> f64 {
        self.next_raw() as f64 / Self::MAX as f64
    }
}

impl UniformSource for StdRng {
    const MAX: u32 = u32::MAX;

    fn next_raw(&mut self) -> u32 {
        self.next_u32()
    }
}

impl UniformSource for GlibcRandom {
    const MAX: u32 = glibc::RAND_MAX;

    fn next_raw(&mut self) -> u32 {
        self.next_int()
    }
}

/// the generators that can back the sampling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Engine {
    /// the standard generator of the rand crate
    #[default]
    Std,
    /// the generator of the GNU C library, uses the lower 32 bits of the seed
    Glibc,
}

pub(crate) fn std_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub(crate) fn glibc_rng(seed: u64) -> GlibcRandom {
    GlibcRandom::new(seed as u32)
}

#[cfg(test)]
mod tests {
    use super::{glibc_rng, std_rng, UniformSource};

    fn bounds_template<S: UniformSource>(mut source: S, name: &str) {
        for _ in 0..10_000 {
            let u = source.next_unit();
            assert!(
                (0.0..=1.0).contains(&u),
                "unit sample should be in [0, 1], found {u}\nTEST | source: {name}"
            );
        }
    }

    #[test]
    fn unit_samples_are_bounded() {
        bounds_template(std_rng(0), "std");
        bounds_template(std_rng(42), "std");
        bounds_template(glibc_rng(0), "glibc");
        bounds_template(glibc_rng(42), "glibc");
    }

    #[test]
    fn std_is_deterministic() {
        let mut a = std_rng(42);
        let mut b = std_rng(42);
        let mut c = std_rng(43);

        let xs: Vec<u32> = (0..16).map(|_| a.next_raw()).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.next_raw()).collect();
        let zs: Vec<u32> = (0..16).map(|_| c.next_raw()).collect();

        assert_eq!(xs, ys);
        assert_ne!(xs, zs);
    }

    #[test]
    fn glibc_normalization() {
        let mut source = glibc_rng(42);
        let u = source.next_unit();
        assert_eq!(u, 71876166.0 / 2147483647.0);
    }

    #[test]
    fn glibc_seed_is_truncated() {
        let mut a = glibc_rng(42);
        let mut b = glibc_rng((1 << 32) + 42);
        for _ in 0..100 {
            assert_eq!(a.next_raw(), b.next_raw());
        }
    }
}
