//! exprv: exponential random variates through inverse transform sampling
//!
//! the cumulative distribution function of the exponential distribution of
//! rate $\lambda$ is $F(x) = 1 - e^{-\lambda x}$. if $u$ is drawn uniformly in
//! $[0, 1]$, then so is $1 - u$ and
//! $$ x = -\frac{\ln u}{\lambda} $$
//! follows the exponential distribution.
//!
//! # Example
//! ```
//! use exprv::{generate, uniform::Engine, ZeroPolicy};
//!
//! let samples = generate(Engine::Glibc, 3, 2.0, 42, ZeroPolicy::Propagate);
//! assert_eq!(samples.len(), 3);
//! assert!(samples.iter().all(|&x| x >= 0.0));
//! ```
use std::io::{self, Write};

use tracing::debug;

pub mod args;
pub mod error;
pub mod glibc;
pub mod uniform;

use crate::uniform::{Engine, UniformSource};

/// what to do when the uniform source returns exactly $0$
///
/// $\ln 0 = -\infty$, so a null uniform sample would turn into an infinite
/// exponential sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ZeroPolicy {
    /// keep the infinite sample
    #[default]
    Propagate,
    /// draw again until the uniform sample is not zero
    Resample,
    /// use the smallest non-zero uniform sample instead
    Clamp,
}

/// an infinite stream of exponentially distributed samples
///
/// the [`Sampler`] owns its uniform source, so two samplers never share any
/// random state.
pub struct Sampler<S: UniformSource> {
    source: S,
    rate: f64,
    policy: ZeroPolicy,
}

impl<S: UniformSource> Sampler<S> {
    /// `rate` is expected to be finite and strictly positive, see
    /// [`args::parse_rate`].
    pub fn new(source: S, rate: f64, policy: ZeroPolicy) -> Self {
        Self {
            source,
            rate,
            policy,
        }
    }

    fn unit(&mut self) -> f64 {
        let u = self.source.next_unit();
        if u > 0.0 {
            return u;
        }

        debug!("uniform source returned 0, applying {:?}", self.policy);
        match self.policy {
            ZeroPolicy::Propagate => u,
            ZeroPolicy::Resample => loop {
                let u = self.source.next_unit();
                if u > 0.0 {
                    break u;
                }
            },
            ZeroPolicy::Clamp => 1.0 / S::MAX as f64,
        }
    }

    /// draws a single exponential sample
    pub fn sample(&mut self) -> f64 {
        -self.unit().ln() / self.rate
    }
}

impl<S: UniformSource> Iterator for Sampler<S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.sample())
    }
}

/// draws `count` samples of the exponential distribution of rate `rate`
///
/// the same `engine`, `seed` and `rate` always give the same samples.
pub fn generate(
    engine: Engine,
    count: u64,
    rate: f64,
    seed: u64,
    policy: ZeroPolicy,
) -> Vec<f64> {
    let mut samples = vec![];
    generate_into(&mut samples, engine, count, rate, seed, policy);
    samples
}

/// writes each sample with 6 decimal digits, followed by a single space
///
/// there is no newline at the end of the output.
///
/// # Example
/// ```
/// let mut out: Vec<u8> = vec![];
/// exprv::write_samples(&mut out, [1.0, 0.25, f64::INFINITY]).unwrap();
/// assert_eq!(out, b"1.000000 0.250000 inf ");
/// ```
pub fn write_samples<W: Write>(
    writer: &mut W,
    samples: impl IntoIterator<Item = f64>,
) -> io::Result<()> {
    for sample in samples {
        write!(writer, "{:.6} ", sample)?;
    }

    Ok(())
}

/// draws `count` samples and writes them to `writer` as they are produced
///
/// > **Note**
/// >
/// > this is [`generate`] followed by [`write_samples`], without holding all
/// > the samples in memory.
pub fn generate_to<W: Write>(
    writer: &mut W,
    engine: Engine,
    count: u64,
    rate: f64,
    seed: u64,
    policy: ZeroPolicy,
) -> io::Result<()> {
    let mut sink = WriteSink { writer, res: Ok(()) };
    generate_into(&mut sink, engine, count, rate, seed, policy);
    sink.res
}

struct WriteSink<'a, W: Write> {
    writer: &'a mut W,
    res: io::Result<()>,
}

impl<W: Write> Extend<f64> for WriteSink<'_, W> {
    fn extend<T: IntoIterator<Item = f64>>(&mut self, iter: T) {
        if self.res.is_ok() {
            self.res = write_samples(self.writer, iter);
        }
    }
}

fn generate_into(
    sink: &mut impl Extend<f64>,
    engine: Engine,
    count: u64,
    rate: f64,
    seed: u64,
    policy: ZeroPolicy,
) {
    debug!("drawing {count} samples with {engine:?}, seed {seed} and rate {rate}");
    match engine {
        Engine::Std => {
            let mut sampler = Sampler::new(uniform::std_rng(seed), rate, policy);
            sink.extend((0..count).map(|_| sampler.sample()));
        }
        Engine::Glibc => {
            let mut sampler = Sampler::new(uniform::glibc_rng(seed), rate, policy);
            sink.extend((0..count).map(|_| sampler.sample()));
        }
    }
}
