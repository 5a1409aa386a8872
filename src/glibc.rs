//! a bit-exact rendition of the `srand` / `rand` pair of the GNU C library
//!
//! glibc's default generator is an additive feedback generator of degree 31
//! with a separation of 3, i.e. every output is
//! $$ r_i = r_{i - 31} + r_{i - 3} \mod 2^{32} $$
//! shifted right by one bit, which gives values in $[0, 2^{31} - 1]$.
//!
//! the initial table is filled from the seed with the Park-Miller "minimal
//! standard" recurrence $x_{i + 1} = 16807 x_i \mod (2^{31} - 1)$ and the first
//! $10 \times 31$ outputs are thrown away.
//!
//! with the same seed, [`GlibcRandom`] yields exactly the numbers a C program
//! linked against glibc would get from `rand()`.
use rand_core::{impls, Error, RngCore};

/// largest value [`GlibcRandom::next_int`] can return, i.e. glibc's `RAND_MAX`
pub const RAND_MAX: u32 = 0x7fff_ffff;

const DEGREE: usize = 31;
const SEPARATION: usize = 3;
const DISCARD: usize = 10 * DEGREE;
const MODULUS: i64 = (1 << 31) - 1;

/// glibc's `TYPE_3` random generator
#[derive(Clone, Debug, PartialEq)]
pub struct GlibcRandom {
    state: [u32; DEGREE],
    front: usize,
    rear: usize,
}

impl GlibcRandom {
    /// equivalent of `srand(seed)`
    ///
    /// > **Note**
    /// >
    /// > glibc does not accept a null seed and silently uses `1` instead, so
    /// > `GlibcRandom::new(0)` and `GlibcRandom::new(1)` produce the same
    /// > sequence.
    pub fn new(seed: u32) -> Self {
        let seed = if seed == 0 { 1 } else { seed };

        let mut state = [0u32; DEGREE];
        state[0] = seed;

        // the seed is read as a signed 32-bit integer and the divisions below
        // truncate towards zero, as in C
        let mut word = seed as i32 as i64;
        for slot in state.iter_mut().skip(1) {
            let hi = word / 127_773;
            let lo = word % 127_773;
            word = 16_807 * lo - 2_836 * hi;
            if word < 0 {
                word += MODULUS;
            }
            *slot = word as u32;
        }

        let mut rng = Self {
            state,
            front: SEPARATION,
            rear: 0,
        };
        for _ in 0..DISCARD {
            rng.step();
        }

        rng
    }

    fn step(&mut self) -> u32 {
        self.state[self.front] = self.state[self.front].wrapping_add(self.state[self.rear]);
        let result = self.state[self.front] >> 1;

        self.front = (self.front + 1) % DEGREE;
        self.rear = (self.rear + 1) % DEGREE;

        result
    }

    /// equivalent of `rand()`, a value in `[0, RAND_MAX]`
    pub fn next_int(&mut self) -> u32 {
        self.step()
    }
}

/// a single output only carries 31 random bits, two of them are combined to
/// build a full `u32`.
impl RngCore for GlibcRandom {
    fn next_u32(&mut self) -> u32 {
        let high = self.step();
        let low = self.step();
        (high << 1) | (low & 1)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
