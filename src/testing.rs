//! Deterministic random sources for host tests.

use rand_core::{impls, Error, RngCore};

/// Always yields the same word, so `random_below(rng, n)` is `value % n`.
pub struct FixedRng(pub u32);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        self.0
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

/// Xorshift32 - cheap, well spread, reproducible.
pub struct XorShift(pub u32);

impl RngCore for XorShift {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
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

/// Replays a fixed list of words, then repeats the last one.
pub struct SequenceRng<'a> {
    words: &'a [u32],
    next: usize,
}

impl<'a> SequenceRng<'a> {
    pub fn new(words: &'a [u32]) -> Self {
        Self { words, next: 0 }
    }
}

impl RngCore for SequenceRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next.min(self.words.len() - 1)];
        self.next += 1;
        word
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
