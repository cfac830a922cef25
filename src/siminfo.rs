//! Bit-parallel simulation buffers.
//!
//! Every object of the network owns one fixed-length buffer of `u64` words;
//! bit `k` of the buffer is the object's value under input pattern `k`. The
//! whole store is allocated up front for one simulation run and freed when
//! the run returns.

use rand::Rng;

use crate::lit::NodeId;

/// Number of simulated patterns carried by one word.
pub const BITS_PER_WORD: usize = 64;

/// Number of words needed to hold `n_patterns` simulated bits.
///
/// # Panics
///
/// Panics if `n_patterns == 0`: a zero pattern count would make the
/// switching formula divide by zero downstream.
pub fn words_for(n_patterns: usize) -> usize {
    assert!(n_patterns > 0, "pattern count must be positive");
    (n_patterns + BITS_PER_WORD - 1) / BITS_PER_WORD
}

/// Simulation storage for all objects of one network.
///
/// Buffers are zero-initialized and never alias: each id maps to its own
/// disjoint word range. Indexing with an id outside the allocation is a
/// programmer error and panics.
pub struct SimInfo {
    /// Flat storage: the buffer of id `i` occupies words `i*n_words..(i+1)*n_words`.
    words: Vec<u64>,
    n_words: usize,
}

impl SimInfo {
    /// Reserves `max_id` buffers of `n_words` words each, zero-initialized.
    pub fn alloc(max_id: u32, n_words: usize) -> Self {
        assert!(n_words > 0, "word count must be positive");
        Self {
            words: vec![0; max_id as usize * n_words],
            n_words,
        }
    }

    /// Words per buffer.
    pub fn n_words(&self) -> usize {
        self.n_words
    }

    fn range(&self, id: NodeId) -> std::ops::Range<usize> {
        let start = id as usize * self.n_words;
        assert!(
            start + self.n_words <= self.words.len(),
            "no buffer for node {}",
            id
        );
        start..start + self.n_words
    }

    pub fn buffer(&self, id: NodeId) -> &[u64] {
        &self.words[self.range(id)]
    }

    pub fn buffer_mut(&mut self, id: NodeId) -> &mut [u64] {
        let range = self.range(id);
        &mut self.words[range]
    }

    /// Overwrites every word of the node's buffer with an independently
    /// drawn pseudorandom value.
    ///
    /// Repeatability is the caller's choice of `rng`: pass a seeded
    /// [`StdRng`][rand::rngs::StdRng] for reproducible pattern streams.
    pub fn randomize(&mut self, id: NodeId, rng: &mut impl Rng) {
        for word in self.buffer_mut(id) {
            *word = rng.random();
        }
    }
}
