//! Word-parallel random simulation and the switching metric.
//!
//! The simulation path: randomize every combinational input's buffer,
//! propagate through the internal nodes in dependency order, reduce each
//! buffer to a probability with [`switching_of`].
//!
//! # Examples
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use swact_rs::network::Aig;
//! use swact_rs::simulate::compute_switching_with_rng;
//!
//! let mut aig = Aig::new();
//! let a = aig.add_input();
//! let b = aig.add_input();
//! let f = aig.add_and(a, !b);
//! aig.add_output(f);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let switching = compute_switching_with_rng(&aig, 256, &mut rng);
//! let s = switching.of_node(f.node());
//! assert!((0.0..=1.0).contains(&s));
//! ```

use log::debug;
use rand::Rng;

use crate::lit::NodeId;
use crate::network::Aig;
use crate::siminfo::{words_for, SimInfo, BITS_PER_WORD};
use crate::switching::SwitchingVector;

/// Switching probability of one simulated bit-history.
///
/// With `p` the empirical fraction of 1-bits, the estimate is `2p(1-p)`:
/// the probability that two independent adjacent samples differ. Constant
/// buffers (all zeros or all ones) yield exactly 0.0.
pub fn switching_of(words: &[u64]) -> f32 {
    assert!(!words.is_empty(), "empty simulation buffer");

    let n_total = (BITS_PER_WORD * words.len()) as f64;
    let n_ones: u64 = words.iter().map(|w| w.count_ones() as u64).sum();
    let p = n_ones as f64 / n_total;
    (2.0 * p * (1.0 - p)) as f32
}

/// Fills one And node's buffer from its fanins' buffers.
///
/// Word-wise `(a ^ ma) & (b ^ mb)`, where each mask is all-ones iff the
/// corresponding fanin edge is complemented. Both fanin buffers must
/// already be populated; the traversal order guarantees this.
pub fn simulate_node(aig: &Aig, info: &mut SimInfo, id: NodeId) {
    let (a, b) = match aig.fanins(id) {
        Some(fanins) => fanins,
        None => panic!("node {} is not an And gate", id),
    };
    let mask_a = if a.is_complement() { u64::MAX } else { 0 };
    let mask_b = if b.is_complement() { u64::MAX } else { 0 };

    for w in 0..info.n_words() {
        let wa = info.buffer(a.node())[w] ^ mask_a;
        let wb = info.buffer(b.node())[w] ^ mask_b;
        info.buffer_mut(id)[w] = wa & wb;
    }
}

/// Visits every internal node once, fanins first, and fills its buffer.
///
/// The driver only sequences; all bit arithmetic happens in
/// [`simulate_node`]. Combinational-input buffers must be populated before
/// the call.
pub fn propagate(aig: &Aig, info: &mut SimInfo) {
    for id in aig.dfs_order() {
        simulate_node(aig, info, id);
    }
}

/// Estimates the switching activity of every node by random simulation.
///
/// Convenience wrapper over [`compute_switching_with_rng`] using the
/// process-wide generator; runs are not repeatable.
///
/// # Panics
///
/// Panics if `n_patterns == 0`.
pub fn compute_switching(aig: &Aig, n_patterns: usize) -> SwitchingVector {
    compute_switching_with_rng(aig, n_patterns, &mut rand::rng())
}

/// Estimates the switching activity of every node by random simulation,
/// drawing input patterns from `rng`.
///
/// The simulation store lives only for the duration of this call.
///
/// # Panics
///
/// Panics if `n_patterns == 0`.
pub fn compute_switching_with_rng(
    aig: &Aig,
    n_patterns: usize,
    rng: &mut impl Rng,
) -> SwitchingVector {
    let n_words = words_for(n_patterns);
    let mut info = SimInfo::alloc(aig.max_id(), n_words);
    let mut switching = SwitchingVector::zeroed(aig.max_id());

    for &ci in aig.cis() {
        info.randomize(ci, rng);
        switching.set_node(ci, switching_of(info.buffer(ci)));
    }

    let order = aig.dfs_order();
    debug!(
        "simulating {} nodes with {} patterns ({} words)",
        order.len(),
        n_patterns,
        n_words
    );
    for id in order {
        simulate_node(aig, &mut info, id);
        switching.set_node(id, switching_of(info.buffer(id)));
    }

    switching
}
