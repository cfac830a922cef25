//! # swact-rs: Switching Activity for And-Inverter Graphs
//!
//! **`swact-rs`** estimates the *switching activity* of every node in a combinational
//! [AIG](https://en.wikipedia.org/wiki/And-inverter_graph): the probability that the node's
//! output toggles under random input stimulation. Per-node switching probabilities feed
//! power-aware optimization and technology mapping.
//!
//! ## How it works
//!
//! The engine simulates the network with bit-packed random patterns: every node owns a buffer
//! of `u64` words, combinational inputs are filled with pseudorandom bits, and internal nodes
//! are evaluated word-wise (AND with per-edge complement) in dependency order. Each buffer is
//! then reduced to `2p(1-p)`, where `p` is the empirical fraction of 1-bits --- the probability
//! that two adjacent random samples differ. This is a Monte-Carlo estimate: accuracy grows with
//! the pattern count.
//!
//! Results can be exported as an editable `.switch` template and strictly re-imported, so
//! hand-tuned or externally measured activities can replace the simulated ones.
//!
//! ## Quick Start
//!
//! ```rust
//! use swact_rs::network::Aig;
//! use swact_rs::simulate::compute_switching;
//!
//! // 1. Build a small network: f = a AND (NOT b)
//! let mut aig = Aig::new();
//! let a = aig.add_input();
//! let b = aig.add_input();
//! let f = aig.add_and(a, !b);
//! aig.add_output(f);
//!
//! // 2. Simulate with 256 random patterns
//! let switching = compute_switching(&aig, 256);
//!
//! // 3. Every reachable node has a probability in [0, 1]
//! let s = switching.of_node(f.node());
//! assert!((0.0..=1.0).contains(&s));
//! ```
//!
//! ## Core Components
//!
//! - **[`network`]**: the AIG object model and its dependency-order traversal.
//! - **[`siminfo`]**: bit-parallel simulation buffers and random pattern generation.
//! - **[`simulate`]**: the propagation driver and the switching metric.
//! - **[`switching`]**: the dense result vector and the on-disk identifier offset.
//! - **[`persist`]**: the `.switch` template writer and the strict loader.

pub mod lit;
pub mod network;
pub mod persist;
pub mod siminfo;
pub mod simulate;
pub mod switching;
