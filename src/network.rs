//! Combinational And-Inverter Graph.
//!
//! The network is a single dense object table: id 0 is the constant-zero
//! node, combinational inputs and And gates follow in creation order.
//! Inverters are implicit, occupying one bit in [`Lit`].
//!
//! # Examples
//!
//! ```
//! use swact_rs::network::Aig;
//!
//! let mut aig = Aig::new();
//! let a = aig.add_input();
//! let b = aig.add_input();
//! let f = aig.add_and(a, !b);
//! aig.add_output(f);
//!
//! assert_eq!(aig.ci_count(), 2);
//! assert_eq!(aig.dfs_order(), vec![f.node()]);
//! ```

use log::debug;

use crate::lit::{Lit, NodeId};

/// One object of the network.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Object {
    /// Constant zero, always at id 0.
    Const,
    /// Combinational input.
    Input,
    /// Two-input And gate with complementable fanin edges.
    And(Lit, Lit),
}

/// A combinational AIG with dense node identifiers.
#[derive(Debug, Clone)]
pub struct Aig {
    objects: Vec<Object>,
    cis: Vec<NodeId>,
    outputs: Vec<Lit>,
}

impl Aig {
    pub fn new() -> Self {
        Self {
            objects: vec![Object::Const],
            cis: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Exclusive upper bound on live object identifiers.
    pub fn max_id(&self) -> u32 {
        self.objects.len() as u32
    }

    pub fn ci_count(&self) -> usize {
        self.cis.len()
    }

    /// Combinational inputs in their stable enumeration order.
    pub fn cis(&self) -> &[NodeId] {
        &self.cis
    }

    pub fn outputs(&self) -> &[Lit] {
        &self.outputs
    }

    pub fn object(&self, id: NodeId) -> Object {
        self.objects[id as usize]
    }

    /// Fanin edges of an And node, `None` for inputs and the constant.
    pub fn fanins(&self, id: NodeId) -> Option<(Lit, Lit)> {
        match self.objects[id as usize] {
            Object::And(a, b) => Some((a, b)),
            _ => None,
        }
    }

    pub fn add_input(&mut self) -> Lit {
        let id = self.objects.len() as NodeId;
        self.objects.push(Object::Input);
        self.cis.push(id);
        Lit::positive(id)
    }

    pub fn add_and(&mut self, a: Lit, b: Lit) -> Lit {
        assert!(a.node() < self.max_id(), "fanin {} does not exist", a);
        assert!(b.node() < self.max_id(), "fanin {} does not exist", b);

        let id = self.objects.len() as NodeId;
        self.objects.push(Object::And(a, b));
        Lit::positive(id)
    }

    pub fn add_output(&mut self, lit: Lit) {
        assert!(lit.node() < self.max_id(), "output {} does not exist", lit);

        self.outputs.push(lit);
    }

    /// Internal And nodes reachable from the outputs, each node strictly
    /// after both of its fanins (post-order DFS over the dependency DAG).
    ///
    /// Deterministic for a given network. The simulator, the template writer,
    /// and the loader all rely on this being the same order.
    pub fn dfs_order(&self) -> Vec<NodeId> {
        let mut visited = vec![false; self.objects.len()];
        let mut order = Vec::new();
        for &out in self.outputs.iter() {
            self.dfs_rec(out.node(), &mut visited, &mut order);
        }
        debug!("dfs_order: {} of {} objects", order.len(), self.objects.len());
        order
    }

    fn dfs_rec(&self, id: NodeId, visited: &mut [bool], order: &mut Vec<NodeId>) {
        if visited[id as usize] {
            return;
        }
        visited[id as usize] = true;
        if let Object::And(a, b) = self.objects[id as usize] {
            self.dfs_rec(a.node(), visited, order);
            self.dfs_rec(b.node(), visited, order);
            order.push(id);
        }
    }
}

impl Default for Aig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_ids_are_dense() {
        let mut aig = Aig::new();
        let a = aig.add_input();
        let b = aig.add_input();
        let f = aig.add_and(a, b);

        assert_eq!(a.node(), 1);
        assert_eq!(b.node(), 2);
        assert_eq!(f.node(), 3);
        assert_eq!(aig.max_id(), 4);
        assert_eq!(aig.cis(), &[1, 2]);
        assert_eq!(aig.object(0), Object::Const);
        assert_eq!(aig.fanins(f.node()), Some((a, b)));
        assert_eq!(aig.fanins(a.node()), None);
    }

    #[test]
    fn test_dfs_respects_fanins() {
        let mut aig = Aig::new();
        let a = aig.add_input();
        let b = aig.add_input();
        let c = aig.add_input();
        let g = aig.add_and(a, !b);
        let h = aig.add_and(g, c);
        aig.add_output(!h);

        let order = aig.dfs_order();
        assert_eq!(order, vec![g.node(), h.node()]);

        let pos = |id: NodeId| order.iter().position(|&x| x == id);
        for &id in order.iter() {
            let (x, y) = aig.fanins(id).unwrap();
            for fanin in [x.node(), y.node()] {
                if let Some(p) = pos(fanin) {
                    assert!(p < pos(id).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_dfs_skips_unreachable() {
        let mut aig = Aig::new();
        let a = aig.add_input();
        let b = aig.add_input();
        let f = aig.add_and(a, b);
        let _dead = aig.add_and(!a, b);
        aig.add_output(f);

        assert_eq!(aig.dfs_order(), vec![f.node()]);
    }

    #[test]
    fn test_dfs_visits_shared_fanin_once() {
        let mut aig = Aig::new();
        let a = aig.add_input();
        let b = aig.add_input();
        let g = aig.add_and(a, b);
        let h = aig.add_and(g, !a);
        aig.add_output(g);
        aig.add_output(h);

        assert_eq!(aig.dfs_order(), vec![g.node(), h.node()]);
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_and_with_missing_fanin() {
        let mut aig = Aig::new();
        let a = aig.add_input();
        aig.add_and(a, Lit::positive(42));
    }
}
