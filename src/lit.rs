use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

/// Index of an object in the [`Aig`][crate::network::Aig].
///
/// Id 0 is reserved for the constant-zero node.
pub type NodeId = u32;

/// An edge into an AIG object: a node id plus a complement bit.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Lit(u32);

// Constructors
impl Lit {
    pub const fn new(id: NodeId, complement: bool) -> Self {
        Self(id << 1 | complement as u32)
    }

    pub const fn positive(id: NodeId) -> Self {
        Self(id << 1)
    }

    /// Constant false.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Constant true (complemented edge to the constant node).
    pub const fn one() -> Self {
        Self(1)
    }
}

// Getters
impl Lit {
    pub const fn node(&self) -> NodeId {
        self.0 >> 1
    }

    pub const fn is_complement(&self) -> bool {
        self.0 & 1 != 0
    }

    pub const fn is_const(&self) -> bool {
        self.node() == 0
    }
}

impl Not for Lit {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(self.0 ^ 1)
    }
}

impl Not for &Lit {
    type Output = Lit;

    fn not(self) -> Self::Output {
        Lit(self.0 ^ 1)
    }
}

impl Display for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_const() {
            let x = self.0 & 1;
            write!(f, "{}", x)
        } else {
            if self.is_complement() {
                write!(f, "!")?;
            }
            write!(f, "n{}", self.node())
        }
    }
}

impl Debug for Lit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_const() {
        let zero = Lit::zero();
        let one = Lit::one();

        assert!(zero.is_const());
        assert!(one.is_const());

        assert_eq!(zero, !one);
        assert_eq!(one, !zero);

        assert!(!zero.is_complement());
        assert!(one.is_complement());
    }

    #[test]
    fn test_node_and_complement() {
        let a = Lit::positive(7);
        assert_eq!(a.node(), 7);
        assert!(!a.is_complement());
        assert!(!a.is_const());

        let not_a = !a;
        assert_eq!(not_a.node(), 7);
        assert!(not_a.is_complement());
        assert_eq!(!not_a, a);

        assert_eq!(Lit::new(7, true), not_a);
    }

    #[test]
    fn test_display() {
        assert_eq!(Lit::zero().to_string(), "0");
        assert_eq!(Lit::one().to_string(), "1");
        assert_eq!(Lit::positive(3).to_string(), "n3");
        assert_eq!((!Lit::positive(3)).to_string(), "!n3");
    }
}
