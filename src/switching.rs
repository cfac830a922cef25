//! Per-node switching probabilities and the identifier offset convention.

use crate::lit::NodeId;

/// Mapping between live object identifiers and the zero-based indices used
/// on disk.
///
/// The `.switch` format stores `id - 1` for every object: the constant node
/// (id 0) never appears in a file, so persisted indices start at 0 for the
/// first combinational input. Keeping the mapping in one place keeps the
/// writer and the loader symmetric.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct IdOffset {
    max_id: u32,
}

impl IdOffset {
    pub fn new(max_id: u32) -> Self {
        Self { max_id }
    }

    /// Persisted index of a live object.
    ///
    /// # Panics
    ///
    /// Panics for the constant node and for ids outside the network.
    pub fn to_persisted(&self, id: NodeId) -> u32 {
        assert!(
            id > 0 && id < self.max_id,
            "node {} has no persisted index",
            id
        );
        id - 1
    }

    /// Live id for a persisted index, or `None` if the index does not name
    /// a live object. This is the bounds check that keeps file-supplied
    /// identifiers from indexing out of range.
    pub fn from_persisted(&self, index: u32) -> Option<NodeId> {
        let id = index.checked_add(1)?;
        (id < self.max_id).then_some(id)
    }

    /// Number of persisted indices (every live object except the constant).
    pub fn len(&self) -> usize {
        self.max_id.saturating_sub(1) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense mapping from persisted identifier to switching probability.
///
/// Entries for objects a run never touched stay 0.0 ("undefined/unused").
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchingVector {
    offset: IdOffset,
    values: Vec<f32>,
}

impl SwitchingVector {
    /// Zero-initialized vector for a network with `max_id` live objects.
    pub fn zeroed(max_id: u32) -> Self {
        let offset = IdOffset::new(max_id);
        Self {
            values: vec![0.0; offset.len()],
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn offset(&self) -> IdOffset {
        self.offset
    }

    /// Value at a persisted identifier.
    pub fn get(&self, persisted: u32) -> f32 {
        self.values[persisted as usize]
    }

    pub fn set(&mut self, persisted: u32, value: f32) {
        self.values[persisted as usize] = value;
    }

    /// Value of a live node.
    pub fn of_node(&self, id: NodeId) -> f32 {
        self.get(self.offset.to_persisted(id))
    }

    pub fn set_node(&mut self, id: NodeId, value: f32) {
        let index = self.offset.to_persisted(id);
        self.set(index, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_round_trip() {
        let offset = IdOffset::new(5);
        assert_eq!(offset.len(), 4);
        for id in 1..5 {
            assert_eq!(offset.from_persisted(offset.to_persisted(id)), Some(id));
        }
    }

    #[test]
    fn test_offset_rejects_out_of_range() {
        let offset = IdOffset::new(5);
        assert_eq!(offset.from_persisted(4), None);
        assert_eq!(offset.from_persisted(u32::MAX), None);
    }

    #[test]
    #[should_panic(expected = "no persisted index")]
    fn test_offset_rejects_const() {
        IdOffset::new(5).to_persisted(0);
    }

    #[test]
    fn test_vector_views_agree() {
        let mut v = SwitchingVector::zeroed(4);
        assert_eq!(v.len(), 3);
        v.set_node(3, 0.75);
        assert_eq!(v.get(2), 0.75);
        assert_eq!(v.of_node(3), 0.75);
        assert_eq!(v.of_node(1), 0.0);
    }
}
