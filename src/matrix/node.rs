//! Entry nodes of the orthogonal linked structure

/// Stable handle to an entry node inside a `HeaderLattice` arena.
///
/// Chains hold handles, never owning references; the arena releases each node exactly once.
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Slot index inside the arena
    pub fn index(&self) -> usize {
        self.0
    }
}

/// One non-zero element, linked into its row chain and its column chain at the same time.
#[derive(Clone, Debug, PartialEq)]
pub struct EntryNode<T> {
    pub(crate) row: usize,
    pub(crate) column: usize,
    pub(crate) value: T,
    /// Successor in the same row (strictly greater column)
    pub(crate) next_in_row: Option<NodeId>,
    /// Successor in the same column (strictly greater row)
    pub(crate) next_in_column: Option<NodeId>,
}

impl<T: Copy> EntryNode<T> {
    pub(crate) fn new(row: usize, column: usize, value: T) -> Self {
        Self {
            row,
            column,
            value,
            next_in_row: None,
            next_in_column: None,
        }
    }

    /// Row index, fixed at insertion
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, fixed at insertion
    pub fn column(&self) -> usize {
        self.column
    }

    /// Stored (non-zero) value
    pub fn value(&self) -> T {
        self.value
    }
}

/// Arena slot: either a live node or a link in the free list.
#[derive(Clone, Debug)]
pub(crate) enum Slot<T> {
    Occupied(EntryNode<T>),
    Vacant { next_free: Option<NodeId> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_unlinked() {
        let node = EntryNode::new(2, 5, 7.5);
        assert_eq!(node.row(), 2);
        assert_eq!(node.column(), 5);
        assert_eq!(node.value(), 7.5);
        assert!(node.next_in_row.is_none());
        assert!(node.next_in_column.is_none());
    }

    #[test]
    fn test_node_id_ordering() {
        assert!(NodeId::new(1) < NodeId::new(2));
        assert_eq!(NodeId::new(4).index(), 4);
    }
}
