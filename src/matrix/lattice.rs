//! Header lattice: node arena plus per-row and per-column chain anchors
//!
//! Every stored entry lives in exactly one arena slot and is reachable from two
//! chains at once:
//! - its row chain, ordered by ascending column (`next_in_row`)
//! - its column chain, ordered by ascending row (`next_in_column`)
//!
//! Chains only hold [`NodeId`] handles. The arena owns the nodes, so a node is
//! released once no matter how many chains referenced it, and dropping the
//! lattice drops every node exactly once.
//!
//! Insertion and removal resolve the row position and the column position with two
//! independent scans, then splice the same handle into (or out of) both chains inside
//! a single `&mut self` call. No half-linked state is observable from outside.

use tracing::trace;

use super::node::{EntryNode, NodeId, Slot};

/// Position inside a chain: the node before the target position (if any) and the node at it.
///
/// `prev == None` means the position is right after the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cursor {
    prev: Option<NodeId>,
    current: Option<NodeId>,
}

/// Fixed skeleton of row and column headers together with the node arena
#[derive(Debug)]
pub struct HeaderLattice<T> {
    rows: usize,
    columns: usize,

    /// First node of each row chain (size: rows)
    row_heads: Vec<Option<NodeId>>,

    /// First node of each column chain (size: columns)
    col_heads: Vec<Option<NodeId>>,

    /// Node storage, indexed by `NodeId`
    slots: Vec<Slot<T>>,

    /// Head of the free list threaded through vacant slots
    free_head: Option<NodeId>,

    /// Number of occupied slots
    live: usize,
}

impl<T: Copy> HeaderLattice<T> {
    /// Builds an empty lattice with one header per row and one per column.
    ///
    /// The header sequences are never resized afterwards.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            row_heads: vec![None; rows],
            col_heads: vec![None; columns],
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Declared (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of live entry nodes
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Number of arena slots ever allocated (live plus recycled)
    #[cfg(test)]
    pub fn allocated(&self) -> usize {
        self.slots.len()
    }

    /// Resolves a handle to its node.
    ///
    /// # Panics
    ///
    /// Panics if the handle points to a released slot.
    pub fn node(&self, id: NodeId) -> &EntryNode<T> {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("stale node handle {:?}", id),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut EntryNode<T> {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("stale node handle {:?}", id),
        }
    }

    /// Finds the node stored at (row, column) by walking the row chain.
    pub fn find(&self, row: usize, column: usize) -> Option<NodeId> {
        let cursor = self.row_cursor(row, column);
        cursor
            .current
            .filter(|&id| self.node(id).column == column)
    }

    /// Mutable access to the value of an existing node
    pub fn value_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }

    /// Scans row `row` for the first node whose column is `>= column`.
    fn row_cursor(&self, row: usize, column: usize) -> Cursor {
        let mut prev = None;
        let mut current = self.row_heads[row];

        while let Some(id) = current {
            let node = self.node(id);
            if node.column >= column {
                break;
            }
            prev = current;
            current = node.next_in_row;
        }

        Cursor { prev, current }
    }

    /// Scans column `column` for the first node whose row is `>= row`.
    fn column_cursor(&self, row: usize, column: usize) -> Cursor {
        let mut prev = None;
        let mut current = self.col_heads[column];

        while let Some(id) = current {
            let node = self.node(id);
            if node.row >= row {
                break;
            }
            prev = current;
            current = node.next_in_column;
        }

        Cursor { prev, current }
    }

    fn link_after_in_row(&mut self, row: usize, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(p) => self.node_mut(p).next_in_row = next,
            None => self.row_heads[row] = next,
        }
    }

    fn link_after_in_column(&mut self, column: usize, prev: Option<NodeId>, next: Option<NodeId>) {
        match prev {
            Some(p) => self.node_mut(p).next_in_column = next,
            None => self.col_heads[column] = next,
        }
    }

    fn allocate(&mut self, node: EntryNode<T>) -> NodeId {
        self.live += 1;

        if let Some(id) = self.free_head {
            if let Slot::Vacant { next_free } = self.slots[id.index()] {
                self.free_head = next_free;
            }
            self.slots[id.index()] = Slot::Occupied(node);
            return id;
        }

        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        id
    }

    fn release(&mut self, id: NodeId) -> T {
        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(id);
        self.live -= 1;

        match slot {
            Slot::Occupied(node) => node.value,
            Slot::Vacant { .. } => panic!("double release of node handle {:?}", id),
        }
    }

    /// Creates a node at (row, column) and splices it into both chains.
    ///
    /// The position must currently be empty. Returns the handle shared by both chains.
    pub fn insert(&mut self, row: usize, column: usize, value: T) -> NodeId {
        let in_row = self.row_cursor(row, column);
        let in_column = self.column_cursor(row, column);

        debug_assert!(
            in_row
                .current
                .map_or(true, |id| self.node(id).column != column),
            "position ({}, {}) is already occupied",
            row,
            column
        );

        let mut node = EntryNode::new(row, column, value);
        node.next_in_row = in_row.current;
        node.next_in_column = in_column.current;

        let id = self.allocate(node);
        self.link_after_in_row(row, in_row.prev, Some(id));
        self.link_after_in_column(column, in_column.prev, Some(id));

        trace!(row, column, node = id.index(), "linked entry node");
        id
    }

    /// Unlinks the node at (row, column) from both chains and releases it.
    ///
    /// Returns the removed value, or `None` if the position was empty.
    pub fn remove(&mut self, row: usize, column: usize) -> Option<T> {
        let in_row = self.row_cursor(row, column);
        let id = in_row
            .current
            .filter(|&id| self.node(id).column == column)?;

        let in_column = self.column_cursor(row, column);
        debug_assert_eq!(
            in_column.current,
            Some(id),
            "row and column chains disagree at ({}, {})",
            row,
            column
        );

        let (next_in_row, next_in_column) = {
            let node = self.node(id);
            (node.next_in_row, node.next_in_column)
        };
        self.link_after_in_row(row, in_row.prev, next_in_row);
        self.link_after_in_column(column, in_column.prev, next_in_column);

        trace!(row, column, node = id.index(), "unlinked entry node");
        Some(self.release(id))
    }

    /// Iterates row `row` in ascending column order
    pub fn row_chain(&self, row: usize) -> RowChain<'_, T> {
        RowChain {
            lattice: self,
            cursor: self.row_heads[row],
        }
    }

    /// Iterates column `column` in ascending row order
    pub fn column_chain(&self, column: usize) -> ColumnChain<'_, T> {
        ColumnChain {
            lattice: self,
            cursor: self.col_heads[column],
        }
    }

    /// Walks every chain and panics on any broken structural invariant.
    ///
    /// Checks ordering and coordinates inside each chain, that both dimensions
    /// reach the same set of handles, and that the live count matches.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self)
    where
        T: num_traits::Zero,
    {
        let mut via_rows = Vec::new();
        for r in 0..self.rows {
            let mut last_column = None;
            let mut cursor = self.row_heads[r];
            while let Some(id) = cursor {
                let node = self.node(id);
                assert_eq!(node.row, r, "node {:?} sits in the wrong row chain", id);
                assert!(node.column < self.columns);
                assert!(last_column.map_or(true, |c| c < node.column), "row {} out of order", r);
                assert!(!node.value.is_zero(), "zero stored at ({}, {})", node.row, node.column);
                last_column = Some(node.column);
                via_rows.push(id);
                cursor = node.next_in_row;
            }
        }

        let mut via_columns = Vec::new();
        for c in 0..self.columns {
            let mut last_row = None;
            let mut cursor = self.col_heads[c];
            while let Some(id) = cursor {
                let node = self.node(id);
                assert_eq!(node.column, c, "node {:?} sits in the wrong column chain", id);
                assert!(node.row < self.rows);
                assert!(last_row.map_or(true, |r| r < node.row), "column {} out of order", c);
                last_row = Some(node.row);
                via_columns.push(id);
                cursor = node.next_in_column;
            }
        }

        via_rows.sort();
        via_columns.sort();
        assert_eq!(via_rows, via_columns, "row and column chains reach different nodes");
        assert_eq!(via_rows.len(), self.live);
    }
}

/// Iterator over one row chain
pub struct RowChain<'a, T> {
    lattice: &'a HeaderLattice<T>,
    cursor: Option<NodeId>,
}

impl<'a, T: Copy> Iterator for RowChain<'a, T> {
    type Item = &'a EntryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.lattice.node(self.cursor?);
        self.cursor = node.next_in_row;
        Some(node)
    }
}

/// Iterator over one column chain
pub struct ColumnChain<'a, T> {
    lattice: &'a HeaderLattice<T>,
    cursor: Option<NodeId>,
}

impl<'a, T: Copy> Iterator for ColumnChain<'a, T> {
    type Item = &'a EntryNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.lattice.node(self.cursor?);
        self.cursor = node.next_in_column;
        Some(node)
    }
}
