//! The [`OpenList`] — an indexed binary min-heap over node records.
//!
//! The heap stores coordinates and reads each element's priority from the
//! store's live `f` value at comparison time, so a decrease-key is: write
//! the new `f`, then sift the element up from its tracked position. A flat
//! position map keyed by cell keeps every operation O(log n); the
//! unindexed alternative (linear scan to locate the element, as with
//! `std::collections::BinaryHeap`) preserves correctness but degrades
//! decrease-key to O(n).
//!
//! Ties between equal `f` values are broken arbitrarily by heap mechanics;
//! callers must not depend on tie order.

use gridpath_core::Coord;

use crate::cost::Cost;
use crate::node::NodeStore;

const ABSENT: usize = usize::MAX;

/// Min-heap of open cells, keyed by the store's current `f` values.
#[derive(Debug, Clone)]
pub struct OpenList {
    heap: Vec<Coord>,
    /// Cell index → heap slot, [`ABSENT`] when not queued.
    pos: Vec<usize>,
    width: i32,
    height: i32,
}

impl OpenList {
    /// Create an empty open list for a W×H grid.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            heap: Vec::new(),
            pos: vec![ABSENT; (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    /// Whether the list holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether `c` currently has a live entry.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.pos[self.slot(c)] != ABSENT
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        for c in self.heap.drain(..) {
            let s = (c.y as usize) * (self.width as usize) + c.x as usize;
            self.pos[s] = ABSENT;
        }
    }

    /// Queue `c`, sifting it up to its priority position.
    ///
    /// # Panics
    ///
    /// Panics if `c` is already queued or outside the grid.
    pub fn insert<C: Cost>(&mut self, store: &NodeStore<C>, c: Coord) {
        let s = self.slot(c);
        assert!(self.pos[s] == ABSENT, "cell {c} is already in the open list");
        self.heap.push(c);
        self.pos[s] = self.heap.len() - 1;
        self.sift_up(store, self.heap.len() - 1);
    }

    /// Remove and return the cell with the minimum `f`.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn remove_front<C: Cost>(&mut self, store: &NodeStore<C>) -> Coord {
        assert!(!self.heap.is_empty(), "remove_front on an empty open list");
        let front = self.heap[0];
        let last = self.heap.len() - 1;
        self.swap(0, last);
        self.heap.pop();
        let front_slot = self.slot(front);
        self.pos[front_slot] = ABSENT;
        if !self.heap.is_empty() {
            self.sift_down(store, 0);
        }
        front
    }

    /// Lower the priority key of a queued cell to `new_f` and restore heap
    /// order from its current position.
    ///
    /// "Increase priority" in cost-improvement terms: the new key must not
    /// exceed the stored one, so the element can only move toward the
    /// front.
    ///
    /// # Panics
    ///
    /// Panics if `c` is not queued or `new_f` is greater than the stored
    /// `f`.
    pub fn increase_priority<C: Cost>(&mut self, store: &mut NodeStore<C>, c: Coord, new_f: C) {
        let i = self.pos[self.slot(c)];
        assert!(i != ABSENT, "cell {c} is not in the open list");
        let node = store.node_mut(c);
        assert!(
            new_f <= node.f,
            "priority increase from {:?} to {:?} on {c} would raise the key",
            node.f,
            new_f
        );
        node.f = new_f;
        self.sift_up(store, i);
    }

    #[inline]
    fn slot(&self, c: Coord) -> usize {
        if c.x < 0 || c.x >= self.width || c.y < 0 || c.y >= self.height {
            panic!("coordinate {c} outside {}x{} open list", self.width, self.height);
        }
        (c.y as usize) * (self.width as usize) + c.x as usize
    }

    /// Swap two heap slots, keeping the position map in lockstep.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        let ca = self.heap[a];
        let cb = self.heap[b];
        let ca_slot = self.slot(ca);
        let cb_slot = self.slot(cb);
        self.pos[ca_slot] = a;
        self.pos[cb_slot] = b;
    }

    #[inline]
    fn less<C: Cost>(&self, store: &NodeStore<C>, a: usize, b: usize) -> bool {
        store.node(self.heap[a]).f < store.node(self.heap[b]).f
    }

    fn sift_up<C: Cost>(&mut self, store: &NodeStore<C>, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(store, i, parent) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down<C: Cost>(&mut self, store: &NodeStore<C>, mut i: usize) {
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < self.heap.len() && self.less(store, left, smallest) {
                smallest = left;
            }
            if right < self.heap.len() && self.less(store, right, smallest) {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.swap(i, smallest);
            i = smallest;
        }
    }
}
