//! Indexed binary min-heap used as the A* open set.
//!
//! Entries are flat cell indices keyed by `(f, h, insertion order)`. A
//! position table maps each cell index to its slot in the heap, giving O(1)
//! membership tests and O(log n) insert, re-key and extract-min.

const ABSENT: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct Entry {
    idx: usize,
    f: f64,
    h: f64,
    seq: u64,
}

impl Entry {
    /// Lower `f` first, then lower `h`, then earlier insertion.
    #[inline]
    fn precedes(&self, other: &Self) -> bool {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
            .is_lt()
    }
}

#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: Vec<Entry>,
    pos: Vec<usize>,
    next_seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Empty the heap and make room for cell indices below `len`.
    pub(crate) fn reset(&mut self, len: usize) {
        for e in self.heap.drain(..) {
            self.pos[e.idx] = ABSENT;
        }
        if self.pos.len() < len {
            self.pos.resize(len, ABSENT);
        }
        self.next_seq = 0;
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.pos.get(idx).is_some_and(|&p| p != ABSENT)
    }

    /// Insert `idx`, or re-key it if it is already queued. A re-keyed entry
    /// keeps its original insertion order.
    pub(crate) fn push_or_update(&mut self, idx: usize, f: f64, h: f64) {
        if self.pos.len() <= idx {
            self.pos.resize(idx + 1, ABSENT);
        }
        let slot = self.pos[idx];
        if slot == ABSENT {
            let seq = self.next_seq;
            self.next_seq += 1;
            self.heap.push(Entry { idx, f, h, seq });
            let last = self.heap.len() - 1;
            self.pos[idx] = last;
            self.sift_up(last);
            return;
        }
        let old = self.heap[slot];
        let new = Entry { f, h, ..old };
        self.heap[slot] = new;
        if new.precedes(&old) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    /// Remove and return the cell index with the smallest key.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }
        let top = self.heap.swap_remove(0);
        self.pos[top.idx] = ABSENT;
        if !self.heap.is_empty() {
            self.pos[self.heap[0].idx] = 0;
            self.sift_down(0);
        }
        Some(top.idx)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a].idx] = a;
        self.pos[self.heap[b].idx] = b;
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.heap[i].precedes(&self.heap[parent]) {
                break;
            }
            self.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut best = i;
            if left < n && self.heap[left].precedes(&self.heap[best]) {
                best = left;
            }
            if right < n && self.heap[right].precedes(&self.heap[best]) {
                best = right;
            }
            if best == i {
                break;
            }
            self.swap(i, best);
            i = best;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(fr: &mut Frontier) -> Vec<usize> {
        std::iter::from_fn(|| fr.pop()).collect()
    }

    #[test]
    fn pops_by_f() {
        let mut fr = Frontier::new();
        fr.reset(10);
        fr.push_or_update(3, 5.0, 1.0);
        fr.push_or_update(7, 2.0, 1.0);
        fr.push_or_update(1, 9.0, 0.0);
        fr.push_or_update(4, 3.5, 2.0);
        assert_eq!(fr.len(), 4);
        assert_eq!(drain(&mut fr), vec![7, 4, 3, 1]);
        assert_eq!(fr.len(), 0);
    }

    #[test]
    fn ties_broken_by_h_then_insertion() {
        let mut fr = Frontier::new();
        fr.reset(10);
        fr.push_or_update(0, 4.0, 2.0);
        fr.push_or_update(1, 4.0, 1.0);
        fr.push_or_update(2, 4.0, 2.0);
        fr.push_or_update(3, 4.0, 1.0);
        assert_eq!(drain(&mut fr), vec![1, 3, 0, 2]);
    }

    #[test]
    fn membership_tracks_push_and_pop() {
        let mut fr = Frontier::new();
        fr.reset(4);
        assert!(!fr.contains(2));
        fr.push_or_update(2, 1.0, 0.0);
        assert!(fr.contains(2));
        assert!(!fr.contains(100));
        assert_eq!(fr.pop(), Some(2));
        assert!(!fr.contains(2));
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn update_decreases_and_increases_key() {
        let mut fr = Frontier::new();
        fr.reset(8);
        for i in 0..6 {
            fr.push_or_update(i, 10.0 + i as f64, 0.0);
        }
        fr.push_or_update(5, 1.0, 0.0);
        fr.push_or_update(0, 20.0, 0.0);
        assert_eq!(fr.len(), 6);
        assert_eq!(drain(&mut fr), vec![5, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn rekeyed_entry_keeps_insertion_order() {
        let mut fr = Frontier::new();
        fr.reset(4);
        fr.push_or_update(0, 5.0, 1.0);
        fr.push_or_update(1, 3.0, 1.0);
        fr.push_or_update(0, 3.0, 1.0);
        assert_eq!(drain(&mut fr), vec![0, 1]);
    }

    #[test]
    fn reset_clears_membership() {
        let mut fr = Frontier::new();
        fr.reset(4);
        fr.push_or_update(0, 1.0, 0.0);
        fr.push_or_update(3, 2.0, 0.0);
        fr.reset(16);
        assert_eq!(fr.len(), 0);
        assert!(!fr.contains(0));
        assert!(!fr.contains(3));
        fr.push_or_update(15, 0.5, 0.0);
        assert_eq!(fr.pop(), Some(15));
    }

    #[test]
    fn many_entries_come_out_sorted() {
        let mut fr = Frontier::new();
        fr.reset(64);
        for i in 0..64usize {
            let key = ((i * 37) % 64) as f64;
            fr.push_or_update(i, key, 0.0);
        }
        let mut last = -1.0;
        let mut n = 0;
        while let Some(i) = fr.pop() {
            let key = ((i * 37) % 64) as f64;
            assert!(key >= last);
            last = key;
            n += 1;
        }
        assert_eq!(n, 64);
    }
}
