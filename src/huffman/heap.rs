use core::cmp::Ordering;
use core::fmt;

/// Binary min-heap ordered by a caller-supplied comparator.
///
/// The element for which `cmp` reports [`Ordering::Less`] against every other element is the
/// one [`extract_min`](MinHeap::extract_min) returns. Elements the comparator considers equal
/// come out in no particular order, so callers that need determinism must give the
/// comparator a secondary key.
pub struct MinHeap<T, F> {
    elements: Vec<T>,
    cmp: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    pub fn new(cmp: F) -> Self {
        Self { elements: vec![], cmp }
    }

    /// Builds a heap from `source` in linear time.
    pub fn build(source: Vec<T>, cmp: F) -> Self {
        let mut heap = Self { elements: source, cmp };
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        self.sift_down(0);
        min
    }

    fn less(&self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.elements[i], &self.elements[j]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                return;
            }

            self.elements.swap(i, smallest);
            i = smallest;
        }
    }

    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.len()).all(|i| !self.less(i, (i - 1) / 2))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for MinHeap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap").field("elements", &self.elements).finish_non_exhaustive()
    }
}
