use crate::error::PathError;

/// A binary min-heap that maps payloads to integer priorities ("costs").
///
/// Duplicate payloads and duplicate costs are both allowed. There is no
/// decrease-key: to lower the cost of a payload, push it again with the new
/// cost and ignore the stale entry when it is eventually popped. Ties are
/// popped in no particular order.
///
/// Storage starts at the requested capacity and doubles whenever it is full.
///
/// # Example
/// ```rust
/// use teleport_pathfinding::MinHeap;
///
/// let mut heap = MinHeap::new();
/// heap.push("far", 10).unwrap();
/// heap.push("near", 2).unwrap();
///
/// assert_eq!(Some(("near", 2)), heap.pop());
/// assert_eq!(Some(("far", 10)), heap.pop());
/// assert_eq!(None, heap.pop());
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<T, C = i32> {
    entries: Vec<Entry<T, C>>,
}

/// A single slot in the heap's backing array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<T, C> {
    item: T,
    cost: C,
}

impl<T, C> Default for MinHeap<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> MinHeap<T, C> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a heap that can hold `capacity` entries before it has to grow.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Iterate over all entries in storage order (not priority order).
    pub fn iter(&self) -> impl Iterator<Item = (&T, &C)> {
        self.entries.iter().map(|e| (&e.item, &e.cost))
    }

    #[inline]
    fn parent(i: usize) -> Option<usize> {
        (i > 0).then(|| (i - 1) / 2)
    }

    #[inline]
    fn left(&self, i: usize) -> Option<usize> {
        let l = 2 * i + 1;
        (l < self.entries.len()).then(|| l)
    }

    #[inline]
    fn right(&self, i: usize) -> Option<usize> {
        let r = 2 * i + 2;
        (r < self.entries.len()).then(|| r)
    }

    /// Double the backing storage.
    fn grow(&mut self) -> Result<(), PathError> {
        let additional = self.entries.capacity().max(1);
        let requested = self.entries.capacity().saturating_add(additional);
        self.entries.try_reserve_exact(additional).map_err(|_| {
            log::warn!("min heap failed to grow to {} entries", requested);
            PathError::OutOfMemory { requested }
        })
    }
}

impl<T, C: Ord> MinHeap<T, C> {
    /// Insert `item` with the given cost.
    ///
    /// Fails only if the heap is full and the backing storage could not be
    /// doubled.
    pub fn push(&mut self, item: T, cost: C) -> Result<(), PathError> {
        if self.entries.len() == self.entries.capacity() {
            self.grow()?;
        }
        self.entries.push(Entry { item, cost });
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Remove and return the entry with the lowest cost, or `None` if the
    /// heap is empty.
    pub fn pop(&mut self) -> Option<(T, C)> {
        let last = self.entries.pop()?;
        if self.entries.is_empty() {
            return Some((last.item, last.cost));
        }
        let min = std::mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        Some((min.item, min.cost))
    }

    /// The entry that the next [MinHeap::pop] would return.
    pub fn peek(&self) -> Option<(&T, &C)> {
        self.entries.first().map(|e| (&e.item, &e.cost))
    }

    /// Whether every entry's cost is less than or equal to the costs of its
    /// children.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.entries.len()).all(|i| match Self::parent(i) {
            Some(p) => self.entries[p].cost <= self.entries[i].cost,
            None => true,
        })
    }

    fn sift_up(&mut self, mut i: usize) {
        while let Some(parent) = Self::parent(i) {
            if self.entries[parent].cost <= self.entries[i].cost {
                break;
            }
            self.entries.swap(parent, i);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        loop {
            // Right child wins ties with the left.
            let child = match (self.left(i), self.right(i)) {
                (None, None) => break,
                (Some(l), Some(r)) => {
                    if self.entries[r].cost <= self.entries[l].cost {
                        r
                    } else {
                        l
                    }
                }
                (Some(c), None) | (None, Some(c)) => c,
            };

            if self.entries[child].cost >= self.entries[i].cost {
                break;
            }
            self.entries.swap(child, i);
            i = child;
        }
    }
}
