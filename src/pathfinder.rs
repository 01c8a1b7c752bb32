use crate::{error::PathError, min_heap::MinHeap, teleporter::Teleporter};

/// Cost of a teleporter that has not been reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Finds the cheapest chain of jumps between two teleporters.
///
/// Every jump departs from a teleporter and costs that teleporter's
/// [Teleporter::energy]. A jump may only land on a teleporter within the
/// search's maximum range, and the accumulated cost of every teleporter on the
/// path must stay strictly below the traveller's energy budget.
///
/// Maintains internal state so it can be re-used to avoid allocations. The
/// state is reset at the start of every search.
#[derive(Debug, Default, Clone)]
pub struct Pathfinder {
    teleporters: Vec<Teleporter>,
    frontier: MinHeap<usize, u32>,
    visited: Vec<bool>,
    costs: Vec<u32>,
    parents: Vec<Option<usize>>,
    path: Vec<usize>,
}

impl Pathfinder {
    /// Create a pathfinder over the given teleporters. A teleporter is
    /// identified by its index in `teleporters`.
    pub fn new(teleporters: impl Into<Vec<Teleporter>>) -> Self {
        let mut pf = Self::default();
        pf.initialize(teleporters);
        pf
    }

    /// Replace the teleporter set and resize all internal containers to
    /// match it.
    pub fn initialize(&mut self, teleporters: impl Into<Vec<Teleporter>>) {
        let teleporters = teleporters.into();
        let len = teleporters.len();

        self.frontier = MinHeap::with_capacity(len);
        self.visited = vec![false; len];
        self.costs = vec![UNREACHABLE; len];
        self.parents = vec![None; len];
        self.path = Vec::with_capacity(len);
        self.teleporters = teleporters;
    }

    /// Find the cheapest path from `start` to `end`.
    ///
    /// `energy` is the traveller's budget: a teleporter is only admitted onto
    /// the path if the cost of reaching it is strictly less than `energy`.
    /// `max_range` is the longest single jump allowed.
    ///
    /// Returns `Ok(None)` if no such path exists, or
    /// [PathError::InvalidIndex] if either index is out of range.
    pub fn find_path(
        &mut self,
        start: usize,
        end: usize,
        energy: u32,
        max_range: u32,
    ) -> Result<Option<&[usize]>, PathError> {
        self.check_index(start)?;
        self.check_index(end)?;
        self.clear();

        log::debug!(
            "searching {} -> {} over {} teleporters (energy {}, range {})",
            start,
            end,
            self.teleporters.len(),
            energy,
            max_range
        );

        self.costs[start] = 0;
        self.frontier.push(start, 0)?;

        let mut found = false;
        while let Some((curr, cost)) = self.frontier.pop() {
            // A teleporter can be queued once per improvement; only the first
            // pop is authoritative.
            if self.visited[curr] {
                log::trace!("skipping stale entry {} at cost {}", curr, cost);
                continue;
            }

            if curr == end {
                found = true;
                break;
            }

            self.visited[curr] = true;

            let new_cost = self.costs[curr].saturating_add(self.teleporters[curr].energy());
            if new_cost >= energy {
                continue;
            }

            for next in range_exits(&self.teleporters, curr, max_range) {
                if self.visited[next] || new_cost >= self.costs[next] {
                    continue;
                }
                log::trace!("relaxing {} -> {} at cost {}", curr, next, new_cost);
                self.costs[next] = new_cost;
                self.parents[next] = Some(curr);
                self.frontier.push(next, new_cost)?;
            }
        }

        if !found {
            log::debug!("no path from {} to {}", start, end);
            return Ok(None);
        }

        let mut curr = end;
        self.path.push(curr);
        while let Some(parent) = self.parents[curr] {
            self.path.push(parent);
            curr = parent;
        }
        self.path.reverse();

        log::debug!(
            "found path from {} to {} with {} jumps at cost {}",
            start,
            end,
            self.path.len() - 1,
            self.costs[end]
        );

        Ok(Some(self.path.as_slice()))
    }

    /// Indices of every other teleporter within `max_range` of `index`.
    ///
    /// A teleporter is never its own exit. Yields nothing for an invalid
    /// index.
    pub fn exits(&self, index: usize, max_range: u32) -> impl Iterator<Item = usize> + '_ {
        range_exits(&self.teleporters, index, max_range)
    }

    /// Clear internal search data. The teleporter set is kept.
    pub fn clear(&mut self) {
        self.path.clear();
        self.frontier.clear();
        self.visited.fill(false);
        self.costs.fill(UNREACHABLE);
        self.parents.fill(None);
    }

    pub fn teleporters(&self) -> &[Teleporter] {
        &self.teleporters
    }

    pub fn len(&self) -> usize {
        self.teleporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teleporters.is_empty()
    }

    /// The `path` from the last successful search. Empty if the last search
    /// failed.
    pub fn path(&self) -> &[usize] {
        self.path.as_slice()
    }

    /// Energy spent to reach the end of the last found path.
    pub fn path_cost(&self) -> Option<u32> {
        self.path.last().map(|&end| self.costs[end])
    }

    /// Best known cost of every teleporter after the last search.
    /// Unreached teleporters hold [UNREACHABLE].
    pub fn costs(&self) -> &[u32] {
        &self.costs
    }

    /// Best known cost of a single teleporter, if it was reached.
    pub fn cost(&self, index: usize) -> Option<u32> {
        self.costs.get(index).copied().filter(|&c| c != UNREACHABLE)
    }

    /// The teleporter each teleporter was reached from during the last search.
    pub fn parents(&self) -> &[Option<usize>] {
        &self.parents
    }

    /// An iterator over all teleporters expanded during the last search.
    pub fn visited(&self) -> impl Iterator<Item = usize> + '_ {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| v.then(|| i))
    }

    fn check_index(&self, index: usize) -> Result<(), PathError> {
        if index < self.teleporters.len() {
            Ok(())
        } else {
            Err(PathError::InvalidIndex {
                index,
                len: self.teleporters.len(),
            })
        }
    }
}

impl From<Pathfinder> for Vec<usize> {
    fn from(pf: Pathfinder) -> Self {
        pf.path
    }
}

fn range_exits(
    teleporters: &[Teleporter],
    index: usize,
    max_range: u32,
) -> impl Iterator<Item = usize> + '_ {
    let origin = teleporters.get(index).copied();
    teleporters
        .iter()
        .enumerate()
        .filter_map(move |(i, t)| {
            let origin = origin?;
            (i != index && origin.in_range(t, max_range)).then(|| i)
        })
}
