/// Identity value of the blank cell. The slot currently holding this value
/// is the authoritative blank index.
pub const BLANK: usize = 0;

/// A permutation of block identities over grid positions. `slots[i]` is the
/// original block identity occupying grid position `i`; exactly one slot
/// holds [`BLANK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    slots: Vec<usize>,
    blank: usize,
}

impl Arrangement {
    /// Solved arrangement with the blank at index 0.
    pub fn identity(total_blocks: usize) -> Self {
        Self { slots: (0..total_blocks).collect(), blank: 0 }
    }

    /// Rebuild from raw slots. Panics if `slots` does not contain the blank
    /// value; intended for tests and replay, not the normal play path.
    pub fn from_slots(slots: Vec<usize>) -> Self {
        let blank = slots
            .iter()
            .position(|&v| v == BLANK)
            .expect("arrangement must contain the blank value");
        Self { slots, blank }
    }

    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn blank_index(&self) -> usize {
        self.blank
    }

    /// True iff every non-blank tile sits at its home index. Slot 0 is the
    /// blank's home and is never checked; a full permutation with all of
    /// `1..` in place forces the blank there anyway.
    pub fn is_solved(&self) -> bool {
        self.slots.iter().enumerate().skip(1).all(|(i, &v)| i == v)
    }

    /// Sum over non-blank slots of the grid-coordinate Manhattan distance
    /// between current and solved position. The shuffle difficulty score.
    pub fn manhattan_distance(&self, num_blocks_x: usize) -> usize {
        let mut dist = 0;
        for (idx, &v) in self.slots.iter().enumerate() {
            if v == BLANK {
                continue;
            }
            dist += (idx % num_blocks_x).abs_diff(v % num_blocks_x);
            dist += (idx / num_blocks_x).abs_diff(v / num_blocks_x);
        }
        dist
    }

    /// Swap the slot at `index` with the blank slot and move the blank
    /// there. The caller has already checked legality.
    pub(crate) fn swap_with_blank(&mut self, index: usize) {
        self.slots.swap(self.blank, index);
        self.blank = index;
    }
}

/// Grid-adjacent indices of `index` (up/down/left/right inside the grid).
pub fn grid_neighbors(index: usize, num_blocks_x: usize, num_blocks_y: usize) -> Vec<usize> {
    let x = index % num_blocks_x;
    let y = index / num_blocks_x;
    let mut out = Vec::with_capacity(4);
    if x > 0 {
        out.push(index - 1);
    }
    if x + 1 < num_blocks_x {
        out.push(index + 1);
    }
    if y > 0 {
        out.push(index - num_blocks_x);
    }
    if y + 1 < num_blocks_y {
        out.push(index + num_blocks_x);
    }
    out
}

/// True when exactly one axis differs between the two indices, by exactly
/// one grid step.
pub fn is_adjacent(a: usize, b: usize, num_blocks_x: usize) -> bool {
    let (ax, ay) = (a % num_blocks_x, a / num_blocks_x);
    let (bx, by) = (b % num_blocks_x, b / num_blocks_x);
    ax.abs_diff(bx) + ay.abs_diff(by) == 1
}
