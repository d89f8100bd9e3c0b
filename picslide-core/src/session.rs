use crate::arrangement::{is_adjacent, Arrangement};
use crate::layout::GridSpec;

/// Stable identity of a catalog entry, used for in-session lookups.
pub fn puzzle_key(name: &str, artist: &str) -> String {
    format!("{}|{}", name, artist)
}

/// Pixel-space origin of the grid cell currently holding the blank. Derived
/// from the blank index; updated only as a side effect of a successful move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlankPosition {
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub applied: bool,
}

/// One puzzle-in-play. Created when the player opens a puzzle, dropped when
/// they leave it (win or cancel). Not internally synchronized; callers must
/// not share a session across threads without their own locking.
#[derive(Debug, Clone)]
pub struct PuzzleSession {
    spec: GridSpec,
    arrangement: Arrangement,
    blank_pos: BlankPosition,
    key: String,
    solved: bool,
    moves: usize,
}

impl PuzzleSession {
    pub fn new(key: String, spec: GridSpec, arrangement: Arrangement) -> Self {
        let blank_pos = blank_position(&spec, &arrangement);
        let solved = arrangement.is_solved();
        Self { spec, arrangement, blank_pos, key, solved, moves: 0 }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn grid(&self) -> &GridSpec {
        &self.spec
    }

    pub fn arrangement(&self) -> &Arrangement {
        &self.arrangement
    }

    pub fn blank_position(&self) -> BlankPosition {
        self.blank_pos
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Try to slide the tile at `target` into the blank. Clicking a
    /// non-adjacent or out-of-range cell is a normal player action, not an
    /// error: the call is a silent no-op. Once the session is solved every
    /// further attempt is rejected.
    pub fn attempt_move(&mut self, target: usize) -> MoveResult {
        if self.solved
            || target >= self.arrangement.len()
            || target == self.arrangement.blank_index()
            || !is_adjacent(target, self.arrangement.blank_index(), self.spec.num_blocks_x)
        {
            return MoveResult { applied: false };
        }

        self.arrangement.swap_with_blank(target);
        self.blank_pos = blank_position(&self.spec, &self.arrangement);
        self.moves += 1;
        if self.arrangement.is_solved() {
            self.solved = true;
            log::debug!("puzzle {} solved in {} moves", self.key, self.moves);
        }
        MoveResult { applied: true }
    }
}

fn blank_position(spec: &GridSpec, arrangement: &Arrangement) -> BlankPosition {
    let (x, y) = spec.cell_origin(arrangement.blank_index());
    BlankPosition { x, y }
}
