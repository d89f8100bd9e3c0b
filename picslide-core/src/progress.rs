use std::collections::BTreeSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;

use crate::error::PuzzleError;

/// Durable record of which catalog entries are solved and which page was
/// viewed last. The on-disk layout is fixed for compatibility:
///
/// ```text
/// i32  last_viewed
/// u32  solved_count
/// i32  solved_index   (repeated solved_count times)
/// ```
///
/// Little-endian, no padding, no checksum, no version tag.
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Overwrite the store. One attempt, no retry; a failure leaves the
    /// in-memory session playable and is reported for the caller to log.
    pub fn save(&self, solved: &BTreeSet<i32>, last_viewed: i32) -> Result<(), PuzzleError> {
        self.write(solved, last_viewed).map_err(PuzzleError::StorageWrite)
    }

    fn write(&self, solved: &BTreeSet<i32>, last_viewed: i32) -> std::io::Result<()> {
        let mut buf = Vec::with_capacity(8 + solved.len() * 4);
        buf.extend_from_slice(&last_viewed.to_le_bytes());
        buf.extend_from_slice(&(solved.len() as u32).to_le_bytes());
        for &idx in solved {
            buf.extend_from_slice(&idx.to_le_bytes());
        }
        File::create(&self.path)?.write_all(&buf)
    }

    /// Read the store back. A missing, unreadable, or truncated file is the
    /// first-run default, never an error surfaced to the player.
    pub fn load(&self) -> (BTreeSet<i32>, i32) {
        match self.read() {
            Some(state) => state,
            None => {
                log::debug!(
                    "progress file {} absent or unreadable, starting fresh",
                    self.path.display()
                );
                (BTreeSet::new(), 0)
            }
        }
    }

    fn read(&self) -> Option<(BTreeSet<i32>, i32)> {
        let mut f = File::open(&self.path).ok()?;
        let last_viewed = read_i32(&mut f)?;
        let count = read_u32(&mut f)?;
        let mut solved = BTreeSet::new();
        for _ in 0..count {
            solved.insert(read_i32(&mut f)?);
        }
        Some((solved, last_viewed))
    }
}

fn read_i32(f: &mut File) -> Option<i32> {
    let mut b = [0u8; 4];
    f.read_exact(&mut b).ok()?;
    Some(i32::from_le_bytes(b))
}

fn read_u32(f: &mut File) -> Option<u32> {
    let mut b = [0u8; 4];
    f.read_exact(&mut b).ok()?;
    Some(u32::from_le_bytes(b))
}
