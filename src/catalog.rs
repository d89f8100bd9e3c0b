use anyhow::{Context, Result};
use picslide_core::puzzle_key;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// One catalog entry. `offset`/`length` locate the compressed bitmap inside
/// the packed data file; decoding it is the asset pipeline's job, the
/// puzzle engine only ever sees grid size and identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleMeta {
    pub name: String,
    pub artist: String,
    #[serde(default = "default_difficulty")]
    pub difficulty: String,
    pub offset: u64,
    pub length: u64,
    #[serde(default = "default_block_size")]
    pub block_size: usize,
}

fn default_difficulty() -> String {
    "medium".to_string()
}

fn default_block_size() -> usize {
    3
}

impl PuzzleMeta {
    /// Stable identity, independent of catalog position.
    pub fn key(&self) -> String {
        puzzle_key(&self.name, &self.artist)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    puzzles: Vec<PuzzleMeta>,
}

pub struct Catalog {
    entries: Vec<PuzzleMeta>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing catalog {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        Ok(Self { entries: file.puzzles })
    }

    pub fn get(&self, index: usize) -> Option<&PuzzleMeta> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[PuzzleMeta] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
