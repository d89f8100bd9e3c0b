use crate::error::PuzzleError;

/// Grid geometry for one puzzle, computed once when the puzzle is opened.
///
/// `cols`/`rows` are padded pixel extents, always exact multiples of the
/// block dimensions; the last row/column of blocks may map to less source
/// pixel area than a full block but always occupies a full padded block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub block_width: u32,
    pub block_height: u32,
    pub cols: u32,
    pub rows: u32,
    pub num_blocks_x: usize,
    pub num_blocks_y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    pub fn compute(
        source_width: u32,
        source_height: u32,
        num_blocks_x: usize,
        num_blocks_y: usize,
    ) -> Result<Self, PuzzleError> {
        if num_blocks_x == 0 || num_blocks_y == 0 {
            return Err(PuzzleError::InvalidGridSpec(format!(
                "block counts must be positive, got {}x{}",
                num_blocks_x, num_blocks_y
            )));
        }
        if source_width == 0 || source_height == 0 {
            return Err(PuzzleError::InvalidGridSpec(format!(
                "source image has zero extent ({}x{})",
                source_width, source_height
            )));
        }

        // Ceiling division so every block, including the last row/column,
        // fits inside the padded canvas.
        let nbx = num_blocks_x as u32;
        let nby = num_blocks_y as u32;
        let block_width = (source_width + nbx - 1) / nbx;
        let block_height = (source_height + nby - 1) / nby;

        Ok(Self {
            block_width,
            block_height,
            cols: block_width * nbx,
            rows: block_height * nby,
            num_blocks_x,
            num_blocks_y,
        })
    }

    pub fn total_blocks(&self) -> usize {
        self.num_blocks_x * self.num_blocks_y
    }

    /// Pixel origin of the grid cell at `index` (row-major).
    pub fn cell_origin(&self, index: usize) -> (u32, u32) {
        let bx = (index % self.num_blocks_x) as u32;
        let by = (index / self.num_blocks_x) as u32;
        (bx * self.block_width, by * self.block_height)
    }

    pub fn cell_rect(&self, index: usize) -> Rect {
        let (x, y) = self.cell_origin(index);
        Rect { x, y, width: self.block_width, height: self.block_height }
    }

    /// All cell rects in row-major order; renderers skip the one holding
    /// the blank.
    pub fn cell_rects(&self) -> Vec<Rect> {
        (0..self.total_blocks()).map(|i| self.cell_rect(i)).collect()
    }

    /// Grid index of the cell containing pixel (x, y), if inside the canvas.
    pub fn index_at_pixel(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        let bx = (x / self.block_width) as usize;
        let by = (y / self.block_height) as usize;
        Some(by * self.num_blocks_x + bx)
    }
}

/// A decoded source image the core treats as opaque pixels. Decoding and
/// compression live with the asset pipeline, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    pub width: u32,
    pub height: u32,
    /// RGB, row-major, 3 bytes per pixel.
    pub data: Vec<u8>,
}

impl SourceImage {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), (width * height * 3) as usize);
        Self { width, height, data }
    }

    /// Copy extended on the right/bottom with black filler so the canvas is
    /// exactly `spec.cols` by `spec.rows`. Padding per axis is `>= 0` and
    /// smaller than one block dimension.
    pub fn pad_to_grid(&self, spec: &GridSpec) -> SourceImage {
        let mut data = vec![0u8; (spec.cols * spec.rows * 3) as usize];
        let copy_w = self.width.min(spec.cols) as usize * 3;
        for y in 0..self.height.min(spec.rows) as usize {
            let src = y * self.width as usize * 3;
            let dst = y * spec.cols as usize * 3;
            data[dst..dst + copy_w].copy_from_slice(&self.data[src..src + copy_w]);
        }
        SourceImage { width: spec.cols, height: spec.rows, data }
    }
}
