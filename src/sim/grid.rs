//! Uniform partition grid over the boundary's bounding box
//!
//! Cells hold indices into the `ParticleStore`. The grid is rebuilt from
//! scratch every sub-step and is stale as soon as any position changes.

use glam::Vec2;

/// A grid cell coordinate `(x, y)`
pub type CellCoord = (usize, usize);

#[derive(Debug, Clone)]
pub struct PartitionGrid {
    width: usize,
    height: usize,
    /// World position of cell (0, 0)'s top-left corner
    origin: Vec2,
    cell_size: Vec2,
    /// Column-major: cell (x, y) lives at `x * height + y`
    cells: Vec<Vec<usize>>,
}

impl PartitionGrid {
    pub fn new(width: usize, height: usize, origin: Vec2, cell_size: Vec2) -> Self {
        Self {
            width,
            height,
            origin,
            cell_size,
            cells: vec![Vec::new(); width * height],
        }
    }

    /// Grid covering the square that bounds a circle
    pub fn around_circle(width: usize, height: usize, center: Vec2, radius: f32) -> Self {
        let origin = center - Vec2::splat(radius);
        let cell_size = Vec2::new(radius * 2.0 / width as f32, radius * 2.0 / height as f32);
        Self::new(width, height, origin, cell_size)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    #[inline]
    fn slot(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }

    /// Empty every cell, keeping their allocations
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// Fractional cell coordinates of a world position
    #[inline]
    pub fn position_to_partition(&self, position: Vec2) -> Vec2 {
        (position - self.origin) / self.cell_size
    }

    /// World position of a cell's top-left corner
    #[inline]
    pub fn partition_to_position(&self, x: usize, y: usize) -> Vec2 {
        Vec2::new(x as f32, y as f32) * self.cell_size + self.origin
    }

    /// True when the position falls inside the covered bounding box
    pub fn covers(&self, position: Vec2) -> bool {
        let p = self.position_to_partition(position);
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.width as f32 && p.y < self.height as f32
    }

    /// Cell containing `position`, saturating at the grid edge
    ///
    /// Positions outside the bounding box (or NaN) land in the nearest
    /// border cell.
    pub fn cell_of(&self, position: Vec2) -> CellCoord {
        let p = self.position_to_partition(position).floor();
        let clamp = |v: f32, len: usize| -> usize {
            if v.is_nan() || v <= 0.0 {
                0
            } else {
                (v as usize).min(len - 1)
            }
        };
        (clamp(p.x, self.width), clamp(p.y, self.height))
    }

    /// Register particle `index` in the cell containing `position`
    pub fn assign(&mut self, index: usize, position: Vec2) -> CellCoord {
        if !self.covers(position) {
            log::debug!(
                "particle {} at ({:.1}, {:.1}) outside grid, clamping",
                index,
                position.x,
                position.y
            );
        }
        let (x, y) = self.cell_of(position);
        let slot = self.slot(x, y);
        self.cells[slot].push(index);
        (x, y)
    }

    /// Rebuild from a full set of positions
    pub fn repartition<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Vec2>,
    {
        self.clear();
        for (index, position) in positions.into_iter().enumerate() {
            self.assign(index, position);
        }
    }

    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> &[usize] {
        &self.cells[self.slot(x, y)]
    }

    /// Append the contents of the 3×3 block centred on `(cx, cy)` to `pool`
    ///
    /// `(cx, cy)` must be an interior cell so all 8 neighbours exist.
    pub fn gather_neighborhood(&self, cx: usize, cy: usize, pool: &mut Vec<usize>) {
        debug_assert!(cx >= 1 && cx + 1 < self.width);
        debug_assert!(cy >= 1 && cy + 1 < self.height);
        for x in cx - 1..=cx + 1 {
            for y in cy - 1..=cy + 1 {
                pool.extend_from_slice(self.cell(x, y));
            }
        }
    }

    /// Total number of indices across all cells
    pub fn occupancy(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }
}
