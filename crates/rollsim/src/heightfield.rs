use glam::{Vec2, Vec3};

use crate::error::SurfaceError;

/// Height and surface normal at a world (x, z) position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSample {
    pub height: f32,
    /// Unit normal, always pointing up (`y > 0`).
    pub normal: Vec3,
}

/// Triangle mesh of a height field, ready for upload by a renderer.
#[derive(Clone, Debug, Default)]
pub struct SurfaceMeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

/// Grid of height samples over a rectangular XZ extent.
///
/// Sample `(x, z)` sits at world position `origin + (x, z) * cell_size`.
/// Lookups between samples are bilinear; lookups outside the extent clamp
/// to the nearest edge. The field is immutable once built, so any number of
/// bodies can query it in the same tick.
#[derive(Clone, Debug)]
pub struct HeightField {
    /// Samples along X.
    pub width: usize,
    /// Samples along Z.
    pub depth: usize,
    pub cell_size: f32,
    /// World (x, z) of sample (0, 0).
    pub origin: Vec2,
    heights: Vec<f32>,
}

impl HeightField {
    /// Build a field from row-major samples (`heights[z * width + x]`).
    pub fn new(
        width: usize,
        depth: usize,
        cell_size: f32,
        origin: Vec2,
        heights: Vec<f32>,
    ) -> Result<Self, SurfaceError> {
        if width < 2 || depth < 2 {
            return Err(SurfaceError::DegenerateGrid { width, depth });
        }
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(SurfaceError::InvalidCellSize(cell_size));
        }
        if !origin.is_finite() {
            return Err(SurfaceError::NonFiniteOrigin);
        }
        let expected = width * depth;
        if heights.len() != expected {
            return Err(SurfaceError::SampleCountMismatch {
                expected,
                actual: heights.len(),
            });
        }
        if let Some(i) = heights.iter().position(|h| !h.is_finite()) {
            return Err(SurfaceError::NonFiniteSample {
                x: i % width,
                z: i / width,
            });
        }

        Ok(Self {
            width,
            depth,
            cell_size,
            origin,
            heights,
        })
    }

    /// Create flat terrain at given height.
    pub fn flat(
        width: usize,
        depth: usize,
        cell_size: f32,
        origin: Vec2,
        height: f32,
    ) -> Result<Self, SurfaceError> {
        Self::new(width, depth, cell_size, origin, vec![height; width * depth])
    }

    /// Sample `f(world_x, world_z)` at every grid point.
    pub fn from_fn<F>(
        width: usize,
        depth: usize,
        cell_size: f32,
        origin: Vec2,
        f: F,
    ) -> Result<Self, SurfaceError>
    where
        F: Fn(f32, f32) -> f32,
    {
        let mut heights = Vec::with_capacity(width * depth);
        for z in 0..depth {
            for x in 0..width {
                let wx = origin.x + x as f32 * cell_size;
                let wz = origin.y + z as f32 * cell_size;
                heights.push(f(wx, wz));
            }
        }
        Self::new(width, depth, cell_size, origin, heights)
    }

    /// Origin that centers a `width x depth` grid on the world origin.
    pub fn centered_origin(width: usize, depth: usize, cell_size: f32) -> Vec2 {
        Vec2::new(
            -(width.saturating_sub(1) as f32) * cell_size * 0.5,
            -(depth.saturating_sub(1) as f32) * cell_size * 0.5,
        )
    }

    /// Raw samples, row-major.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Get height at grid position, clamped to the grid.
    pub fn get_height(&self, x: usize, z: usize) -> f32 {
        let x = x.min(self.width - 1);
        let z = z.min(self.depth - 1);
        self.heights[z * self.width + x]
    }

    /// World-space size of the extent along X and Z.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            (self.width - 1) as f32 * self.cell_size,
            (self.depth - 1) as f32 * self.cell_size,
        )
    }

    /// Minimum and maximum world (x, z) covered by samples.
    pub fn extent(&self) -> (Vec2, Vec2) {
        (self.origin, self.origin + self.world_size())
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.world_size() * 0.5
    }

    pub fn contains(&self, x: f32, z: f32) -> bool {
        let (min, max) = self.extent();
        x >= min.x && x <= max.x && z >= min.y && z <= max.y
    }

    pub fn min_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::INFINITY, f32::min)
    }

    pub fn max_height(&self) -> f32 {
        self.heights.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }

    /// Bilinearly interpolated surface height at world (x, z).
    pub fn height_at(&self, x: f32, z: f32) -> f32 {
        let gx = ((x - self.origin.x) / self.cell_size).clamp(0.0, (self.width - 1) as f32);
        let gz = ((z - self.origin.y) / self.cell_size).clamp(0.0, (self.depth - 1) as f32);

        // Last cell owns the far edge
        let x0 = (gx.floor() as usize).min(self.width - 2);
        let z0 = (gz.floor() as usize).min(self.depth - 2);
        let tx = gx - x0 as f32;
        let tz = gz - z0 as f32;

        let row0 = z0 * self.width;
        let row1 = row0 + self.width;
        let h00 = self.heights[row0 + x0];
        let h10 = self.heights[row0 + x0 + 1];
        let h01 = self.heights[row1 + x0];
        let h11 = self.heights[row1 + x0 + 1];

        let near = h00 + (h10 - h00) * tx;
        let far = h01 + (h11 - h01) * tx;
        near + (far - near) * tz
    }

    /// Upward unit normal at world (x, z) from central differences.
    ///
    /// Samples sit `e` (half a cell) either side of the query point, clamped
    /// to the extent; the run of each tangent is the distance actually
    /// sampled, so slopes hold up to the border. The cross product has
    /// `y = run_x * run_z > 0`, so it never needs flipping.
    pub fn normal_at(&self, x: f32, z: f32) -> Vec3 {
        let e = self.cell_size * 0.5;
        let (min, max) = self.extent();

        let (dh_x, run_x) = {
            let lo = (x - e).clamp(min.x, max.x);
            let hi = (x + e).clamp(min.x, max.x);
            if hi - lo > f32::EPSILON {
                (self.height_at(hi, z) - self.height_at(lo, z), hi - lo)
            } else {
                // Past the edge the field is constant along this axis
                (0.0, 2.0 * e)
            }
        };
        let (dh_z, run_z) = {
            let lo = (z - e).clamp(min.y, max.y);
            let hi = (z + e).clamp(min.y, max.y);
            if hi - lo > f32::EPSILON {
                (self.height_at(x, hi) - self.height_at(x, lo), hi - lo)
            } else {
                (0.0, 2.0 * e)
            }
        };

        let tangent_x = Vec3::new(run_x, dh_x, 0.0);
        let tangent_z = Vec3::new(0.0, dh_z, run_z);
        let normal = tangent_z.cross(tangent_x).normalize_or_zero();

        if normal == Vec3::ZERO || !normal.is_finite() {
            Vec3::Y
        } else if normal.y < 0.0 {
            -normal
        } else {
            normal
        }
    }

    pub fn sample(&self, x: f32, z: f32) -> SurfaceSample {
        SurfaceSample {
            height: self.height_at(x, z),
            normal: self.normal_at(x, z),
        }
    }

    /// Slope magnitude (rise over run) at world (x, z).
    pub fn slope_at(&self, x: f32, z: f32) -> f32 {
        let n = self.normal_at(x, z);
        (n.x * n.x + n.z * n.z).sqrt() / n.y
    }

    /// Triangle list with two triangles per cell, wound so normals face +Y
    /// in a right-handed frame.
    pub fn mesh(&self) -> SurfaceMeshData {
        let mut positions = Vec::with_capacity(self.width * self.depth);
        let mut normals = Vec::with_capacity(self.width * self.depth);

        for z in 0..self.depth {
            for x in 0..self.width {
                let wx = self.origin.x + x as f32 * self.cell_size;
                let wz = self.origin.y + z as f32 * self.cell_size;
                positions.push([wx, self.get_height(x, z), wz]);
                normals.push(self.normal_at(wx, wz).to_array());
            }
        }

        let cells = (self.width - 1) * (self.depth - 1);
        let mut indices = Vec::with_capacity(cells * 6);
        let w = self.width as u32;
        for z in 0..(self.depth - 1) as u32 {
            for x in 0..(self.width - 1) as u32 {
                let i00 = z * w + x;
                let i10 = i00 + 1;
                let i01 = i00 + w;
                let i11 = i01 + 1;
                indices.extend_from_slice(&[i00, i01, i10, i10, i01, i11]);
            }
        }

        SurfaceMeshData {
            positions,
            normals,
            indices,
        }
    }
}
