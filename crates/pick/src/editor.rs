//! Interactive polygon editor: a validated state machine over a vertex ring.
//!
//! Purpose
//! - Own the single in-progress/completed polygon and guard every mutation so
//!   the simple-polygon invariant holds at all times once the ring is closed.
//!
//! States
//! - `Empty` (0 vertices) -> `Building` (1-2) -> `Closable` (>=3, open) ->
//!   `Closed`. The state is derived from the vertex count and the closed
//!   flag, never stored separately.
//!
//! Failure semantics
//! - Expected rejections (too few vertices, would self-intersect) come back
//!   as `Err(EditReject)` and leave the ring exactly as it was. No partial
//!   application, no apply-then-revert: checks run against the tentative
//!   geometry before any field is written, so callers never observe a
//!   transient invalid state even under drag-frequency call rates.
//! - Programmer errors (out-of-range index, off-grid point) fault loudly via
//!   `assert!`/`debug_assert!` instead.
//!
//! Notes
//! - The crossing predicate ignores endpoint touching, so a vertex resting
//!   exactly on a distant edge is accepted. Kept for parity with the
//!   reference board rather than silently tightened.
//! - `insert_vertex_on_edge` performs no crossing check at all, also for
//!   parity: the board only ever inserts points sitting on the edge itself,
//!   which cannot introduce a crossing. Arbitrary insertion points are the
//!   caller's responsibility.

use thiserror::Error;

use crate::geometry::segments_intersect;
use crate::grid::{GridBounds, LatticePoint};

/// Why an edit was rejected. Expected and recoverable; the caller decides how
/// (or whether) to surface it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum EditReject {
    #[error("polygon needs at least three vertices")]
    TooFewVertices,
    #[error("cannot create a self-intersecting polygon")]
    WouldSelfIntersect,
}

/// Editing phase, derived from vertex count and the closed flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    Empty,
    Building,
    Closable,
    Closed,
}

/// The one mutable polygon of a board session. All edits are synchronous and
/// atomic; there is no background work and a single caller owns the instance.
#[derive(Clone, Debug)]
pub struct PolygonEditor {
    verts: Vec<LatticePoint>,
    closed: bool,
    bounds: GridBounds,
}

impl PolygonEditor {
    pub fn new(bounds: GridBounds) -> Self {
        Self {
            verts: Vec::new(),
            closed: false,
            bounds,
        }
    }

    #[inline]
    pub fn state(&self) -> EditorState {
        if self.closed {
            EditorState::Closed
        } else {
            match self.verts.len() {
                0 => EditorState::Empty,
                1 | 2 => EditorState::Building,
                _ => EditorState::Closable,
            }
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[LatticePoint] {
        &self.verts
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.verts.len()
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    #[inline]
    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Append a vertex to the open polyline.
    ///
    /// Clicking the first vertex again with three or more vertices placed
    /// closes the ring instead of appending a duplicate. Otherwise the new
    /// edge (last vertex -> `p`) must not cross any earlier edge; the edge it
    /// extends is adjacent and exempt.
    pub fn add_vertex(&mut self, p: LatticePoint) -> Result<(), EditReject> {
        assert!(!self.closed, "add_vertex on a closed polygon");
        debug_assert!(self.bounds.contains(p), "vertex off the grid: {p:?}");
        if self.verts.len() >= 3 && p == self.verts[0] {
            return self.close();
        }
        if let Some(&last) = self.verts.last() {
            for i in 0..self.verts.len().saturating_sub(2) {
                if segments_intersect(last, p, self.verts[i], self.verts[i + 1]) {
                    tracing::debug!(x = p.x, y = p.y, "add_vertex rejected: would self-intersect");
                    return Err(EditReject::WouldSelfIntersect);
                }
            }
        }
        self.verts.push(p);
        Ok(())
    }

    /// Close the ring. Needs at least three vertices, and the closing edge
    /// (last -> first) must not cross any edge it is not adjacent to.
    /// Closing an already-closed ring is a no-op.
    pub fn close(&mut self) -> Result<(), EditReject> {
        if self.closed {
            return Ok(());
        }
        let k = self.verts.len();
        if k < 3 {
            return Err(EditReject::TooFewVertices);
        }
        let (first, last) = (self.verts[0], self.verts[k - 1]);
        // Edges 0 and k-2 share a vertex with the closing edge; the rest must
        // not cross it.
        for i in 1..k - 2 {
            if segments_intersect(last, first, self.verts[i], self.verts[i + 1]) {
                tracing::debug!("close rejected: closing edge would self-intersect");
                return Err(EditReject::WouldSelfIntersect);
            }
        }
        self.closed = true;
        tracing::debug!(vertices = k, "polygon closed");
        Ok(())
    }

    /// Remove the vertex at `index`.
    ///
    /// A closed ring keeps at least three vertices; the edge joining the
    /// removed vertex's neighbours is re-validated against the rest of the
    /// ring before anything is removed. Open polylines shrink freely.
    pub fn delete_vertex(&mut self, index: usize) -> Result<(), EditReject> {
        let k = self.verts.len();
        assert!(index < k, "vertex index {index} out of range (len {k})");
        if self.closed {
            if k <= 3 {
                return Err(EditReject::TooFewVertices);
            }
            let prev = self.verts[(index + k - 1) % k];
            let next = self.verts[(index + 1) % k];
            for i in 0..k {
                let j = (i + 1) % k;
                // The two edges incident to the removed vertex disappear.
                if i == index || j == index {
                    continue;
                }
                if segments_intersect(prev, next, self.verts[i], self.verts[j]) {
                    tracing::debug!(index, "delete_vertex rejected: would self-intersect");
                    return Err(EditReject::WouldSelfIntersect);
                }
            }
        }
        self.verts.remove(index);
        Ok(())
    }

    /// Move the vertex at `index` to `p`.
    ///
    /// Only meaningful on a closed ring with more than three vertices (the
    /// reference board disables dragging below four). The two edges adjacent
    /// to the vertex are checked against every non-incident edge before any
    /// state changes; a rejected move leaves the coordinates untouched.
    pub fn move_vertex(&mut self, index: usize, p: LatticePoint) -> Result<(), EditReject> {
        let k = self.verts.len();
        assert!(index < k, "vertex index {index} out of range (len {k})");
        debug_assert!(self.bounds.contains(p), "vertex off the grid: {p:?}");
        if !self.closed || k < 4 {
            return Err(EditReject::TooFewVertices);
        }
        let prev = self.verts[(index + k - 1) % k];
        let next = self.verts[(index + 1) % k];
        for i in 0..k {
            let j = (i + 1) % k;
            if i == index || j == index {
                continue;
            }
            let (a, b) = (self.verts[i], self.verts[j]);
            if segments_intersect(prev, p, a, b) || segments_intersect(p, next, a, b) {
                tracing::debug!(index, x = p.x, y = p.y, "move_vertex rejected: would self-intersect");
                return Err(EditReject::WouldSelfIntersect);
            }
        }
        self.verts[index] = p;
        Ok(())
    }

    /// Insert `p` between `edge_start` and the following vertex (wrapping to
    /// the first vertex on a closed ring). Unchecked for crossings; see the
    /// module notes.
    pub fn insert_vertex_on_edge(
        &mut self,
        edge_start: usize,
        p: LatticePoint,
    ) -> Result<(), EditReject> {
        let edge_count = if self.closed {
            self.verts.len()
        } else {
            self.verts.len().saturating_sub(1)
        };
        assert!(
            edge_start < edge_count,
            "edge index {edge_start} out of range ({edge_count} edges)"
        );
        debug_assert!(self.bounds.contains(p), "vertex off the grid: {p:?}");
        self.verts.insert(edge_start + 1, p);
        Ok(())
    }

    /// Reset to `Empty` from any state.
    pub fn clear(&mut self) {
        self.verts.clear();
        self.closed = false;
        tracing::debug!("editor cleared");
    }
}
