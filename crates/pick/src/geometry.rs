//! Integer-exact geometric primitives over lattice points.
//!
//! Purpose
//! - Provide the small set of stateless predicates the rest of the crate
//!   builds on: gcd, strict segment crossing, even-odd point-in-polygon, and
//!   Shoelace area.
//!
//! Why integer-exact
//! - All inputs are lattice points, so every predicate reduces to sign tests
//!   on i128 cross products. There are no tolerances to tune, and repeated
//!   drag-frequency calls cannot drift. Floats appear only in the Shoelace
//!   result, where halving an odd integer forces them.
//!
//! Notes
//! - `segments_intersect` reports only *strict* crossings: both parameters in
//!   the open interval (0,1). Collinear overlap and endpoint touching return
//!   false. Adjacent polygon edges share a vertex and must not be flagged; a
//!   vertex resting on a distant edge is likewise tolerated (known looseness,
//!   kept for parity with the reference board).
//! - `point_in_polygon` leaves membership of points exactly on an edge
//!   unspecified. Callers test boundary membership first.

use crate::grid::LatticePoint;

/// Euclidean gcd on absolute values; `gcd(0, 0) = 0`.
#[inline]
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Cross product of two lattice vectors, widened to i128 (coordinates up to
/// i64 cannot overflow the product sum).
#[inline]
fn cross(a: LatticePoint, b: LatticePoint) -> i128 {
    a.x as i128 * b.y as i128 - a.y as i128 * b.x as i128
}

/// True iff segments p1–p2 and p3–p4 cross at a point strictly interior to
/// both. Parametric solve: with `d1 = p2-p1`, `d2 = p4-p3`, `w = p3-p1`,
/// `t = cross(w, d2) / cross(d1, d2)` and `u = cross(w, d1) / cross(d1, d2)`;
/// a crossing needs `t, u` strictly in (0,1). Parallel and collinear pairs
/// (zero denominator) never cross.
pub fn segments_intersect(
    p1: LatticePoint,
    p2: LatticePoint,
    p3: LatticePoint,
    p4: LatticePoint,
) -> bool {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let mut denom = cross(d1, d2);
    if denom == 0 {
        return false;
    }
    let w = p3 - p1;
    let mut t_num = cross(w, d2);
    let mut u_num = cross(w, d1);
    if denom < 0 {
        denom = -denom;
        t_num = -t_num;
        u_num = -u_num;
    }
    0 < t_num && t_num < denom && 0 < u_num && u_num < denom
}

/// Even-odd ray cast (horizontal ray towards +x). The crossing test is the
/// classic one-sided rule `(vi.y > p.y) != (vj.y > p.y)` with the x
/// comparison cross-multiplied to stay exact.
pub fn point_in_polygon(p: LatticePoint, verts: &[LatticePoint]) -> bool {
    let n = verts.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (vi, vj) = (verts[i], verts[j]);
        if (vi.y > p.y) != (vj.y > p.y) {
            // dy != 0 here by the branch above.
            let dy = (vj.y - vi.y) as i128;
            let lhs = (p.x - vi.x) as i128 * dy;
            let rhs = (vj.x - vi.x) as i128 * (p.y - vi.y) as i128;
            let crosses = if dy > 0 { lhs < rhs } else { lhs > rhs };
            if crosses {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shoelace area of the closed vertex cycle: `|Σ (x_i·y_{i+1} − x_{i+1}·y_i)| / 2`.
/// The signed double area is accumulated in i128 and converted to f64 only at
/// the end, so the result is exact for any realistic grid. Fewer than three
/// vertices have area 0.
pub fn shoelace_area(verts: &[LatticePoint]) -> f64 {
    if verts.len() < 3 {
        return 0.0;
    }
    let mut twice: i128 = 0;
    for i in 0..verts.len() {
        let a = verts[i];
        let b = verts[(i + 1) % verts.len()];
        twice += a.x as i128 * b.y as i128 - b.x as i128 * a.y as i128;
    }
    twice.abs() as f64 / 2.0
}
