//! Pure vertex math for the two drawable shapes.
//!
//! Rotations are in degrees; 0 points "up", which in screen coordinates
//! (y growing downward) is `(0, -1)`. Positive rotations tilt clockwise
//! on screen. Both shape functions are pure: identical inputs always
//! produce identical vertices, and no randomness is involved.

use glam::Vec2;

/// Rotates `v` about the origin by `degrees`.
pub fn rotate_deg(v: Vec2, degrees: f32) -> Vec2 {
    Vec2::from_angle(degrees.to_radians()).rotate(v)
}

/// Triangle vertices for a leaf of the given hypotenuse `size`.
///
/// The three local points are `(-size/2, size/6)`, `(size/2, size/6)`
/// and `(0, -size/6)` (an isoceles triangle of height `size/3` pointing
/// away from the anchor). Each is rotated by `rotation`, then all three
/// are shifted by `pt - rotated(first)` so the first vertex lands
/// exactly on `pt` — the triangle is anchored by a corner, not its
/// centroid.
pub fn leaf_triangle(pt: Vec2, size: f32, rotation: f32) -> [Vec2; 3] {
    let local = [
        Vec2::new(-size / 2.0, size / 6.0),
        Vec2::new(size / 2.0, size / 6.0),
        Vec2::new(0.0, -size / 6.0),
    ];
    let rotated = local.map(|p| rotate_deg(p, rotation));
    let shift = pt - rotated[0];
    rotated.map(|p| p + shift)
}

/// Trapezoid vertices for a branch segment rooted at `pt`.
///
/// The tip is `rotate((0, -length), rotation) + pt`. Vertex order is
/// base-left, base-right, tip-right, tip-left. The base corners are
/// deliberately *not* rotated with the branch: thickness always reads
/// horizontal at the base, and the sway only carries through the tip
/// (and, via the tip corners, through every descendant's anchor).
pub fn branch_quad(pt: Vec2, length: f32, rotation: f32, thickness: f32, taper: f32) -> [Vec2; 4] {
    let tip = rotate_deg(Vec2::new(0.0, -length), rotation) + pt;
    [
        Vec2::new(pt.x - thickness, pt.y),
        Vec2::new(pt.x + thickness, pt.y),
        Vec2::new(tip.x + thickness * taper, tip.y),
        Vec2::new(tip.x - thickness * taper, tip.y),
    ]
}

/// Index of the tip-right corner in a [`branch_quad`] result.
pub const TIP_RIGHT: usize = 2;
/// Index of the tip-left corner in a [`branch_quad`] result.
pub const TIP_LEFT: usize = 3;
