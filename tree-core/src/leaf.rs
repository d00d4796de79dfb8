use crate::canvas::Canvas;
use crate::config::{self, TreeParams};
use crate::geometry;
use crate::oscillator::Oscillator;
use crate::types::Rgba;
use glam::Vec2;
use rand::Rng;

/// Growth stage of a leaf. `Mature` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeafStage {
    Growing,
    Mature,
}

/// Terminal drawable node: a triangle that grows from nothing to its
/// randomized full size, then only sways.
///
/// The anchor is transient state: the owning branch overwrites it from
/// its freshly computed tip geometry before every render, so a leaf's
/// position is never trustworthy between frames.
#[derive(Debug)]
pub struct Leaf {
    pub anchor: Vec2,
    pub size: f32,
    pub max_size: f32,
    /// Static design rotation, relative to the owning branch.
    pub rotation: f32,
    pub color: Rgba,
    pub spawn_time: f64,
    pub stage: LeafStage,
    sway: Oscillator,
}

impl Leaf {
    /// Creates a leaf at `spawn_time`. The full size is drawn from
    /// `[max_leaf_size/2, max_leaf_size]` and floored at 1 so a leaf can
    /// never degenerate to invisible geometry. The color is the tree's
    /// base leaf color with a small per-instance channel shift and the
    /// fixed transparency appended.
    pub fn new(
        anchor: Vec2,
        rotation: f32,
        spawn_time: f64,
        params: &TreeParams,
        rng: &mut impl Rng,
    ) -> Self {
        let max_size = rng
            .random_range(params.max_leaf_size / 2.0..=params.max_leaf_size)
            .max(1.0);
        let color = params
            .leaf_color
            .jittered(config::LEAF_COLOR_SPREAD, rng)
            .with_alpha(config::LEAF_ALPHA);

        Self {
            anchor,
            size: 1.0,
            max_size,
            rotation,
            color,
            spawn_time,
            stage: LeafStage::Growing,
            sway: Oscillator::new(config::LEAF_SWAY_SPEED, config::LEAF_SWAY_AMPLITUDE, rng),
        }
    }

    pub fn is_mature(&self) -> bool {
        self.stage == LeafStage::Mature
    }

    /// Advances growth (while still growing) and draws the triangle.
    ///
    /// The size interpolates linearly from 1 to `max_size` over the
    /// shared growth duration; once mature the recompute is skipped.
    /// The jittered rotation is recomputed on every render regardless
    /// of stage.
    pub fn render(&mut self, now: f64, params: &TreeParams, canvas: &mut impl Canvas) {
        if self.stage == LeafStage::Growing {
            let elapsed = now - self.spawn_time;
            let frac = (elapsed / params.growth_duration).clamp(0.0, 1.0) as f32;
            self.size = 1.0 + (self.max_size - 1.0) * frac;
            if elapsed > params.growth_duration {
                self.stage = LeafStage::Mature;
            }
        }

        let jittered = self.rotation + self.sway.value(now);
        let tri = geometry::leaf_triangle(self.anchor, self.size, jittered);
        canvas.fill_triangle(tri, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use crate::types::Rgb;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params() -> TreeParams {
        TreeParams {
            leaf_color: Rgb::new(40, 180, 60),
            max_leaf_size: 20.0,
            max_branch_length: 200.0,
            max_thickness: 10.0,
            max_depth: 3,
            growth_duration: 250.0,
        }
    }

    #[test]
    fn size_grows_monotonically_and_is_bounded() {
        let mut rng = StdRng::seed_from_u64(21);
        let p = params();
        let mut leaf = Leaf::new(Vec2::ZERO, 0.0, 0.0, &p, &mut rng);
        let mut canvas = RecordingCanvas::default();

        let mut prev = 0.0;
        for t in (0..=300).step_by(10) {
            leaf.render(t as f64, &p, &mut canvas);
            assert!(leaf.size >= prev, "size shrank at t={}", t);
            assert!(leaf.size <= leaf.max_size);
            prev = leaf.size;
        }
        assert!(leaf.is_mature());
        assert_eq!(leaf.size, leaf.max_size);
    }

    #[test]
    fn mature_leaf_keeps_its_size() {
        let mut rng = StdRng::seed_from_u64(22);
        let p = params();
        let mut leaf = Leaf::new(Vec2::ZERO, 0.0, 0.0, &p, &mut rng);
        let mut canvas = RecordingCanvas::default();

        leaf.render(300.0, &p, &mut canvas);
        assert!(leaf.is_mature());
        let settled = leaf.size;

        leaf.render(10_000.0, &p, &mut canvas);
        assert_eq!(leaf.size, settled);
    }

    #[test]
    fn max_size_is_floored_at_one() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut p = params();
        p.max_leaf_size = 0.5;

        for _ in 0..50 {
            let leaf = Leaf::new(Vec2::ZERO, 0.0, 0.0, &p, &mut rng);
            assert!(leaf.max_size >= 1.0);
        }
    }

    #[test]
    fn render_emits_one_triangle_with_leaf_alpha() {
        let mut rng = StdRng::seed_from_u64(24);
        let p = params();
        let mut leaf = Leaf::new(Vec2::new(3.0, 4.0), 90.0, 0.0, &p, &mut rng);
        let mut canvas = RecordingCanvas::default();

        leaf.render(50.0, &p, &mut canvas);

        assert_eq!(canvas.triangles.len(), 1);
        let (_, color) = canvas.triangles[0];
        assert_eq!(color.a, config::LEAF_ALPHA);
    }

    #[test]
    fn jitter_moves_the_triangle_between_frames() {
        let mut rng = StdRng::seed_from_u64(25);
        let p = params();
        let mut leaf = Leaf::new(Vec2::ZERO, 0.0, 0.0, &p, &mut rng);
        let mut canvas = RecordingCanvas::default();

        // Two mature-era renders far apart in time: size is settled, so
        // any vertex difference comes from the sway alone.
        leaf.render(1_000.0, &p, &mut canvas);
        leaf.render(1_040.0, &p, &mut canvas);

        let (a, _) = canvas.triangles[0];
        let (b, _) = canvas.triangles[1];
        assert_ne!(a, b);
    }
}
