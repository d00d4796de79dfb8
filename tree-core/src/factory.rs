use crate::branch::Branch;
use crate::config::{self, ConfigError, FactoryRanges, TreeParams};
use crate::tree::Tree;
use crate::types::Rgb;
use glam::Vec2;
use rand::Rng;

/// Builds fresh randomized trees anchored at the bottom-center of the
/// drawing surface.
///
/// The sampling ranges are validated once here; after construction,
/// regeneration can never fail. Each [`TreeFactory::regenerate`] call
/// draws a new set of global styling parameters and a new root — the
/// caller swaps the returned [`Tree`] in for the old one, which drops
/// the previous structure wholesale (there is no node-level removal).
#[derive(Clone, Copy, Debug)]
pub struct TreeFactory {
    ranges: FactoryRanges,
    root_anchor: Vec2,
}

impl TreeFactory {
    /// ### Parameters
    /// - `ranges` - Sampling ranges for the per-tree parameters;
    ///   rejected here if any range is inverted.
    /// - `surface_size` - Drawing surface dimensions; the root is
    ///   anchored at `(width / 2, height)`.
    pub fn new(ranges: FactoryRanges, surface_size: Vec2) -> Result<Self, ConfigError> {
        ranges.validate()?;
        Ok(Self {
            ranges,
            root_anchor: Vec2::new(surface_size.x / 2.0, surface_size.y),
        })
    }

    pub fn root_anchor(&self) -> Vec2 {
        self.root_anchor
    }

    /// Builds a new randomized tree spawned at `now`.
    ///
    /// Draws the global styling parameters from the factory ranges and
    /// constructs a vertical root at depth 0 with a randomized initial
    /// length and thickness. Always succeeds.
    pub fn regenerate(&self, now: f64, rng: &mut impl Rng) -> Tree {
        let r = &self.ranges;
        let params = TreeParams {
            leaf_color: Rgb::new(
                r.leaf_red.sample(rng),
                r.leaf_green.sample(rng),
                r.leaf_blue.sample(rng),
            ),
            max_leaf_size: r.max_leaf_size.sample(rng),
            max_branch_length: r.max_branch_length.sample(rng),
            max_thickness: r.max_thickness.sample(rng),
            max_depth: r.max_depth.sample(rng),
            growth_duration: config::GROWTH_DURATION,
        };

        let taper = r.taper.sample(rng);
        let mut root = Branch::new(self.root_anchor, 0, 0.0, taper, now, &params, rng);
        root.length = r.root_length.sample(rng);
        root.thickness = r.root_thickness.sample(rng);

        Tree { params, root }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::BranchStage;
    use crate::canvas::RecordingCanvas;
    use crate::config::Span;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn factory() -> TreeFactory {
        TreeFactory::new(FactoryRanges::default(), Vec2::new(800.0, 600.0))
            .expect("default ranges are valid")
    }

    #[test]
    fn rejects_inverted_ranges_at_construction() {
        let mut ranges = FactoryRanges::default();
        ranges.max_depth = Span::new(5, 2);

        let err = TreeFactory::new(ranges, Vec2::new(800.0, 600.0));
        assert!(err.is_err());
    }

    #[test]
    fn root_is_anchored_at_bottom_center() {
        let f = factory();
        let mut rng = StdRng::seed_from_u64(51);
        let tree = f.regenerate(0.0, &mut rng);

        assert_eq!(tree.root.anchor, Vec2::new(400.0, 600.0));
        assert_eq!(tree.root.depth, 0);
        assert_eq!(tree.root.base_rotation, 0.0);
        assert_eq!(tree.root.stage, BranchStage::Growing);
    }

    #[test]
    fn parameters_are_drawn_inside_their_ranges() {
        let f = factory();
        let r = FactoryRanges::default();
        let mut rng = StdRng::seed_from_u64(52);

        for _ in 0..20 {
            let tree = f.regenerate(0.0, &mut rng);
            let p = &tree.params;
            assert!((r.max_leaf_size.min..=r.max_leaf_size.max).contains(&p.max_leaf_size));
            assert!(
                (r.max_branch_length.min..=r.max_branch_length.max)
                    .contains(&p.max_branch_length)
            );
            assert!((r.max_thickness.min..=r.max_thickness.max).contains(&p.max_thickness));
            assert!((r.max_depth.min..=r.max_depth.max).contains(&p.max_depth));
            assert!((r.root_length.min..=r.root_length.max).contains(&tree.root.length));
            assert!((r.taper.min..=r.taper.max).contains(&tree.root.taper));
        }
    }

    #[test]
    fn regenerate_twice_yields_fully_independent_trees() {
        let f = factory();
        let mut rng = StdRng::seed_from_u64(53);
        let mut canvas = RecordingCanvas::default();

        // Grow the first tree for a while so it has descendants.
        let mut first = f.regenerate(0.0, &mut rng);
        for t in [300.0, 600.0, 900.0] {
            first.render_frame(t, &mut rng, &mut canvas);
        }
        assert!(first.branch_count() > 1);

        // Swapping in the second drops the first wholesale; the fresh
        // root starts over with no descendants and no maturity.
        let second = f.regenerate(900.0, &mut rng);
        assert_eq!(second.branch_count(), 1);
        assert_eq!(second.leaf_count(), 0);
        assert_eq!(second.root.stage, BranchStage::Growing);
        assert_eq!(second.root.spawn_time, 900.0);
    }

    #[test]
    fn end_to_end_depth_zero_tree_matures_with_leaves_only() {
        let ranges = FactoryRanges {
            max_depth: Span::new(0, 0),
            ..FactoryRanges::default()
        };
        let f = TreeFactory::new(ranges, Vec2::new(800.0, 600.0)).expect("valid ranges");
        let mut rng = StdRng::seed_from_u64(54);
        let mut canvas = RecordingCanvas::default();

        let mut tree = f.regenerate(0.0, &mut rng);
        tree.render_frame(260.0, &mut rng, &mut canvas);

        assert!(tree.root.is_mature());
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.branch_count(), 1);
    }
}
