use crate::canvas::Canvas;
use crate::config::{self, TreeParams};
use crate::geometry::{self, TIP_LEFT, TIP_RIGHT};
use crate::leaf::Leaf;
use crate::oscillator::Oscillator;
use crate::types::Rgba;
use glam::Vec2;
use rand::Rng;

/// Growth stage of a branch.
///
/// The two one-shot spawn events are encoded as transitions rather than
/// loose flags, so the legal order (leaves first, then child branches
/// and maturity together) is explicit:
///
/// `Growing` --(elapsed > duration/2, spawn 2 leaves)--> `LeavesSpawned`
/// --(elapsed > duration, spawn 2 branches if depth allows)--> `Mature`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchStage {
    Growing,
    LeavesSpawned,
    Mature,
}

/// Recursive tree node: a tapered quad segment that grows toward its
/// depth-scaled maxima, sways with its own oscillator, and owns either
/// zero or exactly two child branches and zero or exactly two leaves.
///
/// Children are plain values owned by their parent; the 0-or-2
/// invariant is carried by the `Option`-of-pair representation, so a
/// lone child cannot be constructed. Child anchors are derived state:
/// every frame the parent overwrites them from its freshly computed tip
/// corners before recursing, which is how the sway propagates through
/// the whole structure without ever being persisted.
#[derive(Debug)]
pub struct Branch {
    /// Branching generation; the root is 0.
    pub depth: u32,
    pub anchor: Vec2,
    pub length: f32,
    pub thickness: f32,
    /// Tip-width factor, fixed at construction and inherited by children.
    pub taper: f32,
    pub max_length: f32,
    pub max_thickness: f32,
    /// Static design rotation in degrees from vertical.
    pub base_rotation: f32,
    pub color: Rgba,
    pub spawn_time: f64,
    pub stage: BranchStage,
    pub branches: Option<Box<[Branch; 2]>>,
    pub leaves: Option<[Leaf; 2]>,
    sway: Oscillator,
}

impl Branch {
    /// Creates a branch at `spawn_time` with unit length and thickness.
    ///
    /// The growth targets shrink geometrically with depth:
    /// `max_length = params.max_branch_length / (depth + 1)`, and the
    /// same for thickness.
    pub fn new(
        anchor: Vec2,
        depth: u32,
        base_rotation: f32,
        taper: f32,
        spawn_time: f64,
        params: &TreeParams,
        rng: &mut impl Rng,
    ) -> Self {
        let shrink = (depth + 1) as f32;
        Self {
            depth,
            anchor,
            length: 1.0,
            thickness: 1.0,
            taper,
            max_length: params.max_branch_length / shrink,
            max_thickness: params.max_thickness / shrink,
            base_rotation,
            color: config::BRANCH_COLOR.with_alpha(255),
            spawn_time,
            stage: BranchStage::Growing,
            branches: None,
            leaves: None,
            sway: Oscillator::new(
                config::BRANCH_SWAY_SPEED,
                config::BRANCH_SWAY_AMPLITUDE,
                rng,
            ),
        }
    }

    pub fn is_mature(&self) -> bool {
        self.stage == BranchStage::Mature
    }

    /// Number of branches in this subtree, including `self`.
    pub fn branch_count(&self) -> usize {
        1 + self
            .branches
            .as_deref()
            .map_or(0, |[a, b]| a.branch_count() + b.branch_count())
    }

    /// Number of leaves in this subtree.
    pub fn leaf_count(&self) -> usize {
        let own = if self.leaves.is_some() { 2 } else { 0 };
        own + self
            .branches
            .as_deref()
            .map_or(0, |[a, b]| a.leaf_count() + b.leaf_count())
    }

    /// One growth step: size interpolation plus the two one-shot spawn
    /// events. Both transitions may fire within a single call if `now`
    /// jumped past both thresholds since the last frame.
    fn grow(&mut self, now: f64, params: &TreeParams, rng: &mut impl Rng) {
        let elapsed = now - self.spawn_time;

        if self.length < self.max_length {
            let frac = (elapsed / params.growth_duration).clamp(0.0, 1.0) as f32;
            self.length = 1.0 + (self.max_length - 1.0) * frac;
            self.thickness = 1.0 + (self.max_thickness - 1.0) * frac;
        }

        if self.stage == BranchStage::Growing && elapsed > params.growth_duration / 2.0 {
            self.spawn_leaves(now, params, rng);
            self.stage = BranchStage::LeavesSpawned;
        }

        if self.stage == BranchStage::LeavesSpawned && elapsed > params.growth_duration {
            if self.depth < params.max_depth {
                self.spawn_branches(now, params, rng);
            }
            self.stage = BranchStage::Mature;
        }
    }

    /// Spawns the leaf pair on opposite sides of the branch.
    fn spawn_leaves(&mut self, now: f64, params: &TreeParams, rng: &mut impl Rng) {
        self.leaves = Some([
            Leaf::new(self.anchor, self.base_rotation, now, params, rng),
            Leaf::new(self.anchor, self.base_rotation + 180.0, now, params, rng),
        ]);
    }

    /// Spawns the child branch pair at `depth + 1`.
    ///
    /// Each child's design rotation is the parent's, plus or minus 30
    /// degrees, plus an independent random band from
    /// `[-360/(depth+1), 360/(depth+1)]` — the angular spread narrows
    /// at deeper levels.
    fn spawn_branches(&mut self, now: f64, params: &TreeParams, rng: &mut impl Rng) {
        let band = 360.0 / (self.depth + 1) as f32;
        let left = self.base_rotation - 30.0 + rng.random_range(-band..=band);
        let right = self.base_rotation + 30.0 + rng.random_range(-band..=band);

        let child = |rotation, rng: &mut _| {
            Branch::new(
                self.anchor,
                self.depth + 1,
                rotation,
                self.taper,
                now,
                params,
                rng,
            )
        };
        self.branches = Some(Box::new([child(left, rng), child(right, rng)]));
    }

    /// Renders this branch and its whole subtree for one frame, in
    /// pre-order: self-update, self-draw, then children.
    ///
    /// After drawing its own quad, the branch writes each child
    /// branch's anchor from the quad's two tip corners (left child gets
    /// the tip-left corner, right child the tip-right corner) and each
    /// leaf's anchor likewise, then recurses. Every descendant position
    /// is thus re-derived from the root down on every single frame.
    pub fn render(
        &mut self,
        now: f64,
        params: &TreeParams,
        rng: &mut impl Rng,
        canvas: &mut impl Canvas,
    ) {
        if !self.is_mature() {
            self.grow(now, params, rng);
        }

        let jittered = self.base_rotation + self.sway.value(now);
        let quad =
            geometry::branch_quad(self.anchor, self.length, jittered, self.thickness, self.taper);
        canvas.fill_quad(quad, self.color);

        if let Some([left, right]) = self.branches.as_deref_mut() {
            left.anchor = quad[TIP_LEFT];
            right.anchor = quad[TIP_RIGHT];
            left.render(now, params, rng, canvas);
            right.render(now, params, rng, canvas);
        }

        if let Some([left, right]) = self.leaves.as_mut() {
            left.anchor = quad[TIP_LEFT];
            right.anchor = quad[TIP_RIGHT];
            left.render(now, params, canvas);
            right.render(now, params, canvas);
        }
    }
}
