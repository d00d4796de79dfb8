use crate::branch::Branch;
use crate::canvas::Canvas;
use crate::config::TreeParams;
use rand::Rng;

/// A generated tree: the root branch plus the styling parameters every
/// node of this generation was built from.
///
/// The whole structure is owned as one value; replacing a tree is an
/// ordinary move and drops the previous root with its entire subtree.
#[derive(Debug)]
pub struct Tree {
    pub params: TreeParams,
    pub root: Branch,
}

impl Tree {
    /// Advances and draws the tree by one frame.
    ///
    /// One invocation is one complete synchronous pre-order pass from
    /// the root; the tree is inert between invocations. `now` is the
    /// host's elapsed-time source in time-units — growth thresholds are
    /// computed against it, so a host that keeps its clock running
    /// while paused will see growth catch up on resume.
    pub fn render_frame(&mut self, now: f64, rng: &mut impl Rng, canvas: &mut impl Canvas) {
        self.root.render(now, &self.params, rng, canvas);
    }

    pub fn branch_count(&self) -> usize {
        self.root.branch_count()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}
