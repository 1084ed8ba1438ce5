use crate::animation::RevealAnimation;
use crate::error::Result;
use crate::math::{Color, Point};
use crate::render::LineCanvas;

/// Deepest tree the generator accepts; a full tree holds `2^(n+1) - 1` branches
pub const MAX_LEVELS: u32 = 20;

/// Parameters controlling tree growth appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthParams {
    /// Number of levels below the trunk
    pub levels: u32,
    /// Rotation applied to the trunk's children (radians)
    pub start_angle: f64,
    /// Length ratio of the trunk's children to the trunk
    pub start_scale: f64,
    /// Added to the angle at every level
    pub delta_angle: f64,
    /// Added to the scale at every level
    pub delta_scale: f64,
    /// Stroke width of the trunk
    pub start_thickness: u32,
    /// Color near the trunk
    pub start_color: Color,
    /// Color near the leaves
    pub end_color: Color,
}

impl Default for GrowthParams {
    fn default() -> Self {
        Self {
            levels: 9,
            start_angle: 40f64.to_radians(),
            start_scale: 0.8,
            delta_angle: 0.0,
            delta_scale: 0.0,
            start_thickness: 10,
            start_color: Color::WHITE,
            end_color: Color::new(0, 160, 255),
        }
    }
}

impl GrowthParams {
    /// Stroke width at `depth`, one less per level and never below 1
    pub fn thickness_at(&self, depth: u32) -> u32 {
        self.start_thickness.saturating_sub(depth).max(1)
    }

    /// Gradient color for a branch created with `remaining` levels still to grow
    pub fn color_for_remaining(&self, remaining: u32) -> Color {
        if self.levels == 0 {
            return self.start_color;
        }
        let fraction = remaining as f64 / self.levels as f64;
        self.end_color.lerp(&self.start_color, fraction)
    }
}

/// Owned children of a branch
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Leaf,
    /// Left (rotated by `+angle`) then right (rotated by `-angle`)
    Fork(Box<[Branch; 2]>),
}

/// A node in the grown tree structure
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub start: Point,
    pub end: Point,
    /// Packed `0xRRGGBB`
    pub color: u32,
    pub thickness: u32,
    pub children: Children,
}

impl Branch {
    pub fn leaf(start: Point, end: Point, color: u32, thickness: u32) -> Self {
        Self {
            start,
            end,
            color,
            thickness,
            children: Children::Leaf,
        }
    }

    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.children, Children::Leaf)
    }

    pub fn children(&self) -> &[Branch] {
        match &self.children {
            Children::Leaf => &[],
            Children::Fork(pair) => &pair[..],
        }
    }

    /// Total number of branches in subtree
    pub fn count(&self) -> usize {
        1 + self.children().iter().map(|c| c.count()).sum::<usize>()
    }

    pub fn leaf_count(&self) -> usize {
        match &self.children {
            Children::Leaf => 1,
            Children::Fork(pair) => pair.iter().map(|c| c.leaf_count()).sum(),
        }
    }

    /// Longest path (in edges) from this branch to a leaf
    pub fn depth(&self) -> u32 {
        self.children().iter().map(|c| 1 + c.depth()).max().unwrap_or(0)
    }

    /// All branches in pre-order, paired with their depth relative to `self`
    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        self.iter_to_depth(u32::MAX)
    }

    /// Pre-order walk that never descends below `max_depth`
    pub fn iter_to_depth(&self, max_depth: u32) -> PreorderIter<'_> {
        PreorderIter {
            stack: vec![(0, self)],
            max_depth,
        }
    }

    /// Branches sitting exactly at `depth`, left to right
    pub fn branches_at(&self, depth: u32) -> impl Iterator<Item = &Branch> {
        self.iter_to_depth(depth)
            .filter(move |(d, _)| *d == depth)
            .map(|(_, b)| b)
    }
}

pub struct PreorderIter<'a> {
    stack: Vec<(u32, &'a Branch)>,
    max_depth: u32,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = (u32, &'a Branch);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, branch) = self.stack.pop()?;
        if depth < self.max_depth {
            for child in branch.children().iter().rev() {
                self.stack.push((depth + 1, child));
            }
        }
        Some((depth, branch))
    }
}

/// Tree growth algorithm
pub struct TreeGrowth {
    pub params: GrowthParams,
}

impl TreeGrowth {
    pub fn new(params: GrowthParams) -> Self {
        Self { params }
    }

    /// Grow a full binary tree on top of the trunk segment `start -> end`
    pub fn grow(&self, trunk_start: Point, trunk_end: Point) -> FractalTree {
        let params = &self.params;
        let mut trunk = Branch::leaf(
            trunk_start,
            trunk_end,
            params.color_for_remaining(params.levels).packed(),
            params.thickness_at(0),
        );
        self.grow_branch(&mut trunk, params.levels, params.start_angle, params.start_scale);

        FractalTree {
            trunk,
            params: *params,
            animation: RevealAnimation::default(),
        }
    }

    fn grow_branch(&self, branch: &mut Branch, levels: u32, angle: f64, scale: f64) {
        if levels == 0 {
            return;
        }
        let params = &self.params;

        let direction = (branch.end - branch.start) * scale;
        let color = params.color_for_remaining(levels).packed();
        let thickness = params.thickness_at(params.levels - levels + 1);

        let mut pair = [angle, -angle].map(|theta| {
            Branch::leaf(branch.end, branch.end + direction.rotate(theta), color, thickness)
        });

        let next_angle = angle + params.delta_angle;
        let next_scale = scale + params.delta_scale;
        for child in pair.iter_mut() {
            self.grow_branch(child, levels - 1, next_angle, next_scale);
        }

        branch.children = Children::Fork(Box::new(pair));
    }
}

/// A grown tree plus the state of its reveal animation
#[derive(Debug, Clone)]
pub struct FractalTree {
    trunk: Branch,
    params: GrowthParams,
    animation: RevealAnimation,
}

impl FractalTree {
    /// Standard trunk: vertical, centered at the bottom edge of a `width x height` surface
    pub fn centered_trunk(width: f64, height: f64, trunk_length: f64) -> (Point, Point) {
        let start = Point::new(width / 2.0, height);
        (start, start - Point::new(0.0, trunk_length))
    }

    pub fn trunk(&self) -> &Branch {
        &self.trunk
    }

    pub fn params(&self) -> &GrowthParams {
        &self.params
    }

    pub fn levels(&self) -> u32 {
        self.params.levels
    }

    pub fn animation(&self) -> &RevealAnimation {
        &self.animation
    }

    pub fn start_animation(&mut self, step_distance: f64) -> Result<()> {
        self.animation.start(step_distance)
    }

    pub fn animation_step<C: LineCanvas + ?Sized>(&mut self, canvas: &mut C) -> Result<()> {
        self.animation.step(&self.trunk, self.params.levels, canvas)
    }

    pub fn animation_finished(&self) -> bool {
        self.animation.is_finished()
    }

    /// Draw every branch in full, ignoring the animation
    pub fn draw<C: LineCanvas + ?Sized>(&self, canvas: &mut C) -> Result<()> {
        for (_, branch) in self.trunk.iter_preorder() {
            canvas.draw_line(&branch.into())?;
        }
        Ok(())
    }
}
