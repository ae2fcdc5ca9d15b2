//! A render surface that records every paint call in order.

use maze_harness::contract::{ColorTag, RenderSurface};
use maze_kernel::grid::Position;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSurface {
    pub paints: Vec<(Position, ColorTag)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every position ever painted with `tag`.
    #[must_use]
    pub fn painted_with(&self, tag: ColorTag) -> Vec<Position> {
        self.paints
            .iter()
            .filter(|(_, t)| *t == tag)
            .map(|(p, _)| *p)
            .collect()
    }

    pub fn clear(&mut self) {
        self.paints.clear();
    }
}

impl RenderSurface for RecordingSurface {
    fn paint_cell(&mut self, pos: Position, tag: ColorTag) {
        self.paints.push((pos, tag));
    }
}
