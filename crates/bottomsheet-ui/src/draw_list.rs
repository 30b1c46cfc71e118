//! Render-agnostic draw output for the sheet.

use bottomsheet_core::Color;
use bottomsheet_core::geometry::Rect;

use crate::layout::SheetNode;

/// Z-index of the backdrop; matches the modal layer of the overlay stack.
pub const BACKDROP_Z_INDEX: u16 = 3000;
/// Z-index of the panel, directly above its backdrop.
pub const PANEL_Z_INDEX: u16 = BACKDROP_Z_INDEX + 1;

/// Per-corner radii.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    /// Round only the two top corners.
    pub const fn top(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: 0.0,
            bottom_left: 0.0,
        }
    }
}

/// A filled rectangle to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCommand {
    /// Node that owns this command
    pub node: SheetNode,
    /// Screen-space rectangle
    pub rect: Rect,
    /// Fill color, alpha already multiplied by the node's opacity
    pub color: Color,
    /// Corner rounding
    pub corner_radii: CornerRadii,
    /// Z-index for depth sorting
    pub z_index: u16,
}

/// Back-to-front list of quads for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    quads: Vec<QuadCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a quad; degenerate or fully transparent quads are skipped.
    pub fn push(&mut self, quad: QuadCommand) {
        if quad.rect.width <= 0.0 || quad.rect.height <= 0.0 || quad.color.a <= 0.0 {
            return;
        }
        self.quads.push(quad);
    }

    pub fn quads(&self) -> &[QuadCommand] {
        &self.quads
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Command for `node`, if it is drawn this frame.
    pub fn get(&self, node: SheetNode) -> Option<&QuadCommand> {
        self.quads.iter().find(|quad| quad.node == node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_skips_invisible_quads() {
        let mut list = DrawList::new();
        list.push(QuadCommand {
            node: SheetNode::Backdrop,
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            color: Color::TRANSPARENT,
            corner_radii: CornerRadii::default(),
            z_index: BACKDROP_Z_INDEX,
        });
        list.push(QuadCommand {
            node: SheetNode::Panel,
            rect: Rect::new(0.0, 100.0, 100.0, 0.0),
            color: Color::WHITE,
            corner_radii: CornerRadii::top(24.0),
            z_index: PANEL_Z_INDEX,
        });
        assert!(list.is_empty());
    }

    #[test]
    fn test_top_radii() {
        let radii = CornerRadii::top(24.0);
        assert_eq!(radii.top_left, 24.0);
        assert_eq!(radii.top_right, 24.0);
        assert_eq!(radii.bottom_left, 0.0);
        assert_eq!(radii.bottom_right, 0.0);
    }
}
