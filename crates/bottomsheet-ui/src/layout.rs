//! Layout graph for the sheet, solved by Taffy.
//!
//! The graph is three nodes: the screen root and two absolutely positioned
//! children, the backdrop (pinned to all four screen edges) and the panel
//! (pinned to the safe-area leading/trailing edges and the screen bottom).
//! The panel's top edge is the single mutable variable; it is measured from
//! the top of the safe area and driven by the sheet's transitions.

use bottomsheet_core::geometry::Rect;
use bottomsheet_core::math::Vec2;
use bottomsheet_core::profiling::profile_function;
use taffy::geometry::{Rect as TaffyRect, Size as TaffySize};
use taffy::{AvailableSpace, Dimension, LengthPercentageAuto, Position, Style, TaffyTree};

use crate::error::SheetResult;
use crate::viewport::Viewport;

/// Nodes of the sheet's layout graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetNode {
    /// The screen.
    Root,
    /// Dimmed full-screen layer.
    Backdrop,
    /// Sliding panel, drawn in front of the backdrop.
    Panel,
}

/// Taffy-backed layout of the backdrop and panel.
pub struct SheetLayout {
    taffy: TaffyTree<()>,
    root: taffy::NodeId,
    backdrop: taffy::NodeId,
    panel: taffy::NodeId,
    viewport: Viewport,
    panel_top: f32,
    backdrop_rect: Rect,
    panel_rect: Rect,
}

impl SheetLayout {
    /// Build the graph for `viewport` with the panel top at `panel_top`, and
    /// resolve it once.
    pub fn new(viewport: Viewport, panel_top: f32) -> SheetResult<Self> {
        let mut taffy = TaffyTree::new();
        // Sub-pixel positions keep the slide smooth.
        taffy.disable_rounding();

        let backdrop = taffy.new_leaf(backdrop_style())?;
        let panel = taffy.new_leaf(panel_style(&viewport, panel_top))?;
        let root = taffy.new_with_children(root_style(&viewport), &[backdrop, panel])?;

        let mut layout = Self {
            taffy,
            root,
            backdrop,
            panel,
            viewport,
            panel_top,
            backdrop_rect: Rect::ZERO,
            panel_rect: Rect::ZERO,
        };
        layout.compute()?;
        Ok(layout)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Current value of the panel's top-edge variable.
    pub fn panel_top(&self) -> f32 {
        self.panel_top
    }

    /// Replace the screen metrics. Takes effect on the next [`compute`](Self::compute).
    pub fn set_viewport(&mut self, viewport: Viewport) -> SheetResult<()> {
        self.viewport = viewport;
        self.taffy.set_style(self.root, root_style(&viewport))?;
        self.taffy
            .set_style(self.panel, panel_style(&viewport, self.panel_top))?;
        Ok(())
    }

    /// Move the panel's top edge. Takes effect on the next [`compute`](Self::compute).
    pub fn set_panel_top(&mut self, panel_top: f32) -> SheetResult<()> {
        if panel_top == self.panel_top {
            return Ok(());
        }
        self.panel_top = panel_top;
        self.taffy
            .set_style(self.panel, panel_style(&self.viewport, panel_top))?;
        Ok(())
    }

    /// Resolve the graph and cache the resulting rectangles.
    pub fn compute(&mut self) -> SheetResult<()> {
        profile_function!();

        let available = TaffySize {
            width: AvailableSpace::Definite(self.viewport.size.width),
            height: AvailableSpace::Definite(self.viewport.size.height),
        };
        self.taffy.compute_layout(self.root, available)?;

        self.backdrop_rect = self.read_rect(self.backdrop)?;
        self.panel_rect = self.read_rect(self.panel)?;

        tracing::trace!(
            panel_top = self.panel_top,
            panel_y = self.panel_rect.y,
            panel_height = self.panel_rect.height,
            "Sheet layout resolved"
        );
        Ok(())
    }

    fn read_rect(&self, node: taffy::NodeId) -> SheetResult<Rect> {
        let layout = self.taffy.layout(node)?;
        Ok(Rect::new(
            layout.location.x,
            layout.location.y,
            layout.size.width,
            layout.size.height.max(0.0),
        ))
    }

    pub fn backdrop_rect(&self) -> Rect {
        self.backdrop_rect
    }

    pub fn panel_rect(&self) -> Rect {
        self.panel_rect
    }

    /// Front-most node under `point`.
    pub fn hit_test(&self, point: Vec2) -> Option<SheetNode> {
        if self.panel_rect.height > 0.0 && self.panel_rect.contains(point) {
            return Some(SheetNode::Panel);
        }
        if self.backdrop_rect.contains(point) {
            return Some(SheetNode::Backdrop);
        }
        if self.viewport.bounds().contains(point) {
            return Some(SheetNode::Root);
        }
        None
    }
}

fn root_style(viewport: &Viewport) -> Style {
    Style {
        size: TaffySize {
            width: Dimension::Length(viewport.size.width),
            height: Dimension::Length(viewport.size.height),
        },
        ..Default::default()
    }
}

fn backdrop_style() -> Style {
    Style {
        position: Position::Absolute,
        inset: TaffyRect {
            left: LengthPercentageAuto::Length(0.0),
            right: LengthPercentageAuto::Length(0.0),
            top: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Length(0.0),
        },
        ..Default::default()
    }
}

fn panel_style(viewport: &Viewport, panel_top: f32) -> Style {
    let safe = viewport.safe_area;
    Style {
        position: Position::Absolute,
        inset: TaffyRect {
            left: LengthPercentageAuto::Length(safe.left),
            right: LengthPercentageAuto::Length(safe.right),
            top: LengthPercentageAuto::Length(safe.top + panel_top),
            bottom: LengthPercentageAuto::Length(0.0),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bottomsheet_core::geometry::{EdgeInsets, Size};

    #[test]
    fn test_backdrop_fills_screen() {
        let viewport = Viewport::new(Size::new(390.0, 844.0), EdgeInsets::new(47.0, 0.0, 34.0, 0.0));
        let layout = SheetLayout::new(viewport, 797.0).unwrap();
        assert_eq!(layout.backdrop_rect(), Rect::new(0.0, 0.0, 390.0, 844.0));
    }

    #[test]
    fn test_panel_pinned_to_safe_area_sides_and_screen_bottom() {
        let viewport = Viewport::new(Size::new(400.0, 900.0), EdgeInsets::new(50.0, 12.0, 30.0, 8.0));
        // safe height 820, bottom 30, panel 250 tall
        let layout = SheetLayout::new(viewport, 820.0 + 30.0 - 250.0).unwrap();
        let panel = layout.panel_rect();
        assert_eq!(panel.x, 12.0);
        assert_eq!(panel.width, 380.0);
        assert_eq!(panel.y, 650.0);
        assert_eq!(panel.bottom(), 900.0);
        assert_eq!(panel.height, 250.0);
    }

    #[test]
    fn test_set_panel_top_moves_panel() {
        let viewport = Viewport::from_safe_area(400.0, 800.0, 20.0);
        let mut layout = SheetLayout::new(viewport, 820.0).unwrap();
        assert_eq!(layout.panel_rect().y, 820.0);

        layout.set_panel_top(620.0).unwrap();
        layout.compute().unwrap();
        assert_eq!(layout.panel_top(), 620.0);
        assert_eq!(layout.panel_rect().y, 620.0);
        assert_eq!(layout.panel_rect().height, 200.0);
    }

    #[test]
    fn test_hit_test_prefers_panel() {
        let viewport = Viewport::from_safe_area(400.0, 800.0, 20.0);
        let layout = SheetLayout::new(viewport, 620.0).unwrap();
        assert_eq!(layout.hit_test(Vec2::new(200.0, 700.0)), Some(SheetNode::Panel));
        assert_eq!(layout.hit_test(Vec2::new(200.0, 100.0)), Some(SheetNode::Backdrop));
        assert_eq!(layout.hit_test(Vec2::new(-5.0, 100.0)), None);
    }

    #[test]
    fn test_viewport_change_relayouts() {
        let mut layout = SheetLayout::new(Viewport::from_safe_area(400.0, 800.0, 20.0), 620.0).unwrap();
        layout
            .set_viewport(Viewport::from_safe_area(800.0, 400.0, 0.0))
            .unwrap();
        layout.compute().unwrap();
        assert_eq!(layout.backdrop_rect().width, 800.0);
        assert_eq!(layout.backdrop_rect().height, 400.0);
        assert_eq!(layout.panel_rect().width, 800.0);
    }
}
