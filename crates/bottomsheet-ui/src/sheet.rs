//! Bottom sheet controller.
//!
//! Owns the backdrop and panel, keeps them laid out against the screen's
//! safe area, and drives the show and hide transitions.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use bottomsheet_ui::{BottomSheetController, Presentation, SheetConfig, SheetState, Viewport};
//!
//! let viewport = Viewport::from_safe_area(390.0, 800.0, 20.0);
//! let mut sheet =
//!     BottomSheetController::new(SheetConfig::default(), viewport, Presentation::Embedded)?;
//!
//! sheet.view_did_appear();
//! while sheet.update(Duration::from_millis(16)) {}
//! assert_eq!(sheet.state(), SheetState::Shown);
//! assert_eq!(sheet.top_offset(), 620.0);
//! # Ok::<(), bottomsheet_ui::SheetError>(())
//! ```

use std::time::Duration;

use bottomsheet_core::geometry::Rect;
use bottomsheet_core::profiling::profile_function;

use crate::animation::{AnimatableProperty, SheetPosition, Transition, TransitionValues};
use crate::config::SheetConfig;
use crate::draw_list::{BACKDROP_Z_INDEX, CornerRadii, DrawList, PANEL_Z_INDEX, QuadCommand};
use crate::error::SheetResult;
use crate::gesture::{Gesture, GestureBatch, GestureBindings, GestureRegion, HandleStatus};
use crate::layout::{SheetLayout, SheetNode};
use crate::presentation::Presentation;
use crate::viewport::Viewport;

/// Callback run once a hide has fully finished.
pub type Completion = Box<dyn FnOnce()>;

/// Where the sheet is in its show/hide cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    /// Panel off-screen, backdrop clear.
    Hidden,
    /// A transition towards `target` is in flight.
    Transitioning { target: SheetPosition },
    /// Panel at its resting height, backdrop dimmed.
    Shown,
}

/// A dimmed backdrop plus a panel that slides up from the bottom edge.
pub struct BottomSheetController {
    config: SheetConfig,
    layout: SheetLayout,
    bindings: GestureBindings,
    presentation: Presentation,
    state: SheetState,
    transition: Option<Transition>,
    backdrop_opacity: f32,
    pending_completions: Vec<Completion>,
    appeared: bool,
    dismissed: bool,
}

impl BottomSheetController {
    /// Build the sheet's views, constraints and gesture handlers.
    ///
    /// The sheet starts hidden: panel below the safe area, backdrop clear.
    /// Call [`view_did_appear`](Self::view_did_appear) once the host has put
    /// it on screen to slide the panel in.
    pub fn new(
        config: SheetConfig,
        viewport: Viewport,
        presentation: Presentation,
    ) -> SheetResult<Self> {
        config.validate()?;

        let hidden_top = hidden_offset(&viewport);
        let layout = SheetLayout::new(viewport, hidden_top)?;
        let bindings = GestureBindings {
            dismiss_tap: config
                .dismiss_on_backdrop_tap
                .then_some(GestureRegion::Backdrop),
            dismiss_swipe: (GestureRegion::View, config.dismiss_swipe),
        };

        tracing::debug!(
            default_height = config.default_height,
            safe_area_height = viewport.safe_area_height(),
            bottom_inset = viewport.bottom_inset(),
            ?presentation,
            "Bottom sheet created"
        );

        Ok(Self {
            config,
            layout,
            bindings,
            presentation,
            state: SheetState::Hidden,
            transition: None,
            backdrop_opacity: 0.0,
            pending_completions: Vec::new(),
            appeared: false,
            dismissed: false,
        })
    }

    /// Notify the sheet that the host has put it on screen.
    ///
    /// The first call starts [`show`](Self::show); later calls do nothing.
    pub fn view_did_appear(&mut self) {
        if self.appeared {
            return;
        }
        self.appeared = true;
        self.show();
    }

    /// Slide the panel up to its resting height and dim the backdrop.
    pub fn show(&mut self) {
        if self.dismissed {
            tracing::warn!("show() called on a dismissed sheet; ignoring");
            return;
        }

        match self.state {
            SheetState::Shown if self.is_at_rest(SheetPosition::Shown) => {
                tracing::debug!("Sheet already shown");
                return;
            }
            SheetState::Transitioning {
                target: SheetPosition::Shown,
            } => {
                tracing::debug!("Sheet already showing");
                return;
            }
            SheetState::Transitioning {
                target: SheetPosition::Hidden,
            } if !self.pending_completions.is_empty() => {
                tracing::debug!(
                    pending = self.pending_completions.len(),
                    "Show superseded hide; completions wait for the next hide"
                );
            }
            _ => {}
        }

        self.begin(SheetPosition::Shown);
    }

    /// Slide the panel off-screen and clear the backdrop.
    ///
    /// When the transition finishes, a modal presentation is torn down
    /// (without animation) and then `on_complete` runs. Embedded sheets skip
    /// the teardown but still run `on_complete`.
    ///
    /// If a [`show`](Self::show) interrupts the transition, `on_complete`
    /// stays queued and runs once the next hide finishes.
    pub fn hide(&mut self, on_complete: Option<Completion>) {
        if self.dismissed {
            tracing::debug!("hide() called on a dismissed sheet; completing immediately");
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return;
        }

        if let Some(on_complete) = on_complete {
            self.pending_completions.push(on_complete);
        }

        if self.state
            == (SheetState::Transitioning {
                target: SheetPosition::Hidden,
            })
        {
            tracing::debug!("Sheet already hiding");
            return;
        }

        self.begin(SheetPosition::Hidden);
    }

    /// [`hide`](Self::hide) with a completion closure.
    pub fn hide_with(&mut self, on_complete: impl FnOnce() + 'static) {
        self.hide(Some(Box::new(on_complete)));
    }

    fn begin(&mut self, target: SheetPosition) {
        let from = self.current_values();
        let to = TransitionValues {
            opacity: self.resting_opacity(target),
            panel_top: self.resting_offset(target),
        };

        tracing::debug!(
            ?target,
            from_top = from.panel_top,
            to_top = to.panel_top,
            to_opacity = to.opacity,
            "Sheet transition started"
        );

        self.transition = Some(Transition::new(
            target,
            from,
            to,
            self.config.animation_duration.as_secs_f32(),
            self.config.easing,
        ));
        self.state = SheetState::Transitioning { target };
    }

    /// Advance the running transition by `delta`.
    ///
    /// Writes the interpolated opacity and panel position, re-resolves the
    /// layout, and runs the completion stage once the transition ends.
    /// Returns true while a transition is still running.
    pub fn update(&mut self, delta: Duration) -> bool {
        profile_function!();

        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        let running = transition.update(delta.as_secs_f32());
        let values = transition.values();
        let target = transition.target();
        self.apply(values);

        if running {
            return true;
        }

        self.transition = None;
        self.finish(target);
        false
    }

    fn apply(&mut self, values: TransitionValues) {
        self.backdrop_opacity = values.opacity;
        if let Err(err) = self.relayout(values.panel_top) {
            tracing::error!("Failed to resolve sheet layout: {}", err);
        }
        tracing::trace!(
            opacity = values.opacity,
            panel_top = values.panel_top,
            "Sheet frame"
        );
    }

    fn relayout(&mut self, panel_top: f32) -> SheetResult<()> {
        self.layout.set_panel_top(panel_top)?;
        self.layout.compute()
    }

    fn finish(&mut self, target: SheetPosition) {
        self.state = match target {
            SheetPosition::Hidden => SheetState::Hidden,
            SheetPosition::Shown => SheetState::Shown,
        };
        tracing::debug!(?target, "Sheet transition finished");

        if target != SheetPosition::Hidden {
            return;
        }

        if let Presentation::Modal(presenter) = &mut self.presentation
            && !self.dismissed
        {
            presenter.dismiss(false);
            self.dismissed = true;
            tracing::debug!("Modal presentation dismissed");
        }

        for on_complete in std::mem::take(&mut self.pending_completions) {
            on_complete();
        }
    }

    /// Offer a gesture to the sheet's handlers.
    ///
    /// Only a sheet at rest in [`SheetState::Shown`] reacts: a tap on the
    /// backdrop or a bound swipe hides it without a completion callback.
    pub fn handle_gesture(&mut self, gesture: &Gesture) -> HandleStatus {
        if self.state != SheetState::Shown {
            tracing::trace!(state = ?self.state, ?gesture, "Gesture ignored while not shown");
            return HandleStatus::ignored();
        }

        match *gesture {
            Gesture::Tap { position } => {
                let Some(region) = self.bindings.dismiss_tap else {
                    return HandleStatus::ignored();
                };
                let hit = self.layout.hit_test(position);
                let in_region = match region {
                    GestureRegion::Backdrop => hit == Some(SheetNode::Backdrop),
                    GestureRegion::View => hit.is_some(),
                };
                if !in_region {
                    return HandleStatus::ignored();
                }
                tracing::debug!(x = position.x, y = position.y, "Backdrop tapped; hiding sheet");
                self.hide(None);
                HandleStatus::consumed()
            }
            Gesture::Swipe { direction } => {
                if !self.bindings.matches_swipe(direction) {
                    return HandleStatus::ignored();
                }
                tracing::debug!(?direction, "Swipe; hiding sheet");
                self.hide(None);
                HandleStatus::consumed()
            }
        }
    }

    /// Dispatch a frame's gestures; consumed gestures are removed from `batch`.
    pub fn handle_gestures(&mut self, batch: &mut GestureBatch) {
        batch.dispatch(|gesture| self.handle_gesture(gesture));
    }

    /// Apply new screen metrics.
    ///
    /// A sheet at rest snaps to the resting offset for the new metrics; a
    /// running transition is retargeted without restarting its clock.
    pub fn set_viewport(&mut self, viewport: Viewport) -> SheetResult<()> {
        self.layout.set_viewport(viewport)?;

        let height = self.config.default_height;
        match self.state {
            SheetState::Transitioning { target } => {
                if let Some(transition) = self.transition.as_mut() {
                    let to = resting_offset(&viewport, height, target);
                    transition.retarget(AnimatableProperty::PanelTop, to);
                }
            }
            SheetState::Shown => {
                let top = resting_offset(&viewport, height, SheetPosition::Shown);
                self.layout.set_panel_top(top)?;
            }
            SheetState::Hidden => {
                let top = resting_offset(&viewport, height, SheetPosition::Hidden);
                self.layout.set_panel_top(top)?;
            }
        }

        tracing::debug!(
            width = viewport.size.width,
            height = viewport.size.height,
            safe_area_height = viewport.safe_area_height(),
            "Sheet viewport changed"
        );
        self.layout.compute()
    }

    /// Quads to draw this frame, back to front.
    pub fn draw_list(&self) -> DrawList {
        let mut list = DrawList::new();
        list.push(QuadCommand {
            node: SheetNode::Backdrop,
            rect: self.layout.backdrop_rect(),
            color: self.config.backdrop_color.scale_alpha(self.backdrop_opacity),
            corner_radii: CornerRadii::default(),
            z_index: BACKDROP_Z_INDEX,
        });
        list.push(QuadCommand {
            node: SheetNode::Panel,
            rect: self.layout.panel_rect(),
            color: self.config.panel_color,
            corner_radii: CornerRadii::top(self.config.corner_radius),
            z_index: PANEL_Z_INDEX,
        });
        list
    }

    /// Panel top offset from the safe-area top for a resting position.
    pub fn resting_offset(&self, position: SheetPosition) -> f32 {
        resting_offset(self.layout.viewport(), self.config.default_height, position)
    }

    fn resting_opacity(&self, position: SheetPosition) -> f32 {
        match position {
            SheetPosition::Hidden => 0.0,
            SheetPosition::Shown => self.config.dimmed_opacity,
        }
    }

    fn is_at_rest(&self, position: SheetPosition) -> bool {
        self.layout.panel_top() == self.resting_offset(position)
            && self.backdrop_opacity == self.resting_opacity(position)
    }

    fn current_values(&self) -> TransitionValues {
        TransitionValues {
            opacity: self.backdrop_opacity,
            panel_top: self.layout.panel_top(),
        }
    }

    pub fn state(&self) -> SheetState {
        self.state
    }

    /// True while a transition is running.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// True once a modal presentation has been torn down.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    pub fn is_presented_modally(&self) -> bool {
        self.presentation.is_modal()
    }

    /// Live position of the panel's top edge, from the safe-area top.
    pub fn top_offset(&self) -> f32 {
        self.layout.panel_top()
    }

    /// Live backdrop opacity.
    pub fn backdrop_opacity(&self) -> f32 {
        self.backdrop_opacity
    }

    pub fn panel_rect(&self) -> Rect {
        self.layout.panel_rect()
    }

    pub fn backdrop_rect(&self) -> Rect {
        self.layout.backdrop_rect()
    }

    pub fn viewport(&self) -> &Viewport {
        self.layout.viewport()
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }
}

impl Drop for BottomSheetController {
    fn drop(&mut self) {
        if !self.pending_completions.is_empty() {
            tracing::warn!(
                pending = self.pending_completions.len(),
                "Bottom sheet dropped before its hide finished; completions not run"
            );
        }
    }
}

fn hidden_offset(viewport: &Viewport) -> f32 {
    viewport.safe_area_height() + viewport.bottom_inset()
}

fn resting_offset(viewport: &Viewport, height: f32, position: SheetPosition) -> f32 {
    match position {
        SheetPosition::Hidden => hidden_offset(viewport),
        SheetPosition::Shown => hidden_offset(viewport) - height,
    }
}
