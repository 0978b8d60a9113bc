//! Three-pane drag-resize engine.
//!
//! DESIGN
//! ======
//! The panes are sized by fractional grid tracks (`w1`, `w2`, `w3`). A drag
//! on divider 0 trades width between panes 1 and 2, divider 1 between panes 2
//! and 3. Each side of the pair is clamped on its own, so a saturated side
//! does not push the excess onto its neighbour and the pair sum can shrink.
//! Every delta is computed from the snapshot taken at pointer-down, which
//! keeps repeated moves free of accumulated rounding.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::util::drag_style::DragStyleGuard;

/// Tunables for the resizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResizeConfig {
    pub min_ratio: f64,
    pub max_ratio: f64,
    /// Ratio units gained per container width of pointer travel.
    pub sensitivity: f64,
    /// Viewport width at or below which the layout is stacked and not resizable.
    pub breakpoint_px: f64,
    pub divider_px: f64,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_ratio: 0.6,
            max_ratio: 5.0,
            sensitivity: 6.0,
            breakpoint_px: 1200.0,
            divider_px: 10.0,
        }
    }
}

impl ResizeConfig {
    pub fn clamp(&self, ratio: f64) -> f64 {
        clamp_ratio(ratio, self.min_ratio, self.max_ratio)
    }
}

/// Clamp without panicking on inverted bounds or NaN input.
pub fn clamp_ratio(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Fractional widths of the three panes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutRatios {
    pub w1: f64,
    pub w2: f64,
    pub w3: f64,
}

impl Default for LayoutRatios {
    fn default() -> Self {
        Self { w1: 1.0, w2: 1.0, w3: 1.0 }
    }
}

impl LayoutRatios {
    /// CSS `grid-template-columns` value with fixed-width divider tracks.
    pub fn grid_template_columns(&self, divider_px: f64) -> String {
        format!(
            "{}fr {divider_px}px {}fr {divider_px}px {}fr",
            self.w1, self.w2, self.w3
        )
    }

    fn clamped(self, config: &ResizeConfig) -> Self {
        Self {
            w1: config.clamp(self.w1),
            w2: config.clamp(self.w2),
            w3: config.clamp(self.w3),
        }
    }
}

/// Which divider is being dragged.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Divider {
    /// Between panes 1 and 2.
    First,
    /// Between panes 2 and 3.
    Second,
}

impl Divider {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// An in-progress drag. Owns the body style override for its lifetime.
#[derive(Debug)]
pub struct DragSession {
    pub divider: Divider,
    pub start_x: f64,
    pub start: LayoutRatios,
    _style: DragStyleGuard,
}

/// Resizer state machine: idle when `drag` is `None`.
#[derive(Debug)]
pub struct LayoutResizer {
    config: ResizeConfig,
    ratios: LayoutRatios,
    drag: Option<DragSession>,
}

impl Default for LayoutResizer {
    fn default() -> Self {
        Self::new(ResizeConfig::default())
    }
}

impl LayoutResizer {
    pub fn new(config: ResizeConfig) -> Self {
        Self::with_ratios(config, LayoutRatios::default())
    }

    /// Start from explicit ratios, clamped into the configured bounds.
    pub fn with_ratios(config: ResizeConfig, ratios: LayoutRatios) -> Self {
        Self {
            config,
            ratios: ratios.clamped(&config),
            drag: None,
        }
    }

    pub fn config(&self) -> &ResizeConfig {
        &self.config
    }

    pub fn ratios(&self) -> LayoutRatios {
        self.ratios
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn active_divider(&self) -> Option<Divider> {
        self.drag.as_ref().map(|d| d.divider)
    }

    pub fn grid_template_columns(&self) -> String {
        self.ratios.grid_template_columns(self.config.divider_px)
    }

    /// Whether the viewport is wide enough for resizing.
    pub fn resizable_at(&self, viewport_width: f64) -> bool {
        viewport_width > self.config.breakpoint_px
    }

    /// Pointer pressed on `divider`. Returns `true` if a drag started.
    ///
    /// Ignored while another drag is active or when the viewport is at or
    /// below the breakpoint.
    pub fn pointer_down(&mut self, divider: Divider, client_x: f64, viewport_width: f64) -> bool {
        if self.drag.is_some() || !self.resizable_at(viewport_width) || !client_x.is_finite() {
            return false;
        }
        self.drag = Some(DragSession {
            divider,
            start_x: client_x,
            start: self.ratios,
            _style: DragStyleGuard::acquire(),
        });
        true
    }

    /// Pointer moved. Returns `true` if the ratios were recomputed.
    pub fn pointer_move(&mut self, client_x: f64, container_width: f64) -> bool {
        let Some(drag) = &self.drag else {
            return false;
        };
        if !(container_width.is_finite() && container_width > 0.0) || !client_x.is_finite() {
            return false;
        }

        let delta = (client_x - drag.start_x) / container_width * self.config.sensitivity;
        let start = drag.start;
        let cfg = &self.config;
        self.ratios = match drag.divider {
            Divider::First => LayoutRatios {
                w1: cfg.clamp(start.w1 + delta),
                w2: cfg.clamp(start.w2 - delta),
                w3: start.w3,
            },
            Divider::Second => LayoutRatios {
                w1: start.w1,
                w2: cfg.clamp(start.w2 + delta),
                w3: cfg.clamp(start.w3 - delta),
            },
        };
        true
    }

    /// Pointer released. Returns `true` if a drag ended.
    pub fn pointer_up(&mut self) -> bool {
        self.drag.take().is_some()
    }

    /// Gesture aborted (pointer cancel, lost capture). Same as release.
    pub fn cancel(&mut self) -> bool {
        self.pointer_up()
    }
}
