use super::constants::{BAND_COUNT, DRAG_SENSITIVITY, EDGE_MARGIN, NUDGE_STEP, SECTION_WIDTH};

/// Interaction phase of the scroll loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    Dragging,
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    #[inline]
    pub fn step(self) -> f64 {
        match self {
            Direction::Left => -NUDGE_STEP,
            Direction::Right => NUDGE_STEP,
        }
    }
}

/// Result of feeding a native scroll position into the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollUpdate {
    /// Raw scroll position, published as the starfield parallax input.
    pub parallax: f64,
    /// New physical offset when a wraparound correction was applied.
    pub correction: Option<f64>,
}

/// Horizontal viewport over three copies of the marker band that behaves like
/// an endless loop.
///
/// The controller never touches the DOM. Every operation returns the offset
/// the caller must write back to the scroll container, or `None` when nothing
/// changes. Before `mount` (and after `unmount`) all operations are no-ops.
#[derive(Clone, Debug)]
pub struct ScrollWrap {
    section_width: f64,
    viewport_width: f64,
    mounted: bool,
    phase: ScrollPhase,
    offset: f64,
    origin_x: f64,
    baseline: f64,
    last_raw: f64,
}

impl Default for ScrollWrap {
    fn default() -> Self {
        Self::new(SECTION_WIDTH)
    }
}

impl ScrollWrap {
    pub fn new(section_width: f64) -> Self {
        Self {
            section_width,
            viewport_width: 0.0,
            mounted: false,
            phase: ScrollPhase::Idle,
            offset: 0.0,
            origin_x: 0.0,
            baseline: 0.0,
            last_raw: 0.0,
        }
    }

    /// Attach to a viewport and centre on the start of the middle band.
    pub fn mount(&mut self, viewport_width: f64) -> f64 {
        self.mounted = true;
        self.viewport_width = viewport_width.max(0.0);
        self.phase = ScrollPhase::Idle;
        self.offset = self.section_width;
        self.baseline = self.offset;
        self.last_raw = self.offset;
        self.offset
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
        self.phase = ScrollPhase::Idle;
    }

    pub fn set_viewport_width(&mut self, viewport_width: f64) {
        self.viewport_width = viewport_width.max(0.0);
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[inline]
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.phase == ScrollPhase::Dragging
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[inline]
    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    #[inline]
    pub fn section_width(&self) -> f64 {
        self.section_width
    }

    /// Full width of the tripled band.
    #[inline]
    pub fn band_width(&self) -> f64 {
        self.section_width * BAND_COUNT as f64
    }

    /// Last raw scroll position seen; drives the starfield parallax.
    #[inline]
    pub fn parallax_offset(&self) -> f64 {
        self.last_raw
    }

    // Largest scrollLeft the container accepts.
    fn max_offset(&self) -> f64 {
        (self.band_width() - self.viewport_width).max(0.0)
    }

    pub fn pointer_down(&mut self, origin_x: f64) {
        if !self.mounted {
            return;
        }
        self.phase = ScrollPhase::Dragging;
        self.origin_x = origin_x;
        self.baseline = self.offset;
    }

    /// Track a drag. The returned offset is already wrap-corrected, so no
    /// frame ever sees a position outside the band.
    pub fn pointer_move(&mut self, current_x: f64) -> Option<f64> {
        if !self.mounted || self.phase != ScrollPhase::Dragging {
            return None;
        }
        let delta = (current_x - self.origin_x) * DRAG_SENSITIVITY;
        // wrap before clamping so an overshoot past either edge carries over
        let mut next = self.baseline - delta;
        if next.is_finite() && self.section_width > 0.0 {
            while let Some(shift) = self.wrap_shift(next) {
                next += shift;
                self.baseline += shift;
            }
        }
        self.offset = next.clamp(0.0, self.max_offset());
        Some(self.offset)
    }

    /// End a drag (pointer up, touch end or the pointer leaving the viewport).
    pub fn pointer_up(&mut self) -> Option<f64> {
        if !self.mounted {
            return None;
        }
        self.phase = ScrollPhase::Settling;
        let jump = self.reconcile_edges();
        self.phase = ScrollPhase::Idle;
        jump
    }

    /// Feed a scroll event from the container (momentum, smooth scroll or our
    /// own writes). Correction is suppressed while a drag owns the offset.
    pub fn native_scroll(&mut self, raw_offset: f64) -> Option<ScrollUpdate> {
        if !self.mounted {
            return None;
        }
        self.last_raw = raw_offset;
        if self.is_dragging() {
            return Some(ScrollUpdate {
                parallax: raw_offset,
                correction: None,
            });
        }
        self.offset = raw_offset;
        let correction = self.wrap_shift(raw_offset).map(|shift| {
            self.offset = raw_offset + shift;
            self.offset
        });
        Some(ScrollUpdate {
            parallax: raw_offset,
            correction,
        })
    }

    /// Start a programmatic smooth scroll; returns the relative step to scroll
    /// by. The caller schedules `settle` once the transition has finished.
    pub fn nudge(&mut self, direction: Direction) -> Option<f64> {
        if !self.mounted || self.is_dragging() {
            return None;
        }
        self.phase = ScrollPhase::Settling;
        Some(direction.step())
    }

    pub fn settle(&mut self) -> Option<f64> {
        if !self.mounted || self.is_dragging() {
            return None;
        }
        let jump = self.reconcile_edges();
        self.phase = ScrollPhase::Idle;
        jump
    }

    fn wrap_shift(&self, offset: f64) -> Option<f64> {
        if offset >= self.section_width * 2.0 {
            Some(-self.section_width)
        } else if offset <= 0.0 {
            Some(self.section_width)
        } else {
            None
        }
    }

    // Pull a resting position near either wrap edge back into the middle band
    // so the next drag has headroom both ways.
    fn reconcile_edges(&mut self) -> Option<f64> {
        let sw = self.section_width;
        let next = if self.offset >= sw * 2.0 - EDGE_MARGIN {
            sw + (self.offset - sw * 2.0)
        } else if self.offset <= EDGE_MARGIN {
            sw * 2.0 - (EDGE_MARGIN - self.offset)
        } else {
            return None;
        };
        self.offset = next;
        self.baseline = next;
        Some(next)
    }
}
