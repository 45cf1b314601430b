//! One-shot entrance transitions for elements scrolling into view.

pub const DEFAULT_DURATION_MS: u32 = 1_000;
pub const DEFAULT_THRESHOLD: f64 = 0.1;
const SLIDE_OFFSET_PX: u32 = 40;
const ZOOM_START_SCALE: f64 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealEffect {
    FadeIn,
    FadeUp,
    FadeLeft,
    FadeRight,
    ZoomIn,
}

impl RevealEffect {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeUp => "fade-up",
            Self::FadeLeft => "fade-left",
            Self::FadeRight => "fade-right",
            Self::ZoomIn => "zoom-in",
        }
    }

    /// Transform applied while hidden. `fade-left` enters from the right,
    /// `fade-right` from the left.
    fn hidden_transform(self) -> String {
        match self {
            Self::FadeIn => "none".to_string(),
            Self::FadeUp => format!("translate3d(0, {SLIDE_OFFSET_PX}px, 0)"),
            Self::FadeLeft => format!("translate3d({SLIDE_OFFSET_PX}px, 0, 0)"),
            Self::FadeRight => format!("translate3d(-{SLIDE_OFFSET_PX}px, 0, 0)"),
            Self::ZoomIn => format!("scale({ZOOM_START_SCALE})"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealConfig {
    pub effect: RevealEffect,
    pub duration_ms: u32,
    /// Visible fraction of the element that counts as "in view".
    pub threshold: f64,
}

impl RevealConfig {
    pub fn new(effect: RevealEffect) -> Self {
        Self {
            effect,
            ..Self::default()
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn clamped_threshold(&self) -> f64 {
        if self.threshold.is_finite() {
            self.threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        }
    }

    pub fn style(&self, revealed: bool) -> String {
        let transition = format!(
            "transition: opacity {ms}ms ease-out, transform {ms}ms ease-out;",
            ms = self.duration_ms
        );

        if revealed {
            format!("opacity: 1; transform: none; {transition}")
        } else {
            format!(
                "opacity: 0; transform: {}; {transition}",
                self.effect.hidden_transform()
            )
        }
    }
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            effect: RevealEffect::FadeUp,
            duration_ms: DEFAULT_DURATION_MS,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Per-element "already revealed" flag. Once set it never clears.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn revealed() -> Self {
        Self { revealed: true }
    }

    /// Starting state for a wrapper. Users who asked for reduced motion never
    /// see the hidden style.
    pub fn initial(reduced_motion: bool) -> Self {
        Self {
            revealed: reduced_motion,
        }
    }

    /// Shows the element without waiting for an intersection, for when no
    /// observer can watch it. Returns `true` if it was still hidden.
    pub fn force(&mut self) -> bool {
        self.observe(true)
    }

    pub fn is_revealed(self) -> bool {
        self.revealed
    }

    /// Feeds one intersection sample; returns `true` only on the hidden → shown edge.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.revealed || !intersecting {
            return false;
        }
        self.revealed = true;
        true
    }
}
