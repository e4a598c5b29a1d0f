//! Entrance animations and the scroll/visibility state that drives them.
//!
//! Everything here is plain data so the components only have to pick a
//! state and ask for the inline style.

/// Vertical offset past which the navbar switches to its compact mode.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Delay between consecutive children of a staggered container, in seconds.
pub const STAGGER_STEP: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Vertical offset in pixels.
    pub offset_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    EaseOut,
}

impl Ease {
    pub const fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Delay applied to each child relative to the previous one, if any.
    pub stagger_children: Option<f64>,
}

/// A hidden/visible pair plus the transition between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationVariant {
    pub hidden: VisualState,
    pub visible: VisualState,
    pub transition: Transition,
}

pub const FADE_IN: AnimationVariant = AnimationVariant {
    hidden: VisualState {
        opacity: 0.0,
        offset_y: 20.0,
    },
    visible: VisualState {
        opacity: 1.0,
        offset_y: 0.0,
    },
    transition: Transition {
        duration: 0.6,
        ease: Ease::EaseOut,
        stagger_children: None,
    },
};

pub const STAGGER_CONTAINER: AnimationVariant = AnimationVariant {
    hidden: VisualState {
        opacity: 0.0,
        offset_y: 0.0,
    },
    visible: VisualState {
        opacity: 1.0,
        offset_y: 0.0,
    },
    transition: Transition {
        duration: 0.3,
        ease: Ease::Linear,
        stagger_children: Some(STAGGER_STEP),
    },
};

impl AnimationVariant {
    /// Delay for the `index`-th child of a container using this variant.
    pub fn child_delay(&self, index: usize) -> f64 {
        self.transition
            .stagger_children
            .map(|step| (step * index as f64 * 100.0).round() / 100.0)
            .unwrap_or(0.0)
    }

    /// Inline style for the element in the given state.
    pub fn style(&self, visible: bool, delay: f64) -> String {
        let state = if visible { self.visible } else { self.hidden };
        let Transition { duration, ease, .. } = self.transition;
        format!(
            "opacity: {}; transform: translateY({}px); transition: opacity {duration}s {ease} {delay}s, transform {duration}s {ease} {delay}s;",
            state.opacity,
            state.offset_y,
            ease = ease.css(),
        )
    }
}

/// Compact/expanded mode of the fixed header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub scrolled: bool,
}

impl ScrollState {
    /// Recomputes the mode for a new scroll offset.
    ///
    /// Returns `true` when the mode changed, so callers can skip redundant
    /// updates.
    pub fn observe(&mut self, offset_y: f64) -> bool {
        let scrolled = offset_y > SCROLL_THRESHOLD;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub const fn padding_class(self) -> &'static str {
        if self.scrolled {
            "py-3"
        } else {
            "py-6"
        }
    }
}

/// One-shot flag: set on the first trigger, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnceLatch {
    fired: bool,
}

impl OnceLatch {
    /// Returns `true` only for the call that sets the latch.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }

    pub const fn is_fired(self) -> bool {
        self.fired
    }
}
