//! Interaction events delivered to the dashboard
//!
//! The dashboard consumes a small closed set of user-input events. Two
//! consumers care about them:
//! - Idle monitor: pointer-move, touch-start, click, scroll, key-down
//! - Snap controller: scroll, touch-end

/// A user (or synthetic) interaction with the kiosk
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    PointerMove,
    TouchStart,
    TouchEnd,
    Click,
    /// The scroll surface offset changed, whoever changed it
    Scroll,
    KeyDown,
}

impl Interaction {
    pub const ALL: [Interaction; 6] = [
        Interaction::PointerMove,
        Interaction::TouchStart,
        Interaction::TouchEnd,
        Interaction::Click,
        Interaction::Scroll,
        Interaction::KeyDown,
    ];

    /// Whether this event restarts the idle countdown
    pub fn resets_idle(self) -> bool {
        !matches!(self, Interaction::TouchEnd)
    }

    /// Whether the snap controller reacts to this event
    pub fn drives_snap(self) -> bool {
        matches!(self, Interaction::Scroll | Interaction::TouchEnd)
    }

    pub fn name(self) -> &'static str {
        match self {
            Interaction::PointerMove => "pointer-move",
            Interaction::TouchStart => "touch-start",
            Interaction::TouchEnd => "touch-end",
            Interaction::Click => "click",
            Interaction::Scroll => "scroll",
            Interaction::KeyDown => "key-down",
        }
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
