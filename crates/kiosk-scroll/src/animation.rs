//! Animation state machine
//!
//! Two states, two legal transitions:
//!   Idle      --begin-->    Animating
//!   Animating --complete--> Idle
//! Anything else is an `IllegalTransition`. At most one animation exists at
//! a time; there is no cancel or retarget transition.

use std::time::Duration;

use kiosk_core::{KioskError, KioskResult, MonoTime};

use crate::{interpolate, linear_progress};

/// One eased scroll from `start` to `target`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animation {
    pub start: f64,
    pub target: f64,
    pub started_at: MonoTime,
    pub duration: Duration,
}

/// Position of an animation at a given instant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationFrame {
    pub offset: f64,
    pub progress: f64,
}

impl AnimationFrame {
    pub fn is_last(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Animation {
    pub fn new(start: f64, target: f64, started_at: MonoTime, duration: Duration) -> Self {
        Animation {
            start,
            target,
            started_at,
            duration,
        }
    }

    pub fn frame_at(&self, now: MonoTime) -> AnimationFrame {
        let progress = linear_progress(now.since(self.started_at), self.duration);
        AnimationFrame {
            offset: interpolate(self.start, self.target, progress),
            progress,
        }
    }
}

/// Requested state change
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Begin,
    Complete,
}

impl Transition {
    pub fn name(self) -> &'static str {
        match self {
            Transition::Begin => "begin",
            Transition::Complete => "complete",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Animating(Animation),
}

impl AnimationState {
    pub fn is_animating(&self) -> bool {
        matches!(self, AnimationState::Animating(_))
    }

    pub fn animation(&self) -> Option<&Animation> {
        match self {
            AnimationState::Animating(animation) => Some(animation),
            AnimationState::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Animating(_) => "animating",
        }
    }

    /// Idle → Animating
    pub fn begin(&mut self, animation: Animation) -> KioskResult<()> {
        match self {
            AnimationState::Idle => {
                *self = AnimationState::Animating(animation);
                Ok(())
            }
            AnimationState::Animating(_) => Err(self.illegal(Transition::Begin)),
        }
    }

    /// Animating → Idle, returning the finished animation
    pub fn complete(&mut self) -> KioskResult<Animation> {
        match *self {
            AnimationState::Animating(animation) => {
                *self = AnimationState::Idle;
                Ok(animation)
            }
            AnimationState::Idle => Err(self.illegal(Transition::Complete)),
        }
    }

    fn illegal(&self, transition: Transition) -> KioskError {
        KioskError::IllegalTransition {
            state: self.name(),
            transition: transition.name(),
        }
    }
}
