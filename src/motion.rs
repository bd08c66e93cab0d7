//! Scroll-linked and time-based animation primitives.
//!
//! Everything here is pure: the browser layer samples geometry (bounding
//! rects, viewport height, frame deltas) and feeds it in, then writes the
//! resulting [`Pose`] back to the DOM as `transform`/`opacity` styles.

use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MotionError {
    #[error("unknown trigger edge: {0}")]
    UnknownEdge(String),
    #[error("invalid trigger offset: {0}")]
    InvalidOffset(String),
    #[error("invalid toggle action: {0}")]
    InvalidToggleAction(String),
}

/// Visual properties driven by the animations on this site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub y: f64,
    pub opacity: f64,
}

impl Pose {
    pub const REST: Pose = Pose { y: 0.0, opacity: 1.0 };

    pub fn lerp(self, to: Pose, t: f64) -> Pose {
        Pose {
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }

    pub fn transform(&self) -> String {
        format!("translate3d(0px, {:.2}px, 0px)", self.y)
    }

    pub fn opacity_css(&self) -> String {
        format!("{:.3}", self.opacity.clamp(0.0, 1.0))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::REST
    }
}

/// A partial pose: properties left as `None` keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PoseTarget {
    pub y: Option<f64>,
    pub opacity: Option<f64>,
}

impl PoseTarget {
    fn resolve(&self, from: Pose) -> Pose {
        Pose {
            y: self.y.unwrap_or(from.y),
            opacity: self.opacity.unwrap_or(from.opacity),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    #[default]
    Power1Out,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// A point along an axis, either a fraction of a length or absolute pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Ratio(f64),
    Pixels(f64),
}

impl Anchor {
    fn resolve(self, length: f64) -> f64 {
        match self {
            Anchor::Ratio(r) => r * length,
            Anchor::Pixels(px) => px,
        }
    }
}

impl FromStr for Anchor {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Anchor::Ratio(0.0)),
            "center" => Ok(Anchor::Ratio(0.5)),
            "bottom" => Ok(Anchor::Ratio(1.0)),
            s if s.ends_with('%') => s[..s.len() - 1]
                .parse::<f64>()
                .map(|pct| Anchor::Ratio(pct / 100.0))
                .map_err(|_| MotionError::InvalidOffset(s.to_string())),
            s if s.ends_with("px") => s[..s.len() - 2]
                .parse::<f64>()
                .map(Anchor::Pixels)
                .map_err(|_| MotionError::InvalidOffset(s.to_string())),
            s if s.starts_with(|c: char| c.is_ascii_digit() || c == '-') => s
                .parse::<f64>()
                .map(Anchor::Pixels)
                .map_err(|_| MotionError::InvalidOffset(s.to_string())),
            s => Err(MotionError::UnknownEdge(s.to_string())),
        }
    }
}

/// `"<element anchor> <viewport anchor>"`, e.g. `"bottom 70%"`: the moment
/// the element's bottom edge crosses 70% of the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: Anchor,
    pub viewport: Anchor,
}

impl FromStr for TriggerPosition {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let element = parts
            .next()
            .ok_or_else(|| MotionError::UnknownEdge(s.to_string()))?
            .parse::<Anchor>()?;
        let viewport = parts
            .next()
            .map(str::parse::<Anchor>)
            .transpose()?
            .unwrap_or(Anchor::Ratio(0.0));
        if parts.next().is_some() {
            return Err(MotionError::InvalidOffset(s.to_string()));
        }
        Ok(Self { element, viewport })
    }
}

/// Vertical extent of an element relative to the viewport, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    fn at(&self, anchor: Anchor) -> f64 {
        self.top + anchor.resolve(self.bottom - self.top)
    }
}

/// The scroll interval between a start and an end trigger position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerBand {
    pub start: TriggerPosition,
    pub end: TriggerPosition,
}

impl TriggerBand {
    pub fn new(start: &str, end: &str) -> Result<Self, MotionError> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    /// Progress through the band for the element's current position,
    /// clamped to `[0, 1]`.
    pub fn progress(&self, element: Span, viewport_height: f64) -> f64 {
        let start_line = self.start.viewport.resolve(viewport_height);
        let end_line = self.end.viewport.resolve(viewport_height);
        let start_edge = element.at(self.start.element);
        let end_edge = element.at(self.end.element);

        // scrolling down by d moves both edges up by d
        let scrolled_past_start = start_line - start_edge;
        let distance = (start_line - end_line) - (start_edge - end_edge);
        if distance <= f64::EPSILON {
            return if scrolled_past_start >= 0.0 { 1.0 } else { 0.0 };
        }
        (scrolled_past_start / distance).clamp(0.0, 1.0)
    }
}

/// One tween applied to `targets` elements, each starting `stagger` seconds
/// after the previous one. Timeline progress maps linearly onto the full
/// duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggeredTimeline {
    pub targets: usize,
    pub from: Pose,
    pub to: Pose,
    pub duration: f64,
    pub stagger: f64,
    pub ease: Ease,
}

impl StaggeredTimeline {
    pub fn total_duration(&self) -> f64 {
        self.duration + self.stagger * self.targets.saturating_sub(1) as f64
    }

    pub fn pose_at(&self, index: usize, progress: f64) -> Pose {
        let time = progress.clamp(0.0, 1.0) * self.total_duration();
        let local = if self.duration <= 0.0 {
            1.0
        } else {
            (time - self.stagger * index as f64) / self.duration
        };
        self.from.lerp(self.to, self.ease.apply(local))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl FromStr for ToggleAction {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => Self::Play,
            "pause" => Self::Pause,
            "resume" => Self::Resume,
            "reverse" => Self::Reverse,
            "restart" => Self::Restart,
            "reset" => Self::Reset,
            "complete" => Self::Complete,
            "none" => Self::None,
            other => return Err(MotionError::InvalidToggleAction(other.to_string())),
        })
    }
}

/// Actions for entering, leaving, re-entering from below and leaving back
/// above the trigger band, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl Default for ToggleActions {
    fn default() -> Self {
        Self {
            on_enter: ToggleAction::Play,
            on_leave: ToggleAction::None,
            on_enter_back: ToggleAction::None,
            on_leave_back: ToggleAction::None,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<ToggleAction>, _>>()?;
        match actions[..] {
            [on_enter, on_leave, on_enter_back, on_leave_back] => Ok(Self {
                on_enter,
                on_leave,
                on_enter_back,
                on_leave_back,
            }),
            _ => Err(MotionError::InvalidToggleAction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

impl TriggerEvent {
    /// The event fired when the raw band progress moves from `prev` to `next`.
    pub fn between(prev: f64, next: f64) -> Option<Self> {
        let was_before = prev <= 0.0;
        let was_after = prev >= 1.0;
        let is_before = next <= 0.0;
        let is_after = next >= 1.0;
        match (was_before, was_after, is_before, is_after) {
            (true, _, false, _) => Some(Self::Enter),
            (false, false, _, true) => Some(Self::Leave),
            (_, true, _, false) => Some(Self::EnterBack),
            (false, false, true, _) => Some(Self::LeaveBack),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    pub band: TriggerBand,
    /// Seconds the playhead takes to catch up with the scroll position.
    /// `None` plays the timeline on its own clock per `toggle_actions`.
    pub scrub: Option<f64>,
    pub toggle_actions: ToggleActions,
}

/// Declarative form of a [`ScrollTrigger`], written the way the trigger
/// positions read in markup: `start: "bottom 70%"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTriggerConfig {
    pub start: &'static str,
    pub end: &'static str,
    pub scrub: Option<f64>,
    pub toggle_actions: Option<&'static str>,
}

impl TryFrom<ScrollTriggerConfig> for ScrollTrigger {
    type Error = MotionError;

    fn try_from(config: ScrollTriggerConfig) -> Result<Self, Self::Error> {
        Ok(Self {
            band: TriggerBand::new(config.start, config.end)?,
            scrub: config.scrub,
            toggle_actions: config
                .toggle_actions
                .map(str::parse::<ToggleActions>)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

/// Playback position of a scroll-triggered timeline, in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct Playhead {
    trigger: ScrollTrigger,
    duration: f64,
    position: f64,
    last_progress: f64,
    direction: Option<Direction>,
}

impl Playhead {
    pub fn new(trigger: ScrollTrigger, duration: f64) -> Self {
        Self {
            trigger,
            duration,
            position: 0.0,
            last_progress: 0.0,
            direction: None,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// True when advancing with `progress` would change nothing.
    pub fn is_settled(&self, progress: f64) -> bool {
        match self.trigger.scrub {
            Some(_) => self.position == progress,
            None => self.direction.is_none() && self.last_progress == progress,
        }
    }

    /// Advances by `dt` seconds given the current band progress and returns
    /// the trigger event crossed on the way, if any.
    pub fn advance(&mut self, progress: f64, dt: f64) -> Option<TriggerEvent> {
        let event = TriggerEvent::between(self.last_progress, progress);
        self.last_progress = progress;

        match self.trigger.scrub {
            Some(lag) => self.position = scrub_toward(self.position, progress, lag, dt),
            None => {
                if let Some(event) = event {
                    self.apply(self.action_for(event));
                }
                self.play(dt);
            }
        }
        event
    }

    fn action_for(&self, event: TriggerEvent) -> ToggleAction {
        let actions = &self.trigger.toggle_actions;
        match event {
            TriggerEvent::Enter => actions.on_enter,
            TriggerEvent::Leave => actions.on_leave,
            TriggerEvent::EnterBack => actions.on_enter_back,
            TriggerEvent::LeaveBack => actions.on_leave_back,
        }
    }

    fn apply(&mut self, action: ToggleAction) {
        match action {
            ToggleAction::Play | ToggleAction::Resume => self.direction = Some(Direction::Forward),
            ToggleAction::Reverse => self.direction = Some(Direction::Backward),
            ToggleAction::Restart => {
                self.position = 0.0;
                self.direction = Some(Direction::Forward);
            }
            ToggleAction::Reset => {
                self.position = 0.0;
                self.direction = None;
            }
            ToggleAction::Complete => {
                self.position = 1.0;
                self.direction = None;
            }
            ToggleAction::Pause => self.direction = None,
            ToggleAction::None => {}
        }
    }

    fn play(&mut self, dt: f64) {
        let Some(direction) = self.direction else {
            return;
        };
        let step = if self.duration > 0.0 { dt / self.duration } else { 1.0 };
        self.position = match direction {
            Direction::Forward => (self.position + step).min(1.0),
            Direction::Backward => (self.position - step).max(0.0),
        };
        if self.position <= 0.0 || self.position >= 1.0 {
            self.direction = None;
        }
    }
}

/// Moves `current` toward `target` so that it lands within roughly `lag`
/// seconds. A zero lag snaps.
pub fn scrub_toward(current: f64, target: f64, lag: f64, dt: f64) -> f64 {
    if lag <= 0.0 {
        return target;
    }
    let next = current + (target - current) * (1.0 - (-5.0 * dt / lag).exp());
    if (target - next).abs() < 1e-4 {
        target
    } else {
        next
    }
}

/// A time-based tween from the pose it started at toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: Pose,
    to: Pose,
    duration: f64,
    elapsed: f64,
    ease: Ease,
}

/// A pose that can be tweened. Starting a new tween overwrites the running
/// one, beginning from wherever the pose currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct Animated {
    pose: Pose,
    tween: Option<Tween>,
}

impl Animated {
    pub fn new(pose: Pose) -> Self {
        Self { pose, tween: None }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn target(&self) -> Pose {
        self.tween.map(|t| t.to).unwrap_or(self.pose)
    }

    pub fn is_idle(&self) -> bool {
        self.tween.is_none()
    }

    pub fn tween_to(&mut self, target: PoseTarget, duration: f64) {
        self.tween = Some(Tween {
            from: self.pose,
            to: target.resolve(self.pose),
            duration,
            elapsed: 0.0,
            ease: Ease::default(),
        });
    }

    pub fn tick(&mut self, dt: f64) -> Pose {
        if let Some(mut tween) = self.tween.take() {
            tween.elapsed += dt;
            let t = if tween.duration <= 0.0 {
                1.0
            } else {
                tween.elapsed / tween.duration
            };
            self.pose = tween.from.lerp(tween.to, tween.ease.apply(t));
            if t < 1.0 {
                self.tween = Some(tween);
            }
        }
        self.pose
    }
}
