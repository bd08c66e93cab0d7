//! Pointer tracking and selection for the project preview panel.

use crate::motion::PoseTarget;

/// Viewports narrower than this have no hover surface.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub const FOLLOW_DURATION: f64 = 1.0;
pub const HIDE_DURATION: f64 = 0.3;

pub fn tracking_enabled(viewport_width: f64) -> bool {
    viewport_width >= MOBILE_BREAKPOINT
}

/// Client-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelCommand {
    /// Narrow viewport: leave the panel alone and drop the selection.
    Disabled,
    Hide,
    /// Center the panel vertically on the pointer, `y` relative to the
    /// container's top edge.
    Follow { y: f64 },
}

impl PanelCommand {
    pub fn compute(viewport_width: f64, container: Rect, panel_height: f64, x: f64, y: f64) -> Self {
        if !tracking_enabled(viewport_width) {
            return Self::Disabled;
        }
        if !container.contains(x, y) {
            return Self::Hide;
        }
        Self::Follow {
            y: (y - container.top) - panel_height / 2.0,
        }
    }

    /// The tween this command asks of the panel.
    pub fn tween(&self) -> Option<(PoseTarget, f64)> {
        match *self {
            Self::Disabled => None,
            Self::Hide => Some((
                PoseTarget {
                    y: None,
                    opacity: Some(0.0),
                },
                HIDE_DURATION,
            )),
            Self::Follow { y } => Some((
                PoseTarget {
                    y: Some(y),
                    opacity: Some(1.0),
                },
                FOLLOW_DURATION,
            )),
        }
    }
}

/// At most one project slug is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    slug: Option<String>,
}

impl Selection {
    pub fn new(initial: Option<&str>, viewport_width: f64) -> Self {
        let mut selection = Self {
            slug: initial.map(str::to_string),
        };
        selection.resize(viewport_width);
        selection
    }

    pub fn current(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn enter(&mut self, slug: &str, viewport_width: f64) {
        self.slug = tracking_enabled(viewport_width).then(|| slug.to_string());
    }

    /// Drops the selection on a narrow viewport. Returns whether it changed.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        if !tracking_enabled(viewport_width) && self.slug.is_some() {
            self.slug = None;
            return true;
        }
        false
    }

    pub fn is_visible(&self, slug: &str) -> bool {
        self.slug.as_deref() == Some(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTAINER: Rect = Rect {
        left: 100.0,
        top: 200.0,
        right: 1100.0,
        bottom: 1000.0,
    };

    fn visible<'a>(selection: &Selection, slugs: &[&'a str]) -> Vec<&'a str> {
        slugs
            .iter()
            .copied()
            .filter(|s| selection.is_visible(s))
            .collect()
    }

    #[test]
    fn test_narrow_viewport_never_tracks() {
        for width in [320.0, 500.0, 767.0, 767.9] {
            assert_eq!(
                PanelCommand::compute(width, CONTAINER, 400.0, 500.0, 500.0),
                PanelCommand::Disabled
            );
            let mut selection = Selection::new(Some("a"), width);
            assert_eq!(selection.current(), None);
            selection.enter("b", width);
            assert_eq!(selection.current(), None);
        }
    }

    #[test]
    fn test_follow_centers_panel_on_pointer() {
        let cmd = PanelCommand::compute(1024.0, CONTAINER, 400.0, 500.0, 650.0);
        assert_eq!(cmd, PanelCommand::Follow { y: 250.0 });

        let (target, duration) = cmd.tween().unwrap();
        assert_eq!(target.y, Some(250.0));
        assert_eq!(target.opacity, Some(1.0));
        assert_eq!(duration, FOLLOW_DURATION);

        // on the edge counts as inside
        assert_eq!(
            PanelCommand::compute(1024.0, CONTAINER, 400.0, 100.0, 200.0),
            PanelCommand::Follow { y: -200.0 }
        );
    }

    #[test]
    fn test_outside_container_hides_panel() {
        for (x, y) in [(50.0, 500.0), (1200.0, 500.0), (500.0, 150.0), (500.0, 1001.0)] {
            let cmd = PanelCommand::compute(1024.0, CONTAINER, 400.0, x, y);
            assert_eq!(cmd, PanelCommand::Hide);
            let (target, duration) = cmd.tween().unwrap();
            assert_eq!(target.opacity, Some(0.0));
            assert_eq!(target.y, None);
            assert_eq!(duration, HIDE_DURATION);
        }
        assert!(PanelCommand::Disabled.tween().is_none());
    }

    #[test]
    fn test_hover_shows_only_that_card() {
        let slugs = ["a", "b", "c"];
        let mut selection = Selection::new(Some("a"), 1024.0);
        assert_eq!(visible(&selection, &slugs), vec!["a"]);

        selection.enter("b", 1024.0);
        assert_eq!(selection.current(), Some("b"));
        assert_eq!(visible(&selection, &slugs), vec!["b"]);
    }

    #[test]
    fn test_no_selection_shows_no_card() {
        let selection = Selection::new(None, 1024.0);
        assert!(visible(&selection, &["a", "b", "c"]).is_empty());
    }

    #[test]
    fn test_resize_to_mobile_clears_selection() {
        let mut selection = Selection::new(Some("a"), 1024.0);
        selection.enter("b", 1024.0);
        assert!(!selection.resize(1024.0));
        assert_eq!(selection.current(), Some("b"));

        assert!(selection.resize(500.0));
        assert_eq!(selection.current(), None);
        assert!(!selection.resize(500.0));
        assert_eq!(
            PanelCommand::compute(500.0, CONTAINER, 400.0, 500.0, 500.0),
            PanelCommand::Disabled
        );
    }
}
