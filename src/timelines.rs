//! The scroll-driven animations used on the home page.

use crate::motion::{Ease, Pose, ScrollTriggerConfig, StaggeredTimeline};
use crate::profile::PROFILE;

/// A scroll trigger paired with the timeline it scrubs. The trigger must be
/// measured on an element the timeline doesn't move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollScene {
    pub trigger: ScrollTriggerConfig,
    pub timeline: StaggeredTimeline,
}

impl ScrollScene {
    pub fn duration(&self) -> f64 {
        self.timeline.total_duration()
    }

    pub fn pose_at(&self, index: usize, position: f64) -> Pose {
        self.timeline.pose_at(index, position)
    }
}

/// Hero content moves up and out as the section scrolls away.
pub fn banner_scene() -> ScrollScene {
    ScrollScene {
        trigger: ScrollTriggerConfig {
            start: "bottom 70%",
            end: "bottom 10%",
            scrub: Some(1.0),
            toggle_actions: None,
        },
        timeline: StaggeredTimeline {
            targets: PROFILE.animated_elements(),
            from: Pose::REST,
            to: Pose {
                y: -150.0,
                opacity: 0.0,
            },
            duration: 0.5,
            stagger: 0.02,
            ease: Ease::Power1Out,
        },
    }
}

/// The project list rises into place as its top enters the viewport.
pub const ENTRANCE_SCENE: ScrollScene = ScrollScene {
    trigger: ScrollTriggerConfig {
        start: "top bottom",
        end: "top 80%",
        scrub: Some(1.0),
        toggle_actions: Some("restart none none reverse"),
    },
    timeline: StaggeredTimeline {
        targets: 1,
        from: Pose {
            y: 150.0,
            opacity: 0.0,
        },
        to: Pose::REST,
        duration: 0.5,
        stagger: 0.0,
        ease: Ease::Power1Out,
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Playhead, ScrollTrigger, Span};

    const VIEWPORT: f64 = 1000.0;
    const FRAME: f64 = 1.0 / 60.0;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    struct Scrubber {
        scene: ScrollScene,
        trigger: ScrollTrigger,
        head: Playhead,
    }

    impl Scrubber {
        fn new(scene: ScrollScene) -> Self {
            let trigger = ScrollTrigger::try_from(scene.trigger).unwrap();
            Self {
                scene,
                trigger,
                head: Playhead::new(trigger, scene.duration()),
            }
        }

        // hold the trigger element at `span` for `seconds` of frames
        fn hold(&mut self, span: Span, seconds: f64) -> f64 {
            let progress = self.trigger.band.progress(span, VIEWPORT);
            for _ in 0..(seconds / FRAME) as usize {
                self.head.advance(progress, FRAME);
            }
            self.head.position()
        }

        fn pose(&self, index: usize) -> Pose {
            self.scene.pose_at(index, self.head.position())
        }
    }

    fn banner_span(bottom: f64) -> Span {
        Span {
            top: bottom - 800.0,
            bottom,
        }
    }

    fn list_span(top: f64) -> Span {
        Span {
            top,
            bottom: top + 1200.0,
        }
    }

    #[test]
    fn test_banner_scrubs_through_band_and_reverts() {
        let scene = banner_scene();
        let last = scene.timeline.targets - 1;
        assert_eq!(last, 4);
        let mut banner = Scrubber::new(scene);

        // below the start boundary nothing moves
        assert_eq!(banner.hold(banner_span(900.0), 2.0), 0.0);
        for i in 0..=last {
            assert_eq!(banner.pose(i), Pose::REST);
        }

        // halfway through the band
        assert!(close(banner.hold(banner_span(400.0), 5.0), 0.5));
        let first = banner.pose(0);
        let tail = banner.pose(last);
        assert!(first.y < 0.0 && first.y > -150.0);
        assert!(first.y < tail.y);

        // end boundary: every element fully offset and transparent
        assert_eq!(banner.hold(banner_span(100.0), 5.0), 1.0);
        for i in 0..=last {
            let pose = banner.pose(i);
            assert!(close(pose.y, -150.0));
            assert!(close(pose.opacity, 0.0));
        }

        // back above the start boundary everything is restored
        assert_eq!(banner.hold(banner_span(750.0), 5.0), 0.0);
        for i in 0..=last {
            assert_eq!(banner.pose(i), Pose::REST);
        }
    }

    #[test]
    fn test_list_entrance_follows_untransformed_position() {
        let mut list = Scrubber::new(ENTRANCE_SCENE);
        assert_eq!(list.pose(0), ENTRANCE_SCENE.timeline.from);

        // held halfway through the band, re-sampled every frame
        assert!(close(list.hold(list_span(900.0), 5.0), 0.5));
        let pose = list.pose(0);
        assert!(close(pose.y, 37.5));
        assert!(close(pose.opacity, 0.75));

        assert!(close(list.hold(list_span(850.0), 5.0), 0.75));
        assert!(list.pose(0).opacity > 0.75);

        // stopping right at the end boundary lands at rest
        assert_eq!(list.hold(list_span(800.0), 5.0), 1.0);
        assert_eq!(list.pose(0), Pose::REST);

        // scrolling back up reverses
        assert_eq!(list.hold(list_span(1100.0), 5.0), 0.0);
        assert_eq!(list.pose(0), ENTRANCE_SCENE.timeline.from);
    }

    #[test]
    fn test_entrance_offset_would_stall_a_self_measured_trigger() {
        // the entrance pose at the band start pushes the list 150px down;
        // measuring that shifted box would read as not yet started
        let trigger = ScrollTrigger::try_from(ENTRANCE_SCENE.trigger).unwrap();
        let natural = list_span(900.0);
        let offset = ENTRANCE_SCENE.pose_at(0, 0.0).y;
        let shifted = Span {
            top: natural.top + offset,
            bottom: natural.bottom + offset,
        };
        assert!(close(trigger.band.progress(natural, VIEWPORT), 0.5));
        assert_eq!(trigger.band.progress(shifted, VIEWPORT), 0.0);
    }
}
