use leptos::{html, prelude::*, reactive::owner::LocalStorage};
use leptos_use::{
    utils::Pausable, use_raf_fn, use_window_scroll, use_window_size, UseRafFnCallbackArgs,
    UseWindowSizeReturn,
};
use web_sys::Element;

use crate::hover::Rect;
use crate::motion::{
    Animated, Playhead, Pose, PoseTarget, ScrollTrigger, ScrollTriggerConfig, Span,
};

pub fn client_rect(el: &Element) -> Rect {
    let rect = el.get_bounding_client_rect();
    Rect {
        left: rect.left(),
        top: rect.top(),
        right: rect.right(),
        bottom: rect.bottom(),
    }
}

/// Timeline position of a scroll-triggered animation on `target`, in
/// `[0, 1]`. `None` when the trigger config doesn't parse; callers render
/// their elements at rest.
pub fn use_scroll_scrub(
    target: NodeRef<html::Div>,
    config: ScrollTriggerConfig,
    duration: f64,
) -> Option<Signal<f64>> {
    let trigger = match ScrollTrigger::try_from(config) {
        Ok(trigger) => trigger,
        Err(e) => {
            log::error!("skipping scroll animation: {e}");
            return None;
        }
    };

    let (_, scroll_y) = use_window_scroll();
    let UseWindowSizeReturn { height, .. } = use_window_size();
    let band_progress = Memo::new(move |_| {
        scroll_y.track();
        let viewport_height = height.get();
        target
            .get()
            .map(|el| {
                let rect = client_rect(&el);
                trigger.band.progress(
                    Span {
                        top: rect.top,
                        bottom: rect.bottom,
                    },
                    viewport_height,
                )
            })
            .unwrap_or(0.0)
    });

    let playhead = StoredValue::new(Playhead::new(trigger, duration));
    let (position, set_position) = signal(0.0);
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let progress = band_progress.get_untracked();
        let dt = args.delta / 1000.0;
        let mut moved = None;
        playhead.update_value(|head| {
            if head.is_settled(progress) {
                return;
            }
            if let Some(event) = head.advance(progress, dt) {
                log::debug!("scroll trigger {event:?} at {progress:.2}");
            }
            moved = Some(head.position());
        });
        if let Some(p) = moved {
            set_position.set(p);
        }
    });

    Some(position.into())
}

/// A tweenable pose. Starting a tween overwrites the one in flight.
#[derive(Clone, Copy)]
pub struct TweenHandle {
    animated: StoredValue<Animated>,
    pose: ReadSignal<Pose>,
    resume: StoredValue<Box<dyn Fn()>, LocalStorage>,
}

impl TweenHandle {
    pub fn to(&self, target: PoseTarget, duration: f64) {
        self.animated.update_value(|a| a.tween_to(target, duration));
        self.resume.with_value(|resume| resume());
    }

    pub fn pose(&self) -> Signal<Pose> {
        self.pose.into()
    }
}

/// The frame loop only runs while a tween is in flight.
pub fn use_tween(initial: Pose) -> TweenHandle {
    let animated = StoredValue::new(Animated::new(initial));
    let (pose, set_pose) = signal(initial);
    let pause_slot = StoredValue::new_local(None::<Box<dyn Fn()>>);
    let Pausable { pause, resume, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let mut next = None;
        let mut idle = false;
        animated.update_value(|a| {
            if !a.is_idle() {
                next = Some(a.tick(args.delta / 1000.0));
            }
            idle = a.is_idle();
        });
        if let Some(p) = next {
            set_pose.set(p);
        }
        if idle {
            pause_slot.with_value(|pause| {
                if let Some(pause) = pause {
                    pause();
                }
            });
        }
    });
    pause_slot.set_value(Some(Box::new(pause) as Box<dyn Fn()>));
    TweenHandle {
        animated,
        pose,
        resume: StoredValue::new_local(Box::new(resume) as Box<dyn Fn()>),
    }
}
