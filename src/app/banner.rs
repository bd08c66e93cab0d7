use leptos::{html, prelude::*};

use crate::motion::Pose;
use crate::profile::PROFILE;
use crate::timelines::banner_scene;

use super::animation::use_scroll_scrub;

#[component]
pub fn Banner() -> impl IntoView {
    let container_ref = NodeRef::<html::Div>::new();
    let scene = banner_scene();
    let progress = use_scroll_scrub(container_ref, scene.trigger, scene.duration());
    let pose = move |index: usize| -> Signal<Pose> {
        Signal::derive(move || {
            progress
                .map(|p| scene.pose_at(index, p.get()))
                .unwrap_or(Pose::REST)
        })
    };

    view! {
        <section class="relative overflow-hidden" id="banner">
            <ArrowAnimation />
            <div
                class="container h-[100svh] min-h-[530px] max-md:pb-10 flex justify-between items-center max-md:flex-col"
                node_ref=container_ref
            >
                <div class="max-md:grow max-md:flex flex-col justify-center items-start max-w-[544px]">
                    <SlideUpAndFade pose=pose(0)>
                        <h1 class="banner-title leading-[.95] text-6xl sm:text-[80px] font-anton">
                            <span class="text-primary">{PROFILE.first_name}</span>
                            <br />
                            <span class="ml-4">{PROFILE.last_name}</span>
                        </h1>
                    </SlideUpAndFade>
                    <SlideUpAndFade pose=pose(1) class="banner-description mt-6">
                        <p class="text-lg text-muted-foreground">{PROFILE.description}</p>
                    </SlideUpAndFade>
                    <SlideUpAndFade pose=pose(2) class="mt-4 flex gap-4">
                        {PROFILE
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="text-muted-foreground hover:text-primary transition-colors text-[28px]"
                                        aria-label=social.kind.label()
                                    >
                                        <i class=social.kind.icon_class()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </SlideUpAndFade>
                </div>

                <div class="md:absolute bottom-[10%] right-[4%] flex md:flex-col gap-4 md:gap-8 text-center md:text-right">
                    {PROFILE
                        .stats
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            view! {
                                <SlideUpAndFade pose=pose(3 + i)>
                                    <h5 class="text-3xl sm:text-4xl font-anton text-primary mb-1.5">
                                        {stat.value}
                                    </h5>
                                    <p class="text-muted-foreground">{stat.label}</p>
                                </SlideUpAndFade>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Decorative scroll cue on wide screens.
#[component]
fn ArrowAnimation() -> impl IntoView {
    view! {
        <a
            href="#selected-projects"
            class="max-md:hidden absolute left-1/2 bottom-6 -translate-x-1/2 z-[1] text-muted-foreground hover:text-primary transition-colors"
            aria-label="Scroll to projects"
        >
            <svg
                class="animate-bounce"
                width="24"
                height="48"
                viewBox="0 0 24 48"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
                stroke-linecap="round"
                stroke-linejoin="round"
            >
                <path d="M12 2v42" />
                <path d="M4 36l8 8 8-8" />
            </svg>
        </a>
    }
}

#[component]
fn SlideUpAndFade(
    pose: Signal<Pose>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=format!("slide-up-and-fade {class}")
            style:transform=move || pose.get().transform()
            style:opacity=move || pose.get().opacity_css()
        >
            {children()}
        </div>
    }
}
