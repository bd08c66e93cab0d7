use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{use_event_listener, use_window, use_window_size, UseWindowSizeReturn};

use crate::hover::{tracking_enabled, PanelCommand, Selection};
use crate::motion::Pose;
use crate::projects::{accent, projects, ProjectRecord};
use crate::timelines::ENTRANCE_SCENE;

use super::animation::{client_rect, use_scroll_scrub, use_tween};
use super::section_title::SectionTitle;

#[component]
pub fn ProjectList() -> impl IntoView {
    let content = match projects() {
        Ok(projects) => Either::Left(view! { <ProjectShowcase projects=projects /> }),
        Err(e) => {
            log::error!("couldn't load projects: {e}");
            Either::Right(view! { <p class="text-muted-foreground">"Projects are unavailable right now."</p> })
        }
    };

    view! {
        <section class="pb-section" id="selected-projects">
            <div class="container">
                <SectionTitle title="SELECTED PROJECTS" />
                {content}
            </div>
        </section>
    }
}

#[component]
fn ProjectShowcase(projects: &'static [ProjectRecord]) -> impl IntoView {
    let trigger_ref = NodeRef::<html::Div>::new();
    let container_ref = NodeRef::<html::Div>::new();
    let panel_ref = NodeRef::<html::Div>::new();
    let UseWindowSizeReturn { width, .. } = use_window_size();

    // server render assumes a hover surface; narrow viewports are cleared
    // by the resize effect once hydrated
    let selection = RwSignal::new(Selection::new(
        projects.first().map(|p| p.slug.as_str()),
        f64::INFINITY,
    ));
    Effect::new(move |_| {
        let width = width.get();
        if !tracking_enabled(width) {
            log::debug!("viewport {width}px below breakpoint, disabling preview");
            selection.maybe_update(|s| s.resize(width));
        }
    });

    let panel = use_tween(Pose {
        y: 0.0,
        opacity: 0.0,
    });
    let _ = use_event_listener(use_window(), ev::mousemove, move |ev| {
        let width = width.get_untracked();
        let Some(container) = container_ref.get_untracked() else {
            return;
        };
        let panel_height = panel_ref.get_untracked().map(|p| client_rect(&p).height());
        let command = PanelCommand::compute(
            width,
            client_rect(&container),
            panel_height.unwrap_or_default(),
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        );
        match (command, panel_height) {
            (PanelCommand::Disabled, _) => {
                selection.maybe_update(|s| s.resize(width));
            }
            (_, None) => {}
            (command, Some(_)) => {
                if let Some((target, duration)) = command.tween() {
                    panel.to(target, duration);
                }
            }
        }
    });

    // the entrance moves the container, so the band is measured on its
    // untransformed parent
    let progress = use_scroll_scrub(trigger_ref, ENTRANCE_SCENE.trigger, ENTRANCE_SCENE.duration());
    let entrance = move || {
        progress
            .map(|p| ENTRANCE_SCENE.pose_at(0, p.get()))
            .unwrap_or(Pose::REST)
    };
    let panel_pose = panel.pose();

    view! {
        <div node_ref=trigger_ref>
            <div
                class="group/projects relative"
                node_ref=container_ref
                style:transform=move || entrance().transform()
                style:opacity=move || entrance().opacity_css()
            >
                <Show when=move || selection.with(|s| s.current().is_some())>
                    <div
                        class="max-md:hidden absolute right-0 top-0 z-[1] pointer-events-none w-[200px] xl:w-[350px] aspect-[3/4] overflow-hidden"
                        node_ref=panel_ref
                        style:transform=move || panel_pose.get().transform()
                        style:opacity=move || panel_pose.get().opacity_css()
                    >
                        {projects
                            .iter()
                            .enumerate()
                            .map(|(index, project)| {
                                let slug = project.slug.clone();
                                let hidden = Signal::derive(move || !selection.with(|s| s.is_visible(&slug)));
                                view! { <PreviewCard index=index project=project hidden=hidden /> }
                            })
                            .collect_view()}
                    </div>
                </Show>

                <div class="flex flex-col max-md:gap-10">
                    {projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let slug = project.slug.clone();
                            let on_enter = Callback::new(move |_: ()| {
                                let width = width.get_untracked();
                                selection.update(|s| s.enter(&slug, width));
                            });
                            view! { <ProjectRow index=index project=project on_enter=on_enter /> }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PreviewCard(index: usize, project: &'static ProjectRecord, hidden: Signal<bool>) -> impl IntoView {
    let accent = accent(index);
    view! {
        <div
            class="absolute inset-0 transition-all duration-500 w-full h-full bg-gradient-to-br from-zinc-900/95 via-zinc-800/95 to-zinc-900/95 backdrop-blur-2xl border border-white/10 rounded-lg p-6 flex flex-col justify-between"
            class=("opacity-0", move || hidden.get())
        >
            <div
                class="absolute top-0 left-0 w-full h-1 rounded-t-lg"
                style:background=accent.gradient
            ></div>

            <div class="space-y-3">
                <div class="flex items-center justify-between">
                    <div class="text-xs text-white/40 font-mono">{format!("PROJECT_{}", index + 1)}</div>
                    <div class="flex gap-1">
                        <div class="w-2 h-2 rounded-full bg-red-500/60"></div>
                        <div class="w-2 h-2 rounded-full bg-yellow-500/60"></div>
                        <div class="w-2 h-2 rounded-full bg-green-500/60"></div>
                    </div>
                </div>
                <h3 class="text-white font-bold text-lg leading-tight">{project.title.clone()}</h3>
            </div>

            <div class="space-y-2">
                <div class="text-xs text-white/40 font-mono mb-2">"TECH_STACK:"</div>
                <div class="flex flex-wrap gap-1.5">
                    {project
                        .preview_stack()
                        .map(|tech| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded bg-white/5 text-white/70 font-mono border border-white/10">
                                    {tech.to_string()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="space-y-2">
                <div class="flex justify-between text-xs">
                    <span class="text-white/40 font-mono">"STATUS:"</span>
                    <span class="text-green-400 font-mono">"COMPLETED"</span>
                </div>
                <div class="flex justify-between text-xs">
                    <span class="text-white/40 font-mono">"YEAR:"</span>
                    <span class="text-white/70 font-mono">{project.year.to_string()}</span>
                </div>
            </div>

            <div
                class="absolute bottom-0 right-0 w-32 h-32 blur-3xl opacity-20 rounded-full"
                style:background=accent.glow
            ></div>
        </div>
    }
}

#[component]
fn ProjectRow(
    index: usize,
    project: &'static ProjectRecord,
    on_enter: Callback<()>,
) -> impl IntoView {
    view! {
        <a
            href=project.href()
            class="project-item group leading-none py-5 md:border-b first:!pt-0 last:pb-0 last:border-none md:group-hover/projects:opacity-30 md:hover:!opacity-100 transition-all"
            on:mouseenter=move |_| on_enter.run(())
        >
            <div class="flex gap-2 md:gap-5">
                <div class="font-anton text-muted-foreground">{format!("_{:02}.", index + 1)}</div>
                <div>
                    <h4 class="text-4xl xs:text-6xl flex gap-4 font-anton transition-all duration-700 bg-gradient-to-r from-primary to-foreground from-[50%] to-[50%] bg-[length:200%] bg-right bg-clip-text text-transparent group-hover:bg-left">
                        {project.title.clone()}
                    </h4>
                    <div class="mt-2 flex flex-wrap gap-3 text-muted-foreground text-xs">
                        {project
                            .tech_stack
                            .iter()
                            .enumerate()
                            .map(|(i, tech)| {
                                view! {
                                    <div class="flex gap-3 items-center">
                                        <span>{tech.trim().to_string()}</span>
                                        {(i + 1 < project.tech_stack.len())
                                            .then(|| view! { <span class="inline-block size-2 rounded-full bg-background-light"></span> })}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </a>
    }
}
