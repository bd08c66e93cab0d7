use leptos::{either::EitherOf3, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::A, hooks::use_params_map};

use crate::projects::{find_project, ProjectRecord};

use super::section_title::SectionTitle;

#[component]
pub fn ProjectPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();

    move || match find_project(&slug()) {
        Ok(Some(project)) => EitherOf3::A(view! { <ProjectDetails project=project /> }),
        Ok(None) => EitherOf3::B(view! {
            <Title text="Not Found" />
            <NotFound slug=slug() />
        }),
        Err(e) => {
            log::error!("couldn't load projects: {e}");
            EitherOf3::C(view! { <NotFound slug=slug() /> })
        }
    }
}

#[component]
fn ProjectDetails(project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <Title text=project.title.clone() />
        <section class="container py-section">
            <A href="/#selected-projects" attr:class="text-muted-foreground hover:text-primary">
                "← Back"
            </A>
            <h1 class="mt-8 text-5xl sm:text-7xl font-anton">{project.title.clone()}</h1>
            <p class="mt-2 font-mono text-muted-foreground">{project.year.to_string()}</p>

            {project
                .description
                .clone()
                .map(|description| view! { <p class="mt-8 max-w-2xl text-lg">{description}</p> })}

            <div class="mt-10">
                <SectionTitle title="TECH STACK" />
                <ul class="flex flex-wrap gap-3">
                    {project
                        .tech_stack
                        .iter()
                        .map(|tech| {
                            view! {
                                <li class="px-3 py-1 rounded border border-white/10 bg-white/5 font-mono text-sm">
                                    {tech.trim().to_string()}
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>

            <div class="mt-10 flex gap-6">
                {project
                    .live_url
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">
                                "Live site"
                            </a>
                        }
                    })}
                {project
                    .source_code
                    .clone()
                    .map(|href| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" class="text-primary hover:underline">
                                "Source code"
                            </a>
                        }
                    })}
            </div>
        </section>
    }
}

#[component]
fn NotFound(slug: String) -> impl IntoView {
    view! {
        <section class="container py-section text-center">
            <h1 class="text-4xl font-anton">"Project not found"</h1>
            <p class="mt-4 text-muted-foreground">{format!("Nothing lives at /projects/{slug}")}</p>
            <A href="/" attr:class="mt-8 inline-block text-primary hover:underline">
                "Go home"
            </A>
        </section>
    }
}
