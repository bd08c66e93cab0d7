mod animation;
mod banner;
mod footer;
mod project_list;
mod project_page;
mod section_title;

use banner::Banner;
use footer::Footer;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use project_list::ProjectList;
use project_page::ProjectPage;

use crate::profile::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=PROFILE.description />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let name = PROFILE.full_name();

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />

        <Router>
            <main class="flex flex-col w-full overflow-x-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/projects/:slug") view=ProjectPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Banner />
        <ProjectList />
    }
}
