use leptos::prelude::*;

#[component]
pub fn SectionTitle(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-10">
            <span class="inline-block size-3 rounded-full bg-primary animate-pulse"></span>
            <h2 class="text-xl uppercase leading-none">{title}</h2>
        </div>
    }
}
