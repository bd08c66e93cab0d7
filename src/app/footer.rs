use leptos::prelude::*;

use crate::build_info::{build_label, BUILD_TIME};
use crate::profile::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="container py-10 flex justify-between text-sm text-muted-foreground">
            <span>{format!("© {}", PROFILE.full_name())}</span>
            <span>"Last built " {build_label(BUILD_TIME)}</span>
        </footer>
    }
}
