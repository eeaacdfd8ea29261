use crate::templates::layouts::desktop::blank_layout;
use maud::{html, Markup};

/// Shown until the auth source has reported its first settled snapshot.
pub fn loading_page() -> Markup {
    blank_layout(
        "Loading",
        html! {
            div class="min-h-screen flex items-center justify-center" {
                div class="text-center" {
                    div class="spinner" aria-hidden="true" {}
                    p class="text-gray-600" { "Loading..." }
                }
            }
        },
    )
}
