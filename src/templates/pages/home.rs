// templates/pages/home.rs

use crate::templates::{
    components::{hero_section, property_grid, CardVm, HeaderVm},
    desktop_layout,
};
use maud::{html, Markup};

pub fn home_page(header: &HeaderVm, cards: &[CardVm]) -> Markup {
    desktop_layout(
        "Home",
        header,
        html! {
            (hero_section())

            section class="py-12 bg-white" {
                div class="container mx-auto px-4" {
                    div class="mb-8" {
                        h2 class="text-3xl font-bold mb-2" { "Stays nearby" }
                        p class="text-gray-600" { "Discover great places to stay" }
                    }

                    (property_grid(cards))

                    div class="mt-12 text-center" {
                        a href="/search" class="btn show-more" { "Show more" }
                    }
                }
            }
        },
    )
}
