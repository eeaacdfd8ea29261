use crate::templates::{
    components::{button_link, empty_state, property_grid, CardVm, HeaderVm},
    desktop_layout,
};
use maud::{html, Markup};

pub fn wishlist_page(header: &HeaderVm, cards: &[CardVm]) -> Markup {
    desktop_layout(
        "Wishlist",
        header,
        html! {
            div class="container mx-auto px-4 py-8" {
                h1 class="text-2xl font-semibold mb-6" { "Wishlist" }

                @if cards.is_empty() {
                    (empty_state(
                        "No saved stays yet",
                        "Tap the heart on any stay to save it here.",
                    ))
                    div class="text-center" { (button_link("Start exploring", "/")) }
                } @else {
                    p class="text-gray-600 mb-4" { (cards.len()) " saved" }
                    (property_grid(cards))
                }
            }
        },
    )
}
