use maud::{html, Markup};

pub mod empty_state;
pub mod filters;
pub mod footer;
pub mod header;
pub mod hero;
pub mod property_card;

pub use empty_state::empty_state;
pub use filters::filter_sidebar;
pub use footer::site_footer;
pub use header::{site_header, HeaderVm};
pub use hero::hero_section;
pub use property_card::{property_card, property_grid, CardVm};

pub fn button_link(label: &str, href: &str) -> Markup {
    html! {
        a class="btn" href=(href) { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
