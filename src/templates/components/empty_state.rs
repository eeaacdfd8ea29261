use maud::{html, Markup};

pub fn empty_state(title: &str, message: &str) -> Markup {
    html! {
        div class="text-center py-12 empty-state" {
            h3 class="text-lg font-medium mb-2" { (title) }
            p class="text-gray-600" { (message) }
        }
    }
}
