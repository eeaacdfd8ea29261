use maud::{html, Markup};

pub fn hero_section() -> Markup {
    html! {
        section class="hero relative" {
            div class="container mx-auto px-4 py-20 text-center" {
                h1 class="text-4xl md:text-6xl font-bold mb-6" {
                    "Find your next stay. "
                    span class="text-primary" { "Perfect." }
                }
                p class="text-xl text-gray-600 mb-8" {
                    "Discover unique homes and experiences around the world."
                }

                form action="/search" method="get" class="hero-search grid grid-cols-1 md:grid-cols-4 gap-4" {
                    div {
                        label class="text-sm font-medium" for="hero-location" { "Where" }
                        input type="text" id="hero-location" name="location" placeholder="Search destinations";
                    }
                    div {
                        label class="text-sm font-medium" for="hero-checkin" { "Check in" }
                        input type="date" id="hero-checkin" name="checkin";
                    }
                    div {
                        label class="text-sm font-medium" for="hero-checkout" { "Check out" }
                        input type="date" id="hero-checkout" name="checkout";
                    }
                    div {
                        label class="text-sm font-medium" for="hero-guests" { "Who" }
                        input type="number" id="hero-guests" name="guests" min="1" placeholder="Add guests";
                    }
                    button type="submit" class="primary md:col-span-4" { "Search" }
                }
            }
        }
    }
}
