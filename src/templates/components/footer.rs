use maud::{html, Markup};

const COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Support", ["Help Center", "Cancellation options", "Safety information"]),
    ("Hosting", ["Host your home", "Hosting resources", "Community forum"]),
    ("Stays", ["Newsroom", "Careers", "Gift cards"]),
];

pub fn site_footer() -> Markup {
    html! {
        footer class="bg-gray-50 border-t border-gray-200 mt-12" {
            div class="container mx-auto px-4 py-12 grid grid-cols-1 md:grid-cols-3 gap-8" {
                @for (heading, links) in COLUMNS {
                    div {
                        h3 class="font-semibold mb-4" { (heading) }
                        ul class="space-y-2" {
                            @for link in links {
                                li { a href="#" class="text-gray-600" { (link) } }
                            }
                        }
                    }
                }
            }
            p class="container mx-auto px-4 pb-8 text-sm text-gray-500" {
                "© " (chrono::Local::now().format("%Y").to_string()) " Stays, Inc."
            }
        }
    }
}
