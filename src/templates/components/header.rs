use maud::{html, Markup};

/// What the header needs from the request.
#[derive(Debug, Clone, Default)]
pub struct HeaderVm {
    pub user_name: Option<String>,
    pub wishlist_count: usize,
    pub query: String,
}

pub fn site_header(vm: &HeaderVm) -> Markup {
    html! {
        header class="sticky top-0 z-50 bg-white border-b border-gray-200" {
            div class="container mx-auto px-4 flex items-center justify-between h-20" {
                a href="/" class="flex items-center space-x-2 logo" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="32"
                        height="32"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#ff385c"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                    }
                    span class="text-xl font-bold" { "stays" }
                }

                form action="/search" method="get" class="header-search" {
                    label class="sr-only" for="header-q" { "Where are you going?" }
                    input
                        type="search"
                        id="header-q"
                        name="q"
                        value=(vm.query)
                        placeholder="Where are you going?";
                    button type="submit" class="primary" { "Search" }
                }

                nav {
                    ul class="flex items-center space-x-4" {
                        li {
                            a href="/wishlist" {
                                "Wishlist"
                                @if vm.wishlist_count > 0 {
                                    " (" (vm.wishlist_count) ")"
                                }
                            }
                        }
                        li {
                            @match &vm.user_name {
                                Some(name) => span class="user-menu" { (name) },
                                None => span class="user-menu" { "Log in" },
                            }
                        }
                    }
                }
            }
        }
    }
}
