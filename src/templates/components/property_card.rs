use crate::domain::{Carousel, CarouselAction, Listing};
use crate::paths::{card_dom_id, card_nav_path, property_path, wishlist_toggle_path};
use maud::{html, Markup};

/// Everything one card renders from. The card never mutates state itself:
/// the heart posts to the toggle route and the arrows ask for a stepped
/// fragment.
pub struct CardVm<'a> {
    pub listing: &'a Listing,
    pub carousel: Carousel,
    pub is_wishlisted: bool,
    /// Swap the card in place on toggle. Off on the wishlist page, where a
    /// toggle must reload the list and the header count.
    pub inline_toggle: bool,
}

impl<'a> CardVm<'a> {
    /// A card at its first image. `None` only for a listing with no images,
    /// which the store refuses to seed.
    pub fn new(listing: &'a Listing, is_wishlisted: bool) -> Option<Self> {
        Carousel::new(listing.image_count()).map(|carousel| Self {
            listing,
            carousel,
            is_wishlisted,
            inline_toggle: true,
        })
    }

    pub fn without_inline_toggle(self) -> Self {
        Self {
            inline_toggle: false,
            ..self
        }
    }

    /// Carousel step URL; carries the toggle mode so the stepped card keeps it.
    fn nav_path(&self, action: CarouselAction) -> String {
        let path = card_nav_path(&self.listing.id, self.carousel.index(), action.as_param());
        if self.inline_toggle {
            path
        } else {
            format!("{path}&inline=0")
        }
    }
}

pub fn property_card(vm: &CardVm) -> Markup {
    let listing = vm.listing;
    let dom_id = card_dom_id(&listing.id);
    let target = format!("#{dom_id}");
    let index = vm.carousel.index();
    let toggle_path = wishlist_toggle_path(&listing.id);

    html! {
        div class="property-card group" id=(dom_id) {
            div class="relative aspect-square overflow-hidden rounded-xl" {
                a href=(property_path(&listing.id)) {
                    img
                        src=(listing.image(index))
                        alt=(listing.title)
                        class="w-full h-full object-cover"
                        loading="lazy";
                }

                form
                    method="post"
                    action=(toggle_path)
                    hx-post=[vm.inline_toggle.then_some(&toggle_path)]
                    hx-target=[vm.inline_toggle.then_some(&target)]
                    hx-swap=[vm.inline_toggle.then_some("outerHTML")]
                    class="absolute top-3 right-3"
                {
                    input type="hidden" name="image" value=(index);
                    button
                        type="submit"
                        class=(if vm.is_wishlisted { "heart wishlisted" } else { "heart" })
                        aria-pressed=(if vm.is_wishlisted { "true" } else { "false" })
                        aria-label=(if vm.is_wishlisted { "Remove from wishlist" } else { "Save to wishlist" })
                    {
                        @if vm.is_wishlisted { "♥" } @else { "♡" }
                    }
                }

                @if listing.is_superhost() {
                    span class="badge absolute top-3 left-3" { "Superhost" }
                }

                @if vm.carousel.has_many() {
                    button
                        type="button"
                        class="carousel-prev"
                        aria-label="Previous image"
                        hx-get=(vm.nav_path(CarouselAction::Previous))
                        hx-target=(target)
                        hx-swap="outerHTML"
                    { "‹" }
                    button
                        type="button"
                        class="carousel-next"
                        aria-label="Next image"
                        hx-get=(vm.nav_path(CarouselAction::Next))
                        hx-target=(target)
                        hx-swap="outerHTML"
                    { "›" }
                    div class="carousel-dots" {
                        @for i in 0..vm.carousel.len() {
                            span class=(if i == index { "dot active" } else { "dot" }) {}
                        }
                    }
                }
            }

            a href=(property_path(&listing.id)) class="block mt-3" {
                div class="flex items-center justify-between" {
                    h3 class="font-medium truncate" { (listing.location) }
                    span class="rating" { "★ " (listing.rating) }
                }
                p class="text-gray-600 truncate" { (listing.title) }
                p class="text-gray-600" { (listing.kind.label()) }
                p class="mt-1" { strong { "$" (listing.price) } " night" }
            }
        }
    }
}

pub fn property_grid(cards: &[CardVm]) -> Markup {
    html! {
        div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6" {
            @for card in cards {
                (property_card(card))
            }
        }
    }
}
