use crate::domain::booking::PriceBreakdown;
use crate::domain::{Carousel, CarouselAction, Listing};
use crate::paths::{property_image_path, property_nav_path, wishlist_toggle_path};
use crate::templates::{
    components::{card, HeaderVm},
    desktop_layout,
};
use maud::{html, Markup};

pub struct PropertyVm<'a> {
    pub listing: &'a Listing,
    pub carousel: Carousel,
    pub is_wishlisted: bool,
    pub breakdown: PriceBreakdown,
}

pub fn property_page(header: &HeaderVm, vm: &PropertyVm) -> Markup {
    let listing = vm.listing;
    let index = vm.carousel.index();

    desktop_layout(
        &listing.title,
        header,
        html! {
            div class="container mx-auto px-4 py-6 property-detail" {
                div class="mb-6" {
                    h1 class="text-2xl md:text-3xl font-semibold mb-2" { (listing.title) }
                    div class="flex items-center justify-between" {
                        div class="flex items-center space-x-4 text-sm" {
                            span class="rating" {
                                "★ " (listing.rating)
                                span class="text-gray-600" { " (" (listing.review_count) " reviews)" }
                            }
                            span class="underline location" { (listing.location) }
                        }
                        form method="post" action=(wishlist_toggle_path(&listing.id)) {
                            button type="submit" class=(if vm.is_wishlisted { "btn saved" } else { "btn" }) {
                                @if vm.is_wishlisted { "♥ Saved" } @else { "♡ Save" }
                            }
                        }
                    }
                }

                div class="gallery mb-8" {
                    div class="gallery-main relative" {
                        img src=(listing.image(index)) alt=(listing.title);
                        @if vm.carousel.has_many() {
                            a class="carousel-prev" aria-label="Previous image"
                                href=(property_nav_path(&listing.id, index, CarouselAction::Previous.as_param())) { "‹" }
                            a class="carousel-next" aria-label="Next image"
                                href=(property_nav_path(&listing.id, index, CarouselAction::Next.as_param())) { "›" }
                            span class="image-counter" { (index + 1) " / " (vm.carousel.len()) }
                        }
                    }
                    div class="gallery-thumbs grid grid-cols-2 gap-2" {
                        @for (i, image) in listing.images.iter().enumerate().skip(1).take(4) {
                            a href=(property_image_path(&listing.id, i)) {
                                img src=(image) alt=(format!("{} {}", listing.title, i + 1));
                            }
                        }
                    }
                }

                div class="grid grid-cols-1 lg:grid-cols-3 gap-8" {
                    div class="lg:col-span-2" {
                        div class="mb-8 flex items-center justify-between" {
                            div {
                                h2 class="text-xl font-semibold" {
                                    (listing.kind.label()) " hosted by " (listing.host.name)
                                }
                                p class="text-gray-600" {
                                    (listing.guests) " guests · "
                                    (listing.bedrooms) " bedrooms · "
                                    (listing.bathrooms) " bathroom"
                                    @if listing.bathrooms != 1 { "s" }
                                }
                            }
                            img class="avatar h-12 w-12 rounded-full"
                                src=(listing.host.avatar)
                                alt=(listing.host.initial());
                        }
                        @if listing.is_superhost() {
                            span class="badge mb-4" { "⭐ Superhost" }
                        }
                        p class="text-gray-500 text-sm" { (listing.host.joined) }

                        hr class="my-8";
                        p class="leading-relaxed description" { (listing.description) }

                        @if !listing.amenities.is_empty() {
                            hr class="my-8";
                            h3 class="text-xl font-semibold mb-4" { "What this place offers" }
                            ul class="grid grid-cols-1 md:grid-cols-2 gap-4 amenities" {
                                @for amenity in &listing.amenities {
                                    li { (amenity) }
                                }
                            }
                        }

                        @if !listing.rules.is_empty() {
                            hr class="my-8";
                            h3 class="text-xl font-semibold mb-4" { "House rules" }
                            div class="space-y-2 rules" {
                                @for rule in &listing.rules {
                                    p { (rule) }
                                }
                            }
                        }
                    }

                    div class="lg:col-span-1" {
                        (booking_card(listing, &vm.breakdown))
                    }
                }
            }
        },
    )
}

fn booking_card(listing: &Listing, breakdown: &PriceBreakdown) -> Markup {
    card(
        &format!("${} night", listing.price),
        html! {
            form class="booking" {
                div class="grid grid-cols-2" {
                    label { "Check-in" input type="date" name="checkin"; }
                    label { "Checkout" input type="date" name="checkout"; }
                }
                label { "Guests" input type="number" name="guests" min="1" max=(listing.guests) value="1"; }
                button type="button" class="primary w-full" disabled { "Reserve" }
            }
            p class="text-center text-sm text-gray-600" { "You won't be charged yet" }

            dl class="price-breakdown" {
                dt { "$" (breakdown.nightly) " x " (breakdown.nights) " nights" }
                dd { "$" (breakdown.stay_cost()) }
                dt { "Cleaning fee" }
                dd { "$" (breakdown.cleaning_fee) }
                dt { "Service fee" }
                dd { "$" (breakdown.service_fee) }
                dt class="total" { "Total before taxes" }
                dd class="total" { "$" (breakdown.total()) }
            }
        },
    )
}

/// Fallback when the requested id matches no listing.
pub fn property_not_found_page(header: &HeaderVm) -> Markup {
    desktop_layout(
        "Property not found",
        header,
        html! {
            div class="container mx-auto px-4 py-8 text-center" {
                h1 class="text-2xl font-bold mb-4" { "Property not found" }
                a href="/" class="text-primary" { "Return to home" }
            }
        },
    )
}
