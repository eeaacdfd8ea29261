use crate::domain::FilterCriteria;
use crate::paths::search_path;
use crate::templates::{
    components::{empty_state, filter_sidebar, property_grid, CardVm, HeaderVm},
    desktop_layout,
};
use chrono::{Days, NaiveDate};
use maud::{html, Markup};

pub struct SearchVm<'a> {
    pub query: String,
    pub criteria: FilterCriteria,
    pub show_filters: bool,
    pub cards: Vec<CardVm<'a>>,
    pub loading: bool,
    pub today: NaiveDate,
}

impl SearchVm<'_> {
    pub fn heading(&self) -> String {
        if self.query.is_empty() {
            "Search results".to_string()
        } else {
            format!("Stays in \"{}\"", self.query)
        }
    }

    /// Opens or closes the sidebar without losing the active criteria.
    pub fn toggle_filters_path(&self) -> String {
        let mut pairs = vec![("q", self.query.clone())];
        if !self.criteria.is_default() {
            pairs.extend(self.criteria.to_pairs());
        }
        if !self.show_filters {
            pairs.push(("filters", "1".to_string()));
        }
        let borrowed: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
        search_path(&borrowed)
    }

    /// "Oct 19 - Oct 26": a week from today.
    pub fn date_span(&self) -> String {
        let end = self
            .today
            .checked_add_days(Days::new(7))
            .unwrap_or(self.today);
        format!("{} - {}", self.today.format("%b %-d"), end.format("%b %-d"))
    }
}

pub fn search_page(header: &HeaderVm, vm: &SearchVm) -> Markup {
    let toggle_filters = vm.toggle_filters_path();

    desktop_layout(
        &vm.heading(),
        header,
        html! {
            div class="container mx-auto px-4 py-6" {
                div class="flex items-center justify-between mb-6" {
                    div {
                        h1 class="text-2xl font-semibold" { (vm.heading()) }
                        p class="text-gray-600 mt-1 result-summary" {
                            (vm.cards.len()) " stays · " (vm.date_span()) " · 2 guests"
                        }
                    }
                    div class="flex items-center space-x-3" {
                        a href=(toggle_filters) class="btn" aria-expanded=(if vm.show_filters { "true" } else { "false" }) {
                            "Filters"
                        }
                        button type="button" class="btn" disabled { "Show map" }
                    }
                }

                div class="flex gap-8" {
                    @if vm.show_filters {
                        aside class="w-80 flex-shrink-0" {
                            (filter_sidebar(&vm.query, &vm.criteria))
                        }
                    }

                    div class="flex-1" {
                        @if vm.loading {
                            div class="grid gap-6 skeleton" {
                                @for _ in 0..6 {
                                    div class="animate-pulse" {}
                                }
                            }
                        } @else if vm.cards.is_empty() {
                            (empty_state(
                                "No results found",
                                "Try adjusting your search or filters to find what you're looking for.",
                            ))
                        } @else {
                            (property_grid(&vm.cards))
                        }
                    }
                }
            }
        },
    )
}
