use crate::domain::{FilterCriteria, PropertyKind};
use crate::paths::search_path;
use crate::templates::components::card;
use maud::{html, Markup};

pub fn filter_sidebar(query: &str, criteria: &FilterCriteria) -> Markup {
    let range = criteria.price_range;

    card(
        "Filters",
        html! {
            form action="/search" method="get" class="filters" {
                input type="hidden" name="q" value=(query);
                input type="hidden" name="filters" value="1";

                fieldset class="mb-6" {
                    legend class="font-medium mb-3" { "Price range" }
                    div class="flex justify-between gap-2" {
                        label {
                            "Min $"
                            input type="number" name="min" min="0" step="10" value=(range.min());
                        }
                        label {
                            "Max $"
                            input type="number" name="max" min="0" step="10" value=(range.max());
                        }
                    }
                }

                fieldset class="mb-6" {
                    legend class="font-medium mb-3" { "Property type" }
                    @for kind in PropertyKind::ALL {
                        div class="flex items-center space-x-2" {
                            input
                                type="checkbox"
                                id=(kind.label())
                                name="type"
                                value=(kind.label())
                                checked[criteria.selected_types.contains(&kind)];
                            label for=(kind.label()) class="text-sm" { (kind.label()) }
                        }
                    }
                }

                button type="submit" class="primary w-full" { "Apply" }
            }

            a href=(search_path(&[("q", query), ("filters", "1")])) class="btn w-full clear-all" {
                "Clear all"
            }
        },
    )
}
