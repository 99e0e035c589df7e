// templates/pages/home.rs

use crate::app::Notice;
use crate::domain::{FilterCriteria, ListingStore, PropertyRecord};
use crate::templates::{
    components::{add_property_form, card, filter_form, load_panel, results_section},
    desktop_layout, Nav,
};
use maud::{html, Markup};

pub struct HomeVm<'a> {
    pub notice: Option<Notice>,
    pub entries: Vec<(usize, &'a PropertyRecord)>,
    pub total: usize,
    pub criteria: &'a FilterCriteria,
    pub locations: Vec<String>,
    pub currency: &'a str,
    pub default_name: String,
    pub picked: Option<(String, String)>,
}

impl<'a> HomeVm<'a> {
    pub fn from_store(store: &'a ListingStore, currency: &'a str) -> Self {
        Self {
            notice: None,
            entries: store.filtered_entries(),
            total: store.total(),
            criteria: store.criteria(),
            locations: store.distinct_locations(),
            currency,
            default_name: String::new(),
            picked: None,
        }
    }
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Listings",
        Nav::Table,
        vm.notice.as_ref(),
        false,
        html! {
            (card("Load listings", load_panel(&vm.default_name)))

            section class="card" {
                h2 { "Browse" }
                (filter_form(vm.criteria, &vm.locations))
                (results_section(&vm.entries, vm.total, vm.currency))
            }

            (card("Add a property", add_property_form(vm.picked.as_ref())))
        },
    )
}
