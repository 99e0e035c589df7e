use maud::{html, Markup};

pub mod add_form;
pub mod filter_form;
pub mod load_panel;
pub mod notice;
pub mod property_table;
pub mod qr;

pub use add_form::add_property_form;
pub use filter_form::filter_form;
pub use load_panel::load_panel;
pub use notice::notice_banner;
pub use property_table::results_section;
pub use qr::qr_code;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        section class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
