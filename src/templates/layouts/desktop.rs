use crate::app::Notice;
use crate::templates::components::notice_banner;
use maud::{html, Markup, DOCTYPE};

pub const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
pub const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const HTMX_JS: &str = "https://unpkg.com/htmx.org@1.9.12";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Table,
    Map,
    None,
}

/// Page chrome shared by every full page. `with_map` pulls in Leaflet.
pub fn desktop_layout(
    title: &str,
    active: Nav,
    notice: Option<&Notice>,
    with_map: bool,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Stays" }
                link rel="stylesheet" href="/static/main.css";
                @if with_map {
                    link rel="stylesheet" href=(LEAFLET_CSS);
                    script src=(LEAFLET_JS) {}
                }
                script src=(HTMX_JS) defer {}
                script src="/static/app.js" defer {}
            }
            body {
                header class="site-header" {
                    a href="/" class="brand" { "🏡 Stays" }
                    nav {
                        ul {
                            li { a href="/" class=[(active == Nav::Table).then_some("active")] { "Table" } }
                            li { a href="/map" class=[(active == Nav::Map).then_some("active")] { "Map" } }
                            li { a href="/export" { "Download CSV" } }
                        }
                    }
                }
                main class="container" {
                    @if let Some(notice) = notice {
                        (notice_banner(notice))
                    }
                    (content)
                }
            }
        }
    }
}
