use maud::{html, Markup};

/// The four ways to get listings in: upload/drop, URL, default file, sample.
pub fn load_panel(default_name: &str) -> Markup {
    html! {
        div class="load-panel" {
            div id="fileUploadArea" class="upload-area" tabindex="0" {
                input type="file" id="csvFile" accept=".csv,text/csv" hidden;
                p { "📁 Drop a CSV file here or click to choose one" }
                p class="file-info" {}
            }

            form
                class="url-form"
                method="post"
                action="/load-url"
                hx-post="/load-url"
                hx-disabled-elt="find button"
            {
                input type="url" id="csvUrl" name="url" placeholder="https://example.com/stays.csv" required;
                button type="submit" id="loadUrlBtn" {
                    span class="btn-text" { "Load CSV" }
                    span class="spinner" aria-hidden="true" {}
                }
            }

            div class="load-buttons" {
                form method="post" action="/load-default" {
                    button type="submit" id="loadDefault" class="btn secondary" { "Load " (default_name) }
                }
                form method="post" action="/load-sample" {
                    button type="submit" class="btn secondary" { "Load sample listings" }
                }
            }
        }
    }
}
