use maud::{html, Markup, PreEscaped};
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use thiserror::Error;
use tracing::warn;

const QR_SIZE: u32 = 200;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Qr(String),
}

/// Encode `data` at error-correction level M and render it as inline SVG.
pub fn qr_svg(data: &str) -> Result<String, RenderError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::M)
        .map_err(|e| RenderError::Qr(e.to_string()))?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(QR_SIZE, QR_SIZE)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    // Drop the XML prolog; the SVG is inlined into HTML.
    Ok(match image.find("<svg") {
        Some(start) => image[start..].to_string(),
        None => image,
    })
}

/// The QR block for a booking link. Generation failures render a placeholder
/// in place of the code and never fail the page.
pub fn qr_code(url: &str) -> Markup {
    match qr_svg(url) {
        Ok(svg) => html! {
            div id="qrCodeContainer" class="qr-code" { (PreEscaped(svg)) }
        },
        Err(e) => {
            warn!(error = %e, "QR code generation failed");
            html! {
                div id="qrCodeContainer" class="qr-code qr-error" {
                    p { strong { "QR Generation Failed" } }
                    p { (e.to_string()) }
                }
            }
        }
    }
}
