use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

/// Send the browser to `location` after a form post.
///
/// htmx requests follow redirects inside the XHR and would swap the target
/// page into the form, so they get `HX-Redirect` instead of a 303.
pub fn redirect_response(location: &str, htmx: bool) -> ResultResp {
    let builder = if htmx {
        ResponseBuilder::new()
            .status(200)
            .header("HX-Redirect", location)
    } else {
        ResponseBuilder::new()
            .status(303)
            .header("Location", location)
    };

    builder
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
