// Request handlers. The router parses the request; everything here works on
// already-decoded parameters and the shared `App`.

pub mod listings;
pub mod loading;
pub mod pages;

use std::collections::HashMap;

pub type Params = HashMap<String, String>;

/// Trimmed value of a form field, empty when absent.
pub(crate) fn field<'a>(params: &'a Params, key: &str) -> &'a str {
    params.get(key).map(|v| v.trim()).unwrap_or("")
}
