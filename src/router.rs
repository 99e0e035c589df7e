use crate::app::App;
use crate::errors::ServerError;
use crate::handlers::{listings, loading, pages, Params};
use crate::loader::CsvUpload;
use crate::responses::{static_response, ResultResp};
use astra::Request;
use std::io::Read;
use tracing::debug;
use url::form_urlencoded;

const MAIN_CSS: &str = include_str!("../static/main.css");
const APP_JS: &str = include_str!("../static/app.js");

/// Largest request body we are willing to read (uploads included).
const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let htmx = is_htmx(&req);

    debug!(%method, %path, htmx, "request");

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => pages::home(app, &parse_query(&req)),
        ("GET", "/listings") => pages::results(app, &parse_query(&req)),
        ("GET", "/map") => pages::map(app),
        ("GET", "/coordinates") => pages::coordinates(app),
        ("GET", "/export") => listings::export(app),

        ("POST", "/listings") => {
            let form = parse_form(&read_body(&mut req)?);
            listings::add(app, &form, htmx)
        }
        ("POST", "/upload") => {
            let upload = CsvUpload {
                file_name: parse_query(&req).remove("filename"),
                content_type: header(&req, "Content-Type"),
                body: String::from_utf8_lossy(&read_body(&mut req)?).into_owned(),
            };
            loading::upload(app, upload, htmx)
        }
        ("POST", "/load-url") => {
            let form = parse_form(&read_body(&mut req)?);
            loading::load_url(app, &form, htmx)
        }
        ("POST", "/load-default") => loading::load_default(app, htmx),
        ("POST", "/load-sample") => loading::load_sample(app, htmx),

        ("GET", "/static/main.css") => static_response(MAIN_CSS, "text/css; charset=utf-8"),
        ("GET", "/static/app.js") => {
            static_response(APP_JS, "application/javascript; charset=utf-8")
        }

        ("GET", p) => match p.strip_prefix("/listings/") {
            Some(index) => pages::details(app, index),
            None => Err(ServerError::NotFound),
        },

        _ => Err(ServerError::NotFound),
    }
}

fn is_htmx(req: &Request) -> bool {
    header(req, "HX-Request").is_some_and(|v| v == "true")
}

fn header(req: &Request, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn parse_query(req: &Request) -> Params {
    req.uri()
        .query()
        .map(|q| parse_form(q.as_bytes()))
        .unwrap_or_default()
}

/// Decode `application/x-www-form-urlencoded` pairs. Later keys win.
fn parse_form(bytes: &[u8]) -> Params {
    form_urlencoded::parse(bytes).into_owned().collect()
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("could not read body: {e}")))?;

    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::BadRequest("request body too large".into()));
    }
    Ok(buf)
}
