use crate::app::App;
use crate::config::AppConfig;
use crate::loader;
use astra::{Body, Response};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tempfile::NamedTempFile;

/// An app whose default resource is `default_csv`. Nothing is loaded yet.
pub fn test_app_with_default(default_csv: &str) -> App {
    let config = AppConfig {
        default_csv: default_csv.to_string(),
        fetch_timeout: Duration::from_secs(2),
        ..AppConfig::default()
    };

    App::new(config).unwrap_or_else(|e| panic!("App initialization failed: {e}"))
}

/// Empty store, default resource that does not exist.
pub fn test_app() -> App {
    test_app_with_default("/nonexistent/stays.csv")
}

/// Store pre-filled with the ten embedded listings.
pub fn app_with_sample() -> App {
    let app = test_app();
    let records = loader::load_sample().expect("embedded sample decodes");
    app.with_store(|store| store.replace_all(records))
        .expect("store lock");
    app
}

/// A `.csv` scratch file holding `content`, removed when dropped.
pub fn temp_csv(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("stays_test_")
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(content.as_bytes()).expect("write temp csv");
    file
}

/// Path of a scratch file as the `default_csv` setting expects it.
pub fn path_str(file: &NamedTempFile) -> &str {
    file.path().to_str().expect("utf-8 temp path")
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .expect("readable body");
    body
}

pub fn form_body(pairs: &[(&str, &str)]) -> Body {
    let encoded = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Body::from(encoded)
}

pub fn header<'a>(resp: &'a Response, name: &str) -> &'a str {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Answer exactly one HTTP request on a local port with `status` (e.g.
/// `"200 OK"`) and `body`. Returns the URL to fetch.
pub fn serve_once(status: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local port");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    thread::spawn(move || {
        let Ok((mut stream, _)) = listener.accept() else {
            return;
        };

        // Drain the request head before answering.
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            match stream.read(&mut buf) {
                Ok(0) | Err(_) => break,
                Ok(n) => request.extend_from_slice(&buf[..n]),
            }
        }

        stream.write_all(response.as_bytes()).ok();
    });

    format!("http://{addr}/stays.csv")
}
