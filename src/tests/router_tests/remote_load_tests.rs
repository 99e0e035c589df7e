use crate::app::{App, Notice, NoticeKind};
use crate::router::handle;
use crate::tests::utils::{app_with_sample, form_body, header, serve_once};
use http::{Method, Request};

/// POST `/load-url` pointing at `url` and return the notice it left.
fn load_url(app: &App, url: &str) -> Notice {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/load-url")
        .header("HX-Request", "true")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(&[("url", url)]))
        .unwrap();

    let resp = handle(req, app).expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), "/");

    app.take_notice().expect("notice after load")
}

fn total(app: &App) -> usize {
    app.with_store(|s| s.total()).unwrap()
}

#[test]
fn server_error_keeps_current_listings() {
    let app = app_with_sample();
    let url = serve_once("500 Internal Server Error", "boom");

    let notice = load_url(&app, &url);

    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Error loading CSV: HTTP error! status: 500");
    assert_eq!(total(&app), 10);
}

#[test]
fn empty_body_keeps_current_listings() {
    let app = app_with_sample();
    let url = serve_once("200 OK", "");

    let notice = load_url(&app, &url);

    assert_eq!(
        notice.message,
        "Error loading CSV: The CSV file appears to be empty"
    );
    assert_eq!(total(&app), 10);
}

#[test]
fn file_without_valid_rows_keeps_current_listings() {
    let app = app_with_sample();
    let url = serve_once("200 OK", "name,url,type\n,http://x,house\nB,,hotel");

    let notice = load_url(&app, &url);

    assert_eq!(
        notice.message,
        "Error loading CSV: No valid data found in the CSV file"
    );
    assert_eq!(total(&app), 10);
}

#[test]
fn missing_remote_file_is_reported() {
    let app = app_with_sample();
    let url = serve_once("404 Not Found", "");

    let notice = load_url(&app, &url);

    assert_eq!(notice.kind, NoticeKind::Error);
    assert!(notice.message.ends_with("not found"));
    assert_eq!(total(&app), 10);
}

#[test]
fn good_file_replaces_listings() {
    let app = app_with_sample();
    let url = serve_once("200 OK", "name,url,type\nLake House,https://x.com/1,house");

    let notice = load_url(&app, &url);

    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, "Successfully loaded 1 properties from URL!");
    assert_eq!(total(&app), 1);
    let name = app.with_store(|s| s.get(0).map(|r| r.name.clone())).unwrap();
    assert_eq!(name.as_deref(), Some("Lake House"));
}
