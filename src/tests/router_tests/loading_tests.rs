use crate::app::NoticeKind;
use crate::router::handle;
use crate::tests::utils::{
    app_with_sample, form_body, header, path_str, temp_csv, test_app, test_app_with_default,
};
use astra::Body;
use http::{Method, Request};

fn post(uri: &str, body: Body) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(body)
        .unwrap()
}

fn upload(file_name: &str, content_type: &str, csv: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(format!("/upload?filename={file_name}"))
        .header("Content-Type", content_type)
        .body(Body::from(csv.to_string()))
        .unwrap()
}

#[test]
fn csv_upload_replaces_listings() {
    let app = app_with_sample();
    let csv = "name,url,type\nA,http://x,house\nB,http://y,hotel";

    let resp = handle(upload("mine.csv", "text/csv", csv), &app).unwrap();
    assert_eq!(resp.status(), 303);

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 2);
    assert_eq!(
        app.take_notice().unwrap().message,
        "Successfully loaded 2 properties from mine.csv"
    );
}

#[test]
fn non_csv_upload_leaves_store_unchanged() {
    let app = app_with_sample();

    handle(upload("photo.png", "image/png", "name,url,type\nA,http://x,house"), &app).unwrap();

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 10);
    let notice = app.take_notice().unwrap();
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please select a valid CSV file.");
}

#[test]
fn upload_missing_headers_is_reported() {
    let app = app_with_sample();

    handle(upload("bad.csv", "text/csv", "title,link\nA,http://x"), &app).unwrap();

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 10);
    let notice = app.take_notice().unwrap();
    assert!(notice.message.starts_with("Error parsing CSV file: Missing required headers"));
}

#[test]
fn upload_with_no_valid_rows_still_replaces() {
    let app = app_with_sample();

    handle(upload("empty.csv", "text/csv", "name,url,type\n,http://x,house"), &app).unwrap();

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 0);
}

#[test]
fn invalid_url_leaves_store_unchanged() {
    let app = app_with_sample();

    let resp = handle(
        post("/load-url", form_body(&[("url", "ftp://example.com/stays.csv")])),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 10);
    assert!(app
        .take_notice()
        .unwrap()
        .message
        .starts_with("Error loading CSV: Please enter a valid URL format"));
}

#[test]
fn load_default_reads_configured_file() {
    let file = temp_csv("name,url,type\nA,http://x,house\nB,http://y,hotel\nC,http://z,villa");
    let app = test_app_with_default(path_str(&file));

    handle(post("/load-default", Body::empty()), &app).unwrap();

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 3);
    assert_eq!(app.take_notice().unwrap().kind, NoticeKind::Success);
}

#[test]
fn load_default_failure_keeps_current_set() {
    let app = app_with_sample();

    handle(post("/load-default", Body::empty()), &app).unwrap();

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 10);
    assert!(app
        .take_notice()
        .unwrap()
        .message
        .starts_with("Could not load stays.csv:"));
}

#[test]
fn load_sample_redirects_plain_and_htmx() {
    let app = test_app();

    let resp = handle(post("/load-sample", Body::empty()), &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");
    assert_eq!(
        app.take_notice().unwrap().message,
        "Successfully loaded 10 sample properties (embedded data)"
    );

    let htmx = Request::builder()
        .method(Method::POST)
        .uri("/load-sample")
        .header("HX-Request", "true")
        .body(Body::empty())
        .unwrap();
    let resp = handle(htmx, &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), "/");
    assert_eq!(app.with_store(|s| s.total()).unwrap(), 10);
}
