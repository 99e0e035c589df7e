use crate::router::handle;
use crate::tests::utils::{app_with_sample, body_string, form_body, header, test_app};
use astra::Body;
use http::{Method, Request};
use scraper::{Html, Selector};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn texts(html: &str, selector: &str) -> Vec<String> {
    let doc = Html::parse_document(html);
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}

#[test]
fn home_page_lists_every_listing() {
    let app = app_with_sample();

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(texts(&body, "#totalProperties"), vec!["10"]);
    assert_eq!(texts(&body, "#filteredProperties"), vec!["10"]);
    assert_eq!(texts(&body, ".properties-table tbody tr").len(), 10);
    assert!(body.contains("Auckland Sky Tower Apartment"));
}

#[test]
fn empty_store_shows_no_match_hint() {
    let app = test_app();

    let body = body_string(handle(get("/"), &app).unwrap());

    assert!(body.contains("No properties match"));
    assert_eq!(texts(&body, "#totalProperties"), vec!["0"]);
}

#[test]
fn filter_fragment_is_partial_and_filtered() {
    let app = app_with_sample();

    let resp = handle(get("/listings?q=&type=house&amenity=&location="), &app).unwrap();
    let body = body_string(resp);

    assert!(!body.contains("<!DOCTYPE html>"));
    assert!(body.contains("id=\"results\""));
    for kind in texts(&body, ".property-type") {
        assert_eq!(kind.to_lowercase(), "house");
    }
    assert_eq!(texts(&body, "#totalProperties"), vec!["10"]);
}

#[test]
fn criteria_persist_across_page_loads() {
    let app = app_with_sample();
    handle(get("/listings?type=villa"), &app).unwrap();

    let body = body_string(handle(get("/"), &app).unwrap());
    let filtered: usize = texts(&body, "#filteredProperties")[0].parse().unwrap();

    assert!(filtered < 10);
    assert!(body.contains("<option value=\"villa\" selected>"));
}

#[test]
fn details_page_renders_qr_code() {
    let app = app_with_sample();

    let resp = handle(get("/listings/0"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Auckland Sky Tower Apartment"));
    assert!(body.contains("id=\"qrCodeContainer\""));
    assert!(body.contains("<svg"));
}

#[test]
fn details_out_of_range_is_not_found() {
    let app = app_with_sample();

    assert!(matches!(
        handle(get("/listings/99"), &app),
        Err(crate::errors::ServerError::NotFound)
    ));
    assert!(handle(get("/listings/abc"), &app).is_err());
}

#[test]
fn unknown_route_is_not_found() {
    let app = test_app();

    match handle(get("/nope"), &app) {
        Err(err) => assert_eq!(err.status(), 404),
        Ok(resp) => panic!("expected 404, got {}", resp.status()),
    }
}

#[test]
fn map_skips_non_numeric_latitude_but_table_keeps_it() {
    let app = test_app();
    let form = [
        ("name", "Mystery Hut"),
        ("url", "https://example.com/hut"),
        ("type", "house"),
        ("latitude", "north-ish"),
        ("longitude", "170.5"),
    ];
    let req = Request::builder()
        .method(Method::POST)
        .uri("/listings")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(form_body(&form))
        .unwrap();
    handle(req, &app).unwrap();

    let map = body_string(handle(get("/map"), &app).unwrap());
    assert!(map.contains("initListingMap('map', []"));
    assert_eq!(texts(&map, "#mappedProperties"), vec!["0"]);

    let table = body_string(handle(get("/"), &app).unwrap());
    assert!(table.contains("Mystery Hut"));
}

#[test]
fn map_plots_sample_listings() {
    let app = app_with_sample();

    let body = body_string(handle(get("/map"), &app).unwrap());

    assert_eq!(texts(&body, "#mappedProperties"), vec!["10"]);
    assert!(body.contains("\"name\":\"Auckland Sky Tower Apartment\""));
}

#[test]
fn add_requires_name_url_and_type() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/listings")
        .body(form_body(&[("name", "  "), ("url", "https://x.com"), ("type", "house")]))
        .unwrap();

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/");

    assert_eq!(app.with_store(|s| s.total()).unwrap(), 0);
    let notice = app.take_notice().unwrap();
    assert_eq!(notice.message, "Please fill in all required fields (Name, URL, Type)");
}

#[test]
fn add_trims_and_appends() {
    let app = test_app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/listings")
        .header("HX-Request", "true")
        .body(form_body(&[
            ("name", " Lake House "),
            ("url", "https://x.com/lake"),
            ("type", "house"),
            ("price", " 150 "),
        ]))
        .unwrap();

    let resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "HX-Redirect"), "/");

    let record = app.with_store(|s| s.get(0).cloned()).unwrap().unwrap();
    assert_eq!(record.name, "Lake House");
    assert_eq!(record.price, "150");
    assert_eq!(
        app.take_notice().unwrap().message,
        "Property \"Lake House\" added successfully!"
    );
}

#[test]
fn export_downloads_full_set_as_csv() {
    let app = app_with_sample();
    handle(get("/listings?type=hotel"), &app).unwrap();

    let resp = handle(get("/export"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(header(&resp, "Content-Type").starts_with("text/csv"));
    assert!(header(&resp, "Content-Disposition").contains("stays.csv"));

    let body = body_string(resp);
    let mut lines = body.lines();
    assert_eq!(
        lines.next(),
        Some("name,url,type,amenities,description,price,location,latitude,longitude")
    );
    assert_eq!(lines.count(), 10);
}

#[test]
fn export_of_empty_set_is_refused() {
    let app = test_app();

    let resp = handle(get("/export"), &app).unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(app.take_notice().unwrap().message, "No properties to download");
}

#[test]
fn picked_coordinates_prefill_the_add_form() {
    let app = test_app();

    let body = body_string(handle(get("/?lat=-45.0312&lng=168.6626"), &app).unwrap());

    assert!(body.contains("value=\"-45.031200\""));
    assert!(body.contains("value=\"168.662600\""));
    assert!(body.contains("Coordinates added to form!"));
}

#[test]
fn out_of_range_coordinates_are_rejected() {
    let app = test_app();

    let body = body_string(handle(get("/?lat=95&lng=10"), &app).unwrap());

    assert!(body.contains("Invalid coordinates"));
    assert!(!body.contains("value=\"95.000000\""));
}

#[test]
fn static_assets_are_served() {
    let app = test_app();

    let css = handle(get("/static/main.css"), &app).unwrap();
    assert!(header(&css, "Content-Type").starts_with("text/css"));

    let js = body_string(handle(get("/static/app.js"), &app).unwrap());
    assert!(js.contains("initListingMap"));
}
