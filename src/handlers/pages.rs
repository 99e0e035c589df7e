use crate::app::{App, Notice};
use crate::domain::logic::{format_coordinate, is_valid_position, parse_coordinate};
use crate::domain::map_pin::{pins_for, pins_json};
use crate::domain::FilterCriteria;
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{field, Params};
use crate::responses::html_response;
use crate::templates::components::results_section;
use crate::templates::pages::{
    coordinate_picker_page, details_page, home_page, map_page, HomeVm, MapVm,
};
use tracing::{debug, error};

/// Apply filter parameters when the request carries any.
fn apply_filter(app: &App, params: &Params) -> Result<(), ServerError> {
    if let Some(criteria) = FilterCriteria::from_params(params) {
        debug!(?criteria, "applying filter");
        app.with_store(|store| store.set_filter(criteria))?;
    }
    Ok(())
}

/// `lat`/`lng` coming back from the coordinate picker, formatted for the add
/// form. Raises a notice either way.
fn picked_coordinates(app: &App, params: &Params) -> Option<(String, String)> {
    if !params.contains_key("lat") && !params.contains_key("lng") {
        return None;
    }

    let lat = parse_coordinate(field(params, "lat"));
    let lng = parse_coordinate(field(params, "lng"));

    match (lat, lng) {
        (Some(lat), Some(lng)) if is_valid_position(lat, lng) => {
            app.notify(Notice::success("Coordinates added to form!"));
            Some((format_coordinate(lat), format_coordinate(lng)))
        }
        _ => {
            app.notify(Notice::error("Invalid coordinates selected. Please pick a point on the map."));
            None
        }
    }
}

pub fn home(app: &App, params: &Params) -> ResultResp {
    apply_filter(app, params)?;
    let picked = picked_coordinates(app, params);
    let notice = app.take_notice();
    let default_name = app.default_source().display_name();
    let currency = app.config.currency_symbol.as_str();

    let markup = app.with_store(|store| {
        let vm = HomeVm {
            notice,
            picked,
            default_name,
            ..HomeVm::from_store(store, currency)
        };
        home_page(&vm)
    })?;

    html_response(markup)
}

/// Stats and table only, for htmx swaps of `#results`.
pub fn results(app: &App, params: &Params) -> ResultResp {
    apply_filter(app, params)?;
    let currency = app.config.currency_symbol.as_str();

    let markup = app.with_store(|store| {
        results_section(&store.filtered_entries(), store.total(), currency)
    })?;

    html_response(markup)
}

pub fn details(app: &App, raw_index: &str) -> ResultResp {
    let index: usize = raw_index.parse().map_err(|_| ServerError::NotFound)?;
    let record = app
        .with_store(|store| store.get(index).cloned())?
        .ok_or(ServerError::NotFound)?;

    let notice = app.take_notice();
    html_response(details_page(
        &record,
        &app.config.currency_symbol,
        notice.as_ref(),
    ))
}

pub fn map(app: &App) -> ResultResp {
    let currency = app.config.currency_symbol.as_str();
    let (pins, shown) = app.with_store(|store| {
        (pins_for(store.filtered_entries(), currency), store.filtered_count())
    })?;

    let json = pins_json(&pins).map_err(|e| {
        error!(error = %e, "failed to serialize map pins");
        ServerError::InternalError
    })?;

    let vm = MapVm {
        notice: app.take_notice(),
        pins_json: json,
        shown,
        plotted: pins.len(),
        center: app.config.map_center,
        zoom: app.config.map_zoom,
    };
    html_response(map_page(&vm))
}

pub fn coordinates(app: &App) -> ResultResp {
    let notice = app.take_notice();
    html_response(coordinate_picker_page(
        app.config.map_center,
        app.config.map_zoom,
        notice.as_ref(),
    ))
}
