use crate::app::{App, Notice};
use crate::domain::property::FIELD_ORDER;
use crate::domain::{encode, PropertyRecord};
use crate::errors::ResultResp;
use crate::handlers::{field, Params};
use crate::responses::{csv_response, redirect_response};
use tracing::info;

const EXPORT_FILE_NAME: &str = "stays.csv";

/// Manual entry. Name, URL and type must be present; every field is trimmed.
pub fn add(app: &App, form: &Params, htmx: bool) -> ResultResp {
    if ["name", "url", "type"].iter().any(|key| field(form, key).is_empty()) {
        app.notify(Notice::error(
            "Please fill in all required fields (Name, URL, Type)",
        ));
        return redirect_response("/", htmx);
    }

    let mut record = PropertyRecord::new(field(form, "name"), field(form, "url"));
    // name and url are the first two columns
    for key in FIELD_ORDER.into_iter().skip(2) {
        record.set_field(key, field(form, key));
    }
    let name = record.name.clone();

    match app.with_store(|store| store.append(record))? {
        Ok(()) => app.notify(Notice::success(format!(
            "Property \"{name}\" added successfully!"
        ))),
        Err(e) => app.notify(Notice::error(format!("Could not add property: {e}"))),
    }

    redirect_response("/", htmx)
}

/// Download the full set, ignoring any active filter.
pub fn export(app: &App) -> ResultResp {
    let (text, count) = app.with_store(|store| (encode(store.records()), store.total()))?;

    if count == 0 {
        app.notify(Notice::error("No properties to download"));
        return redirect_response("/", false);
    }

    info!(count, "exporting listings");
    csv_response(text, EXPORT_FILE_NAME)
}
