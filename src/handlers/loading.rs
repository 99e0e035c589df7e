use crate::app::{App, Notice};
use crate::domain::{decode, PropertyRecord};
use crate::errors::{ResultResp, ServerError};
use crate::handlers::{field, Params};
use crate::loader::{self, CsvUpload, LoadError};
use crate::responses::redirect_response;
use tracing::info;

/// Swap in a freshly loaded set. Only ever called after a successful load.
fn replace(app: &App, records: Vec<PropertyRecord>) -> Result<usize, ServerError> {
    let count = records.len();
    app.with_store(|store| store.replace_all(records))?;
    Ok(count)
}

/// A file picked or dropped in the browser. Unlike a URL load, a file that
/// decodes to zero rows still replaces the current set.
pub fn upload(app: &App, upload: CsvUpload, htmx: bool) -> ResultResp {
    if !upload.is_csv() {
        app.notify(Notice::error("Please select a valid CSV file."));
        return redirect_response("/", htmx);
    }

    match decode(&upload.body) {
        Ok(records) => {
            let count = replace(app, records)?;
            info!(count, file = upload.display_name(), "loaded uploaded CSV");
            app.notify(Notice::success(format!(
                "Successfully loaded {count} properties from {}",
                upload.display_name()
            )));
        }
        Err(e) => app.notify(Notice::error(format!("Error parsing CSV file: {e}"))),
    }

    redirect_response("/", htmx)
}

/// Fetch runs without the store lock held.
pub fn load_url(app: &App, form: &Params, htmx: bool) -> ResultResp {
    let raw = field(form, "url");

    if raw.is_empty() {
        app.notify(Notice::error("Please enter a CSV URL"));
        return redirect_response("/", htmx);
    }

    match loader::load_from_url(app.fetcher(), raw) {
        Ok(records) => {
            let count = replace(app, records)?;
            app.notify(Notice::success(format!(
                "Successfully loaded {count} properties from URL!"
            )));
        }
        Err(e) => app.notify(Notice::error(format!("Error loading CSV: {e}"))),
    }

    redirect_response("/", htmx)
}

pub fn load_default(app: &App, htmx: bool) -> ResultResp {
    let source = app.default_source();
    let name = source.display_name();

    let result = loader::load_from_source(app.fetcher(), &source).and_then(|records| {
        if records.is_empty() {
            Err(LoadError::NoRecords)
        } else {
            Ok(records)
        }
    });

    match result {
        Ok(records) => {
            let count = replace(app, records)?;
            app.notify(Notice::success(format!(
                "Successfully loaded {count} properties from {name}"
            )));
        }
        Err(e) => app.notify(Notice::error(format!("Could not load {name}: {e}"))),
    }

    redirect_response("/", htmx)
}

pub fn load_sample(app: &App, htmx: bool) -> ResultResp {
    match loader::load_sample() {
        Ok(records) => {
            let count = replace(app, records)?;
            app.notify(Notice::success(format!(
                "Successfully loaded {count} sample properties (embedded data)"
            )));
        }
        Err(e) => app.notify(Notice::error(format!("Error loading sample data: {e}"))),
    }

    redirect_response("/", htmx)
}
