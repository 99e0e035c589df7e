use mime::Mime;

/// A file handed to us by the browser: its name, its declared type, its text.
#[derive(Debug, Clone)]
pub struct CsvUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl CsvUpload {
    /// A `.csv` name or a declared `text/csv` type is enough; either one.
    pub fn is_csv(&self) -> bool {
        let by_name = self
            .file_name
            .as_deref()
            .map(|name| name.trim().to_lowercase().ends_with(".csv"))
            .unwrap_or(false);

        let by_type = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.parse::<Mime>().ok())
            .map(|m| m.essence_str() == mime::TEXT_CSV.essence_str())
            .unwrap_or(false);

        by_name || by_type
    }

    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("upload")
    }
}
