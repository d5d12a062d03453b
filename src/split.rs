use thiserror::Error;

/// Opening tag of the album grid on a discography page.
pub const MARKER: &str = r#"<ol class="editable-grid music-grid columns-4   public""#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("unsupported page format: no line contains {0:?}")]
    MarkerNotFound(String),
}

/// A page cut at its marker line.
#[derive(Debug)]
pub struct Page<'a> {
    /// Everything before the marker line, untouched.
    pub header: &'a str,
    /// Lines after the marker line.
    pub body: Vec<&'a str>,
}

pub fn split<'a>(document: &'a str, marker: &str) -> Result<Page<'a>, ExtractError> {
    let mut offset = 0;
    for line in document.split_inclusive('\n') {
        let end = offset + line.len();
        if line.contains(marker) {
            return Ok(Page {
                header: &document[..offset],
                body: document[end..].lines().collect(),
            });
        }
        offset = end;
    }

    Err(ExtractError::MarkerNotFound(marker.to_string()))
}
