//! CSV serialization of a labeled dataset.
//!
//! Layout: header row, then the "in" group rows in order, then the "out" group
//! rows in order; each row is `x,y,<label string>`. Comma separated, `"` as
//! quote character, quoting only where a field needs it. The parent directory
//! must already exist. A failure mid-write can leave a truncated file behind.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::dataset::{ClassMap, Dataset};
use crate::error::GenError;

/// Column names, in output order: x, y, label.
pub type Header = [String; 3];

/// Default header `x,y,class`.
pub fn default_header() -> Header {
    ["x".to_string(), "y".to_string(), "class".to_string()]
}

/// Header names must be non-empty and distinct (they become column names).
pub fn validate_header(header: &Header) -> Result<(), GenError> {
    if header.iter().any(|h| h.is_empty()) {
        return Err(GenError::invalid("header names must be non-empty"));
    }
    if header[0] == header[1] || header[0] == header[2] || header[1] == header[2] {
        return Err(GenError::invalid(format!(
            "header names must be distinct, got {header:?}"
        )));
    }
    Ok(())
}

/// Collect the dataset into a three-column frame named by `header`.
pub fn to_frame(header: &Header, classes: &ClassMap, data: &Dataset) -> PolarsResult<DataFrame> {
    let n = data.len();
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut labels: Vec<&str> = Vec::with_capacity(n);
    for (p, label) in data.labeled() {
        xs.push(p.x);
        ys.push(p.y);
        labels.push(classes.resolve(label));
    }
    DataFrame::new(vec![
        Series::new(header[0].as_str().into(), xs),
        Series::new(header[1].as_str().into(), ys),
        Series::new(header[2].as_str().into(), labels),
    ])
}

/// Write `data` to `path` and return the number of data rows (header excluded).
pub fn write_csv(
    path: &Path,
    header: &Header,
    classes: &ClassMap,
    data: &Dataset,
) -> Result<usize, GenError> {
    let csv_err = |source| GenError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut df = to_frame(header, classes, data).map_err(csv_err)?;
    let file = File::create(path).map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    CsvWriter::new(&mut out)
        .include_header(true)
        .with_separator(b',')
        .with_quote_char(b'"')
        .finish(&mut df)
        .map_err(csv_err)?;
    out.flush().map_err(|source| GenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), rows = df.height(), "write_csv");
    Ok(df.height())
}
