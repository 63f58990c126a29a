//! Required-column validation for the crash CSV header row

use tracing::debug;

use crate::app::models::ColumnIndex;
use crate::{Error, Result};

/// Fail with a schema error naming every required column the header lacks
///
/// Missing names are reported in the order they appear in `required`.
pub fn validate_headers(columns: &ColumnIndex, required: &[&str]) -> Result<()> {
    let missing = columns.missing(required);

    if !missing.is_empty() {
        return Err(Error::schema(missing));
    }

    debug!(
        "Header validated: {} columns declared, {} required present",
        columns.len(),
        required.len()
    );
    Ok(())
}
