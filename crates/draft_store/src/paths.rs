use time::Date;

use crate::error::DraftStoreError;

pub const DRAFT_EXTENSION: &str = "txt";

const DATE_FORMAT: &str = "[year]-[month]-[day]";

/// Filename for a draft written on `date`, e.g. `2024-01-15.txt`.
pub fn draft_file_name(date: Date) -> Result<String, DraftStoreError> {
    let format = time::format_description::parse(DATE_FORMAT)
        .map_err(DraftStoreError::DateFormat)?;
    let stamp = date.format(&format).map_err(DraftStoreError::ClockFormat)?;
    Ok(format!("{stamp}.{DRAFT_EXTENSION}"))
}
