//! Export of selected cells as delimited text

/// Field separator of the exported line.
pub const EXPORT_DELIMITER: &str = "\t";

/// Join per-cell texts, already in rank order, into the single line that
/// goes to the clipboard. Badge text has been stripped by the caller.
pub fn join_exported<I, S>(texts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(EXPORT_DELIMITER)
}
