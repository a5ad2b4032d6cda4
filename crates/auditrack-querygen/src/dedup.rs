//! De-duplication stage rendering.

/// Render the `dedup` stage keyed on `fields`, in the given order.
///
/// Each field is double-quoted so dotted paths are read as field names. An empty
/// list renders the bare `dedup` keyword.
pub fn dedup_stage<S: AsRef<str>>(fields: &[S]) -> String {
    let mut stage = String::from("dedup");
    for field in fields {
        stage.push_str(" \"");
        stage.push_str(field.as_ref());
        stage.push('"');
    }
    stage
}
