use serde::Deserialize;

/// One entry from the source data file describing a job candidate.
///
/// The file carries no schema, so every field is optional. Absent fields
/// degrade to a placeholder at render time instead of failing the load.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateRecord {
    pub pk: Option<i64>,
    pub name: Option<String>,
    pub position: Option<String>,
    /// Comma-space-separated list of skill names, e.g. `"Go, Rust"`.
    pub skills: Option<String>,
    /// Photo URL. Rendered into an `<img src>` as-is, no validation.
    pub picture: Option<String>,
}
