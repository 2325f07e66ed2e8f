/// Template filling and name list rendering for chat replies
pub mod format;
/// Structured log lines with fixed prefixes
pub mod logging;
