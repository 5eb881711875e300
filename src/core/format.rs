//! Template-based record formatting
//!
//! Rendering starts from the active configuration's format template and
//! substitutes the *first* occurrence of each recognized placeholder, in a
//! fixed order: timestamp, level, message, file, line, function. A
//! placeholder absent from the template is skipped; repeated occurrences
//! after the first remain literal text. Both behaviors are deliberate and
//! pinned by tests.

use super::log_level::LogLevel;
use super::record::CallSite;
use chrono::{DateTime, Local};

/// strftime layout used for `%timestamp%` (local time).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const PH_TIMESTAMP: &str = "%timestamp%";
const PH_LEVEL: &str = "%level%";
const PH_MESSAGE: &str = "%message%";
const PH_FILE: &str = "%file%";
const PH_LINE: &str = "%line%";
const PH_FUNCTION: &str = "%function%";

/// Render a record against `template`. Infallible: a malformed template
/// degrades to partial substitution, never an error.
#[must_use]
pub fn render(
    template: &str,
    level: LogLevel,
    message: &str,
    site: CallSite,
    timestamp: DateTime<Local>,
) -> String {
    let mut out = template.to_string();
    replace_first(
        &mut out,
        PH_TIMESTAMP,
        &timestamp.format(TIMESTAMP_FORMAT).to_string(),
    );
    replace_first(&mut out, PH_LEVEL, level.prefix());
    replace_first(&mut out, PH_MESSAGE, message);
    replace_first(&mut out, PH_FILE, site.file);
    replace_first(&mut out, PH_LINE, &site.line.to_string());
    replace_first(&mut out, PH_FUNCTION, site.function);
    out
}

fn replace_first(haystack: &mut String, token: &str, value: &str) {
    if let Some(pos) = haystack.find(token) {
        haystack.replace_range(pos..pos + token.len(), value);
    }
}
