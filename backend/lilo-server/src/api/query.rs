//! Query-string helpers shared by the list endpoints

/// A boolean query parameter that was present but not a boolean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidFlag;

/// Parse a boolean query flag. Accepts the usual spellings
/// (`true`/`false`, `1`/`0`, `t`/`f`, any case).
///
/// List endpoints treat [`InvalidFlag`] as a filter nothing can satisfy.
pub fn parse_flag(value: Option<&str>) -> Result<Option<bool>, InvalidFlag> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Ok(Some(true)),
        "false" | "f" | "0" => Ok(Some(false)),
        _ => Err(InvalidFlag),
    }
}

/// Empty parameters impose no constraint
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
