//! Parameter strings of the form `user=john&pass=smith&age=41`.
//!
//! These are produced by report code inside the application, so there is no
//! percent-decoding, trimming or charset validation.

use std::collections::HashMap;

/// Parameter name to value. Keys are case-sensitive.
pub type ParameterMap = HashMap<String, String>;

/// Splits `raw` on `&` and newlines into key/value pairs.
///
/// Each pair is split at its first `=`; pairs without one are skipped. When a
/// key repeats, the first value is kept. Never fails: malformed input simply
/// yields fewer (or no) entries.
pub fn parse_parameters(raw: &str) -> ParameterMap {
    let mut params = ParameterMap::new();
    for pair in raw.split(['&', '\n']) {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        params
            .entry(key.to_string())
            .or_insert_with(|| value.to_string());
    }
    params
}
