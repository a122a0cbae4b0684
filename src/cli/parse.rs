//! Value parsers for CLI arguments

use inkpost_core::id::IdScheme;

pub fn parse_id_scheme(s: &str) -> Result<IdScheme, String> {
    s.parse::<IdScheme>().map_err(|e| e.to_string())
}
