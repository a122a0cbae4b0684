pub use inkpost_core::format::OutputFormat;

/// Parse `--format`; the core type is foreign here, so clap goes through `FromStr`
pub fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
