// ============================================================
// CSV PROFILE PARSER
// ============================================================
// Turn full CSV text into an ordered list of profile records

use crate::domain::error::{AppError, Result};
use crate::domain::profile::Profile;
use crate::infrastructure::csv::line_tokenizer::tokenize_line;
use tracing::debug;

/// Parser for header-keyed profile CSV content
pub struct CsvProfileParser;

impl CsvProfileParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text into profiles, preserving source row order.
    ///
    /// Blank lines are discarded before the header/data split, so the
    /// row index used for uuid fallback is the 1-based position among
    /// the surviving data lines, and skipped rows still consume it.
    pub fn parse(&self, content: &str) -> Result<Vec<Profile>> {
        let lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        if lines.len() < 2 {
            return Err(AppError::ParseError(
                "CSV must have at least a header row and one data row".to_string(),
            ));
        }

        let headers: Vec<String> = tokenize_line(lines[0])
            .iter()
            .map(|header| header.trim().to_string())
            .collect();

        let mut profiles = Vec::new();
        for (row_index, line) in lines.iter().enumerate().skip(1) {
            let values = tokenize_line(line);
            if values.len() == 1 && values[0].is_empty() {
                debug!(row_index, "Skipping blank CSV row");
                continue;
            }

            let mut profile = Profile::new();
            for (position, header) in headers.iter().enumerate() {
                let value = values.get(position).map(|v| v.trim()).unwrap_or("");
                profile.set(header, value);
            }

            if profile.is_blank() {
                debug!(row_index, "Dropping all-empty CSV row");
                continue;
            }

            profile.derive_defaults(row_index);
            profiles.push(profile);
        }

        Ok(profiles)
    }
}

impl Default for CsvProfileParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let content = "profile_name,acc_email,tel\nalpha,a@b.c,555-0100\nbeta,b@b.c,555-0101";
        let profiles = CsvProfileParser::new().parse(content).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("profile_name"), Some("alpha"));
        assert_eq!(profiles[0].get("acc_email"), Some("a@b.c"));
        assert_eq!(profiles[1].get("tel"), Some("555-0101"));
    }

    #[test]
    fn test_rows_keep_header_keys() {
        let content = "profile_name,acc_email\nalpha,a@b.c";
        let profiles = CsvProfileParser::new().parse(content).unwrap();

        assert_eq!(profiles[0].get("profile_name"), Some("alpha"));
        assert_eq!(profiles[0].get("acc_email"), Some("a@b.c"));
        assert_eq!(profiles[0].get("missing"), None);
    }

    #[test]
    fn test_header_only_is_an_error() {
        let err = CsvProfileParser::new().parse("profile_name,tel\n\n").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_empty_content_is_an_error() {
        let err = CsvProfileParser::new().parse("").unwrap_err();
        assert!(matches!(err, AppError::ParseError(_)));
    }

    #[test]
    fn test_blank_lines_are_dropped() {
        let content = "profile_name,tel\n\nalpha,555-0100\n   \nbeta,555-0101\n";
        let profiles = CsvProfileParser::new().parse(content).unwrap();
        assert_eq!(profiles.len(), 2);
    }

    #[test]
    fn test_quoted_comma_survives() {
        let content = "profile_name,address_address\nalpha,\"12 Main St, Apt 4\"";
        let profiles = CsvProfileParser::new().parse(content).unwrap();
        assert_eq!(profiles[0].get("address_address"), Some("12 Main St, Apt 4"));
    }

    #[test]
    fn test_missing_positions_become_empty() {
        let content = "profile_name,acc_email,tel\nalpha,a@b.c";
        let profiles = CsvProfileParser::new().parse(content).unwrap();
        assert_eq!(profiles[0].get("tel"), Some(""));
    }

    #[test]
    fn test_full_name_derived() {
        let content = "profile_name,fname,lname\nalpha,Jane,Doe";
        let profiles = CsvProfileParser::new().parse(content).unwrap();
        assert_eq!(profiles[0].get("full_name"), Some("Jane Doe"));
    }

    #[test]
    fn test_uuid_uses_original_row_index() {
        // Row 1 parses, row 2 is all-quotes (skipped), row 3 keeps index 3
        let content = "acc_email,tel\na@b.c,555-0100\n\"\"\nc@b.c,555-0102";
        let profiles = CsvProfileParser::new().parse(content).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("uuid"), Some("profile_1"));
        assert_eq!(profiles[1].get("uuid"), Some("profile_3"));
    }

    #[test]
    fn test_all_empty_row_is_dropped() {
        let content = "profile_name,tel\nalpha,555-0100\n,\nbeta,555-0101";
        let profiles = CsvProfileParser::new().parse(content).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("profile_name"), Some("alpha"));
        assert_eq!(profiles[1].get("profile_name"), Some("beta"));
        // The dropped row still consumed its index
        assert_eq!(profiles[1].get("uuid"), Some("beta"));
    }

    #[test]
    fn test_duplicate_names_are_kept_in_order() {
        let content = "profile_name,tel\nalpha,555-0100\nalpha,555-0199";
        let profiles = CsvProfileParser::new().parse(content).unwrap();

        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].get("tel"), Some("555-0100"));
        assert_eq!(profiles[1].get("tel"), Some("555-0199"));
    }

    #[test]
    fn test_crlf_values_are_trimmed() {
        let content = "profile_name,tel\r\nalpha,555-0100\r\n";
        let profiles = CsvProfileParser::new().parse(content).unwrap();
        assert_eq!(profiles[0].get("tel"), Some("555-0100"));
        assert_eq!(profiles[0].get("profile_name"), Some("alpha"));
    }
}
