// `mf validate-configs` diagnostics

use crate::domain::{Severity, ValidationIssue};

/// One issue per non-blank stderr line, classified by keyword
pub fn parse_validation_errors(error_output: &str) -> Vec<ValidationIssue> {
    error_output
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| ValidationIssue::new(Severity::classify(line), line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classified_in_order() {
        let issues = parse_validation_errors("Error: missing dimension\nWarning: unused measure");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(issues[0].message, "Error: missing dimension");
        assert_eq!(issues[1].severity, Severity::Warning);
        assert_eq!(issues[1].message, "Warning: unused measure");
        assert!(issues.iter().all(|i| i.location.is_none()));
    }

    #[test]
    fn test_blank_lines_are_dropped_and_lines_trimmed() {
        let issues = parse_validation_errors("\n   INFO: 4 semantic models parsed   \n\n\t\nboom\n");

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].severity, Severity::Info);
        assert_eq!(issues[0].message, "INFO: 4 semantic models parsed");
        assert_eq!(issues[1].severity, Severity::Error);
    }

    #[test]
    fn test_empty_stderr() {
        assert!(parse_validation_errors("").is_empty());
    }
}
