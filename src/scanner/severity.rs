use super::types::{DetectedSecret, Severity};

/// Reduce a finding list to one overall severity.
///
/// Returns the highest severity present, or `None` for an empty list.
/// A plain max over the fixed order critical > high > medium > low; no
/// weighting or counting.
pub fn overall_severity(secrets: &[DetectedSecret]) -> Option<Severity> {
    secrets.iter().map(|s| s.severity).max()
}

/// Report label for an aggregated severity ("none" when no findings).
pub fn severity_label(severity: Option<Severity>) -> &'static str {
    severity.map_or("none", |s| s.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> DetectedSecret {
        DetectedSecret {
            file_path: "src/config.js".to_string(),
            line_number: 1,
            secret_type: "ENV_SECRET".to_string(),
            secret_name: "Environment Variable Secret".to_string(),
            severity,
            description: String::new(),
            snippet: String::new(),
            matched_pattern: "Environment Variable Secret".to_string(),
        }
    }

    #[test]
    fn test_empty_list_is_none() {
        assert_eq!(overall_severity(&[]), None);
        assert_eq!(severity_label(None), "none");
    }

    #[test]
    fn test_highest_severity_wins() {
        let findings = vec![finding(Severity::Low), finding(Severity::Critical)];
        assert_eq!(overall_severity(&findings), Some(Severity::Critical));
    }

    #[test]
    fn test_medium_over_low() {
        let findings = vec![finding(Severity::Low), finding(Severity::Medium)];
        assert_eq!(severity_label(overall_severity(&findings)), "medium");
    }
}
