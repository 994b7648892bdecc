use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One clause checked against a legal rule by the compliance backend.
///
/// The backend uses capitalized keys (`Clause`, `Legal Rule`, ...); the
/// frontend re-exposes them in snake_case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceIssue {
    #[serde(rename(deserialize = "Clause"), default)]
    pub clause: String,
    #[serde(rename(deserialize = "Legal Rule"), default)]
    pub legal_rule: String,
    #[serde(rename(deserialize = "Reason"), default)]
    pub reason: String,
    #[serde(rename(deserialize = "Violates"), default)]
    pub violates: String,
}

impl ComplianceIssue {
    pub fn is_violation(&self) -> bool {
        self.violates.trim().eq_ignore_ascii_case("YES")
    }
}

/// Raw compliance backend response: an object keyed by clause identifier.
///
/// Entries keep the order in which the backend sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceReport {
    pub entries: Vec<(String, ComplianceIssue)>,
}

impl<'de> Deserialize<'de> for ComplianceReport {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ReportVisitor;

        impl<'de> Visitor<'de> for ReportVisitor {
            type Value = ComplianceReport;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of clause keys to compliance issues")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, issue)) = map.next_entry::<String, ComplianceIssue>()? {
                    entries.push((key, issue));
                }
                Ok(ComplianceReport { entries })
            }
        }

        deserializer.deserialize_map(ReportVisitor)
    }
}

/// What the compliance screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub issues: Vec<ComplianceIssue>,
    pub violations: usize,
    pub total: usize,
}

impl From<ComplianceReport> for ComplianceSummary {
    fn from(report: ComplianceReport) -> Self {
        let issues: Vec<ComplianceIssue> =
            report.entries.into_iter().map(|(_, issue)| issue).collect();
        let violations = issues.iter().filter(|i| i.is_violation()).count();
        let total = issues.len();

        Self {
            issues,
            violations,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "clause_2": {
            "Clause": "Employee may not work for competitors for 5 years",
            "Legal Rule": "Indian Contract Act, Section 27",
            "Reason": "Restraint of trade is void",
            "Violates": "YES"
        },
        "clause_1": {
            "Clause": "Salary is paid monthly",
            "Legal Rule": "Payment of Wages Act",
            "Reason": "Within statutory limits",
            "Violates": "NO"
        }
    }"#;

    #[test]
    fn test_report_preserves_backend_order() {
        let report: ComplianceReport = serde_json::from_str(BODY).unwrap();
        let keys: Vec<&str> = report.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["clause_2", "clause_1"]);
        assert_eq!(
            report.entries[0].1.legal_rule,
            "Indian Contract Act, Section 27"
        );
    }

    #[test]
    fn test_summary_counts_violations() {
        let report: ComplianceReport = serde_json::from_str(BODY).unwrap();
        let summary = ComplianceSummary::from(report);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.violations, 1);
        assert!(summary.issues[0].is_violation());
        assert!(!summary.issues[1].is_violation());
    }

    #[test]
    fn test_summary_serializes_snake_case() {
        let issue = ComplianceIssue {
            clause: "c".into(),
            legal_rule: "r".into(),
            reason: "why".into(),
            violates: "yes".into(),
        };
        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["legal_rule"], "r");
        assert!(issue.is_violation());
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(serde_json::from_str::<ComplianceReport>("[1, 2]").is_err());
    }
}
