//! Static checks on a rule list

use std::collections::HashMap;
use std::fmt;

use showbuff_types::BuffRule;

/// Patterns shorter than this tend to match unrelated buffs
const SHORT_PATTERN_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Index of the offending rule
    pub rule: usize,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn new(rule: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule,
            severity,
            message: message.into(),
        }
    }
}

pub fn lint_rules(rules: &[BuffRule]) -> Vec<Finding> {
    let mut findings = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for (i, rule) in rules.iter().enumerate() {
        if rule.has_blank_pattern() {
            if rule.visible {
                findings.push(Finding::new(
                    i,
                    Severity::Error,
                    "visible rule has a blank pattern and will never match",
                ));
            }
            continue;
        }

        if !rule.visible {
            findings.push(Finding::new(
                i,
                Severity::Warning,
                "rule is hidden and never drawn",
            ));
        }

        let pattern = &rule.name_pattern;
        if pattern.trim() != pattern {
            findings.push(Finding::new(
                i,
                Severity::Warning,
                format!("pattern {:?} has surrounding whitespace", pattern),
            ));
        }

        if pattern.trim().chars().count() < SHORT_PATTERN_LEN {
            findings.push(Finding::new(
                i,
                Severity::Warning,
                format!("pattern {:?} is very short and may count unrelated buffs", pattern),
            ));
        }

        if rule.display_label.trim().is_empty() {
            findings.push(Finding::new(i, Severity::Warning, "display label is empty"));
        }

        match first_seen.get(&pattern.to_lowercase()) {
            Some(first) => findings.push(Finding::new(
                i,
                Severity::Warning,
                format!("pattern {:?} duplicates rule #{}", pattern, first),
            )),
            None => {
                first_seen.insert(pattern.to_lowercase(), i);
            }
        }
    }

    findings
}
