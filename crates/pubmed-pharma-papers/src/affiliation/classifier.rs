//! Academic vs. non-academic affiliation classifier.
//!
//! Classification is an ordered rule list evaluated against the lowercased
//! affiliation. The first rule that fires decides; if none fires the
//! affiliation is treated as academic.

use serde::Serialize;

use super::keywords::{
    ACADEMIC_EMAIL_MARKERS, ACADEMIC_KEYWORDS, INDUSTRY_KEYWORDS, KNOWN_COMPANIES, find_term,
};

/// One step of the classification priority chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// An academic keyword vetoes any industry signal.
    AcademicVeto,
    /// An industry keyword or corporate suffix is present.
    IndustryKeyword,
    /// A known company name is present.
    KnownCompany,
    /// An email address outside academic/government domains is present.
    CorporateEmail,
}

/// Rules in evaluation order.
pub const RULES: [Rule; 4] =
    [Rule::AcademicVeto, Rule::IndustryKeyword, Rule::KnownCompany, Rule::CorporateEmail];

/// The decision of the first rule that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Rule that decided.
    pub rule: Rule,
    /// Term that triggered it (`"@"` for the email rule).
    pub term: &'static str,
    /// Whether the affiliation is non-academic.
    pub non_academic: bool,
}

impl Rule {
    /// Verdict this rule gives when it fires.
    #[must_use]
    pub const fn verdict(self) -> bool {
        !matches!(self, Self::AcademicVeto)
    }

    /// Evaluate this rule alone against an already-lowercased affiliation.
    ///
    /// Returns the triggering term when the rule fires.
    #[must_use]
    pub fn matches(self, lower: &str) -> Option<&'static str> {
        match self {
            Self::AcademicVeto => find_term(lower, ACADEMIC_KEYWORDS),
            Self::IndustryKeyword => find_term(lower, INDUSTRY_KEYWORDS),
            Self::KnownCompany => find_term(lower, KNOWN_COMPANIES),
            Self::CorporateEmail => (lower.contains('@')
                && find_term(lower, ACADEMIC_EMAIL_MARKERS).is_none())
            .then_some("@"),
        }
    }
}

/// Run the rule chain and report which rule decided.
///
/// Returns `None` for empty input or when no rule fires.
#[must_use]
pub fn classify(affiliation: &str) -> Option<Classification> {
    if affiliation.is_empty() {
        return None;
    }

    let lower = affiliation.to_lowercase();
    RULES.into_iter().find_map(|rule| {
        rule.matches(&lower).map(|term| Classification {
            rule,
            term,
            non_academic: rule.verdict(),
        })
    })
}

/// Whether an affiliation looks like an industry (non-academic) employer.
#[must_use]
pub fn is_non_academic(affiliation: &str) -> bool {
    classify(affiliation).is_some_and(|c| c.non_academic)
}

/// Whether any academic keyword appears in an already-lowercased text.
#[must_use]
pub fn has_academic_signal(lower: &str) -> bool {
    Rule::AcademicVeto.matches(lower).is_some()
}
