//! Ordered keyword rules. The first rule whose matcher accepts the lower-cased
//! message wins; rules are never combined.

use crate::dispatch::templates::TemplateKind;

/// How a rule's keywords are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// At least one keyword is a substring of the message.
    Any(&'static [&'static str]),
    /// Every keyword is a substring of the message.
    All(&'static [&'static str]),
}

impl Matcher {
    /// `lowered` must already be lower-cased; keywords are stored lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Matcher::Any(keywords) => keywords.iter().any(|k| lowered.contains(k)),
            Matcher::All(keywords) => keywords.iter().all(|k| lowered.contains(k)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DispatchRule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub template: TemplateKind,
}

/// Priority order matters: "ats" is checked before everything else, and the
/// analysis rule needs both of its words.
pub const DISPATCH_RULES: &[DispatchRule] = &[
    DispatchRule {
        name: "ats",
        matcher: Matcher::Any(&["ats", "ats-friendly"]),
        template: TemplateKind::AtsFriendly,
    },
    DispatchRule {
        name: "mistakes",
        matcher: Matcher::Any(&["mistakes", "avoid"]),
        template: TemplateKind::CommonMistakes,
    },
    DispatchRule {
        name: "experience",
        matcher: Matcher::Any(&["format", "experience"]),
        template: TemplateKind::ExperienceFormat,
    },
    DispatchRule {
        name: "keywords",
        matcher: Matcher::Any(&["keywords", "tech"]),
        template: TemplateKind::TechKeywords,
    },
    DispatchRule {
        name: "length",
        matcher: Matcher::Any(&["length", "long"]),
        template: TemplateKind::LengthGuidelines,
    },
    DispatchRule {
        name: "analysis",
        matcher: Matcher::All(&["analyze", "resume"]),
        template: TemplateKind::FullAnalysis,
    },
];

/// Template used when no rule matches.
pub const FALLBACK_TEMPLATE: TemplateKind = TemplateKind::Greeting;

/// Returns the first rule matching `lowered`, if any.
pub fn first_match(lowered: &str) -> Option<&'static DispatchRule> {
    DISPATCH_RULES.iter().find(|rule| rule.matcher.matches(lowered))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_matches_single_keyword() {
        let m = Matcher::Any(&["length", "long"]);
        assert!(m.matches("how long is too long"));
        assert!(m.matches("ideal length?"));
        assert!(!m.matches("short"));
    }

    #[test]
    fn test_all_requires_every_keyword() {
        let m = Matcher::All(&["analyze", "resume"]);
        assert!(m.matches("analyze my resume"));
        assert!(!m.matches("analyze this"));
        assert!(!m.matches("my resume"));
    }

    #[test]
    fn test_empty_any_never_matches_and_empty_all_always_does() {
        assert!(!Matcher::Any(&[]).matches("anything"));
        assert!(Matcher::All(&[]).matches("anything"));
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let order: Vec<TemplateKind> = DISPATCH_RULES.iter().map(|r| r.template).collect();
        assert_eq!(
            order,
            vec![
                TemplateKind::AtsFriendly,
                TemplateKind::CommonMistakes,
                TemplateKind::ExperienceFormat,
                TemplateKind::TechKeywords,
                TemplateKind::LengthGuidelines,
                TemplateKind::FullAnalysis,
            ]
        );
    }

    #[test]
    fn test_only_analysis_rule_is_conjunctive() {
        for rule in DISPATCH_RULES {
            let conjunctive = matches!(rule.matcher, Matcher::All(_));
            assert_eq!(conjunctive, rule.template == TemplateKind::FullAnalysis, "{}", rule.name);
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for rule in DISPATCH_RULES {
            let (Matcher::Any(keywords) | Matcher::All(keywords)) = rule.matcher;
            for k in keywords {
                assert_eq!(*k, k.to_lowercase(), "rule {} keyword {k}", rule.name);
            }
        }
    }

    #[test]
    fn test_first_match_none_for_unmatched() {
        assert!(first_match("hello there").is_none());
        assert_eq!(first_match("stats").map(|r| r.name), Some("ats"));
    }
}
