//! Topic rules — the ordered keyword table the local responder dispatches on.
//!
//! Matching is literal substring containment over the lower-cased query. There
//! is no word-boundary check, so "technology" also hits the `tech` keyword and
//! "developer" hits `develop`. Priority order is observable: the first rule
//! that matches wins, later rules are never consulted.

use serde::Serialize;

use crate::chat::responder::{
    render_contact, render_education, render_experience, render_full_stack, render_mern,
    render_projects, render_python, render_skills,
};
use crate::models::profile::FactBase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Skills,
    Projects,
    Education,
    Contact,
    Mern,
    FullStack,
    Python,
    Experience,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// At least one keyword present.
    Any,
    /// Every keyword present, or any one of the rule's compact variants.
    All,
}

/// A keyword predicate plus the template it renders.
pub struct TopicRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub policy: MatchPolicy,
    /// Single-token spellings that satisfy an `All` rule on their own ("fullstack").
    pub compact_variants: &'static [&'static str],
    pub render: fn(&FactBase) -> String,
}

impl TopicRule {
    /// `query` must already be lower-cased.
    pub fn matches(&self, query: &str) -> bool {
        match self.policy {
            MatchPolicy::Any => self.keywords.iter().any(|k| query.contains(k)),
            MatchPolicy::All => {
                self.keywords.iter().all(|k| query.contains(k))
                    || self.compact_variants.iter().any(|v| query.contains(v))
            }
        }
    }
}

/// Evaluated top to bottom. Do not reorder.
pub static RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Skills,
        keywords: &["skill", "technical", "technology", "tech"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_skills,
    },
    TopicRule {
        topic: Topic::Projects,
        keywords: &["project", "work", "build", "develop"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_projects,
    },
    TopicRule {
        topic: Topic::Education,
        keywords: &["education", "study", "university", "college", "degree"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_education,
    },
    TopicRule {
        topic: Topic::Contact,
        keywords: &["contact", "reach", "email", "phone", "hire"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_contact,
    },
    TopicRule {
        topic: Topic::Mern,
        keywords: &["mern", "mongo", "react", "express", "node"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_mern,
    },
    TopicRule {
        topic: Topic::FullStack,
        keywords: &["full", "stack"],
        policy: MatchPolicy::All,
        compact_variants: &["fullstack", "full-stack"],
        render: render_full_stack,
    },
    TopicRule {
        topic: Topic::Python,
        keywords: &["python"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_python,
    },
    TopicRule {
        topic: Topic::Experience,
        keywords: &["experience", "background", "about"],
        policy: MatchPolicy::Any,
        compact_variants: &[],
        render: render_experience,
    },
];

/// Lower-casing is the only normalization applied to queries.
pub fn normalize(query: &str) -> String {
    query.to_lowercase()
}

/// Returns the first rule whose policy the query satisfies.
pub fn first_match(query: &str) -> Option<&'static TopicRule> {
    let query = normalize(query);
    RULES.iter().find(|rule| rule.matches(&query))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(query: &str) -> Option<Topic> {
        first_match(query).map(|rule| rule.topic)
    }

    fn rule(topic: Topic) -> &'static TopicRule {
        RULES.iter().find(|r| r.topic == topic).unwrap()
    }

    #[test]
    fn test_rule_table_priority_order() {
        let order: Vec<Topic> = RULES.iter().map(|r| r.topic).collect();
        assert_eq!(
            order,
            vec![
                Topic::Skills,
                Topic::Projects,
                Topic::Education,
                Topic::Contact,
                Topic::Mern,
                Topic::FullStack,
                Topic::Python,
                Topic::Experience,
            ]
        );
    }

    #[test]
    fn test_only_full_stack_uses_all_policy() {
        for r in RULES {
            if r.topic == Topic::FullStack {
                assert_eq!(r.policy, MatchPolicy::All);
            } else {
                assert_eq!(r.policy, MatchPolicy::Any);
                assert!(r.compact_variants.is_empty());
            }
        }
    }

    #[test]
    fn test_full_stack_rule_matches_both_keywords() {
        let r = rule(Topic::FullStack);
        assert!(r.matches(&normalize("I want a full stack developer")));
    }

    #[test]
    fn test_full_stack_rule_matches_compact_variant() {
        let r = rule(Topic::FullStack);
        assert!(r.matches("fullstack"));
        assert!(r.matches("full-stack"));
    }

    #[test]
    fn test_full_stack_rule_rejects_single_keyword() {
        let r = rule(Topic::FullStack);
        assert!(!r.matches("full"));
        assert!(!r.matches("stack"));
    }

    #[test]
    fn test_any_rule_matches_single_keyword() {
        assert!(rule(Topic::Education).matches("which college?"));
        assert!(rule(Topic::Contact).matches("can i hire"));
        assert!(!rule(Topic::Contact).matches("favorite color"));
    }

    #[test]
    fn test_substring_match_without_word_boundaries() {
        // "technology" contains "tech"; "developer" contains "develop"
        assert_eq!(classify("technology"), Some(Topic::Skills));
        assert_eq!(classify("a developer"), Some(Topic::Projects));
        // "networking" contains "work"
        assert_eq!(classify("networking"), Some(Topic::Projects));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("PYTHON?"), Some(Topic::Python));
        assert_eq!(classify("Tell Me About Yourself"), Some(Topic::Experience));
    }

    #[test]
    fn test_first_match_wins_over_more_specific_rule() {
        // "react skills" mentions MERN but skills comes first
        assert_eq!(classify("react skills"), Some(Topic::Skills));
        // "full stack developer" hits projects via "develop" before full stack
        assert_eq!(classify("I want a full stack developer"), Some(Topic::Projects));
        assert_eq!(classify("project contact"), Some(Topic::Projects));
    }

    #[test]
    fn test_classify_no_match() {
        assert_eq!(classify("what is your favorite color"), None);
    }
}
