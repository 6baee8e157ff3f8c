//! Rule-based fallback rewriting
//!
//! Each rule has two independent checks: `applies`, used to pick rules when
//! the caller names none, and the guard inside `apply`. They are not the same
//! test (casing and keyword sets differ) and must stay that way until the
//! intended behavior is confirmed.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

use crate::normalizer::text_len;
use crate::patterns::VAGUE_TERMS;
use crate::templates::{
    ADD_CONTEXT_SUFFIX, DEFINE_SCOPE_SUFFIX, SET_FORMAT_SUFFIX, STRUCTURE_SUFFIX,
    VAGUE_REPLACEMENTS,
};

/// A stateless prompt transformation
pub struct PromptRule {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Whether the rule is selected when no rule IDs are given
    pub applies: fn(&str) -> bool,
    /// The transformation; returns the input unchanged when its guard fails
    pub apply: fn(&str) -> String,
}

static RULES: [PromptRule; 5] = [
    PromptRule {
        id: "be-specific",
        name: "Be Specific",
        description: "Replace vague terms with specific details",
        applies: be_specific_applies,
        apply: be_specific,
    },
    PromptRule {
        id: "add-context",
        name: "Add Context",
        description: "Add necessary context and background information",
        applies: add_context_applies,
        apply: add_context,
    },
    PromptRule {
        id: "structure-clearly",
        name: "Structure Clearly",
        description: "Organize prompt with clear sections or numbered points",
        applies: structure_clearly_applies,
        apply: structure_clearly,
    },
    PromptRule {
        id: "define-scope",
        name: "Define Scope",
        description: "Clearly define what is in and out of scope",
        applies: define_scope_applies,
        apply: define_scope,
    },
    PromptRule {
        id: "set-format",
        name: "Set Format",
        description: "Specify the desired output format",
        applies: set_format_applies,
        apply: set_format,
    },
];

static VAGUE_WORD_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    VAGUE_REPLACEMENTS
        .iter()
        .map(|(word, replacement)| {
            let pattern = Regex::new(&format!(r"(?i)(?-u:\b){}(?-u:\b)", word))
                .expect("vague word pattern must compile");
            (pattern, *replacement)
        })
        .collect()
});

fn be_specific(prompt: &str) -> String {
    VAGUE_WORD_PATTERNS
        .iter()
        .fold(prompt.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, NoExpand(replacement)).into_owned()
        })
}

fn add_context(prompt: &str) -> String {
    if !prompt.contains("context") && !prompt.contains("background") {
        format!("{}{}", prompt, ADD_CONTEXT_SUFFIX)
    } else {
        prompt.to_string()
    }
}

fn structure_clearly(prompt: &str) -> String {
    if !prompt.contains('\n') && text_len(prompt) > 100 {
        format!("{}{}", prompt, STRUCTURE_SUFFIX)
    } else {
        prompt.to_string()
    }
}

fn define_scope(prompt: &str) -> String {
    if !prompt.contains("scope") && !prompt.contains("include") && !prompt.contains("exclude") {
        format!("{}{}", prompt, DEFINE_SCOPE_SUFFIX)
    } else {
        prompt.to_string()
    }
}

fn set_format(prompt: &str) -> String {
    if !prompt.contains("format") && !prompt.contains("output") && !prompt.contains("structure") {
        format!("{}{}", prompt, SET_FORMAT_SUFFIX)
    } else {
        prompt.to_string()
    }
}

// "big" is replaced by be-specific but does not select it.
fn be_specific_applies(prompt: &str) -> bool {
    VAGUE_TERMS.is_match(prompt)
}

fn add_context_applies(prompt: &str) -> bool {
    !prompt.to_lowercase().contains("context")
}

fn structure_clearly_applies(prompt: &str) -> bool {
    text_len(prompt) > 100 && !prompt.contains('\n')
}

fn define_scope_applies(prompt: &str) -> bool {
    !prompt.to_lowercase().contains("scope")
}

fn set_format_applies(prompt: &str) -> bool {
    !prompt.to_lowercase().contains("format")
}

/// All built-in rules in application order
pub fn rule_catalog() -> &'static [PromptRule] {
    &RULES
}

/// Look up a rule by its ID
pub fn find_rule(id: &str) -> Option<&'static PromptRule> {
    RULES.iter().find(|rule| rule.id == id)
}

/// Rules whose selection check passes for `prompt`, in catalog order
pub fn applicable_rules(prompt: &str) -> Vec<&'static PromptRule> {
    RULES.iter().filter(|rule| (rule.applies)(prompt)).collect()
}

/// Apply rules left to right, each consuming the previous rule's output
///
/// With `rule_ids`, exactly the named rules run in catalog order and unknown
/// IDs are ignored. Without, the applicable rules for `prompt` run.
pub fn apply_rules(prompt: &str, rule_ids: Option<&[&str]>) -> String {
    let selected: Vec<&PromptRule> = match rule_ids {
        Some(ids) => RULES.iter().filter(|rule| ids.contains(&rule.id)).collect(),
        None => applicable_rules(prompt),
    };

    selected
        .into_iter()
        .fold(prompt.to_string(), |text, rule| (rule.apply)(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_PROMPT: &str = "Write a blog post about the good and bad parts of remote work for small \
                               engineering teams that are spread across several time zones";

    #[test]
    fn test_be_specific_replaces_whole_words() {
        assert_eq!(
            apply_rules("good stuff", Some(&["be-specific"][..])),
            "high-quality, effective information, content, data"
        );
        assert_eq!(
            apply_rules("A Big, NICE thing", Some(&["be-specific"][..])),
            "A significantly, substantially, considerably, well-designed, elegant, professional object, concept, idea"
        );
        assert_eq!(
            apply_rules("goodness things", Some(&["be-specific"][..])),
            "goodness things"
        );
    }

    #[test]
    fn test_be_specific_ignores_accented_neighbours() {
        assert_eq!(
            apply_rules("goodé résumé", Some(&["be-specific"][..])),
            "high-quality, effectiveé résumé"
        );
        assert_eq!(
            apply_rules("ägood", Some(&["be-specific"][..])),
            "ähigh-quality, effective"
        );
        assert!(applicable_rules("goodé résumé").iter().any(|rule| rule.id == "be-specific"));
    }

    #[test]
    fn test_structure_threshold_counts_utf16_units() {
        let prompt = "\u{1F600}".repeat(51);
        let out = apply_rules(&prompt, Some(&["structure-clearly"][..]));
        assert!(out.ends_with(STRUCTURE_SUFFIX));
    }

    #[test]
    fn test_be_specific_is_idempotent() {
        let once = apply_rules("a good thing with bad stuff", Some(&["be-specific"][..]));
        let twice = apply_rules(&once, Some(&["be-specific"][..]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_explicit_ids_run_in_catalog_order() {
        let out = apply_rules("tell me", Some(&["set-format", "add-context", "no-such-rule"][..]));
        assert_eq!(
            out,
            "tell me Please provide context and background for your response. \
             Please provide the response in a clear, structured format."
        );
    }

    #[test]
    fn test_guards_skip_present_keywords() {
        assert_eq!(add_context("give background first"), "give background first");
        assert_eq!(define_scope("exclude tests"), "exclude tests");
        assert_eq!(set_format("output json"), "output json");
        assert_eq!(structure_clearly("short"), "short");
    }

    #[test]
    fn test_selection_differs_from_guard() {
        // Selection is case-insensitive, the guard is not.
        assert!(!add_context_applies("Context matters"));
        assert_eq!(
            add_context("Context matters"),
            "Context matters Please provide context and background for your response."
        );

        // "big" alone does not select be-specific.
        assert!(!be_specific_applies("a big plan"));
        assert_eq!(apply_rules("a big plan", None), "a big plan Please provide context and background for your response. Please clarify the scope and boundaries of what should be included. Please provide the response in a clear, structured format.");
    }

    #[test]
    fn test_default_selection_for_short_prompt() {
        let ids: Vec<_> = applicable_rules("improve my resume")
            .iter()
            .map(|rule| rule.id)
            .collect();
        assert_eq!(ids, vec!["add-context", "define-scope", "set-format"]);
    }

    #[test]
    fn test_long_prompt_gets_structure_suffix_before_scope() {
        let out = apply_rules(LONG_PROMPT, None);
        assert!(out.starts_with("Write a blog post about the high-quality, effective and problematic, suboptimal parts"));
        let structure_at = out.find(STRUCTURE_SUFFIX).unwrap();
        let scope_at = out.find(DEFINE_SCOPE_SUFFIX).unwrap();
        assert!(structure_at < scope_at);
    }

    #[test]
    fn test_default_rules_are_stable_on_rerun() {
        let once = apply_rules(LONG_PROMPT, None);
        let twice = apply_rules(&once, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_catalog_lookup() {
        let ids: Vec<_> = rule_catalog().iter().map(|rule| rule.id).collect();
        assert_eq!(
            ids,
            vec!["be-specific", "add-context", "structure-clearly", "define-scope", "set-format"]
        );
        assert_eq!(find_rule("set-format").map(|rule| rule.name), Some("Set Format"));
        assert!(find_rule("missing").is_none());
    }
}
