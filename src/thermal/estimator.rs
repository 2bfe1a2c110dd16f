//! Rule-based thermal scoring
//!
//! Scoring runs in three stages, each an ordered rule table where the first
//! matching rule wins:
//!
//! 1. size keywords in the model id set a coarse score
//! 2. a hyphen-delimited parameter count (`7b`, `350m`) overrides it
//! 3. tags force, lower or raise the result
//!
//! The final score maps to a [`ThermalCost`] tier.

use super::tier::ThermalCost;
use once_cell::sync::Lazy;
use regex::Regex;

/// Score used when nothing in the id says otherwise
const DEFAULT_SCORE: u8 = 3;

/// Size keywords, checked by substring containment in this order.
/// `xl` is listed before `xxl`, so `xxl` ids always score as `xl`.
const SIZE_KEYWORDS: &[(&str, u8)] = &[
    ("tiny", 1),
    ("small", 1),
    ("base", 3),
    ("large", 4),
    ("xl", 5),
    ("xxl", 6),
];

/// Parameter-count rules: (label, pattern, score)
static PARAMETER_RULES: Lazy<Vec<(&'static str, Regex, u8)>> = Lazy::new(|| {
    [
        ("10b+", r"(?:^|-)(\d{2,})b(?:$|-)", 5),
        ("7-9b", r"(?:^|-)([7-9])b(?:$|-)", 4),
        ("4-6b", r"(?:^|-)([4-6])b(?:$|-)", 4),
        ("1-3b", r"(?:^|-)([1-3])b(?:$|-)", 3),
        ("any-b", r"(?:^|-)(\d+)b(?:$|-)", 4),
        ("millions", r"(?:^|-)(\d+)m(?:$|-)", 1),
    ]
    .into_iter()
    .map(|(label, pattern, score)| {
        let re = Regex::new(pattern).expect("parameter rule pattern is valid");
        (label, re, score)
    })
    .collect()
});

/// How a tag rule changes the running score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagAdjustment {
    /// Replace the score outright
    Force(u8),
    /// Subtract, never dropping below 1
    Lower(u8),
    /// Raise to at least this value
    AtLeast(u8),
}

impl TagAdjustment {
    fn apply(self, score: u8) -> u8 {
        match self {
            TagAdjustment::Force(value) => value,
            TagAdjustment::Lower(by) => score.saturating_sub(by).max(1),
            TagAdjustment::AtLeast(value) => score.max(value),
        }
    }
}

/// Tag rules: a rule fires when any tag contains any of its needles
const TAG_RULES: &[(&str, &[&str], TagAdjustment)] = &[
    ("tiny", &["tiny"], TagAdjustment::Force(1)),
    ("efficient", &["efficient", "distil"], TagAdjustment::Lower(2)),
    ("large", &["large", "xxl"], TagAdjustment::AtLeast(5)),
];

/// Breakdown of how a model's thermal cost was reached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThermalScore {
    /// Size keyword found in the id, if any
    pub size_keyword: Option<&'static str>,
    /// Score after the size keyword pass
    pub keyword_score: u8,
    /// Parameter-count rule that matched, if any
    pub parameter_rule: Option<&'static str>,
    /// Score after the parameter-count override
    pub parameter_score: u8,
    /// Tag rule that fired, if any
    pub tag_rule: Option<&'static str>,
    /// Final score
    pub score: u8,
    /// Tier for the final score
    pub cost: ThermalCost,
}

/// Estimate the thermal cost of a model from its id and tags
pub fn estimate<S: AsRef<str>>(model_id: &str, tags: &[S]) -> ThermalCost {
    explain(model_id, tags).cost
}

/// Score a model and report which rule decided each stage
pub fn explain<S: AsRef<str>>(model_id: &str, tags: &[S]) -> ThermalScore {
    let model_id = model_id.to_lowercase();
    let tags: Vec<String> = tags.iter().map(|t| t.as_ref().to_lowercase()).collect();

    let (size_keyword, keyword_score) = SIZE_KEYWORDS
        .iter()
        .find(|(keyword, _)| model_id.contains(keyword))
        .map(|(keyword, score)| (Some(*keyword), *score))
        .unwrap_or((None, DEFAULT_SCORE));

    let (parameter_rule, parameter_score) = PARAMETER_RULES
        .iter()
        .find(|(_, re, _)| re.is_match(&model_id))
        .map(|(label, _, score)| (Some(*label), *score))
        .unwrap_or((None, keyword_score));

    let (tag_rule, score) = TAG_RULES
        .iter()
        .find(|(_, needles, _)| {
            tags.iter()
                .any(|tag| needles.iter().any(|needle| tag.contains(needle)))
        })
        .map(|(label, _, adjustment)| (Some(*label), adjustment.apply(parameter_score)))
        .unwrap_or((None, parameter_score));

    ThermalScore {
        size_keyword,
        keyword_score,
        parameter_rule,
        parameter_score,
        tag_rule,
        score,
        cost: ThermalCost::from_score(score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_TAGS: &[&str] = &[];

    #[test]
    fn test_tiny_tag_is_low() {
        assert_eq!(estimate("bert-tiny", &["tiny"]), ThermalCost::Low);
        assert_eq!(estimate("llama-70b", &["Tiny-Variant"]), ThermalCost::Low);
    }

    #[test]
    fn test_size_keywords() {
        assert_eq!(estimate("bert-small", NO_TAGS), ThermalCost::Low);
        assert_eq!(estimate("bert-base-uncased", NO_TAGS), ThermalCost::Medium);
        assert_eq!(estimate("gpt2-xl", NO_TAGS), ThermalCost::High);
        assert_eq!(estimate("bert-large", &["large"]), ThermalCost::High);
        assert_eq!(estimate("gpt2", NO_TAGS), ThermalCost::Medium);
    }

    #[test]
    fn test_first_keyword_wins() {
        // "small" comes before "large" in the keyword order
        let score = explain("small-to-large", NO_TAGS);
        assert_eq!(score.size_keyword, Some("small"));
        assert_eq!(score.keyword_score, 1);

        let score = explain("t5-xxl", NO_TAGS);
        assert_eq!(score.size_keyword, Some("xl"));
        assert_eq!(score.keyword_score, 5);
    }

    #[test]
    fn test_parameter_counts() {
        let cases = [
            ("model-100m", ThermalCost::Low),
            ("model-350m", ThermalCost::Low),
            ("model-1b", ThermalCost::Medium),
            ("model-3b", ThermalCost::Medium),
            ("model-5b", ThermalCost::High),
            ("model-7b", ThermalCost::High),
            ("model-13b", ThermalCost::High),
            ("model-70b", ThermalCost::High),
        ];

        for (model_id, expected) in cases {
            assert_eq!(estimate(model_id, NO_TAGS), expected, "failed for {}", model_id);
        }
    }

    #[test]
    fn test_parameter_count_overrides_keyword() {
        let score = explain("meta-llama/llama-2-7b-chat", NO_TAGS);
        assert_eq!(score.parameter_rule, Some("7-9b"));
        assert_eq!(score.cost, ThermalCost::High);

        let score = explain("tinyllama-1b", NO_TAGS);
        assert_eq!(score.keyword_score, 1);
        assert_eq!(score.parameter_score, 3);
        assert_eq!(score.cost, ThermalCost::Medium);
    }

    #[test]
    fn test_parameter_count_needs_hyphens() {
        let score = explain("model_7b", NO_TAGS);
        assert_eq!(score.parameter_rule, None);
        assert_eq!(score.cost, ThermalCost::Medium);

        assert_eq!(explain("model 13b", NO_TAGS).parameter_rule, None);
        assert_eq!(explain("model-7bit", NO_TAGS).parameter_rule, None);
    }

    #[test]
    fn test_distilled_lowers_score() {
        assert_eq!(estimate("distilbert-base", &["distilled"]), ThermalCost::Low);
        assert_eq!(estimate("bert-base", &["efficient"]), ThermalCost::Low);

        // 5 - 2 = 3
        let score = explain("gpt2-xl", &["distillation"]);
        assert_eq!(score.tag_rule, Some("efficient"));
        assert_eq!(score.score, 3);
        assert_eq!(score.cost, ThermalCost::Medium);
    }

    #[test]
    fn test_lower_floors_at_one() {
        let score = explain("bert-small", &["efficient"]);
        assert_eq!(score.score, 1);
    }

    #[test]
    fn test_tag_rule_priority() {
        // tiny beats efficient and large
        let score = explain("model-13b", &["large", "efficient", "tiny"]);
        assert_eq!(score.tag_rule, Some("tiny"));
        assert_eq!(score.score, 1);

        // efficient beats large
        let score = explain("model-13b", &["large", "distil"]);
        assert_eq!(score.tag_rule, Some("efficient"));
        assert_eq!(score.score, 3);
    }

    #[test]
    fn test_large_tag_raises_score() {
        let score = explain("bert-base", &["xxl"]);
        assert_eq!(score.score, 5);
        assert_eq!(score.cost, ThermalCost::High);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(estimate("Model-13B", NO_TAGS), ThermalCost::High);
        assert_eq!(estimate("BERT-SMALL", NO_TAGS), ThermalCost::Low);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(estimate("", NO_TAGS), ThermalCost::Medium);
    }
}
