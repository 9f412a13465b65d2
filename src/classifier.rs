//! Keyword-driven prompt classification.
//!
//! Two pure functions gate and route prompts before any canned answer is
//! chosen: `is_development_related` decides whether a prompt belongs to this
//! assistant at all, and `classify_topic` picks which canned answer fits best.
//! Matching is lowercase substring containment with no word boundaries. The
//! coarseness is intentional ("java" also hits inside "javascript") and only
//! influences which canned answer is shown, so precision is not worth the
//! extra machinery.

use std::fmt;

/// Keywords that mark a prompt as software-development related.
const DEV_KEYWORDS: &[&str] = &[
    // General programming
    "code",
    "function",
    "class",
    "method",
    "algorithm",
    "debug",
    "error",
    "bug",
    "programming",
    "develop",
    "build",
    "create",
    "implement",
    "syntax",
    "compile",
    // Languages
    "javascript",
    "python",
    "java",
    "c++",
    "c#",
    "php",
    "ruby",
    "go",
    "rust",
    "typescript",
    "swift",
    "kotlin",
    "scala",
    "html",
    "css",
    "sql",
    // Frameworks and libraries
    "react",
    "angular",
    "vue",
    "node",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "rails",
    "nextjs",
    "nuxt",
    "svelte",
    "jquery",
    // Concepts
    "api",
    "rest",
    "graphql",
    "database",
    "mongodb",
    "array",
    "object",
    "loop",
    "variable",
    "async",
    "await",
    "promise",
    "callback",
    "recursion",
    "component",
    "state",
    "props",
    // Data structures
    "tree",
    "graph",
    "linked list",
    "stack",
    "queue",
    "hash",
    "sort",
    "search",
    "binary",
    "heap",
    // Tools and practices
    "git",
    "docker",
    "test",
    "deploy",
    "npm",
    "yarn",
    "webpack",
    "optimization",
    "refactor",
    "package",
    "module",
    "import",
    "export",
];

/// True iff the prompt contains any development keyword as a substring.
pub fn is_development_related(prompt: &str) -> bool {
    let lower = prompt.to_lowercase();
    DEV_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

/// Topic of a development prompt, used only to select a canned answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopicCategory {
    BinarySearchTree,
    SortingAlgorithm,
    UiComponent,
    RestApi,
    Generic,
}

impl TopicCategory {
    pub const fn name(&self) -> &'static str {
        match self {
            TopicCategory::BinarySearchTree => "binary-search-tree",
            TopicCategory::SortingAlgorithm => "sorting-algorithm",
            TopicCategory::UiComponent => "ui-component-with-state",
            TopicCategory::RestApi => "rest-api-crud",
            TopicCategory::Generic => "generic",
        }
    }
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered topic table. Each entry lists substring groups: every group must
/// hit, and any one substring inside a group counts as a hit. The first
/// matching entry wins, so overlapping keyword sets resolve deterministically
/// by position. Add new categories as rows, not as control flow.
const TOPIC_TABLE: &[(TopicCategory, &[&[&str]])] = &[
    (
        TopicCategory::BinarySearchTree,
        &[&["binary search tree", "bst"]],
    ),
    (
        TopicCategory::SortingAlgorithm,
        &[&["quicksort", "quick sort"]],
    ),
    (
        TopicCategory::UiComponent,
        &[&["react"], &["component", "hook", "usestate", "useeffect"]],
    ),
    (
        TopicCategory::RestApi,
        &[&["rest", "api"], &["node", "express"]],
    ),
];

/// Classify a prompt into the first matching topic, or `Generic`.
pub fn classify_topic(prompt: &str) -> TopicCategory {
    let lower = prompt.to_lowercase();
    for (category, groups) in TOPIC_TABLE {
        let matches = groups
            .iter()
            .all(|group| group.iter().any(|needle| lower.contains(needle)));
        if matches {
            return *category;
        }
    }
    TopicCategory::Generic
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_gate_accepts_programming_prompts() {
        assert!(is_development_related("How do I debug this function?"));
        assert!(is_development_related("explain recursion in Python"));
        assert!(is_development_related("REACT hooks confuse me"));
        assert!(is_development_related("Explain quicksort"));
    }

    #[test]
    fn development_gate_rejects_off_topic_prompts() {
        assert!(!is_development_related("what's the weather today"));
        assert!(!is_development_related("recommend me a pizza place"));
    }

    #[test]
    fn substring_matching_is_deliberately_coarse() {
        // "java" hits inside "javascript"; no word boundaries by design.
        assert!(is_development_related("I love javascript"));
        assert!(is_development_related("searching for my keys"));
    }

    #[test]
    fn classifies_binary_search_tree() {
        assert_eq!(
            classify_topic("implement a binary search tree"),
            TopicCategory::BinarySearchTree
        );
        assert_eq!(classify_topic("what is a BST?"), TopicCategory::BinarySearchTree);
    }

    #[test]
    fn classifies_sorting_algorithm() {
        assert_eq!(classify_topic("Explain quicksort"), TopicCategory::SortingAlgorithm);
        assert_eq!(
            classify_topic("how does quick sort partition?"),
            TopicCategory::SortingAlgorithm
        );
    }

    #[test]
    fn ui_component_requires_react_plus_a_state_term() {
        assert_eq!(
            classify_topic("build a react component with useState"),
            TopicCategory::UiComponent
        );
        // "react" alone is not enough
        assert_eq!(classify_topic("I like react"), TopicCategory::Generic);
    }

    #[test]
    fn rest_api_requires_a_backend_term() {
        assert_eq!(
            classify_topic("build a REST api with express"),
            TopicCategory::RestApi
        );
        assert_eq!(classify_topic("what is an api?"), TopicCategory::Generic);
    }

    #[test]
    fn earlier_table_entries_win_on_overlap() {
        // Mentions both a BST and quicksort; BST sits first in the table.
        assert_eq!(
            classify_topic("compare a binary search tree with quicksort"),
            TopicCategory::BinarySearchTree
        );
    }

    #[test]
    fn classification_is_deterministic() {
        let prompt = "Explain quicksort";
        assert_eq!(classify_topic(prompt), classify_topic(prompt));
    }

    #[test]
    fn unmatched_prompts_fall_back_to_generic() {
        assert_eq!(classify_topic("help me write better code"), TopicCategory::Generic);
    }
}
