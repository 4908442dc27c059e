//! Canned questions offered on an empty conversation.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SuggestedQuestion {
    pub icon: &'static str,
    pub question: &'static str,
    pub category: &'static str,
}

pub static SUGGESTED_QUESTIONS: &[SuggestedQuestion] = &[
    SuggestedQuestion {
        icon: "⚖️",
        question: "What are my fundamental rights as an Indian citizen?",
        category: "Constitutional Law",
    },
    SuggestedQuestion {
        icon: "📋",
        question: "Explain the procedure for filing a consumer complaint",
        category: "Consumer Law",
    },
    SuggestedQuestion {
        icon: "🏠",
        question: "What are the tenant rights under the Rent Control Act?",
        category: "Property Law",
    },
    SuggestedQuestion {
        icon: "💼",
        question: "What is the notice period required for resignation in India?",
        category: "Labor Law",
    },
];

/// Look up a suggestion by its 1-based position as displayed.
pub fn suggested_question(number: usize) -> Option<&'static SuggestedQuestion> {
    number.checked_sub(1).and_then(|i| SUGGESTED_QUESTIONS.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_one_based() {
        assert_eq!(suggested_question(1).unwrap().category, "Constitutional Law");
        assert_eq!(suggested_question(4).unwrap().category, "Labor Law");
        assert!(suggested_question(0).is_none());
        assert!(suggested_question(5).is_none());
    }
}
