//! Prompt templates and fixed texts
//!
//! Every string a step sends to the model or substitutes for model output
//! lives here.

/// Substituted when the model returns nothing for a joke
pub const NO_JOKE: &str = "No joke generated.";

/// Critique returned without a model call when there is no joke
pub const NO_JOKE_TO_CRITIQUE: &str = "No joke to critique.";

/// Substituted when the model returns an empty critique
pub const NO_CRITIQUE: &str = "No critique.";

/// Rewrite returned without a model call when there is no joke
pub const NO_JOKE_TO_REWRITE: &str = "No joke to rewrite.";

/// Substituted when the model returns an empty rewrite
pub const NO_REWRITE: &str = "No rewritten version.";

/// Rewrite returned without a model call when the score is high enough
pub const ALREADY_GOOD: &str = "(✅ Already family-friendly and funny enough!)";

/// Single-shot joke request
pub fn simple_joke(topic: &str) -> String {
    format!("Tell me a funny joke about {}", topic)
}

/// Joke request used ahead of a one-sentence review
pub fn short_joke(topic: &str) -> String {
    format!("Tell a funny and short joke about {}. Return only the joke.", topic)
}

/// Joke request used by the memory pipeline
pub fn creative_joke(topic: &str) -> String {
    format!(
        "Tell me a creative and funny joke about {}. Keep it short and witty.",
        topic
    )
}

/// Rating request; the score is pulled from the reply text
pub fn scored_critique(joke: &str) -> String {
    format!(
        "Rate the following joke for humor on a scale of 0 to 10, \n\
         then briefly explain your reasoning. \n\
         Joke: {}",
        joke
    )
}

pub fn feedback_critique(joke: &str) -> String {
    format!(
        "Critique this joke for humor and clarity:\n\n{}\n\nReturn only the feedback in one sentence.",
        joke
    )
}

pub fn funnier_rewrite(joke: &str) -> String {
    format!("Rewrite this joke to be funnier and family-friendly:\n{}", joke)
}

pub fn clean_rewrite(joke: &str) -> String {
    format!(
        "Rewrite this joke to make it family-friendly and clean while keeping it funny:\n\n{}",
        joke
    )
}

/// Marks a joke that is already in memory
pub fn reused_joke(joke: &str) -> String {
    format!("(⚠️ Reused joke avoided) Here's a new twist:\n{} (again!)", joke)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_interpolation() {
        assert_eq!(simple_joke("cats"), "Tell me a funny joke about cats");
        assert!(short_joke("cats").starts_with("Tell a funny and short joke about cats."));
        assert!(creative_joke("cats").contains("joke about cats."));
    }

    #[test]
    fn test_joke_interpolation() {
        assert!(scored_critique("Cats are liquid.").ends_with("Joke: Cats are liquid."));
        assert!(scored_critique("x").contains("scale of 0 to 10"));
        assert!(feedback_critique("Cats are liquid.").contains("\n\nCats are liquid.\n\n"));
        assert!(funnier_rewrite("Cats are liquid.").ends_with(":\nCats are liquid."));
        assert!(clean_rewrite("Cats are liquid.").ends_with(":\n\nCats are liquid."));
    }

    #[test]
    fn test_reused_marker() {
        assert_eq!(
            reused_joke("Why did the chicken cross the road?"),
            "(⚠️ Reused joke avoided) Here's a new twist:\nWhy did the chicken cross the road? (again!)"
        );
    }
}
