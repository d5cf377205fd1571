use serde::{Deserialize, Serialize};

/// A multiple-choice question built from one vocabulary entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    /// The word or phrase being asked about.
    pub prompt: String,
    /// Four candidate example sentences, already shuffled.
    pub options: [String; 4],
    pub correct_answer: String,
}

impl QuizQuestion {
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Position of the correct answer within `options`.
    pub fn correct_index(&self) -> Option<usize> {
        self.options.iter().position(|o| *o == self.correct_answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_index() {
        let question = QuizQuestion {
            prompt: "B".to_string(),
            options: ["a1", "b1", "c1", "d1"].map(String::from),
            correct_answer: "b1".to_string(),
        };
        assert_eq!(question.correct_index(), Some(1));
        assert!(question.is_correct("b1"));
        assert!(!question.is_correct("a1"));
    }
}
