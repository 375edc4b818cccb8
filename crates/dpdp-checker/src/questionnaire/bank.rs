use serde::Serialize;
use std::sync::OnceLock;

const STANDARD_PROMPTS: [&str; 14] = [
    "Is explicit consent taken before collecting personal data?",
    "Is the purpose of data collection clearly explained to users?",
    "Can users withdraw their consent?",
    "Is personal data used only for the stated purpose?",
    "Is unnecessary personal data avoided?",
    "Can users request access to their personal data?",
    "Can users request correction of incorrect data?",
    "Can users request deletion of their data?",
    "Is there a defined data retention policy?",
    "Is personal data deleted after the retention period?",
    "Is access to personal data restricted to authorized users?",
    "Is personal data protected using security measures?",
    "Is there a process to handle data breaches?",
    "Is a contact person or grievance officer available?",
];

/// A single prompt, identified by its position in the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub position: usize,
    pub prompt: String,
}

impl Question {
    /// One-based number used when presenting the question (`Q1`, `Q2`, ...).
    pub fn number(&self) -> usize {
        self.position + 1
    }
}

/// Immutable, ordered list of questions shared read-only for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The DPDP questionnaire shipped with the checker.
    pub fn standard() -> &'static QuestionBank {
        static STANDARD: OnceLock<QuestionBank> = OnceLock::new();
        STANDARD.get_or_init(|| QuestionBank::from_prompts(STANDARD_PROMPTS))
    }

    pub fn from_prompts<I, S>(prompts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions = prompts
            .into_iter()
            .enumerate()
            .map(|(position, prompt)| Question {
                position,
                prompt: prompt.into(),
            })
            .collect();

        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Question> {
        self.questions.get(position)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bank_has_fourteen_ordered_questions() {
        let bank = QuestionBank::standard();
        assert_eq!(bank.len(), 14);

        let first = bank.get(0).expect("first question present");
        assert_eq!(first.number(), 1);
        assert!(first.prompt.contains("explicit consent"));

        let last = bank.get(13).expect("last question present");
        assert_eq!(last.number(), 14);
        assert!(last.prompt.contains("grievance officer"));
        assert!(bank.get(14).is_none());
    }

    #[test]
    fn standard_bank_is_built_once() {
        let first = QuestionBank::standard() as *const QuestionBank;
        let second = QuestionBank::standard() as *const QuestionBank;
        assert_eq!(first, second);
    }

    #[test]
    fn positions_follow_insertion_order() {
        let bank = QuestionBank::from_prompts(["alpha", "beta", "gamma"]);
        let positions: Vec<usize> = bank.iter().map(|question| question.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }
}
