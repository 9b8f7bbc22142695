//! The question bank.

use crate::rest::{methods, Endpoint, RestResource};

resource! {
    /// Groups the question bank endpoints; not an endpoint itself.
    QuestionBank => Endpoint::literal("Question bank", "question_bank", methods::CONTAINER)
}

impl QuestionBank {
    /// Questions available to the user, ready to be added to a survey.
    #[must_use]
    pub fn questions(&self) -> QuestionBankQuestions {
        QuestionBankQuestions::new(self.descend())
    }
}

resource! {
    /// Questions in the question bank.
    QuestionBankQuestions =>
        Endpoint::literal("Question bank questions", "questions", methods::READ)
}
