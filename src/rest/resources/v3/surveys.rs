//! Surveys, pages, questions and responses.
//!
//! ```text
//! surveys
//!   {survey_id}
//!     collectors
//!     details
//!     languages/{language_code}
//!     pages/{page_id}
//!       questions/{question_id}
//!         benchmark | rollups | trends
//!       rollups | trends
//!     responses
//!       bulk
//!       {response_id}
//!         details
//!     rollups | trends
//! survey_categories | survey_folders | survey_languages | survey_templates
//! ```

use crate::rest::{methods, CollectionResource, Endpoint, RestResource};

collection! {
    /// Surveys owned by or shared with the authenticated user.
    ///
    /// `GET` lists them, `POST` creates a survey.
    Surveys[Survey] => Endpoint::literal("Surveys", "surveys", methods::LIST_CREATE)
}

item! {
    /// One survey.
    Survey => Endpoint::identifier("Survey", methods::ITEM_WRITE)
}

impl Survey {
    /// Collectors of this survey (`POST` creates one).
    #[must_use]
    pub fn collectors(&self) -> SurveyCollectors {
        SurveyCollectors::new(self.descend())
    }

    /// The expanded survey, including pages and questions.
    #[must_use]
    pub fn details(&self) -> SurveyDetails {
        SurveyDetails::new(self.descend())
    }

    /// Existing translations of this survey.
    #[must_use]
    pub fn languages(&self) -> SurveyTranslations {
        SurveyTranslations::from_context(self.descend())
    }

    /// The translation for `language_code`.
    #[must_use]
    pub fn language(&self, language_code: &str) -> SurveyTranslation {
        self.languages().item(language_code)
    }

    /// Pages of this survey.
    #[must_use]
    pub fn pages(&self) -> SurveyPages {
        SurveyPages::from_context(self.descend())
    }

    /// The page with the given id.
    #[must_use]
    pub fn page(&self, id: &str) -> SurveyPage {
        self.pages().item(id)
    }

    /// Responses to this survey.
    #[must_use]
    pub fn responses(&self) -> SurveyResponses {
        SurveyResponses::from_context(self.descend())
    }

    /// The response with the given id.
    #[must_use]
    pub fn response(&self, id: &str) -> SurveyResponse {
        self.responses().item(id)
    }

    /// Rollups for every question of the survey.
    #[must_use]
    pub fn rollups(&self) -> Rollups {
        Rollups::new(self.descend())
    }

    /// Answer trends for the survey.
    #[must_use]
    pub fn trends(&self) -> Trends {
        Trends::new(self.descend())
    }
}

resource! {
    /// Collectors of one survey.
    SurveyCollectors => Endpoint::literal("Survey collectors", "collectors", methods::LIST_CREATE)
}

resource! {
    /// The expanded form of a survey.
    SurveyDetails => Endpoint::literal("Survey details", "details", methods::GET)
}

collection! {
    /// Translations of a survey, keyed by language code.
    SurveyTranslations[SurveyTranslation] =>
        Endpoint::literal("Survey translations", "languages", methods::READ)
}

item! {
    /// One translation of a survey.
    SurveyTranslation => Endpoint::identifier("Survey translation", methods::ITEM_WRITE)
}

collection! {
    /// Pages of a survey.
    SurveyPages[SurveyPage] => Endpoint::literal("Survey pages", "pages", methods::LIST_CREATE)
}

item! {
    /// One page of a survey.
    SurveyPage => Endpoint::identifier("Survey page", methods::ITEM_WRITE)
}

impl SurveyPage {
    /// Questions on this page.
    #[must_use]
    pub fn questions(&self) -> PageQuestions {
        PageQuestions::from_context(self.descend())
    }

    /// The question with the given id.
    #[must_use]
    pub fn question(&self, id: &str) -> PageQuestion {
        self.questions().item(id)
    }

    /// Rollups restricted to this page.
    #[must_use]
    pub fn rollups(&self) -> Rollups {
        Rollups::new(self.descend())
    }

    /// Trends restricted to this page.
    #[must_use]
    pub fn trends(&self) -> Trends {
        Trends::new(self.descend())
    }
}

collection! {
    /// Questions on a survey page.
    PageQuestions[PageQuestion] =>
        Endpoint::literal("Page questions", "questions", methods::LIST_CREATE)
}

item! {
    /// One question on a survey page.
    PageQuestion => Endpoint::identifier("Page question", methods::ITEM_WRITE)
}

impl PageQuestion {
    /// Benchmark results for this question.
    #[must_use]
    pub fn benchmark(&self) -> Benchmark {
        Benchmark::new(self.descend())
    }

    /// Rollups restricted to this question.
    #[must_use]
    pub fn rollups(&self) -> Rollups {
        Rollups::new(self.descend())
    }

    /// Trends restricted to this question.
    #[must_use]
    pub fn trends(&self) -> Trends {
        Trends::new(self.descend())
    }
}

collection! {
    /// Responses to a survey.
    SurveyResponses[SurveyResponse] =>
        Endpoint::literal("Survey responses", "responses", methods::GET)
}

impl SurveyResponses {
    /// Responses expanded with every answer.
    #[must_use]
    pub fn bulk(&self) -> SurveyResponsesBulk {
        SurveyResponsesBulk::new(self.descend())
    }
}

resource! {
    /// Fully expanded responses.
    SurveyResponsesBulk => Endpoint::literal("Survey responses bulk", "bulk", methods::GET)
}

item! {
    /// One response.
    ///
    /// Reached from a survey or from a collector.
    SurveyResponse => Endpoint::identifier("Survey response", methods::ITEM_WRITE)
}

impl SurveyResponse {
    /// This response expanded with every answer.
    #[must_use]
    pub fn details(&self) -> SurveyResponseDetails {
        SurveyResponseDetails::new(self.descend())
    }
}

resource! {
    /// A fully expanded response.
    SurveyResponseDetails =>
        Endpoint::literal("Survey response details", "details", methods::GET)
}

resource! {
    /// Benchmark results for a question.
    Benchmark => Endpoint::literal("Benchmark", "benchmark", methods::READ)
}

resource! {
    /// Summarised answers for a survey, page or question.
    Rollups => Endpoint::literal("Rollups", "rollups", methods::READ)
}

resource! {
    /// Answer counts over time for a survey, page or question.
    Trends => Endpoint::literal("Trends", "trends", methods::READ)
}

resource! {
    /// Categories used to filter survey templates.
    SurveyCategories =>
        Endpoint::literal("Survey categories", "survey_categories", methods::READ)
}

resource! {
    /// Folders that organise surveys.
    SurveyFolders =>
        Endpoint::literal("Survey folders", "survey_folders", methods::LIST_CREATE)
}

resource! {
    /// Languages available for survey translations.
    SurveyLanguages =>
        Endpoint::literal("Survey languages", "survey_languages", methods::READ)
}

resource! {
    /// Templates a new survey can be created from.
    SurveyTemplates =>
        Endpoint::literal("Survey templates", "survey_templates", methods::READ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpMethod, RequestConfig};
    use crate::rest::test_support::context;

    fn survey() -> Survey {
        Surveys::from_context(context()).item("42")
    }

    #[test]
    fn test_survey_paths() {
        let survey = survey();

        assert_eq!(survey.url(), "https://api.test/v3/surveys/42");
        assert_eq!(survey.collectors().url(), "https://api.test/v3/surveys/42/collectors");
        assert_eq!(survey.details().url(), "https://api.test/v3/surveys/42/details");
        assert_eq!(survey.rollups().url(), "https://api.test/v3/surveys/42/rollups");
        assert_eq!(survey.trends().url(), "https://api.test/v3/surveys/42/trends");
        assert_eq!(
            survey.language("fr").url(),
            "https://api.test/v3/surveys/42/languages/fr"
        );
    }

    #[test]
    fn test_question_paths() {
        let question = survey().page("p1").question("q1");

        assert_eq!(
            question.url(),
            "https://api.test/v3/surveys/42/pages/p1/questions/q1"
        );
        assert_eq!(
            question.benchmark().url(),
            "https://api.test/v3/surveys/42/pages/p1/questions/q1/benchmark"
        );
        assert_eq!(
            survey().page("p1").trends().url(),
            "https://api.test/v3/surveys/42/pages/p1/trends"
        );
    }

    #[test]
    fn test_response_paths() {
        let responses = survey().responses();

        assert_eq!(responses.bulk().url(), "https://api.test/v3/surveys/42/responses/bulk");
        assert_eq!(
            survey().response("r9").details().url(),
            "https://api.test/v3/surveys/42/responses/r9/details"
        );
    }

    #[test]
    fn test_method_lists() {
        assert_eq!(
            Surveys::from_context(context()).permitted_methods(),
            methods::LIST_CREATE
        );
        assert_eq!(survey().permitted_methods(), methods::ITEM_WRITE);
        assert_eq!(survey().details().permitted_methods(), &[HttpMethod::Get]);
        assert_eq!(survey().responses().permitted_methods(), &[HttpMethod::Get]);
        assert_eq!(survey().languages().permitted_methods(), methods::READ);
    }

    #[test]
    fn test_singular_accessor_matches_item() {
        let survey = survey();

        assert_eq!(survey.page("p1").url(), survey.pages().item("p1").url());
        assert_eq!(survey.language("de").url(), survey.languages().item("de").url());
    }

    #[test]
    fn test_children_do_not_change_parent() {
        let survey = survey();
        let before: RequestConfig = survey.composed_options();

        let _ = survey.pages().item("p1").questions();

        assert_eq!(survey.composed_options(), before);
    }
}
