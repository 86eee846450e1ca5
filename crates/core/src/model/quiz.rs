use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::round_percent;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz title cannot be empty")]
    EmptyTitle,

    #[error("passing score must be between 0 and 100, got {0}")]
    InvalidPassingScore(u32),
}

/// A single multiple-choice question.
///
/// `correct_answer` is expected to be one of `options`; catalog authors are
/// responsible for that, see [`QuizQuestion::answer_is_listed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options,
            correct_answer: correct_answer.into(),
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }

    /// Authoring check: the correct answer appears among the options.
    #[must_use]
    pub fn answer_is_listed(&self) -> bool {
        self.options.iter().any(|opt| *opt == self.correct_answer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "QuizRecord")]
pub struct Quiz {
    title: String,
    questions: Vec<QuizQuestion>,
    passing_score: u8,
}

/// Stored shape of a quiz, checked through [`Quiz::new`] on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuizRecord {
    title: String,
    questions: Vec<QuizQuestion>,
    passing_score: u32,
}

impl TryFrom<QuizRecord> for Quiz {
    type Error = QuizError;

    fn try_from(record: QuizRecord) -> Result<Self, Self::Error> {
        Self::new(record.title, record.questions, record.passing_score)
    }
}

/// Result of grading a set of answers against a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizGrade {
    pub correct: usize,
    pub total: usize,
    pub percent: u8,
    pub passed: bool,
}

impl Quiz {
    /// Creates a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyTitle` for a blank title and
    /// `QuizError::InvalidPassingScore` when the threshold exceeds 100.
    pub fn new(
        title: impl Into<String>,
        questions: Vec<QuizQuestion>,
        passing_score: u32,
    ) -> Result<Self, QuizError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(QuizError::EmptyTitle);
        }
        let passing_score = u8::try_from(passing_score)
            .ok()
            .filter(|score| *score <= 100)
            .ok_or(QuizError::InvalidPassingScore(passing_score))?;

        Ok(Self {
            title: title.trim().to_owned(),
            questions,
            passing_score,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn passing_score(&self) -> u8 {
        self.passing_score
    }

    /// Grade answers given in question order.
    ///
    /// Missing answers count as wrong, extra answers are ignored. An empty
    /// quiz scores 0 and only passes with a passing score of 0.
    #[must_use]
    pub fn grade<S: AsRef<str>>(&self, answers: &[S]) -> QuizGrade {
        let total = self.questions.len();
        let correct = self
            .questions
            .iter()
            .zip(answers)
            .filter(|&(q, a)| q.is_correct(a.as_ref()))
            .count();
        let percent = if total == 0 {
            0
        } else {
            u8::try_from(round_percent(correct, total)).unwrap_or(100)
        };

        QuizGrade {
            correct,
            total,
            percent,
            passed: percent >= self.passing_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, answer: &str) -> QuizQuestion {
        QuizQuestion::new(
            text,
            vec!["a".to_owned(), "b".to_owned(), "c".to_owned()],
            answer,
        )
    }

    #[test]
    fn quiz_rejects_blank_title() {
        let err = Quiz::new("  ", vec![], 50).unwrap_err();
        assert_eq!(err, QuizError::EmptyTitle);
    }

    #[test]
    fn quiz_rejects_passing_score_above_hundred() {
        let err = Quiz::new("Check", vec![], 101).unwrap_err();
        assert_eq!(err, QuizError::InvalidPassingScore(101));
        let err = Quiz::new("Check", vec![], 70_000).unwrap_err();
        assert_eq!(err, QuizError::InvalidPassingScore(70_000));
    }

    #[test]
    fn grade_counts_correct_answers_in_order() {
        let quiz = Quiz::new(
            "Basics",
            vec![question("q1", "a"), question("q2", "b"), question("q3", "c")],
            60,
        )
        .unwrap();

        let grade = quiz.grade(&["a", "b", "a"]);
        assert_eq!(grade.correct, 2);
        assert_eq!(grade.total, 3);
        assert_eq!(grade.percent, 67);
        assert!(grade.passed);

        let grade = quiz.grade(&["a"]);
        assert_eq!(grade.correct, 1);
        assert_eq!(grade.percent, 33);
        assert!(!grade.passed);
    }

    #[test]
    fn empty_quiz_scores_zero() {
        let strict = Quiz::new("Empty", vec![], 75).unwrap();
        let grade = strict.grade::<&str>(&[]);
        assert_eq!(grade.percent, 0);
        assert!(!grade.passed);

        let lenient = Quiz::new("Empty", vec![], 0).unwrap();
        assert!(lenient.grade::<&str>(&[]).passed);
    }

    #[test]
    fn answer_is_listed_detects_authoring_mistakes() {
        assert!(question("q", "b").answer_is_listed());
        assert!(!question("q", "z").answer_is_listed());
    }

    #[test]
    fn quiz_uses_camel_case_fields() {
        let quiz = Quiz::new("Basics", vec![question("q1", "a")], 75).unwrap();
        let json = serde_json::to_string(&quiz).unwrap();
        assert!(json.contains("\"passingScore\":75"));
        assert!(json.contains("\"correctAnswer\":\"a\""));
        assert_eq!(serde_json::from_str::<Quiz>(&json).unwrap(), quiz);
    }

    #[test]
    fn stored_quiz_goes_through_the_same_checks() {
        let over = r#"{"title":"Check","questions":[],"passingScore":200}"#;
        let err = serde_json::from_str::<Quiz>(over).unwrap_err();
        assert!(err.to_string().contains("passing score"));

        let blank = r#"{"title":"  ","questions":[],"passingScore":50}"#;
        assert!(serde_json::from_str::<Quiz>(blank).is_err());
    }
}
