mod course;
mod ids;
mod quiz;
mod session;
mod user;

use std::collections::BTreeMap;

pub use course::{Assignment, Course, CourseDraft, CourseError, Module};
pub use ids::{CourseId, ModuleId, ParseIdError};
pub use quiz::{Quiz, QuizError, QuizGrade, QuizQuestion};
pub use session::{Screen, SessionError, SessionState};
pub use user::{ProgressData, User, UserDraft, UserError};

/// Completed module ids per course, in the order they were completed.
pub type CompletionMap = BTreeMap<CourseId, Vec<ModuleId>>;
