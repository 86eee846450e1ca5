use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, ModuleId};
use crate::model::quiz::Quiz;
use crate::progress::Progress;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CourseError {
    #[error("course title cannot be empty")]
    EmptyTitle,

    #[error("module title cannot be empty (module {0})")]
    EmptyModuleTitle(ModuleId),

    #[error("module id {0} appears more than once")]
    DuplicateModuleId(ModuleId),
}

//
// ─── MODULE ────────────────────────────────────────────────────────────────────
//

/// Descriptive assignment attached to a module. Not tracked for completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub title: String,
    pub description: String,
}

/// One unit of a course: a video, its quiz, and an optional assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    id: ModuleId,
    title: String,
    duration: String,
    video_url: String,
    description: String,
    quiz: Quiz,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignment: Option<Assignment>,
}

impl Module {
    #[must_use]
    pub fn new(
        id: ModuleId,
        title: impl Into<String>,
        duration: impl Into<String>,
        video_url: impl Into<String>,
        description: impl Into<String>,
        quiz: Quiz,
        assignment: Option<Assignment>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            duration: duration.into(),
            video_url: video_url.into(),
            description: description.into(),
            quiz,
            assignment,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ModuleId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn video_url(&self) -> &str {
        &self.video_url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn assignment(&self) -> Option<&Assignment> {
        self.assignment.as_ref()
    }
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Unvalidated course content, as authored in the catalog.
#[derive(Debug, Clone)]
pub struct CourseDraft {
    pub id: CourseId,
    pub title: String,
    pub category: String,
    pub duration: String,
    pub image_url: String,
    pub description: String,
    pub modules: Vec<Module>,
    pub final_assessment: Quiz,
    pub difficulty: String,
}

impl CourseDraft {
    /// Validate the draft into a course with zero progress.
    ///
    /// # Errors
    ///
    /// Returns `CourseError` for blank titles or duplicate module ids.
    pub fn validate(self) -> Result<Course, CourseError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CourseError::EmptyTitle);
        }

        let mut seen = HashSet::with_capacity(self.modules.len());
        for module in &self.modules {
            if module.title.trim().is_empty() {
                return Err(CourseError::EmptyModuleTitle(module.id.clone()));
            }
            if !seen.insert(&module.id) {
                return Err(CourseError::DuplicateModuleId(module.id.clone()));
            }
        }

        Ok(Course {
            id: self.id,
            title: title.to_owned(),
            category: self.category,
            duration: self.duration,
            progress: Progress::ZERO,
            image_url: self.image_url,
            description: self.description,
            modules: self.modules,
            final_assessment: self.final_assessment,
            difficulty: self.difficulty,
        })
    }
}

/// A course in the catalog.
///
/// `progress` is a cached value owned by the completion engine; it is only
/// replaced through [`Course::with_progress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CourseRecord")]
pub struct Course {
    id: CourseId,
    title: String,
    category: String,
    duration: String,
    progress: Progress,
    image_url: String,
    description: String,
    modules: Vec<Module>,
    final_assessment: Quiz,
    difficulty: String,
}

/// Stored shape of a course. Restored courses pass through
/// [`CourseDraft::validate`] and keep their cached progress.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseRecord {
    id: CourseId,
    title: String,
    category: String,
    duration: String,
    progress: Progress,
    image_url: String,
    description: String,
    modules: Vec<Module>,
    final_assessment: Quiz,
    difficulty: String,
}

impl TryFrom<CourseRecord> for Course {
    type Error = CourseError;

    fn try_from(record: CourseRecord) -> Result<Self, Self::Error> {
        let progress = record.progress;
        let course = CourseDraft {
            id: record.id,
            title: record.title,
            category: record.category,
            duration: record.duration,
            image_url: record.image_url,
            description: record.description,
            modules: record.modules,
            final_assessment: record.final_assessment,
            difficulty: record.difficulty,
        }
        .validate()?;
        Ok(course.with_progress(progress))
    }
}

impl Course {
    // Accessors
    #[must_use]
    pub fn id(&self) -> CourseId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    #[must_use]
    pub fn final_assessment(&self) -> &Quiz {
        &self.final_assessment
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }

    #[must_use]
    pub fn module(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.iter().find(|m| m.id() == id)
    }

    #[must_use]
    pub fn has_module(&self, id: &ModuleId) -> bool {
        self.module(id).is_some()
    }

    pub fn module_ids(&self) -> impl Iterator<Item = &ModuleId> {
        self.modules.iter().map(Module::id)
    }

    /// True once the cached progress reached 100%.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    /// Same course with only the progress field replaced.
    #[must_use]
    pub fn with_progress(self, progress: Progress) -> Self {
        Self { progress, ..self }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
