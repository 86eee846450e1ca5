//! Shared error types for the services crate.

use thiserror::Error;

use course_core::model::{CourseId, ModuleId};
use storage::sqlite::SqliteInitError;

/// Errors emitted by `CompletionEngine` under the strict reference policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompletionError {
    #[error("course {0} is not in the catalog")]
    CourseNotFound(CourseId),
    #[error("module {module_id} does not belong to course {course_id}")]
    ModuleNotFound {
        course_id: CourseId,
        module_id: ModuleId,
    },
}

/// Errors emitted by the `Dashboard` facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DashboardError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Domain(#[from] course_core::Error),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
