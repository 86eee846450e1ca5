//! Per-course module completion and the progress it drives.

use course_core::Progress;
use course_core::model::{CompletionMap, Course, CourseId, ModuleId};
use storage::keys;
use tracing::debug;

use crate::catalog_service::CourseCatalog;
use crate::error::CompletionError;
use crate::store::DurableStore;

/// How toggles treat ids that are not in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReferencePolicy {
    /// Unknown ids are accepted; progress is simply not recomputed.
    #[default]
    Permissive,
    /// Unknown course or module ids are rejected.
    Strict,
}

/// Outcome of a single toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// Whether the module is now marked complete.
    pub completed: bool,
    /// Recomputed progress, or `None` if the course is not in the catalog.
    pub progress: Option<Progress>,
}

/// Look up the course a toggle refers to.
///
/// This is the only place reference checks happen. Under
/// [`ReferencePolicy::Permissive`] an unknown course resolves to `Ok(None)`.
///
/// # Errors
///
/// Under [`ReferencePolicy::Strict`], returns `CompletionError::CourseNotFound`
/// or `CompletionError::ModuleNotFound`.
pub fn resolve_course<'a>(
    policy: ReferencePolicy,
    catalog: &'a [Course],
    course_id: CourseId,
    module_id: &ModuleId,
) -> Result<Option<&'a Course>, CompletionError> {
    let course = catalog.iter().find(|c| c.id() == course_id);
    match (policy, course) {
        (ReferencePolicy::Permissive, course) => Ok(course),
        (ReferencePolicy::Strict, None) => Err(CompletionError::CourseNotFound(course_id)),
        (ReferencePolicy::Strict, Some(course)) if !course.has_module(module_id) => {
            Err(CompletionError::ModuleNotFound {
                course_id,
                module_id: module_id.clone(),
            })
        }
        (ReferencePolicy::Strict, Some(course)) => Ok(Some(course)),
    }
}

/// Completed module ids per course, persisted under [`keys::COMPLETED_MODULES`].
pub struct CompletionEngine {
    completed: CompletionMap,
    policy: ReferencePolicy,
    store: DurableStore,
}

impl CompletionEngine {
    /// Restore the completion map, or start from `default` when nothing usable is stored.
    ///
    /// Duplicate module ids within a course are dropped, keeping the first.
    pub async fn load(store: DurableStore, default: CompletionMap, policy: ReferencePolicy) -> Self {
        let mut completed: CompletionMap = store.read(keys::COMPLETED_MODULES, default).await;
        for modules in completed.values_mut() {
            let mut seen = Vec::with_capacity(modules.len());
            modules.retain(|m| {
                if seen.contains(m) {
                    false
                } else {
                    seen.push(m.clone());
                    true
                }
            });
        }
        Self {
            completed,
            policy,
            store,
        }
    }

    #[must_use]
    pub fn policy(&self) -> ReferencePolicy {
        self.policy
    }

    /// Completed module ids for `course_id`, in completion order.
    #[must_use]
    pub fn completed_modules(&self, course_id: CourseId) -> &[ModuleId] {
        self.completed
            .get(&course_id)
            .map_or(&[][..], Vec::as_slice)
    }

    #[must_use]
    pub fn is_completed(&self, course_id: CourseId, module_id: &ModuleId) -> bool {
        self.completed_modules(course_id).contains(module_id)
    }

    #[must_use]
    pub fn completion_map(&self) -> &CompletionMap {
        &self.completed
    }

    /// Flip the completion of `module_id` in `course_id` and refresh the
    /// course's cached progress in `catalog`.
    ///
    /// Both in-memory updates happen before anything is persisted, so no
    /// reader sees one without the other. A course with no recorded entry
    /// starts from an empty set.
    ///
    /// # Errors
    ///
    /// Only under [`ReferencePolicy::Strict`], for ids missing from the catalog.
    /// Nothing is changed in that case.
    pub async fn toggle_module(
        &mut self,
        catalog: &mut CourseCatalog,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<ToggleOutcome, CompletionError> {
        let total = resolve_course(self.policy, catalog.all(), course_id, &module_id)?
            .map(|course| course.modules().len());

        let mut modules = self.completed_modules(course_id).to_vec();
        let completed = match modules.iter().position(|m| *m == module_id) {
            Some(index) => {
                modules.remove(index);
                false
            }
            None => {
                modules.push(module_id.clone());
                true
            }
        };

        let progress = total.map(|total| Progress::from_counts(modules.len(), total));
        if let Some(progress) = progress {
            catalog.apply_progress(course_id, progress);
        }
        self.completed.insert(course_id, modules);

        debug!(
            course_id = %course_id,
            module_id = %module_id,
            completed,
            progress = progress.map(Progress::value),
            "toggled module"
        );

        if progress.is_some() {
            catalog.persist().await;
        }
        self.store.write(keys::COMPLETED_MODULES, &self.completed).await;

        Ok(ToggleOutcome {
            completed,
            progress,
        })
    }
}
