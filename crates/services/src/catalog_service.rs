use course_core::Progress;
use course_core::model::{Course, CourseId};
use storage::keys;

use crate::store::DurableStore;

/// The full list of courses, persisted under [`keys::COURSES`].
///
/// Catalog order never changes. The only mutation is replacing a course's
/// cached progress, which the completion engine drives.
pub struct CourseCatalog {
    courses: Vec<Course>,
    store: DurableStore,
}

impl CourseCatalog {
    /// Restore the catalog, or start from `default` when nothing usable is stored.
    pub async fn load(store: DurableStore, default: Vec<Course>) -> Self {
        let courses = store.read(keys::COURSES, default).await;
        Self { courses, store }
    }

    #[must_use]
    pub fn all(&self) -> &[Course] {
        &self.courses
    }

    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id() == id)
    }

    /// Replace the progress of `id` and persist the catalog.
    ///
    /// Returns `false` (and writes nothing) when the course is unknown.
    pub async fn update_progress(&mut self, id: CourseId, progress: Progress) -> bool {
        let updated = self.apply_progress(id, progress);
        if updated {
            self.persist().await;
        }
        updated
    }

    pub(crate) fn apply_progress(&mut self, id: CourseId, progress: Progress) -> bool {
        let Some(slot) = self.courses.iter_mut().find(|c| c.id() == id) else {
            return false;
        };
        let course = slot.clone();
        *slot = course.with_progress(progress);
        true
    }

    pub(crate) async fn persist(&self) {
        self.store.write(keys::COURSES, &self.courses).await;
    }
}
