use course_core::model::{Course, CourseId};
use storage::keys;
use tracing::debug;

use crate::store::DurableStore;

/// Catalog split into the courses the user joined and everything else.
///
/// Both halves keep catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoursePartition {
    pub enrolled: Vec<Course>,
    pub available: Vec<Course>,
}

/// Set of enrolled course ids, persisted under [`keys::ENROLLED_COURSE_IDS`].
pub struct EnrollmentRegistry {
    ids: Vec<CourseId>,
    store: DurableStore,
}

impl EnrollmentRegistry {
    /// Restore the registry, or start from `default` when nothing usable is stored.
    ///
    /// Duplicate ids in stored data are dropped, keeping the first occurrence.
    pub async fn load(store: DurableStore, default: Vec<CourseId>) -> Self {
        let stored: Vec<CourseId> = store.read(keys::ENROLLED_COURSE_IDS, default).await;
        let mut ids = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Self { ids, store }
    }

    /// Enroll in `id`. Enrolling twice is a no-op.
    ///
    /// Returns `true` when the id was newly added.
    pub async fn enroll(&mut self, id: CourseId) -> bool {
        if self.is_enrolled(id) {
            return false;
        }
        self.ids.push(id);
        debug!(course_id = %id, "enrolled");
        self.store.write(keys::ENROLLED_COURSE_IDS, &self.ids).await;
        true
    }

    #[must_use]
    pub fn is_enrolled(&self, id: CourseId) -> bool {
        self.ids.contains(&id)
    }

    /// Enrolled ids in enrollment order.
    #[must_use]
    pub fn enrolled_ids(&self) -> &[CourseId] {
        &self.ids
    }

    #[must_use]
    pub fn partition(&self, catalog: &[Course]) -> CoursePartition {
        let (enrolled, available) = catalog
            .iter()
            .cloned()
            .partition(|course| self.is_enrolled(course.id()));
        CoursePartition {
            enrolled,
            available,
        }
    }
}
