use course_core::model::{
    CompletionMap, Course, CourseId, ModuleId, QuizGrade, Screen, SessionState, User, UserDraft,
};
use course_core::seed;
use storage::repository::Storage;
use tracing::info;

use crate::catalog_service::CourseCatalog;
use crate::completion_service::{CompletionEngine, ReferencePolicy, ToggleOutcome};
use crate::config::DashboardConfig;
use crate::enrollment_service::{CoursePartition, EnrollmentRegistry};
use crate::error::DashboardError;
use crate::session_service::SessionController;
use crate::store::DurableStore;

/// Seed values used for any slot that has nothing persisted yet.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub catalog: Vec<Course>,
    pub enrollment: Vec<CourseId>,
    pub completion: CompletionMap,
    pub user: User,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            catalog: seed::default_catalog(),
            enrollment: seed::default_enrollment(),
            completion: seed::default_completion(),
            user: seed::default_user(),
        }
    }
}

/// Everything the presentation layer talks to.
///
/// Each store is owned by exactly one component. Operations run to completion
/// before returning, so callers always read the latest committed state.
pub struct Dashboard {
    session: SessionController,
    catalog: CourseCatalog,
    enrollment: EnrollmentRegistry,
    completion: CompletionEngine,
}

impl Dashboard {
    /// Build a dashboard backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Sqlite` if the database cannot be opened or migrated.
    pub async fn new_sqlite(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let storage = Storage::sqlite(&config.db_url).await?;
        Ok(Self::from_storage(&storage, config.reference_policy, SeedData::default()).await)
    }

    /// Dashboard over a fresh in-memory medium, seeded with the default dataset.
    pub async fn in_memory() -> Self {
        Self::from_storage(
            &Storage::in_memory(),
            ReferencePolicy::default(),
            SeedData::default(),
        )
        .await
    }

    /// Restore every persisted slot from `storage`, falling back to `seed`.
    pub async fn from_storage(storage: &Storage, policy: ReferencePolicy, seed: SeedData) -> Self {
        let store = DurableStore::new(storage.kv.clone());
        let catalog = CourseCatalog::load(store.clone(), seed.catalog).await;
        let enrollment = EnrollmentRegistry::load(store.clone(), seed.enrollment).await;
        let completion = CompletionEngine::load(store, seed.completion, policy).await;
        info!(
            courses = catalog.all().len(),
            enrolled = enrollment.enrolled_ids().len(),
            ?policy,
            "dashboard state restored"
        );

        Self {
            session: SessionController::new(seed.user),
            catalog,
            enrollment,
            completion,
        }
    }

    // ─── Read surface ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn user(&self) -> &User {
        self.session.user()
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        self.session.state()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.state().is_logged_in()
    }

    #[must_use]
    pub fn screen(&self) -> Option<Screen> {
        self.session.screen()
    }

    /// The selected course as it currently stands in the catalog.
    ///
    /// Falls back to the snapshot taken at selection time when the catalog
    /// has no entry for it.
    #[must_use]
    pub fn selected_course(&self) -> Option<&Course> {
        let selected = self.session.state().selected_course()?;
        self.catalog.get(selected.id()).or(Some(selected))
    }

    #[must_use]
    pub fn courses(&self) -> &[Course] {
        self.catalog.all()
    }

    #[must_use]
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.catalog.get(id)
    }

    #[must_use]
    pub fn partition(&self) -> CoursePartition {
        self.enrollment.partition(self.catalog.all())
    }

    #[must_use]
    pub fn is_enrolled(&self, id: CourseId) -> bool {
        self.enrollment.is_enrolled(id)
    }

    #[must_use]
    pub fn completed_modules(&self, id: CourseId) -> &[ModuleId] {
        self.completion.completed_modules(id)
    }

    /// An enrolled course whose progress reached 100% has a certificate.
    #[must_use]
    pub fn certificate_available(&self, id: CourseId) -> bool {
        self.is_enrolled(id) && self.catalog.get(id).is_some_and(Course::is_complete)
    }

    /// Grade answers to a module quiz, or to the final assessment when
    /// `module_id` is `None`. Grading changes no state.
    ///
    /// Returns `None` when the course or module is unknown.
    #[must_use]
    pub fn grade_quiz<S: AsRef<str>>(
        &self,
        course_id: CourseId,
        module_id: Option<&ModuleId>,
        answers: &[S],
    ) -> Option<QuizGrade> {
        let course = self.catalog.get(course_id)?;
        let quiz = match module_id {
            Some(id) => course.module(id)?.quiz(),
            None => course.final_assessment(),
        };
        Some(quiz.grade(answers))
    }

    // ─── Operations ───────────────────────────────────────────────────────────

    pub fn login(&mut self) {
        self.session.login();
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Domain` while logged out.
    pub fn view_profile(&mut self) -> Result<(), DashboardError> {
        self.session
            .view_profile()
            .map_err(|err| course_core::Error::from(err).into())
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Domain` while logged out.
    pub fn select_course(&mut self, course: Course) -> Result<(), DashboardError> {
        self.session
            .select_course(course)
            .map_err(|err| course_core::Error::from(err).into())
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Domain` while logged out.
    pub fn view_certificate(&mut self, course: Course) -> Result<(), DashboardError> {
        self.session
            .view_certificate(course)
            .map_err(|err| course_core::Error::from(err).into())
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Domain` while logged out.
    pub fn back(&mut self) -> Result<(), DashboardError> {
        self.session
            .back()
            .map_err(|err| course_core::Error::from(err).into())
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Domain` while logged out or if the draft is invalid.
    pub fn update_profile(&mut self, draft: UserDraft) -> Result<&User, DashboardError> {
        Ok(self.session.update_profile(draft)?)
    }

    /// Enroll in a course. Returns `true` when it was not enrolled before.
    pub async fn enroll(&mut self, id: CourseId) -> bool {
        self.enrollment.enroll(id).await
    }

    /// # Errors
    ///
    /// Returns `DashboardError::Completion` only under the strict reference policy.
    pub async fn toggle_module(
        &mut self,
        course_id: CourseId,
        module_id: ModuleId,
    ) -> Result<ToggleOutcome, DashboardError> {
        Ok(self
            .completion
            .toggle_module(&mut self.catalog, course_id, module_id)
            .await?)
    }
}
