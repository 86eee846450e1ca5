use course_core::model::{Course, Screen, SessionError, SessionState, User, UserDraft};

/// Volatile session: login state, current screen, and the user profile.
///
/// Nothing here is persisted.
pub struct SessionController {
    state: SessionState,
    user: User,
}

impl SessionController {
    #[must_use]
    pub fn new(user: User) -> Self {
        Self {
            state: SessionState::default(),
            user,
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    #[must_use]
    pub fn screen(&self) -> Option<Screen> {
        self.state.screen()
    }

    pub fn login(&mut self) {
        self.state.login();
    }

    pub fn logout(&mut self) {
        self.state.logout();
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn view_profile(&mut self) -> Result<(), SessionError> {
        self.state.view_profile()
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn select_course(&mut self, course: Course) -> Result<(), SessionError> {
        self.state.select_course(course)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn view_certificate(&mut self, course: Course) -> Result<(), SessionError> {
        self.state.view_certificate(course)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.state.back()
    }

    /// Replace the profile wholesale and return to the dashboard.
    ///
    /// # Errors
    ///
    /// Returns `course_core::Error::Session` while logged out and
    /// `course_core::Error::User` if the draft fails validation. The current
    /// profile is kept in both cases.
    pub fn update_profile(&mut self, draft: UserDraft) -> Result<&User, course_core::Error> {
        if !self.state.is_logged_in() {
            return Err(SessionError::NotLoggedIn.into());
        }
        let user = draft.validate()?;
        self.user = user;
        self.state.back()?;
        Ok(&self.user)
    }
}
