use thiserror::Error;

use crate::model::course::Course;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no user is logged in")]
    NotLoggedIn,
}

/// Screens the dashboard can show once logged in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Dashboard,
    Profile,
    CourseDetail,
    Certificate,
}

/// Volatile navigation state. Never persisted; every process starts logged out.
///
/// `selected_course` is set whenever the screen is `CourseDetail` or
/// `Certificate`, and cleared on the way back to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn {
        screen: Screen,
        selected_course: Option<Course>,
    },
}

impl SessionState {
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::LoggedIn { .. })
    }

    #[must_use]
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn { screen, .. } => Some(*screen),
        }
    }

    #[must_use]
    pub fn selected_course(&self) -> Option<&Course> {
        match self {
            Self::LoggedOut => None,
            Self::LoggedIn {
                selected_course, ..
            } => selected_course.as_ref(),
        }
    }

    pub fn login(&mut self) {
        *self = Self::LoggedIn {
            screen: Screen::Dashboard,
            selected_course: None,
        };
    }

    pub fn logout(&mut self) {
        *self = Self::LoggedOut;
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn view_profile(&mut self) -> Result<(), SessionError> {
        self.navigate(Screen::Profile, None)
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn select_course(&mut self, course: Course) -> Result<(), SessionError> {
        self.navigate(Screen::CourseDetail, Some(course))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn view_certificate(&mut self, course: Course) -> Result<(), SessionError> {
        self.navigate(Screen::Certificate, Some(course))
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotLoggedIn` while logged out.
    pub fn back(&mut self) -> Result<(), SessionError> {
        self.navigate(Screen::Dashboard, None)
    }

    fn navigate(&mut self, to: Screen, course: Option<Course>) -> Result<(), SessionError> {
        match self {
            Self::LoggedOut => Err(SessionError::NotLoggedIn),
            Self::LoggedIn {
                screen,
                selected_course,
            } => {
                // the profile screen keeps whatever course was selected before
                if to != Screen::Profile {
                    *selected_course = course;
                }
                *screen = to;
                Ok(())
            }
        }
    }
}
