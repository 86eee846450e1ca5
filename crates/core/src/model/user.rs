use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UserError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("invalid email address")]
    InvalidEmail,
    #[error("invalid avatar URL")]
    InvalidAvatarUrl,
}

/// The logged-in learner's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    name: String,
    email: String,
    avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    roll_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    year_of_passing: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    institute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,
}

/// Editable profile fields, as submitted from the profile screen.
#[derive(Clone, Debug, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
    pub roll_no: Option<String>,
    pub year_of_passing: Option<u16>,
    pub institute: Option<String>,
    pub bio: Option<String>,
}

impl UserDraft {
    /// Validate and normalize the draft into a profile.
    ///
    /// # Errors
    ///
    /// Returns `UserError` if the name is blank, the email has no `@`, or the
    /// avatar reference is present but not a URL.
    pub fn validate(self) -> Result<User, UserError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(UserError::EmptyName);
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(UserError::InvalidEmail);
        }
        let avatar_url = self.avatar_url.trim();
        if !avatar_url.is_empty() && Url::parse(avatar_url).is_err() {
            return Err(UserError::InvalidAvatarUrl);
        }

        Ok(User {
            name: name.to_owned(),
            email: email.to_owned(),
            avatar_url: avatar_url.to_owned(),
            roll_no: normalize_optional(self.roll_no),
            year_of_passing: self.year_of_passing,
            institute: normalize_optional(self.institute),
            bio: normalize_optional(self.bio),
        })
    }
}

impl User {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    #[must_use]
    pub fn roll_no(&self) -> Option<&str> {
        self.roll_no.as_deref()
    }

    #[must_use]
    pub fn year_of_passing(&self) -> Option<u16> {
        self.year_of_passing
    }

    #[must_use]
    pub fn institute(&self) -> Option<&str> {
        self.institute.as_deref()
    }

    #[must_use]
    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Current profile as an editable draft.
    #[must_use]
    pub fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            avatar_url: self.avatar_url.clone(),
            roll_no: self.roll_no.clone(),
            year_of_passing: self.year_of_passing,
            institute: self.institute.clone(),
            bio: self.bio.clone(),
        }
    }
}

/// Month label with a count of completed items, for reporting views.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressData {
    pub month: String,
    pub completed: u32,
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> UserDraft {
        UserDraft {
            name: " Sam Lee ".into(),
            email: "sam@example.com".into(),
            avatar_url: "https://avatars.example/sam.png".into(),
            roll_no: Some("  ".into()),
            year_of_passing: Some(2025),
            institute: Some(" Tech U ".into()),
            bio: None,
        }
    }

    #[test]
    fn validate_normalizes_fields() {
        let user = draft().validate().unwrap();
        assert_eq!(user.name(), "Sam Lee");
        assert_eq!(user.roll_no(), None);
        assert_eq!(user.institute(), Some("Tech U"));
        assert_eq!(user.year_of_passing(), Some(2025));
    }

    #[test]
    fn validate_rejects_bad_input() {
        let mut d = draft();
        d.name = "   ".into();
        assert_eq!(d.validate().unwrap_err(), UserError::EmptyName);

        let mut d = draft();
        d.email = "not-an-email".into();
        assert_eq!(d.validate().unwrap_err(), UserError::InvalidEmail);

        let mut d = draft();
        d.avatar_url = "no scheme here".into();
        assert_eq!(d.validate().unwrap_err(), UserError::InvalidAvatarUrl);
    }

    #[test]
    fn blank_avatar_is_allowed() {
        let mut d = draft();
        d.avatar_url = String::new();
        assert_eq!(d.validate().unwrap().avatar_url(), "");
    }

    #[test]
    fn draft_round_trips_through_user() {
        let user = draft().validate().unwrap();
        assert_eq!(user.to_draft().validate().unwrap(), user);
    }
}
