use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a signed-in account may do in the dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Organizer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Organizer => "organizer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Student => "Student",
            UserRole::Organizer => "Organizer",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "student" => Ok(UserRole::Student),
            "organizer" => Ok(UserRole::Organizer),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// The signed-in account as returned by the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserDto {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
}

impl UserDto {
    pub fn is_organizer(&self) -> bool {
        self.role == UserRole::Organizer
    }

    pub fn is_student(&self) -> bool {
        self.role == UserRole::Student
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn user_decodes_with_either_id_key() {
        let a: UserDto =
            serde_json::from_str(r#"{"_id":"u1","username":"asha","role":"organizer"}"#).unwrap();
        let b: UserDto = serde_json::from_str(r#"{"id":"u2","username":"ravi"}"#).unwrap();
        assert_eq!(a.id, "u1");
        assert!(a.is_organizer());
        assert_eq!(b.id, "u2");
        assert!(b.is_student());
    }

    #[test]
    fn role_parses_case_insensitively() {
        assert_eq!("Organizer".parse::<UserRole>(), Ok(UserRole::Organizer));
        assert_eq!(" student ".parse::<UserRole>(), Ok(UserRole::Student));
        assert!("admin".parse::<UserRole>().is_err());
        assert_eq!(UserRole::Organizer.to_string(), "organizer");
    }
}
