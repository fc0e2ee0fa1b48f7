use crate::catalog::{courses_for, offers_course};
use crate::dto::auth::RegisterRequest;
use crate::dto::user::UserRole;
use crate::error::Result;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
}

/// Sign-up form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub department: String,
    pub course: String,
}

impl RegisterForm {
    pub fn set(&mut self, field: RegisterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegisterField::Username => self.username = value,
            RegisterField::Email => self.email = value,
            RegisterField::Password => self.password = value,
        }
    }

    pub fn set_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Selecting a department drops a course it does not offer.
    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
        if !offers_course(&self.department, &self.course) {
            self.course.clear();
        }
    }

    pub fn set_course(&mut self, course: impl Into<String>) {
        self.course = course.into();
    }

    pub fn course_options(&self) -> &'static [&'static str] {
        courses_for(&self.department)
    }

    pub fn course_disabled(&self) -> bool {
        self.department.is_empty()
    }

    pub fn to_request(&self) -> Result<RegisterRequest> {
        let request = RegisterRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
            course: self.course.clone(),
            department: self.department.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}
