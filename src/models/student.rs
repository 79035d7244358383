use std::fmt;

use super::registry::Identified;

/// A registered participant waiting for (or holding) a mentor match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub school: String,
    pub email: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        school: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
            email: email.into(),
        }
    }
}

impl Identified for Student {
    #[inline]
    fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Student: {}, School: {}, Email: {}",
            self.name, self.school, self.email
        )
    }
}
