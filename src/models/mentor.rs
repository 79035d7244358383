use std::fmt;

use super::registry::Identified;

/// A registered volunteer who can be paired with students.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mentor {
    pub name: String,
    pub school: String,
    /// Lookup key. Not unique: duplicates are accepted and the first one wins.
    pub email: String,
    pub newsletter: bool,
}

impl Mentor {
    pub fn new(
        name: impl Into<String>,
        school: impl Into<String>,
        email: impl Into<String>,
        newsletter: bool,
    ) -> Self {
        Self {
            name: name.into(),
            school: school.into(),
            email: email.into(),
            newsletter,
        }
    }
}

impl Identified for Mentor {
    #[inline]
    fn email(&self) -> &str {
        &self.email
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mentor: {}, School: {}, Email: {}, Newsletter: {}",
            self.name, self.school, self.email, self.newsletter
        )
    }
}
