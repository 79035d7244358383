use tracing::{info, instrument, warn};

use crate::models::{Mentor, Registry, RegistryError, Student};

/// Outcome of a successful assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pub mentor: Mentor,
    /// The student's name as registered, before the overwrite.
    pub student_name: String,
    /// The student record after the assignment.
    pub student: Student,
}

pub struct MatchingService;

impl MatchingService {
    /// Pairs the first student registered under `student_email` with the first
    /// mentor registered under `mentor_email`.
    ///
    /// The student's `name` and `school` are overwritten with the mentor's;
    /// the email is kept. No separate pairing record exists afterwards. Both
    /// lookups and the overwrite happen under one exclusive lock, and nothing
    /// is modified unless both records exist.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PairNotFound`] if either email is unknown.
    #[instrument(skip(registry))]
    pub async fn assign_mentor(
        registry: &Registry,
        student_email: &str,
        mentor_email: &str,
    ) -> Result<Pairing, RegistryError> {
        let mut rosters = registry.write().await;

        let student_pos = rosters.students.position(student_email);
        let mentor = rosters.mentors.find(mentor_email).cloned();

        let (Some(student_pos), Some(mentor)) = (student_pos, mentor) else {
            warn!(
                student_found = student_pos.is_some(),
                "Assignment lookup failed"
            );
            return Err(RegistryError::PairNotFound);
        };

        let student = rosters
            .students
            .get_mut(student_pos)
            .ok_or(RegistryError::PairNotFound)?;
        let student_name = std::mem::replace(&mut student.name, mentor.name.clone());
        student.school.clone_from(&mentor.school);
        let student = student.clone();

        info!(mentor = %mentor.name, student = %student_name, "Mentor assigned to student");
        Ok(Pairing {
            mentor,
            student_name,
            student,
        })
    }
}
