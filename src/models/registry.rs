//! # In-Memory Registry
//!
//! Owns the mentor and student collections. Both live behind one
//! [`RwLock`], so every operation sees a consistent snapshot and appends
//! never race. Collections keep registration order; a secondary email index
//! remembers only the first position registered for each email, which keeps
//! indexed lookups identical to a front-to-back scan.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::{RwLock, RwLockWriteGuard};
use tracing::{debug, instrument, warn};

use super::{Mentor, Student};

/// Lookup failures. Display strings are the client-facing messages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Mentor with email {0} not found")]
    MentorNotFound(String),

    #[error("Student with email {0} not found")]
    StudentNotFound(String),

    #[error("No mentors have been registered")]
    NoMentors,

    #[error("No students have been registered")]
    NoStudents,

    #[error("Student or mentor with specified ID not found")]
    PairNotFound,
}

/// Records addressable by email.
pub trait Identified {
    fn email(&self) -> &str;
}

/// Insertion-ordered records plus a first-write-wins email index.
#[derive(Debug)]
pub struct Roster<T> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Roster<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Identified> Roster<T> {
    /// Appends a record and returns its position. A duplicate email keeps
    /// pointing at the earlier record.
    pub fn push(&mut self, entry: T) -> usize {
        let position = self.entries.len();
        self.index
            .entry(entry.email().to_owned())
            .or_insert(position);
        self.entries.push(entry);
        position
    }

    #[inline]
    pub fn position(&self, email: &str) -> Option<usize> {
        self.index.get(email).copied()
    }

    pub fn find(&self, email: &str) -> Option<&T> {
        self.position(email).and_then(|pos| self.entries.get(pos))
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut T> {
        self.entries.get_mut(position)
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both collections, only ever reached through the [`Registry`] lock.
#[derive(Debug, Default)]
pub struct Rosters {
    pub mentors: Roster<Mentor>,
    pub students: Roster<Student>,
}

/// Thread-safe owner of every registered mentor and student.
#[derive(Debug, Default)]
pub struct Registry {
    rosters: RwLock<Rosters>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a mentor. Always succeeds, duplicates included.
    #[instrument(skip_all, fields(email = %mentor.email))]
    pub async fn register_mentor(&self, mentor: Mentor) -> Mentor {
        let mut rosters = self.rosters.write().await;
        let position = rosters.mentors.push(mentor.clone());
        debug!(position, "Mentor appended to registry");
        mentor
    }

    /// Appends a student. Always succeeds, duplicates included.
    #[instrument(skip_all, fields(email = %student.email))]
    pub async fn register_student(&self, student: Student) -> Student {
        let mut rosters = self.rosters.write().await;
        let position = rosters.students.push(student.clone());
        debug!(position, "Student appended to registry");
        student
    }

    /// Returns the first mentor registered under `email`.
    pub async fn find_mentor_by_email(&self, email: &str) -> Result<Mentor, RegistryError> {
        let rosters = self.rosters.read().await;
        rosters.mentors.find(email).cloned().ok_or_else(|| {
            warn!(%email, "Mentor not found");
            RegistryError::MentorNotFound(email.to_owned())
        })
    }

    /// Returns the first student registered under `email`.
    pub async fn find_student_by_email(&self, email: &str) -> Result<Student, RegistryError> {
        let rosters = self.rosters.read().await;
        rosters.students.find(email).cloned().ok_or_else(|| {
            warn!(%email, "Student not found");
            RegistryError::StudentNotFound(email.to_owned())
        })
    }

    /// All mentors in registration order, or [`RegistryError::NoMentors`].
    pub async fn list_mentors(&self) -> Result<Vec<Mentor>, RegistryError> {
        let mentors = self.mentors().await;
        if mentors.is_empty() {
            return Err(RegistryError::NoMentors);
        }
        Ok(mentors)
    }

    /// All students in registration order, or [`RegistryError::NoStudents`].
    pub async fn list_students(&self) -> Result<Vec<Student>, RegistryError> {
        let rosters = self.rosters.read().await;
        if rosters.students.is_empty() {
            return Err(RegistryError::NoStudents);
        }
        Ok(rosters.students.as_slice().to_vec())
    }

    /// Snapshot of all mentors, possibly empty.
    pub async fn mentors(&self) -> Vec<Mentor> {
        self.rosters.read().await.mentors.as_slice().to_vec()
    }

    pub async fn mentor_count(&self) -> usize {
        self.rosters.read().await.mentors.len()
    }

    pub async fn student_count(&self) -> usize {
        self.rosters.read().await.students.len()
    }

    /// Exclusive access for operations spanning both collections.
    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Rosters> {
        self.rosters.write().await
    }
}
