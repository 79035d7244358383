mod mentor;
mod registry;
mod state;
mod student;

pub use mentor::Mentor;
pub use registry::{Identified, Registry, RegistryError, Roster, Rosters};
pub use state::AppState;
pub use student::Student;
