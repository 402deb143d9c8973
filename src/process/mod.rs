/*!
 * Process Model
 * Descriptors, working copies, and results shared by every policy
 */

pub mod types;
pub mod validation;

pub use types::{Process, ProcessSpec, ScheduleResult};
pub use validation::validate_processes;
