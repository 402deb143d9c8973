/*!
 * Simulator Limits and Defaults
 *
 * Centralized location for simulator-wide constants.
 */

use super::types::Ticks;

/// Default Round-Robin time quantum (ticks)
/// Used when RR is selected and neither the caller nor the environment sets one
pub const DEFAULT_QUANTUM: Ticks = 2;

/// Priority assumed for processes run under non-priority policies
pub const DEFAULT_PRIORITY: i32 = 0;

/// Environment variable overriding the Round-Robin quantum
pub const ENV_QUANTUM: &str = "SCHEDSIM_QUANTUM";

/// Environment variable selecting start-time semantics (`first_dispatch` | `arrival`)
pub const ENV_START_TIME: &str = "SCHEDSIM_START_TIME";

/// Environment variable enabling JSON trace output
pub const ENV_TRACE_JSON: &str = "SCHEDSIM_TRACE_JSON";
