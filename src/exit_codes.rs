//! Exit code constants for the sqlgrade CLI.
//!
//! - 0: Success (or a passing verdict)
//! - 1: User error (bad args, unreadable input, misconfigured exercise)
//! - 2: Validation failure (the submission did not pass)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or an invalid exercise config.
pub const USER_ERROR: i32 = 1;

/// Validation failure: the submitted query or its result did not pass.
pub const VALIDATION_FAILURE: i32 = 2;
