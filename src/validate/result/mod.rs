//! Structural and content validation of a result table.
//!
//! Checks run in a fixed order and the first failure short-circuits:
//!
//! 1. required columns present
//! 2. exact column set (when enabled)
//! 3. expected row count
//! 4. fingerprint equals the expected digest
//!
//! Later checks are meaningless on a structurally wrong table, so they are
//! never reached. Failure messages are deliberately generic so they do not
//! reveal the expected answer.

mod messages;
mod validator;


pub use messages::{
    NOT_CORRECT_MESSAGE, SUCCESS_MESSAGES, WRONG_COLUMNS_MESSAGE, WRONG_ROWS_MESSAGE,
    missing_columns_message, pick_success_message,
};
pub use validator::{ResultValidator, build_validator};
