//! Learner-facing messages for result validation.

use rand::Rng;
use rand::seq::SliceRandom;

pub const WRONG_COLUMNS_MESSAGE: &str = "Wrong number of columns! Make corrections and try again.";

pub const WRONG_ROWS_MESSAGE: &str = "Wrong number of rows! Make corrections and try again.";

pub const NOT_CORRECT_MESSAGE: &str =
    "The result is not correct yet. Make corrections and try again.";

/// Encouragement shown on a correct result. One is picked at random.
pub const SUCCESS_MESSAGES: [&str; 8] = [
    "👏 Nice!",
    "💪 Great job",
    "👏 Good job",
    "👏 Keep up the good work!",
    "👏 I think you’re getting the hang of this!",
    "👏 Well played",
    "🌟 Fantastic! Let’s keep it going",
    "👏 Nicely done",
];

/// Explicit list of missing columns, used when spoilers are allowed.
pub fn missing_columns_message(missing: &[&str]) -> String {
    format!("Missing column(s): {}", missing.join(", "))
}

/// Pick an encouragement message.
pub fn pick_success_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUCCESS_MESSAGES.choose(rng).copied().unwrap_or(SUCCESS_MESSAGES[0])
}
