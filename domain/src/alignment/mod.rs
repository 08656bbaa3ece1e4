//! Alignment scoring domain
//!
//! A quiz is a fixed, ordered list of weighted yes/no questions. Each answer
//! moves a running score (agree subtracts the weight, disagree adds it) and
//! the final score is mapped onto one of six [`AlignmentLabel`]s by hard
//! thresholds:
//!
//! ```text
//!  Nationalist │ Conservative │ Moderate │ Centrist │ Liberal │ Progressive
//!   ... -18    │ -17 .. -9    │ -8 .. -3 │ -2 .. 3  │ 4 .. 15 │ 16 ...
//! ```

pub mod label;
pub mod question;
pub mod quiz;
pub mod scoring;

pub use label::AlignmentLabel;
pub use question::Question;
pub use quiz::{QuizError, QuizOutcome, QuizSession, QuizState};
pub use scoring::{Answer, score};
