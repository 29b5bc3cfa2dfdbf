//! The phases, each taking the previous phase's word and returning the next.
//!
//! A phase records into the trace only when it changes the word.

mod step1;
mod step4;
mod step5;

pub use step1::{step_1a, step_1b, step_1b_post, step_1c};
pub use step4::step_4;
pub use step5::step_5;
