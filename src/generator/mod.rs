// Question generation module
// Turns a phrase configuration into an ordered list of phrase-pair questions

mod pairing;
mod question;
mod seed;

pub use pairing::{generate_questions, QuestionGenerator};
pub use question::{pair_label, GeneratedQuestion};
pub use seed::seed_from_str;
