mod base;
mod output;
mod seeder;
mod source;

pub use base::*;
pub use output::*;
pub use seeder::*;
pub use source::*;
