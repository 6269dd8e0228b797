//! Activity trait, pure reducer and result types.

mod activity;
mod result;

pub use activity::{reduce, Activity, ActivityKind, Context};
pub use result::{ActivityResult, MemoryResult, QuizResult};
