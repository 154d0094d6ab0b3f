pub mod block;
pub mod rule;
pub mod trace;
pub mod value;

pub use block::*;
pub use rule::*;
pub use trace::*;
pub use value::*;

/// Answers keyed by field id, as supplied by the form-filling surface.
pub type AnswerMap = ahash::AHashMap<String, Value>;
