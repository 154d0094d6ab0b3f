pub mod model;

pub use model::AnswerSnapshot;
