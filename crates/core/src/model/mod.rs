mod catalog;
mod question;
mod score;
mod session;

pub use catalog::{Catalog, CatalogError, CatalogItem};
pub use question::{OPTIONS_PER_QUESTION, Question, QuestionShapeError};
pub use score::{Score, WrongAnswer};
pub use session::{QuizSummary, SummaryError};
