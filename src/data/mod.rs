mod loader;

pub use loader::{load_bank_from_json, parse_bank, LessonBank, LoadError, Topic};
