pub mod text_utils;

pub use text_utils::{word_at, word_span_at};
