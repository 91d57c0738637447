pub mod engine;
pub mod outcome;

pub use engine::group;
pub use outcome::{BatchGroup, GroupedView, SequencedRecord};
