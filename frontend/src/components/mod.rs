pub mod compose;
pub mod data_sources;
pub mod exchanges;
