pub mod candidate;
pub mod search_response;

pub use candidate::{Candidate, Keywords, SearchField};
pub use search_response::SearchResponse;
