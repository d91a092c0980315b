pub mod error;
pub mod mapper;
pub mod merge;
pub mod pipeline;
pub mod schema;
pub mod writer;
