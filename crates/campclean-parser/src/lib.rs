pub mod archive;
pub mod decode;
pub mod errors;

pub use archive::{read_archive, read_input_dir};
pub use decode::decode_csv;
pub use errors::IngestError;
