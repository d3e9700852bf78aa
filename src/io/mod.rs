/*!
# IO utilities

Saving of parsed records and checksums of the generated files.
!*/
pub mod checksum;
pub mod writer;

pub use writer::{RecordWriter, WriterTrait};
