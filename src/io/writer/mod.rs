/*!
# Record writing

[RecordWriter] writes dialog records as JSON lines, one file per split.
!*/
mod writer_record;
mod writertrait;

pub use writer_record::RecordWriter;
pub use writertrait::WriterTrait;
