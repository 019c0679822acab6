mod document_archive;
mod traits;

pub use document_archive::DocumentStoreArchive;
pub use traits::MessageArchive;
