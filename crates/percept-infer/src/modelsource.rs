use std::path::PathBuf;

/// Where model weights come from: a file on disk or an in-memory buffer.
pub enum ModelSource {
    File(PathBuf),
    Memory(Vec<u8>),
}
