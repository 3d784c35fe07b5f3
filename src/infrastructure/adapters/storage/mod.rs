//! Storage Adapter - 音频暂存区实现

mod file_storage;

pub use file_storage::FileAudioStorage;
