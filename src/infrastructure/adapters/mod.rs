//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod fetch;
pub mod storage;
pub mod tts;
pub mod voice;

pub use fetch::*;
pub use storage::*;
pub use tts::*;
pub use voice::*;
