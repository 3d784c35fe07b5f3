//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：对外只暴露占用状态的读取

mod playback_queries;

pub mod handlers;

pub use playback_queries::*;
