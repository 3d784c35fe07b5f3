//! Worker Layer - Background Task Processing
//!
//! 实现 IdleWorker，处理播放结束后的清理

mod idle_worker;

pub use idle_worker::IdleWorker;
