//! Playback Queries - 播放状态查询

/// 查询频道占用情况
#[derive(Debug, Clone, Copy, Default)]
pub struct GetOccupancyQuery;
