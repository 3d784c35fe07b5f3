//! Playback Query Handlers

use std::sync::Arc;

use crate::application::commands::handlers::PlaybackController;
use crate::application::queries::playback_queries::GetOccupancyQuery;
use crate::domain::playback::Occupancy;

/// GetOccupancy Handler - 只读访问占用状态，不提供修改能力
#[derive(Clone)]
pub struct GetOccupancyHandler {
    controller: Arc<PlaybackController>,
}

impl GetOccupancyHandler {
    pub fn new(controller: Arc<PlaybackController>) -> Self {
        Self { controller }
    }

    pub fn handle(&self, _query: GetOccupancyQuery) -> Occupancy {
        self.controller.occupancy()
    }
}
