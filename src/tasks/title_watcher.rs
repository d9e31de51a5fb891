//! Status title task

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::{state::AppState, utils::format::status_title};

/// Background task that keeps the status title in step with the work time
pub async fn title_watcher_task(state: Arc<AppState>) {
    info!("Starting title watcher task");

    let mut snapshots = state.subscribe_state();

    while snapshots.changed().await.is_ok() {
        let title = status_title(&snapshots.borrow_and_update());

        match state.set_title(title.clone()) {
            Ok(true) => debug!("Title: {}", title),
            Ok(false) => {}
            Err(e) => warn!("Failed to update title: {}", e),
        }
    }

    info!("Snapshot channel closed, title watcher exiting");
}
