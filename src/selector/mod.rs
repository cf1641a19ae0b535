//! Cascading region / sub-region selector
//!
//! The region list is fetched once when the selector is initialized. Every
//! region change clears the sub-region list and choice immediately, then
//! loads the new sub-regions in a background task. Each change bumps a
//! generation counter and aborts the previous task, so a late response for
//! an older region is never published. Re-selecting the current region is a
//! no-op.

mod navigator;

pub use navigator::Navigator;

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::task::JoinHandle;

use crate::api::RegionDirectory;
use crate::models::{SelectableOption, Selection, SelectionState};

/// Value the region picker shows for "nothing chosen yet".
pub const PLACEHOLDER_VALUE: &str = "0";

#[derive(Debug, Default)]
struct Shared {
    regions: Vec<SelectableOption>,
    sub_regions: Vec<SelectableOption>,
    state: SelectionState,
    generation: u64,
}

fn lock(shared: &Mutex<Shared>) -> MutexGuard<'_, Shared> {
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub struct RegionSelector {
    directory: Arc<dyn RegionDirectory>,
    navigator: Box<dyn Navigator>,
    shared: Arc<Mutex<Shared>>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl RegionSelector {
    /// Create a selector with empty lists. Call [`RegionSelector::load_regions`]
    /// (or use [`RegionSelector::init`]) to populate the region list.
    pub fn new(directory: Arc<dyn RegionDirectory>, navigator: impl Navigator + 'static) -> Self {
        Self {
            directory,
            navigator: Box::new(navigator),
            shared: Arc::new(Mutex::new(Shared::default())),
            in_flight: Mutex::new(None),
        }
    }

    /// Create a selector and load the region list once.
    pub async fn init(directory: Arc<dyn RegionDirectory>, navigator: impl Navigator + 'static) -> Self {
        let selector = Self::new(directory, navigator);
        selector.load_regions().await;
        selector
    }

    /// Read the region directory and publish one option per region, in
    /// directory order. A failed read leaves the list as it was.
    pub async fn load_regions(&self) -> Vec<SelectableOption> {
        match self.directory.regions().await {
            Ok(regions) => {
                let options: Vec<SelectableOption> = regions.iter().map(SelectableOption::from).collect();
                tracing::info!(count = options.len(), "region list published");
                lock(&self.shared).regions = options.clone();
                options
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load regions");
                self.regions()
            }
        }
    }

    /// Select a region. The sub-region list and choice are cleared before
    /// this returns; the new sub-regions arrive from a background task.
    /// Choosing the region that is already selected changes nothing.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn on_region_change(&self, code: impl Into<String>) {
        let code = code.into();
        let generation = {
            let mut shared = lock(&self.shared);
            if shared.generation > 0 && shared.state.selected_region == code {
                tracing::debug!(region = %code, "region re-selected, keeping sub-regions");
                return;
            }
            shared.state.selected_region = code.clone();
            shared.state.selected_sub_region.clear();
            shared.sub_regions.clear();
            shared.generation += 1;
            shared.generation
        };
        tracing::debug!(region = %code, generation, "region changed");

        let directory = Arc::clone(&self.directory);
        let shared = Arc::clone(&self.shared);
        let task = tokio::spawn(async move {
            fetch_sub_regions(directory, shared, code, generation).await;
        });
        if let Some(previous) = self.in_flight().replace(task) {
            previous.abort();
        }
    }

    fn in_flight(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.in_flight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Read the sub-regions of `code` and publish them, replacing the
    /// current list. Nothing is read or published unless `code` is the
    /// selected region, and the result is dropped if the region changes
    /// while the read is pending.
    pub async fn load_sub_regions(&self, code: &str) -> Vec<SelectableOption> {
        let generation = {
            let shared = lock(&self.shared);
            if shared.state.selected_region != code {
                tracing::debug!(region = %code, selected = %shared.state.selected_region, "not the selected region, ignoring");
                return shared.sub_regions.clone();
            }
            shared.generation
        };
        fetch_sub_regions(Arc::clone(&self.directory), Arc::clone(&self.shared), code.to_string(), generation).await
    }

    pub fn on_sub_region_change(&self, name: impl Into<String>) {
        lock(&self.shared).state.selected_sub_region = name.into();
    }

    /// Hand the current pair to the navigator as-is, empty fields included.
    pub fn proceed(&self) -> Selection {
        let selection = Selection::from(&lock(&self.shared).state);
        tracing::info!(region = %selection.region, sub_region = %selection.sub_region, "proceeding");
        self.navigator.navigate(selection.clone());
        selection
    }

    /// Wait for the pending sub-region read, if any.
    pub async fn settle(&self) {
        let pending = self.in_flight().take();
        if let Some(handle) = pending {
            if let Err(e) = handle.await {
                if e.is_panic() {
                    tracing::error!(error = %e, "sub-region task panicked");
                }
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight().as_ref().is_some_and(|handle| !handle.is_finished())
    }

    pub fn regions(&self) -> Vec<SelectableOption> {
        lock(&self.shared).regions.clone()
    }

    pub fn sub_regions(&self) -> Vec<SelectableOption> {
        lock(&self.shared).sub_regions.clone()
    }

    pub fn selection(&self) -> SelectionState {
        lock(&self.shared).state.clone()
    }
}

impl Drop for RegionSelector {
    fn drop(&mut self) {
        let pending = self.in_flight.get_mut().unwrap_or_else(|poisoned| poisoned.into_inner()).take();
        if let Some(handle) = pending {
            handle.abort();
        }
    }
}

async fn fetch_sub_regions(
    directory: Arc<dyn RegionDirectory>,
    shared: Arc<Mutex<Shared>>,
    code: String,
    generation: u64,
) -> Vec<SelectableOption> {
    let result = directory.sub_regions(&code).await;

    let mut guard = lock(&shared);
    if guard.generation != generation {
        tracing::debug!(region = %code, generation, current = guard.generation, "discarding stale sub-regions");
        return guard.sub_regions.clone();
    }
    match result {
        Ok(sub_regions) => {
            guard.sub_regions = sub_regions.iter().map(SelectableOption::from).collect();
            tracing::info!(region = %code, count = guard.sub_regions.len(), "sub-region list published");
        }
        Err(e) => {
            guard.sub_regions.clear();
            tracing::warn!(region = %code, error = %e, "failed to load sub-regions");
        }
    }
    guard.sub_regions.clone()
}
