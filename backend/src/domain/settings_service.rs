//! Preference handling: last viewed page, status filter, theme and the
//! service form draft.
use std::sync::Arc;

use crate::domain::commands::services::StatusFilter;
use crate::domain::models::service_record::{ServiceDraft, ServiceStatus};
use crate::storage::{GradientColors, KeyValueStore, Page, SettingsRepository, ThemeSettings};

#[derive(Clone)]
pub struct SettingsService {
    repository: SettingsRepository,
}

impl SettingsService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            repository: SettingsRepository::new(store),
        }
    }

    pub fn last_page(&self) -> Page {
        self.repository.last_page()
    }

    pub fn set_last_page(&self, page: Page) {
        self.repository.set_last_page(page);
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.repository.status_filter()
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.repository.set_status_filter(filter);
    }

    /// Status card toggle: selecting the already-active status goes back
    /// to showing everything. Returns and persists the new selection.
    pub fn toggle_status_filter(&self, status: ServiceStatus) -> StatusFilter {
        let selected = StatusFilter::from_status(status);
        let next = if self.repository.status_filter() == selected {
            StatusFilter::All
        } else {
            selected
        };
        self.repository.set_status_filter(next);
        next
    }

    pub fn theme(&self) -> ThemeSettings {
        self.repository.theme()
    }

    pub fn set_background_image(&self, url: Option<&str>) {
        self.repository.set_background_image(url);
    }

    pub fn set_gradient(&self, gradient: &GradientColors) {
        self.repository.set_gradient(gradient);
    }

    pub fn set_overlay_color(&self, color: &str) {
        self.repository.set_overlay_color(color);
    }

    pub fn set_overlay_opacity(&self, opacity: f64) {
        self.repository.set_overlay_opacity(opacity);
    }

    /// The in-progress "new service" form, if one was abandoned mid-edit.
    pub fn draft(&self) -> Option<ServiceDraft> {
        self.repository.draft()
    }

    pub fn save_draft(&self, draft: &ServiceDraft) {
        self.repository.save_draft(draft);
    }

    /// Cleared on successful save and on explicit cancel.
    pub fn clear_draft(&self) {
        self.repository.clear_draft();
    }
}
