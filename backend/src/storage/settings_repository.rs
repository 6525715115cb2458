//! # Settings Repository
//!
//! Scalar and small-record preferences: last viewed page, status filter,
//! theme settings and the in-progress service form draft. Every read
//! degrades to its default and every write failure is logged and
//! swallowed; a lost preference must never take the application down.

use log::error;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::commands::services::StatusFilter;
use crate::domain::models::service_record::ServiceDraft;

use super::traits::KeyValueStore;

const LAST_PAGE_KEY: &str = "last_page";
const STATUS_FILTER_KEY: &str = "status_filter";
const BACKGROUND_IMAGE_KEY: &str = "background_image";
const GRADIENT_COLORS_KEY: &str = "gradient_colors";
const OVERLAY_COLOR_KEY: &str = "overlay_color";
const OVERLAY_OPACITY_KEY: &str = "overlay_opacity";
const SERVICE_DRAFT_KEY: &str = "service_draft";

/// Application pages, persisted so the app reopens where it was left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Notes,
    Reports,
    Backup,
    NewService,
}

impl Page {
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Notes => "notes",
            Page::Reports => "reports",
            Page::Backup => "backup",
            Page::NewService => "newService",
        }
    }

    /// Parse a stored page value, falling back to the dashboard.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "notes" => Page::Notes,
            "reports" => Page::Reports,
            "backup" => Page::Backup,
            "newService" => Page::NewService,
            _ => Page::Dashboard,
        }
    }
}

/// Two-color background gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientColors {
    pub color1: String,
    pub color2: String,
}

impl Default for GradientColors {
    fn default() -> Self {
        Self {
            color1: "#2f3d4b".to_string(),
            color2: "#1a202c".to_string(),
        }
    }
}

/// Visual theme preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSettings {
    /// When set, the image replaces the gradient background
    pub background_image_url: Option<String>,
    pub gradient: GradientColors,
    pub overlay_color: String,
    pub overlay_opacity: f64,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            background_image_url: None,
            gradient: GradientColors::default(),
            overlay_color: "#000000".to_string(),
            overlay_opacity: 0.3,
        }
    }
}

#[derive(Clone)]
pub struct SettingsRepository {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to read setting {}: {}", key, e);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            error!("Failed to save setting {}: {}", key, e);
        }
    }

    fn delete(&self, key: &str) {
        if let Err(e) = self.store.remove(key) {
            error!("Failed to remove setting {}: {}", key, e);
        }
    }

    pub fn last_page(&self) -> Page {
        self.read(LAST_PAGE_KEY)
            .map(|value| Page::parse_or_default(&value))
            .unwrap_or_default()
    }

    pub fn set_last_page(&self, page: Page) {
        self.write(LAST_PAGE_KEY, page.as_str());
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.read(STATUS_FILTER_KEY)
            .map(|value| StatusFilter::parse_or_default(&value))
            .unwrap_or_default()
    }

    pub fn set_status_filter(&self, filter: StatusFilter) {
        self.write(STATUS_FILTER_KEY, filter.as_str());
    }

    /// Assemble the theme from its individual entries, using defaults for
    /// anything missing or unreadable.
    pub fn theme(&self) -> ThemeSettings {
        let mut theme = ThemeSettings::default();

        if let Some(url) = self.read(BACKGROUND_IMAGE_KEY) {
            if !url.is_empty() {
                theme.background_image_url = Some(url);
            }
        }
        if let Some(raw) = self.read(GRADIENT_COLORS_KEY) {
            match serde_json::from_str(&raw) {
                Ok(gradient) => theme.gradient = gradient,
                Err(e) => error!("Stored gradient colors are not valid JSON: {}", e),
            }
        }
        if let Some(color) = self.read(OVERLAY_COLOR_KEY) {
            theme.overlay_color = color;
        }
        if let Some(raw) = self.read(OVERLAY_OPACITY_KEY) {
            if let Ok(opacity) = raw.parse() {
                theme.overlay_opacity = opacity;
            }
        }

        theme
    }

    /// Setting no URL (or an empty one) clears the entry entirely.
    pub fn set_background_image(&self, url: Option<&str>) {
        match url {
            Some(url) if !url.is_empty() => self.write(BACKGROUND_IMAGE_KEY, url),
            _ => self.delete(BACKGROUND_IMAGE_KEY),
        }
    }

    pub fn set_gradient(&self, gradient: &GradientColors) {
        match serde_json::to_string(gradient) {
            Ok(encoded) => self.write(GRADIENT_COLORS_KEY, &encoded),
            Err(e) => error!("Failed to encode gradient colors: {}", e),
        }
    }

    pub fn set_overlay_color(&self, color: &str) {
        self.write(OVERLAY_COLOR_KEY, color);
    }

    pub fn set_overlay_opacity(&self, opacity: f64) {
        self.write(OVERLAY_OPACITY_KEY, &opacity.to_string());
    }

    pub fn draft(&self) -> Option<ServiceDraft> {
        let raw = self.read(SERVICE_DRAFT_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(draft) => Some(draft),
            Err(e) => {
                error!("Stored service draft is not valid JSON: {}", e);
                None
            }
        }
    }

    pub fn save_draft(&self, draft: &ServiceDraft) {
        match serde_json::to_string(draft) {
            Ok(encoded) => self.write(SERVICE_DRAFT_KEY, &encoded),
            Err(e) => error!("Failed to encode service draft: {}", e),
        }
    }

    pub fn clear_draft(&self) {
        self.delete(SERVICE_DRAFT_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory_store::MemoryKeyValueStore;

    fn setup_repository() -> SettingsRepository {
        SettingsRepository::new(Arc::new(MemoryKeyValueStore::new()))
    }

    #[test]
    fn test_defaults_when_store_is_empty() {
        let repository = setup_repository();
        assert_eq!(repository.last_page(), Page::Dashboard);
        assert_eq!(repository.status_filter(), StatusFilter::All);
        assert_eq!(repository.theme(), ThemeSettings::default());
        assert_eq!(repository.draft(), None);
    }

    #[test]
    fn test_last_page_round_trip() {
        let repository = setup_repository();
        repository.set_last_page(Page::Reports);
        assert_eq!(repository.last_page(), Page::Reports);
        repository.set_last_page(Page::NewService);
        assert_eq!(repository.last_page(), Page::NewService);
    }

    #[test]
    fn test_theme_round_trip() {
        let repository = setup_repository();
        repository.set_background_image(Some("https://example.com/bg.png"));
        repository.set_gradient(&GradientColors {
            color1: "#111111".to_string(),
            color2: "#222222".to_string(),
        });
        repository.set_overlay_color("#333333");
        repository.set_overlay_opacity(0.7);

        let theme = repository.theme();
        assert_eq!(
            theme.background_image_url.as_deref(),
            Some("https://example.com/bg.png")
        );
        assert_eq!(theme.gradient.color1, "#111111");
        assert_eq!(theme.overlay_color, "#333333");
        assert_eq!(theme.overlay_opacity, 0.7);
    }

    #[test]
    fn test_clearing_background_image_removes_the_entry() {
        let repository = setup_repository();
        repository.set_background_image(Some("https://example.com/bg.png"));
        repository.set_background_image(None);
        assert_eq!(repository.theme().background_image_url, None);
    }

    #[test]
    fn test_draft_save_and_clear() {
        let repository = setup_repository();
        let draft = ServiceDraft {
            raw_customer_phone_input: "+90 534 682 22 82".to_string(),
            address: "Kadıköy".to_string(),
            cost: 150.0,
            ..ServiceDraft::default()
        };
        repository.save_draft(&draft);
        assert_eq!(repository.draft(), Some(draft));

        repository.clear_draft();
        assert_eq!(repository.draft(), None);
    }
}
