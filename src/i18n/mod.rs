//! i18n - Internationalization Module
//!
//! Thin wrappers over `rust-i18n`. Translation files live in `locales/`.

use gpui::SharedString;
use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Locale code understood by `rust-i18n`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::ZhCN => "zh-CN",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Parse a configured or system locale string ("zh", "zh-CN", "en_US", ...)
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "en" => Some(Locale::En),
            "zh" => Some(Locale::ZhCN),
            _ => None,
        }
    }

    /// Locale of the desktop session, English when unsupported
    pub fn detect() -> Self {
        let current = locale_config::Locale::current().to_string();
        Self::from_code(&current).unwrap_or_default()
    }

    /// The other supported locale
    pub fn toggled(&self) -> Self {
        match self {
            Locale::En => Locale::ZhCN,
            Locale::ZhCN => Locale::En,
        }
    }
}

/// Translate a key
pub fn tr(locale: Locale, key: &str) -> SharedString {
    SharedString::from(t!(key, locale = locale.code()).to_string())
}

/// Translate a key carrying a `%{count}` placeholder
pub fn tr_count(locale: Locale, key: &str, count: u32) -> SharedString {
    SharedString::from(t!(key, locale = locale.code(), count = count).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!(Locale::from_code("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_code("zh_CN"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("zh"), Some(Locale::ZhCN));
        assert_eq!(Locale::from_code("fr-FR"), None);
    }

    #[test]
    fn translates_badge_labels() {
        assert_eq!(tr(Locale::En, "feed.camera-offline").to_string(), "Camera Offline");
        assert_eq!(tr(Locale::En, "feed.connection-lost").to_string(), "Connection lost");
        assert_eq!(tr(Locale::En, "trend.increasing").to_string(), "↑ Increasing");
        assert_eq!(tr(Locale::En, "trend.decreasing").to_string(), "↓ Decreasing");
    }

    #[test]
    fn interpolates_counts() {
        assert_eq!(tr_count(Locale::En, "grid.people", 4).to_string(), "4 people");
        assert_eq!(tr_count(Locale::En, "grid.alerts", 2).to_string(), "2 alerts");
    }

    #[test]
    fn toggles_between_locales() {
        assert_eq!(Locale::En.toggled(), Locale::ZhCN);
        assert_eq!(Locale::ZhCN.toggled().toggled(), Locale::ZhCN);
    }
}
