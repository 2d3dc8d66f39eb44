//! Build-time site configuration: brand, outbound links and animation timing.

use std::time::Duration;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

/// Default length of the statistics count-up.
pub const DEFAULT_COUNT_UP: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid JSON configuration: {0}")]
    Json(String),

    #[error("{key} is empty")]
    EmptyValue { key: &'static str },

    #[error("{key} must be an http(s) URL or a site path, got {value:?}")]
    BadUrl { key: &'static str, value: String },

    #[error("{key} must be a whole number of milliseconds, got {value:?}")]
    BadDuration { key: &'static str, value: String },
}

/// Outbound links rendered by the page. None of the page logic depends on
/// their values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteLinks {
    pub store_url: String,
    pub apk_url: String,
    /// File name suggested to the browser for the APK download.
    pub apk_file_name: String,
    pub chat_url: String,
    pub source_url: String,
    pub video_url: String,
}

impl Default for SiteLinks {
    fn default() -> Self {
        Self {
            store_url: "https://store.example.com/apps/mangadock".to_string(),
            apk_url: "/downloads/mangadock.apk".to_string(),
            apk_file_name: "mangadock.apk".to_string(),
            chat_url: "https://chat.example.com/mangadock".to_string(),
            source_url: "https://code.example.com/mangadock".to_string(),
            video_url: "https://video.example.com/@mangadock".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub links: SiteLinks,
    #[serde(with = "millis")]
    pub count_up: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "MangaDock".to_string(),
            links: SiteLinks::default(),
            count_up: DEFAULT_COUNT_UP,
        }
    }
}

/// Partial config accepted from `LANDING_CONFIG_JSON`. Absent fields keep
/// their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigOverlay {
    brand: Option<String>,
    store_url: Option<String>,
    apk_url: Option<String>,
    apk_file_name: Option<String>,
    chat_url: Option<String>,
    source_url: Option<String>,
    video_url: Option<String>,
    count_up_ms: Option<u64>,
}

impl SiteConfig {
    /// Resolves the configuration baked in at build time.
    ///
    /// # Build-time environment variables
    /// - `LANDING_CONFIG_JSON`: JSON object with any of `brand`, `store_url`,
    ///   `apk_url`, `apk_file_name`, `chat_url`, `source_url`, `video_url`,
    ///   `count_up_ms`.
    /// - `LANDING_STORE_URL`, `LANDING_APK_URL`, `LANDING_APK_FILE_NAME`,
    ///   `LANDING_CHAT_URL`, `LANDING_SOURCE_URL`, `LANDING_VIDEO_URL`,
    ///   `LANDING_COUNT_UP_MS`: override single fields, applied after the JSON.
    ///
    /// An invalid configuration is logged and the defaults are used instead.
    pub fn load() -> Self {
        match Self::resolve(build_time_var) {
            Ok(config) => config,
            Err(e) => {
                warn!("ignoring site configuration: {}", e);
                Self::default()
            }
        }
    }

    /// Applies defaults, then the JSON overlay, then single-key overrides,
    /// reading every key through `lookup`.
    pub fn resolve<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(json) = lookup("LANDING_CONFIG_JSON") {
            let overlay: ConfigOverlay =
                serde_json::from_str(&json).map_err(|e| ConfigError::Json(e.to_string()))?;
            config.apply(overlay);
        }

        let links = &mut config.links;
        for (key, slot) in [
            ("LANDING_STORE_URL", &mut links.store_url),
            ("LANDING_APK_URL", &mut links.apk_url),
            ("LANDING_APK_FILE_NAME", &mut links.apk_file_name),
            ("LANDING_CHAT_URL", &mut links.chat_url),
            ("LANDING_SOURCE_URL", &mut links.source_url),
            ("LANDING_VIDEO_URL", &mut links.video_url),
        ] {
            if let Some(value) = lookup(key) {
                *slot = value;
            }
        }

        if let Some(value) = lookup("LANDING_COUNT_UP_MS") {
            let ms = value.trim().parse::<u64>().map_err(|_| ConfigError::BadDuration {
                key: "LANDING_COUNT_UP_MS",
                value: value.clone(),
            })?;
            config.count_up = Duration::from_millis(ms);
        }

        config.validate()?;
        Ok(config)
    }

    fn apply(&mut self, overlay: ConfigOverlay) {
        let ConfigOverlay {
            brand,
            store_url,
            apk_url,
            apk_file_name,
            chat_url,
            source_url,
            video_url,
            count_up_ms,
        } = overlay;

        let links = &mut self.links;
        for (value, slot) in [
            (brand, &mut self.brand),
            (store_url, &mut links.store_url),
            (apk_url, &mut links.apk_url),
            (apk_file_name, &mut links.apk_file_name),
            (chat_url, &mut links.chat_url),
            (source_url, &mut links.source_url),
            (video_url, &mut links.video_url),
        ] {
            if let Some(value) = value {
                *slot = value;
            }
        }
        if let Some(ms) = count_up_ms {
            self.count_up = Duration::from_millis(ms);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::EmptyValue { key: "brand" });
        }
        if self.links.apk_file_name.trim().is_empty() {
            return Err(ConfigError::EmptyValue { key: "apk_file_name" });
        }
        let links = &self.links;
        for (key, url) in [
            ("store_url", &links.store_url),
            ("apk_url", &links.apk_url),
            ("chat_url", &links.chat_url),
            ("source_url", &links.source_url),
            ("video_url", &links.video_url),
        ] {
            check_url(key, url)?;
        }
        Ok(())
    }
}

fn check_url(key: &'static str, url: &str) -> Result<(), ConfigError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyValue { key });
    }
    let is_absolute = url.starts_with("https://") || url.starts_with("http://");
    let is_site_path = url.starts_with('/') && !url.starts_with("//");
    if is_absolute || is_site_path {
        Ok(())
    } else {
        Err(ConfigError::BadUrl {
            key,
            value: url.to_string(),
        })
    }
}

/// `option_env!` needs a literal, so each supported key is listed here.
fn build_time_var(key: &str) -> Option<String> {
    let value = match key {
        "LANDING_CONFIG_JSON" => option_env!("LANDING_CONFIG_JSON"),
        "LANDING_STORE_URL" => option_env!("LANDING_STORE_URL"),
        "LANDING_APK_URL" => option_env!("LANDING_APK_URL"),
        "LANDING_APK_FILE_NAME" => option_env!("LANDING_APK_FILE_NAME"),
        "LANDING_CHAT_URL" => option_env!("LANDING_CHAT_URL"),
        "LANDING_SOURCE_URL" => option_env!("LANDING_SOURCE_URL"),
        "LANDING_VIDEO_URL" => option_env!("LANDING_VIDEO_URL"),
        "LANDING_COUNT_UP_MS" => option_env!("LANDING_COUNT_UP_MS"),
        _ => None,
    };
    value.map(str::to_string)
}

mod millis {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::resolve(|_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.count_up, Duration::from_millis(2000));
    }

    #[test]
    fn json_overlay_replaces_only_named_fields() {
        let lookup = lookup_from(&[(
            "LANDING_CONFIG_JSON",
            r#"{"store_url": "https://store.test/app", "count_up_ms": 1500}"#,
        )]);
        let config = SiteConfig::resolve(lookup).unwrap();
        assert_eq!(config.links.store_url, "https://store.test/app");
        assert_eq!(config.count_up, Duration::from_millis(1500));
        assert_eq!(config.links.apk_url, SiteLinks::default().apk_url);
        assert_eq!(config.brand, "MangaDock");
    }

    #[test]
    fn single_keys_override_json() {
        let lookup = lookup_from(&[
            ("LANDING_CONFIG_JSON", r#"{"apk_url": "/a.apk"}"#),
            ("LANDING_APK_URL", "/b.apk"),
            ("LANDING_COUNT_UP_MS", " 750 "),
        ]);
        let config = SiteConfig::resolve(lookup).unwrap();
        assert_eq!(config.links.apk_url, "/b.apk");
        assert_eq!(config.count_up, Duration::from_millis(750));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let lookup = lookup_from(&[("LANDING_CONFIG_JSON", "{not json")]);
        assert!(matches!(SiteConfig::resolve(lookup), Err(ConfigError::Json(_))));

        let lookup = lookup_from(&[("LANDING_CONFIG_JSON", r#"{"unknown": 1}"#)]);
        assert!(matches!(SiteConfig::resolve(lookup), Err(ConfigError::Json(_))));
    }

    #[test]
    fn bad_values_are_rejected() {
        let lookup = lookup_from(&[("LANDING_CHAT_URL", "javascript:alert(1)")]);
        assert_eq!(
            SiteConfig::resolve(lookup),
            Err(ConfigError::BadUrl {
                key: "chat_url",
                value: "javascript:alert(1)".to_string(),
            })
        );

        let lookup = lookup_from(&[("LANDING_STORE_URL", "  ")]);
        assert_eq!(
            SiteConfig::resolve(lookup),
            Err(ConfigError::EmptyValue { key: "store_url" })
        );

        let lookup = lookup_from(&[("LANDING_APK_URL", "//cdn.test/app.apk")]);
        assert!(matches!(
            SiteConfig::resolve(lookup),
            Err(ConfigError::BadUrl { key: "apk_url", .. })
        ));

        let lookup = lookup_from(&[("LANDING_COUNT_UP_MS", "2s")]);
        assert!(matches!(
            SiteConfig::resolve(lookup),
            Err(ConfigError::BadDuration { .. })
        ));
    }

    #[test]
    fn config_serializes_duration_as_millis() {
        let json = serde_json::to_value(SiteConfig::default()).unwrap();
        assert_eq!(json["count_up"], 2000);
        let back: SiteConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, SiteConfig::default());
    }
}
