// SPDX-License-Identifier: MPL-2.0
//! Toast options, presets and the merge that resolves them.
//!
//! Callers pick options through an [`OptionsSource`]: nothing (the default
//! preset), a preset name, or an explicit [`PartialOptions`] overlay. Every
//! source is resolved by [`Presets::resolve`] on top of the base defaults,
//! so a toast always ends up with a complete [`ToastOptions`] value.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    DEFAULT_PRESET, ERROR_PRESET, ERROR_SHOW_DURATION_MS, ERROR_TOAST_CLASS,
};
use crate::domain::toast::{Position, RemovalDelay, ShowDuration};

/// Fully resolved options of one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastOptions {
    pub position: Position,
    /// Extra class applied to the toast root.
    pub toast_class: Option<String>,
    /// Extra class applied when the closing transition starts.
    pub removed_toast_class: Option<String>,
    /// Whether the close button is visible. Hidden buttons still work.
    pub closeable: bool,
    /// When set, showing this toast leaves other toasts at its position alone.
    pub show_all: bool,
    pub timeout_on_remove: RemovalDelay,
    pub duration: ShowDuration,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            position: Position::Top,
            toast_class: None,
            removed_toast_class: None,
            closeable: true,
            show_all: false,
            timeout_on_remove: RemovalDelay::default(),
            duration: ShowDuration::default(),
        }
    }
}

impl ToastOptions {
    /// Returns these options with every field set in `overlay` replaced.
    #[must_use]
    pub fn merged(mut self, overlay: &PartialOptions) -> Self {
        if let Some(position) = overlay.position {
            self.position = position;
        }
        if let Some(class) = &overlay.toast_class {
            self.toast_class = Some(class.clone());
        }
        if let Some(class) = &overlay.removed_toast_class {
            self.removed_toast_class = Some(class.clone());
        }
        if let Some(closeable) = overlay.closeable {
            self.closeable = closeable;
        }
        if let Some(show_all) = overlay.show_all {
            self.show_all = show_all;
        }
        if let Some(ms) = overlay.timeout_on_remove {
            self.timeout_on_remove = RemovalDelay::from_millis(ms);
        }
        if let Some(ms) = overlay.duration {
            self.duration = ShowDuration::from_millis(ms);
        }
        self
    }
}

/// Options overlay where every field is optional.
///
/// Timing fields are in milliseconds; `0` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toast_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed_toast_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closeable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_on_remove: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl PartialOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn with_toast_class(mut self, class: impl Into<String>) -> Self {
        self.toast_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_removed_toast_class(mut self, class: impl Into<String>) -> Self {
        self.removed_toast_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_closeable(mut self, closeable: bool) -> Self {
        self.closeable = Some(closeable);
        self
    }

    #[must_use]
    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = Some(show_all);
        self
    }

    #[must_use]
    pub fn with_timeout_on_remove_ms(mut self, ms: u64) -> Self {
        self.timeout_on_remove = Some(ms);
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration = Some(ms);
        self
    }
}

/// Where a toast takes its options from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OptionsSource {
    /// The default preset.
    #[default]
    Default,
    /// A named preset. Unknown names resolve to the base defaults.
    Preset(String),
    /// An explicit overlay on top of the base defaults.
    Explicit(PartialOptions),
}

impl From<&str> for OptionsSource {
    fn from(name: &str) -> Self {
        OptionsSource::Preset(name.to_string())
    }
}

impl From<String> for OptionsSource {
    fn from(name: String) -> Self {
        OptionsSource::Preset(name)
    }
}

impl From<PartialOptions> for OptionsSource {
    fn from(options: PartialOptions) -> Self {
        OptionsSource::Explicit(options)
    }
}

impl From<Option<PartialOptions>> for OptionsSource {
    fn from(options: Option<PartialOptions>) -> Self {
        options.map_or(OptionsSource::Default, OptionsSource::Explicit)
    }
}

/// Registry of named option overlays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presets {
    entries: BTreeMap<String, PartialOptions>,
}

impl Default for Presets {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Presets {
    /// Registry without any preset; every name resolves to base defaults.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// The `notify` and `error` presets.
    #[must_use]
    pub fn builtin() -> Self {
        let mut presets = Self::empty();
        presets.insert(DEFAULT_PRESET, PartialOptions::new());
        presets.insert(
            ERROR_PRESET,
            PartialOptions::new()
                .with_toast_class(ERROR_TOAST_CLASS)
                .with_duration_ms(ERROR_SHOW_DURATION_MS),
        );
        presets
    }

    /// Registers a preset, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        options: PartialOptions,
    ) -> Option<PartialOptions> {
        self.entries.insert(name.into(), options)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PartialOptions> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolves `source` on top of `base`.
    #[must_use]
    pub fn resolve(&self, base: &ToastOptions, source: &OptionsSource) -> ToastOptions {
        let overlay = match source {
            OptionsSource::Default => self.get(DEFAULT_PRESET),
            OptionsSource::Preset(name) => self.get(name),
            OptionsSource::Explicit(options) => Some(options),
        };
        match overlay {
            Some(overlay) => base.clone().merged(overlay),
            None => base.clone(),
        }
    }
}

impl Extend<(String, PartialOptions)> for Presets {
    fn extend<I: IntoIterator<Item = (String, PartialOptions)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_resolves_to_base_defaults() {
        let presets = Presets::builtin();
        let resolved = presets.resolve(&ToastOptions::default(), &OptionsSource::Default);
        assert_eq!(resolved, ToastOptions::default());
    }

    #[test]
    fn error_preset_overlays_class_and_duration() {
        let presets = Presets::builtin();
        let resolved = presets.resolve(&ToastOptions::default(), &"error".into());

        assert_eq!(resolved.toast_class.as_deref(), Some(ERROR_TOAST_CLASS));
        assert_eq!(resolved.duration.as_millis(), ERROR_SHOW_DURATION_MS);
        assert_eq!(resolved.position, Position::Top);
        assert!(resolved.closeable);
    }

    #[test]
    fn unknown_preset_falls_back_to_base() {
        let presets = Presets::builtin();
        let base = ToastOptions {
            closeable: false,
            ..ToastOptions::default()
        };
        let resolved = presets.resolve(&base, &"does-not-exist".into());
        assert_eq!(resolved, base);
    }

    #[test]
    fn explicit_overlay_only_replaces_given_fields() {
        let presets = Presets::builtin();
        let overlay = PartialOptions::new()
            .with_position(Position::Bottom)
            .with_closeable(false)
            .with_duration_ms(1200);
        let resolved = presets.resolve(&ToastOptions::default(), &overlay.into());

        assert_eq!(resolved.position, Position::Bottom);
        assert!(!resolved.closeable);
        assert_eq!(resolved.duration.as_millis(), 1200);
        assert_eq!(resolved.timeout_on_remove, RemovalDelay::default());
        assert!(resolved.toast_class.is_none());
    }

    #[test]
    fn zero_timing_overrides_resolve_to_defaults() {
        let overlay = PartialOptions::new()
            .with_duration_ms(0)
            .with_timeout_on_remove_ms(0);
        let resolved = ToastOptions::default().merged(&overlay);
        assert_eq!(resolved.duration, ShowDuration::default());
        assert_eq!(resolved.timeout_on_remove, RemovalDelay::default());
    }

    #[test]
    fn none_partial_is_default_source() {
        assert_eq!(OptionsSource::from(None), OptionsSource::Default);
    }

    #[test]
    fn inserted_preset_replaces_builtin() {
        let mut presets = Presets::builtin();
        let previous = presets.insert("error", PartialOptions::new().with_show_all(true));
        assert!(previous.is_some());

        let resolved = presets.resolve(&ToastOptions::default(), &"error".into());
        assert!(resolved.show_all);
        assert!(resolved.toast_class.is_none());
        assert_eq!(presets.names().collect::<Vec<_>>(), vec!["error", "notify"]);
    }

    #[test]
    fn partial_options_parse_from_toml() {
        let toml_src = r#"
            position = "bottom"
            toast_class = "saved"
            duration = 2500
        "#;
        let parsed: PartialOptions = toml::from_str(toml_src).expect("valid toml");
        assert_eq!(parsed.position, Some(Position::Bottom));
        assert_eq!(parsed.toast_class.as_deref(), Some("saved"));
        assert_eq!(parsed.duration, Some(2500));
        assert!(parsed.closeable.is_none());
    }
}
