use std::time::Duration;

use anyhow::{Context, bail};

/// Startup settings for a [`UiCtx`](crate::UiCtx).
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub font_height: i32,
    /// Base spacing unit: padding inside fields, gaps between kids.
    pub space: i32,
    pub border: i32,
    /// Two button-1 releases closer than this count as a double click.
    pub double_click: Duration,
    pub debug_layout: bool,
    pub debug_draw: bool,
    /// Paint each kid as a flat color instead of drawing it.
    pub debug_kids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_height: 16,
            space: 4,
            border: 1,
            double_click: Duration::from_millis(400),
            debug_layout: false,
            debug_draw: false,
            debug_kids: false,
        }
    }
}

impl Config {
    pub fn with_font_height(mut self, height: i32) -> Self {
        self.font_height = height;
        self
    }

    pub fn with_space(mut self, space: i32) -> Self {
        self.space = space;
        self
    }

    pub fn with_double_click(mut self, d: Duration) -> Self {
        self.double_click = d;
        self
    }

    pub fn with_debug_kids(mut self, on: bool) -> Self {
        self.debug_kids = on;
        self
    }

    /// Defaults overridden by `SPRIG_DEBUG` (comma list of `layout`, `draw`,
    /// `kids`), `SPRIG_FONT_HEIGHT` and `SPRIG_DOUBLE_CLICK_MS`.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let mut config = Self::default();
        if let Some(flags) = var("SPRIG_DEBUG") {
            for flag in flags.split(',').map(str::trim).filter(|f| !f.is_empty()) {
                match flag {
                    "layout" => config.debug_layout = true,
                    "draw" => config.debug_draw = true,
                    "kids" => config.debug_kids = true,
                    other => bail!("SPRIG_DEBUG: unknown flag {other:?}"),
                }
            }
        }
        if let Some(h) = var("SPRIG_FONT_HEIGHT") {
            config.font_height = h
                .trim()
                .parse()
                .with_context(|| format!("SPRIG_FONT_HEIGHT: not a number: {h:?}"))?;
        }
        if let Some(ms) = var("SPRIG_DOUBLE_CLICK_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("SPRIG_DOUBLE_CLICK_MS: not a number: {ms:?}"))?;
            config.double_click = Duration::from_millis(ms);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn debug_flags_parse() {
        let c = Config::from_vars(vars(&[("SPRIG_DEBUG", "layout, kids")])).unwrap();
        assert!(c.debug_layout);
        assert!(c.debug_kids);
        assert!(!c.debug_draw);
    }

    #[test]
    fn unknown_flag_is_an_error() {
        let err = Config::from_vars(vars(&[("SPRIG_DEBUG", "paint")])).unwrap_err();
        assert!(err.to_string().contains("paint"));
    }

    #[test]
    fn numbers_override_defaults() {
        let c = Config::from_vars(vars(&[
            ("SPRIG_FONT_HEIGHT", "20"),
            ("SPRIG_DOUBLE_CLICK_MS", "250"),
        ]))
        .unwrap();
        assert_eq!(c.font_height, 20);
        assert_eq!(c.double_click, Duration::from_millis(250));
    }
}
