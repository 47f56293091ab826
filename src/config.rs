// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration.
//!
//! Read from an optional `garden.json` next to where the CLI runs. Every key
//! has a default, so an empty object (or no file at all) is a valid config.
//! `SITE_URL` in the environment overrides `siteUrl`; the CLI layers its own
//! flags on top of that.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GardenError, Result};

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE: &str = "garden.json";

/// Environment variable that overrides `siteUrl`.
pub const SITE_URL_ENV: &str = "SITE_URL";

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GardenConfig {
    pub site_url: String,
    pub site_title: String,
    pub site_description: String,
    pub language: String,
    pub content_dir: PathBuf,
    pub output_dir: PathBuf,
    pub words_per_minute: u32,
    pub related_limit: usize,
    pub search_limit: usize,
}

impl Default for GardenConfig {
    fn default() -> Self {
        GardenConfig {
            site_url: "https://example.com".to_string(),
            site_title: "Digital Garden".to_string(),
            site_description: "A digital garden of essays, explorations, and evolving ideas."
                .to_string(),
            language: "en-us".to_string(),
            content_dir: PathBuf::from("content/writings"),
            output_dir: PathBuf::from("public"),
            words_per_minute: crate::content::DEFAULT_WORDS_PER_MINUTE,
            related_limit: crate::scoring::DEFAULT_RELATED_LIMIT,
            search_limit: crate::search::DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl GardenConfig {
    /// Parse a config from JSON text.
    pub fn from_json(path: &Path, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|source| GardenError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` if it exists, otherwise start from defaults. Applies the
    /// `SITE_URL` override either way.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let json = fs::read_to_string(path).map_err(|source| GardenError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_json(path, &json)?
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };

        if let Ok(url) = std::env::var(SITE_URL_ENV) {
            if !url.trim().is_empty() {
                config.site_url = url;
            }
        }

        config.site_url = config.site_url.trim_end_matches('/').to_string();
        if config.words_per_minute == 0 {
            config.words_per_minute = crate::content::DEFAULT_WORDS_PER_MINUTE;
        }

        Ok(config)
    }

    /// Absolute URL of a site path such as `/writings/foo`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.site_url.trim_end_matches('/'), path)
    }
}
