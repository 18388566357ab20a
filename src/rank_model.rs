//! Rank model config reader.
//!
//! Only the category names are read. They label the `RankResult`
//! subscores, which the ranking tool writes in category order.

use std::fs;
use std::path::Path;

use crate::error::{Result, VcfToolsError};

/// Score categories of a rank model, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct RankModel {
    categories: Vec<String>,
}

impl RankModel {
    /// Read a rank model config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let model = Self::parse(&text)?;
        log::debug!(
            "Rank model {} has categories {:?}",
            path.display(),
            model.categories
        );
        Ok(model)
    }

    /// Parse rank model config text.
    ///
    /// Categories are the `[[name]]` subsections of `[Categories]`. Configs
    /// without that section fall back to the distinct `category = name`
    /// values of the plugin sections, in first-seen order.
    pub fn parse(text: &str) -> Result<Self> {
        let mut declared = Vec::new();
        let mut referenced: Vec<String> = Vec::new();
        let mut in_categories = false;

        for line in text.lines() {
            let line = strip_comment(line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some(name) = section_name(line, 2) {
                if in_categories && !declared.iter().any(|c| c == name) {
                    declared.push(name.to_string());
                }
            } else if let Some(name) = section_name(line, 1) {
                in_categories = name == "Categories";
            } else if let Some((key, value)) = line.split_once('=') {
                if key.trim() == "category" {
                    let value = value.trim().trim_matches(['"', '\'']);
                    if !value.is_empty() && !referenced.iter().any(|c| c == value) {
                        referenced.push(value.to_string());
                    }
                }
            }
        }

        let categories = if declared.is_empty() {
            referenced
        } else {
            declared
        };

        if categories.is_empty() {
            return Err(VcfToolsError::RankModelParseError(
                "No categories found".to_string(),
            ));
        }

        Ok(Self { categories })
    }

    /// Category names, in subscore order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find(['#', ';']) {
        Some(i) => &line[..i],
        None => line,
    }
}

/// Name of a `[name]` (depth 1) or `[[name]]` (depth 2) section header.
fn section_name(line: &str, depth: usize) -> Option<&str> {
    let open = "[".repeat(depth);
    let close = "]".repeat(depth);
    let inner = line.strip_prefix(open.as_str())?.strip_suffix(close.as_str())?;
    if inner.starts_with('[') || inner.ends_with(']') {
        return None;
    }
    Some(inner.trim())
}
