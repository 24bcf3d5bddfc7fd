use crate::error::{AppError, AppResult};
use crate::page::validation::{CodeBlockValidator, HeadingValidator, NavigationValidator};
use crate::validation::Validator;
use engine::nav::{Heading, NavTree, assign_heading_ids};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Static content of one documentation page
#[derive(Debug, Clone, Deserialize)]
pub struct PageDocument {
    pub title: String,
    /// Authored navigation; generated from the headings when empty
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub headings: Vec<Heading>,
    #[serde(default)]
    pub code_blocks: Vec<CodeBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SectionSpec {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<EntrySpec>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntrySpec {
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodeBlock {
    pub id: String,
    pub text: String,
}

impl PageDocument {
    /// Parse, generate missing heading ids and validate.
    pub fn from_toml(content: &str) -> AppResult<Self> {
        let mut page: PageDocument = toml::from_str(content)
            .map_err(|e| AppError::Page(format!("Failed to parse page document: {e}")))?;
        assign_heading_ids(&mut page.headings);

        HeadingValidator.validate(&page)?;
        NavigationValidator.validate(&page)?;
        CodeBlockValidator.validate(&page)?;

        for section in &page.sections {
            for entry in &section.entries {
                if !page.has_heading(&entry.target) {
                    log::warn!(
                        "Navigation entry '{}' points at missing heading '{}'",
                        entry.label,
                        entry.target
                    );
                }
            }
        }

        Ok(page)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Page(format!(
                "Failed to read page document '{}': {e}",
                path.display()
            ))
        })?;
        let page = Self::from_toml(&content)?;
        log::info!(
            "Loaded page '{}' with {} headings from {}",
            page.title,
            page.headings.len(),
            path.display()
        );
        Ok(page)
    }

    /// Navigation tree: the authored sections, or a generated table of
    /// contents when none were authored.
    pub fn nav_tree(&self) -> NavTree {
        if self.sections.is_empty() {
            return NavTree::from_headings(&self.title, &self.headings);
        }
        self.sections
            .iter()
            .fold(NavTree::builder(), |builder, section| {
                section
                    .entries
                    .iter()
                    .fold(builder.section(&section.title), |builder, entry| {
                        builder.entry(&entry.label, &entry.target)
                    })
            })
            .build()
    }

    pub fn has_heading(&self, id: &str) -> bool {
        self.headings.iter().any(|heading| heading.id() == id)
    }

    pub fn code_block(&self, id: &str) -> Option<&CodeBlock> {
        self.code_blocks.iter().find(|block| block.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::*;

    const PAGE: &str = r#"
title = "FastAPI QueryBuilder"

[[sections]]
title = "Getting Started"
[[sections.entries]]
label = "Installation"
target = "installation"
[[sections.entries]]
label = "Quick Start"
target = "quick-start"

[[headings]]
id = "installation"
text = "Installation"
top = 100.0
height = 30.0

[[headings]]
text = "Quick Start"
top = 900.0
height = 30.0

[[code_blocks]]
id = "install"
text = "pip install fastapi-querybuilder"
"#;

    #[test]
    fn test_parse_assigns_missing_heading_ids() {
        let page = assert_ok!(PageDocument::from_toml(PAGE));

        assert_eq!(page.headings[0].id(), "installation");
        assert_eq!(page.headings[1].id(), "heading-1");
        assert_some!(page.code_block("install"));
        assert_none!(page.code_block("missing"));
    }

    #[test]
    fn test_authored_sections_become_nav_tree() {
        let page = assert_ok!(PageDocument::from_toml(PAGE));
        let tree = page.nav_tree();

        assert_eq!(tree.sections().len(), 1);
        assert_eq!(tree.entries()[1].label(), "Quick Start");
        assert_eq!(tree.entries()[1].target_id(), "quick-start");
    }

    #[test]
    fn test_generated_toc_when_no_sections() {
        let page = assert_ok!(PageDocument::from_toml(
            "title = \"Changelog\"\n[[headings]]\ntext = \"v0.2.0\"\n[[headings]]\ntext = \"v0.1.0\"\n"
        ));
        let tree = page.nav_tree();

        assert_eq!(tree.sections()[0].title(), "Changelog");
        assert_eq!(tree.entries()[1].target_id(), "heading-1");
    }

    #[test]
    fn test_duplicate_heading_ids_rejected() {
        let result = PageDocument::from_toml(
            "title = \"x\"\n[[headings]]\nid = \"a\"\ntext = \"A\"\n[[headings]]\nid = \"a\"\ntext = \"B\"\n",
        );
        assert!(matches!(assert_err!(result), AppError::Page(msg) if msg.contains("'a'")));
    }

    #[test]
    fn test_generated_id_collision_rejected() {
        let result = PageDocument::from_toml(
            "title = \"x\"\n[[headings]]\ntext = \"A\"\n[[headings]]\nid = \"heading-0\"\ntext = \"B\"\n",
        );
        assert_err!(result);
    }

    #[test]
    fn test_empty_label_rejected() {
        let result = PageDocument::from_toml(
            "title = \"x\"\n[[sections]]\ntitle = \"S\"\n[[sections.entries]]\nlabel = \" \"\ntarget = \"t\"\n",
        );
        assert_err!(result);
    }

    #[test]
    fn test_malformed_toml_is_page_error() {
        assert!(matches!(
            PageDocument::from_toml("title = "),
            Err(AppError::Page(_))
        ));
    }
}
