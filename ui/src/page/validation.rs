use crate::error::AppError;
use crate::page::document::PageDocument;
use crate::validation::Validator;
use std::collections::HashSet;

/// Validation errors specific to page documents
#[derive(Debug, Clone, PartialEq)]
pub enum PageValidationError {
    DuplicateHeadingId { id: String },
    DuplicateCodeBlockId { id: String },
    EmptyEntryLabel { section: String },
    InvalidHeadingGeometry { id: String, reason: String },
}

impl PageValidationError {
    pub fn user_message(&self) -> String {
        match self {
            PageValidationError::DuplicateHeadingId { id } => {
                format!(
                    "Duplicate heading id: '{id}'\n\n\
                    Every heading must have a unique id so navigation links resolve to one place."
                )
            }
            PageValidationError::DuplicateCodeBlockId { id } => {
                format!(
                    "Duplicate code block id: '{id}'\n\n\
                    Copy buttons address code blocks by id; please rename one of them."
                )
            }
            PageValidationError::EmptyEntryLabel { section } => {
                format!(
                    "Navigation entry without a label in section '{section}'\n\n\
                    Entries without text can never match a search."
                )
            }
            PageValidationError::InvalidHeadingGeometry { id, reason } => {
                format!("Invalid geometry for heading '{id}'\n\nReason: {reason}")
            }
        }
    }
}

impl From<PageValidationError> for AppError {
    fn from(error: PageValidationError) -> Self {
        AppError::Page(error.user_message())
    }
}

/// Headings must carry unique ids and sane coordinates.
///
/// Run after ids have been generated for headings that lacked one.
pub struct HeadingValidator;

impl Validator<PageDocument> for HeadingValidator {
    type Error = PageValidationError;

    fn validate(&self, input: &PageDocument) -> Result<(), Self::Error> {
        let mut seen = HashSet::new();
        for heading in &input.headings {
            let id = heading.id();
            if !seen.insert(id) {
                return Err(PageValidationError::DuplicateHeadingId { id: id.to_string() });
            }
            if !heading.top.is_finite() || !heading.height.is_finite() {
                return Err(PageValidationError::InvalidHeadingGeometry {
                    id: id.to_string(),
                    reason: "coordinates must be finite numbers".to_string(),
                });
            }
            if heading.height < 0.0 {
                return Err(PageValidationError::InvalidHeadingGeometry {
                    id: id.to_string(),
                    reason: "height cannot be negative".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Authored navigation entries need visible text.
pub struct NavigationValidator;

impl Validator<PageDocument> for NavigationValidator {
    type Error = PageValidationError;

    fn validate(&self, input: &PageDocument) -> Result<(), Self::Error> {
        for section in &input.sections {
            if section.entries.iter().any(|entry| entry.label.trim().is_empty()) {
                return Err(PageValidationError::EmptyEntryLabel {
                    section: section.title.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Code block ids must be unique.
pub struct CodeBlockValidator;

impl Validator<PageDocument> for CodeBlockValidator {
    type Error = PageValidationError;

    fn validate(&self, input: &PageDocument) -> Result<(), Self::Error> {
        let mut seen = HashSet::new();
        for block in &input.code_blocks {
            if !seen.insert(block.id.as_str()) {
                return Err(PageValidationError::DuplicateCodeBlockId {
                    id: block.id.clone(),
                });
            }
        }
        Ok(())
    }
}
