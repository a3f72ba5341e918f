// Sovereign Navigator - core/forms.rs
//
// Form field state and input parsing for the creditor, violation, and
// profile editors. Validation turns field text into request bodies.

use crate::core::model::{ContactMethod, NewCreditor, NewViolation};
use crate::util::error::FormError;
use chrono::{Local, NaiveDate};

/// Split a comma-separated tag list, trimming and dropping empty entries.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Human-readable template name: `debt_validation.j2` -> `Debt Validation`.
pub fn template_display_name(template: &str) -> String {
    template
        .replace(".j2", "")
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Profile declarations are edited one per line.
pub fn declarations_from_text(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

pub fn declarations_to_text(declarations: Option<&[String]>) -> String {
    declarations.map(|d| d.join("\n")).unwrap_or_default()
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField { field })
    } else {
        Ok(())
    }
}

// =============================================================================
// Creditor form
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreditorForm {
    pub name: String,
    pub address: String,
    pub contact_method: ContactMethod,
    /// Comma-separated, e.g. "original creditor, debt collector".
    pub tags: String,
}

impl CreditorForm {
    pub fn validate(&self) -> Result<NewCreditor, FormError> {
        require(&self.name, "Creditor name")?;
        require(&self.address, "Address")?;
        Ok(NewCreditor {
            name: self.name.clone(),
            address: self.address.clone(),
            contact_method: self.contact_method,
            tags: parse_tags(&self.tags),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Violation form
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ViolationForm {
    /// `YYYY-MM-DD`
    pub date: String,
    pub collector: String,
    pub violation_type: String,
    pub statute_reference: String,
    pub notes: String,
}

impl Default for ViolationForm {
    fn default() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl ViolationForm {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: date.format("%Y-%m-%d").to_string(),
            collector: String::new(),
            violation_type: String::new(),
            statute_reference: String::new(),
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<NewViolation, FormError> {
        require(&self.date, "Date")?;
        require(&self.collector, "Collector")?;
        require(&self.violation_type, "Violation type")?;
        require(&self.notes, "Notes")?;
        Ok(NewViolation {
            date: self.date.trim().to_string(),
            collector: self.collector.clone(),
            violation_type: self.violation_type.clone(),
            statute_reference: self.statute_reference.clone(),
            notes: self.notes.clone(),
        })
    }

    /// Reset everything except the date, so consecutive entries for the
    /// same day need no re-typing.
    pub fn clear(&mut self) {
        self.collector.clear();
        self.violation_type.clear();
        self.statute_reference.clear();
        self.notes.clear();
    }
}
