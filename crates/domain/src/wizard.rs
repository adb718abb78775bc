use serde::Serialize;

use crate::DomainResult;
use crate::complaints::ComplaintCreate;
use crate::department::Department;
use crate::error::DomainError;

/// Two-step flow on the home page: pick a department, then fill the form.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum ComplaintWizard {
    #[default]
    Categories,
    Form {
        department: Department,
    },
}

#[derive(Clone, Debug, Default)]
pub struct ComplaintForm {
    pub title: String,
    pub description: String,
    pub contact_email: String,
    pub organization: Option<String>,
}

impl ComplaintWizard {
    pub fn select(self, department: Department) -> Self {
        Self::Form { department }
    }

    pub fn back(self) -> Self {
        Self::Categories
    }

    pub fn department(&self) -> Option<Department> {
        match self {
            Self::Categories => None,
            Self::Form { department } => Some(*department),
        }
    }

    pub fn submit(&self, form: ComplaintForm) -> DomainResult<ComplaintCreate> {
        let department = self.department().ok_or_else(|| {
            DomainError::Validation("select a department before filing a complaint".into())
        })?;
        Ok(ComplaintCreate {
            department,
            title: form.title,
            description: form.description,
            organization: form.organization,
            contact_email: form.contact_email,
        })
    }
}
