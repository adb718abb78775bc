use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    Banking,
    Airlines,
    Healthcare,
    Telecom,
    Entertainment,
    Government,
    Insurance,
    Finance,
    Retail,
    Technology,
}

impl Department {
    /// Order in which the home page lays out the category cards.
    pub const ALL: [Department; 10] = [
        Self::Banking,
        Self::Airlines,
        Self::Healthcare,
        Self::Telecom,
        Self::Entertainment,
        Self::Government,
        Self::Insurance,
        Self::Finance,
        Self::Retail,
        Self::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Banking => "banking",
            Self::Airlines => "airlines",
            Self::Healthcare => "healthcare",
            Self::Telecom => "telecom",
            Self::Entertainment => "entertainment",
            Self::Government => "government",
            Self::Insurance => "insurance",
            Self::Finance => "finance",
            Self::Retail => "retail",
            Self::Technology => "technology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Banking => "Banking",
            Self::Airlines => "Airlines",
            Self::Healthcare => "Healthcare",
            Self::Telecom => "Telecom",
            Self::Entertainment => "Entertainment",
            Self::Government => "Government",
            Self::Insurance => "Insurance",
            Self::Finance => "Finance",
            Self::Retail => "Retail",
            Self::Technology => "Technology",
        }
    }

    pub fn blurb(&self) -> String {
        format!("File complaints related to {}", self.as_str())
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|department| department.as_str() == normalized)
            .ok_or_else(|| {
                DomainError::Validation(format!("unknown department '{}'", value.trim()))
            })
    }
}

/// A dropdown selection where `all` disables the filter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T> Selection<T>
where
    T: FromStr<Err = DomainError>,
{
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::All),
            Some(value) if value.eq_ignore_ascii_case("all") => Ok(Self::All),
            Some(value) => value.parse().map(Self::Only),
        }
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}
