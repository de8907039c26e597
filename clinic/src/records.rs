use serde::{Deserialize, Serialize};
use wards::WardId;

/// Records that the directory can look up by name.
pub trait Named {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub name: String,
    pub specialty: String,
    pub shift: String, // "morning" or "night", not validated
    pub unavailable_days: Vec<String>,
}

impl Doctor {
    pub fn new(
        name: impl Into<String>,
        specialty: impl Into<String>,
        shift: impl Into<String>,
        unavailable_days: Vec<String>,
    ) -> Self {
        Self {
            name: name.into(),
            specialty: specialty.into(),
            shift: shift.into(),
            unavailable_days,
        }
    }

    /// Works the given shift and is not marked unavailable on `day`.
    /// Both comparisons are exact.
    pub fn is_available(&self, shift: &str, day: &str) -> bool {
        self.shift == shift && !self.unavailable_days.iter().any(|d| d == day)
    }
}

impl Named for Doctor {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Where an admitted patient sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub unit: WardId,
    pub ward_number: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admission: Option<Admission>,
}

impl Patient {
    pub fn new(name: impl Into<String>, age: u32, gender: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            admission: None,
        }
    }

    pub fn is_admitted(&self) -> bool {
        self.admission.is_some()
    }

    pub fn ward_number(&self) -> Option<u32> {
        self.admission.map(|a| a.ward_number)
    }
}

impl Named for Patient {
    fn name(&self) -> &str {
        &self.name
    }
}
