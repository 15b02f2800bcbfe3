use std::fmt;

/// National ID, the unique key of every registered person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NationalId(String);

impl NationalId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NationalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NationalId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    national_id: NationalId,
}

impl Person {
    pub fn new(name: impl Into<String>, national_id: impl Into<NationalId>) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
        }
    }

    /// The ID never changes once the person exists.
    pub fn national_id(&self) -> &NationalId {
        &self.national_id
    }
}
