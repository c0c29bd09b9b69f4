use std::fmt;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Destination phone number supplied by the caller.
///
/// Only non-emptiness is enforced; format validation is left to the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Creates a `PhoneNumber` from any string-like value.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyPhoneNumber`] if the value is empty.
    pub fn new(number: impl Into<String>) -> Result<Self, CoreError> {
        let number = number.into();
        if number.is_empty() {
            return Err(CoreError::EmptyPhoneNumber);
        }
        Ok(Self(number))
    }

    /// Returns the number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PhoneNumber> for String {
    fn from(n: PhoneNumber) -> Self {
        n.0
    }
}

/// Provider-side identifier of the conversational assistant handling a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct AssistantId(pub String);

impl AssistantId {
    /// Creates an `AssistantId`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyIdentifier`] if the value is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyIdentifier { field: "assistant id" });
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssistantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Provider-side identifier of the originating phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub struct PhoneNumberId(pub String);

impl PhoneNumberId {
    /// Creates a `PhoneNumberId`.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyIdentifier`] if the value is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, CoreError> {
        let id = id.into();
        if id.is_empty() {
            return Err(CoreError::EmptyIdentifier { field: "phone number id" });
        }
        Ok(Self(id))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
