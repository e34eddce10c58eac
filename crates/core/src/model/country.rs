use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CountryError {
    #[error("country name cannot be empty")]
    EmptyName,

    #[error("flag reference cannot be empty")]
    EmptyFlagRef,

    #[error("flag reference is not a valid URL: {raw}")]
    InvalidFlagRef { raw: String },
}

//
// ─── FLAG URI ──────────────────────────────────────────────────────────────────
//

/// Validated reference to a flag image (SVG or PNG).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlagUri(Url);

impl FlagUri {
    /// Parses a flag reference.
    ///
    /// # Errors
    ///
    /// Returns `CountryError::EmptyFlagRef` for blank input and
    /// `CountryError::InvalidFlagRef` when the reference does not parse as
    /// a URL.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, CountryError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(CountryError::EmptyFlagRef);
        }
        let url = Url::parse(s).map_err(|_| CountryError::InvalidFlagRef { raw: s.to_owned() })?;
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl fmt::Display for FlagUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//
// ─── COUNTRY ───────────────────────────────────────────────────────────────────
//

/// A country as presented in the quiz: a display name plus a flag image.
///
/// Immutable once constructed. The display name doubles as the catalog key;
/// uniqueness is not guaranteed by the source data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    name: String,
    flag: FlagUri,
}

impl Country {
    /// Creates a country entry.
    ///
    /// # Errors
    ///
    /// Returns `CountryError::EmptyName` if the name is empty or
    /// whitespace-only.
    pub fn new(name: impl Into<String>, flag: FlagUri) -> Result<Self, CountryError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(CountryError::EmptyName);
        }

        Ok(Self {
            name: name.to_owned(),
            flag,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn flag(&self) -> &FlagUri {
        &self.flag
    }

    /// Alt text for the flag image.
    #[must_use]
    pub fn flag_alt(&self) -> String {
        format!("Flag of {}", self.name)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn flag() -> FlagUri {
        FlagUri::parse("https://flagcdn.com/fi.svg").unwrap()
    }

    #[test]
    fn country_rejects_empty_name() {
        let err = Country::new("   ", flag()).unwrap_err();
        assert_eq!(err, CountryError::EmptyName);
    }

    #[test]
    fn country_trims_name() {
        let country = Country::new("  Finland  ", flag()).unwrap();
        assert_eq!(country.name(), "Finland");
    }

    #[test]
    fn flag_alt_names_the_country() {
        let country = Country::new("Finland", flag()).unwrap();
        assert_eq!(country.flag_alt(), "Flag of Finland");
    }

    #[test]
    fn flag_uri_rejects_blank_input() {
        let err = FlagUri::parse("  ").unwrap_err();
        assert_eq!(err, CountryError::EmptyFlagRef);
    }

    #[test]
    fn flag_uri_rejects_non_url() {
        let err = FlagUri::parse("not a url").unwrap_err();
        assert!(matches!(err, CountryError::InvalidFlagRef { .. }));
    }

    #[test]
    fn flag_uri_keeps_the_parsed_reference() {
        let uri = FlagUri::parse(" https://flagcdn.com/w320/fi.png ").unwrap();
        assert_eq!(uri.as_str(), "https://flagcdn.com/w320/fi.png");
    }
}
