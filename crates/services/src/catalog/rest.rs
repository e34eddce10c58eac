use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use quiz_core::model::{Country, CountryCatalog, FlagUri};

use crate::catalog::CatalogSource;
use crate::error::CatalogError;

/// Default catalog endpoint: every country, names and flags only.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flags";

/// Catalog provider backed by the REST Countries API.
///
/// One bulk fetch per `load`, no retry, no caching, no pagination.
#[derive(Clone)]
pub struct RestCountriesProvider {
    client: Client,
    endpoint: String,
}

impl RestCountriesProvider {
    #[must_use]
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    #[must_use]
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RestCountriesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for RestCountriesProvider {
    async fn load(&self) -> Result<CountryCatalog, CatalogError> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::HttpStatus(response.status()));
        }

        let body = response.text().await?;
        let records: Vec<CountryRecord> = serde_json::from_str(&body)?;

        let catalog = filter_records(records);
        if catalog.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        Ok(catalog)
    }
}

/// Keeps an entry iff it has a non-empty common name and at least one flag
/// reference that parses as a URL. SVG wins over PNG when both exist.
fn filter_records(records: Vec<CountryRecord>) -> CountryCatalog {
    let countries = records
        .into_iter()
        .filter_map(|record| {
            let name = record.name?.common?;
            let flags = record.flags?;
            let flag_ref = flags
                .svg
                .filter(|reference| !reference.trim().is_empty())
                .or(flags.png)?;
            let flag = FlagUri::parse(flag_ref).ok()?;
            Country::new(name, flag).ok()
        })
        .collect();

    CountryCatalog::new(countries)
}

// Wire shapes for the catalog endpoint. Everything is optional at this
// level; filtering decides what survives.

#[derive(Debug, Deserialize)]
struct CountryRecord {
    name: Option<NameRecord>,
    flags: Option<FlagsRecord>,
}

#[derive(Debug, Deserialize)]
struct NameRecord {
    common: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FlagsRecord {
    svg: Option<String>,
    png: Option<String>,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_records(json: &str) -> Vec<CountryRecord> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn filter_prefers_svg_over_png() {
        let records = parse_records(
            r#"[{"name":{"common":"Finland"},
                 "flags":{"svg":"https://flagcdn.com/fi.svg","png":"https://flagcdn.com/w320/fi.png"}}]"#,
        );

        let catalog = filter_records(records);
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.countries()[0].flag().as_str(),
            "https://flagcdn.com/fi.svg"
        );
    }

    #[test]
    fn filter_falls_back_to_png() {
        let records = parse_records(
            r#"[{"name":{"common":"Finland"},"flags":{"png":"https://flagcdn.com/w320/fi.png"}}]"#,
        );

        let catalog = filter_records(records);
        assert_eq!(
            catalog.countries()[0].flag().as_str(),
            "https://flagcdn.com/w320/fi.png"
        );
    }

    #[test]
    fn filter_drops_incomplete_entries() {
        let records = parse_records(
            r#"[{"name":{"common":"Finland"},"flags":{"svg":"https://flagcdn.com/fi.svg"}},
                {"name":{"common":"No Flags"}},
                {"flags":{"svg":"https://flagcdn.com/xx.svg"}},
                {"name":{"common":"   "},"flags":{"svg":"https://flagcdn.com/yy.svg"}},
                {"name":{"common":"Bad Ref"},"flags":{"svg":"not a url"}}]"#,
        );

        let catalog = filter_records(records);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.countries()[0].name(), "Finland");
    }

    #[test]
    fn filter_ignores_unknown_fields() {
        let records = parse_records(
            r#"[{"name":{"common":"Finland","official":"Republic of Finland"},
                 "flags":{"svg":"https://flagcdn.com/fi.svg","alt":"Blue cross on white"}}]"#,
        );

        assert_eq!(filter_records(records).len(), 1);
    }

    #[test]
    fn filter_of_nothing_is_empty() {
        assert!(filter_records(Vec::new()).is_empty());
    }
}
