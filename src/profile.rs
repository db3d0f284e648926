use std::io::Write;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::gcloud::Gcloud;

const LIST_ARGS: [&str; 4] = ["config", "configurations", "list", "--format=json"];

/// One gcloud configuration, flattened to the fields we display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub is_active: bool,
    pub account: String,
    pub project: String,
    pub dataproc_endpoint_override: Option<String>,
}

impl Profile {
    /// `Account: .. Project: ..`, plus `Dataproc: ..` when an override is set
    pub fn details(&self) -> String {
        let mut details = format!("Account: {} Project: {}", self.account, self.project);
        if let Some(dataproc) = self.dataproc() {
            details.push_str(&format!(" Dataproc: {}", dataproc));
        }
        details
    }

    /// Dataproc endpoint override, if non-empty
    pub fn dataproc(&self) -> Option<&str> {
        self.dataproc_endpoint_override
            .as_deref()
            .filter(|s| !s.is_empty())
    }

    /// Name with the `(active)` marker appended for the active configuration
    pub fn label(&self) -> String {
        if self.is_active {
            format!("{} (active)", self.name)
        } else {
            self.name.clone()
        }
    }
}

// Shape of `gcloud config configurations list --format=json`.

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawConfiguration {
    is_active: bool,
    name: String,
    properties: RawProperties,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawProperties {
    core: RawCore,
    api_endpoint_overrides: RawEndpointOverrides,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawCore {
    account: String,
    project: String,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawEndpointOverrides {
    dataproc: Option<String>,
}

impl From<RawConfiguration> for Profile {
    fn from(raw: RawConfiguration) -> Self {
        Self {
            name: raw.name,
            is_active: raw.is_active,
            account: raw.properties.core.account,
            project: raw.properties.core.project,
            dataproc_endpoint_override: raw
                .properties
                .api_endpoint_overrides
                .dataproc
                .filter(|s| !s.is_empty()),
        }
    }
}

/// Decode the JSON listing, keeping gcloud's order
pub fn parse_profiles(bytes: &[u8]) -> Result<Vec<Profile>> {
    let raw: Vec<RawConfiguration> =
        serde_json::from_slice(bytes).map_err(|source| Error::Decode {
            output: String::from_utf8_lossy(bytes).into_owned(),
            source,
        })?;
    Ok(raw.into_iter().map(Profile::from).collect())
}

/// Ask gcloud for every configuration it knows about. Anything gcloud adds
/// on stderr is part of what gets decoded, so stray warnings fail the listing.
pub fn list_profiles(gcloud: &Gcloud) -> Result<Vec<Profile>> {
    let captured = gcloud.run(&LIST_ARGS)?;
    let profiles = parse_profiles(&captured.combined())?;
    debug!("gcloud reported {} configurations", profiles.len());
    Ok(profiles)
}

/// Make `name` the active configuration and hand back gcloud's own output
pub fn activate_profile(gcloud: &Gcloud, name: &str) -> Result<Vec<u8>> {
    let captured = gcloud.run(&["config", "configurations", "activate", name])?;
    info!("activated configuration '{}'", name);
    Ok(captured.combined())
}

/// Index of the first active configuration, or 0 when none is active
pub fn active_index(profiles: &[Profile]) -> usize {
    profiles.iter().position(|p| p.is_active).unwrap_or(0)
}

/// Print configurations one per line
pub fn print_profiles(profiles: &[Profile], out: &mut impl Write) -> Result<()> {
    for p in profiles {
        let marker = if p.is_active { "*" } else { " " };
        writeln!(out, "{} {}  {}", marker, p.label(), p.details())?;
    }
    Ok(())
}
