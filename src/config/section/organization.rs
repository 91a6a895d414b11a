//! `[organization]` section: the Organization schema.

use serde::{Deserialize, Serialize};

use super::extra::Extension;
use super::validate_site_url;
use crate::config::merge::{ListPatch, merge_fields, set_fields, set_optional_fields};
use crate::config::util::list_or_table;
use crate::config::{ConfigDiagnostics, FieldPath, Merge};

/// Postal address nested into the Organization schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    #[serde(rename = "type")]
    pub kind: String,
    pub street_address: Option<String>,
    pub address_locality: Option<String>,
    pub address_region: Option<String>,
    pub postal_code: Option<String>,
    pub address_country: Option<String>,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            kind: "PostalAddress".into(),
            street_address: None,
            address_locality: None,
            address_region: None,
            postal_code: None,
            address_country: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddressPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_country: Option<String>,
}

impl Merge for PostalAddress {
    type Patch = PostalAddressPatch;

    fn apply(&mut self, patch: &PostalAddressPatch) {
        set_fields!(self, patch; kind);
        set_optional_fields!(
            self, patch;
            street_address, address_locality, address_region, postal_code, address_country
        );
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    /// Emit the Organization schema.
    pub show: bool,
    /// Schema `@type` (e.g. `Organization`, `LocalBusiness`).
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub url: Option<String>,
    pub logo: Option<String>,
    pub address: PostalAddress,
    /// Extra schema properties, applied after the built-in ones.
    #[serde(deserialize_with = "list_or_table")]
    pub extra: Vec<Extension>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            show: true,
            kind: "Organization".into(),
            name: None,
            url: None,
            logo: None,
            address: PostalAddress::default(),
            extra: Vec::new(),
        }
    }
}

/// Field paths for diagnostic messages.
pub struct OrganizationFields {
    pub url: FieldPath,
}

impl OrganizationConfig {
    pub const FIELDS: OrganizationFields = OrganizationFields {
        url: FieldPath::new("organization.url"),
    };

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.url {
            validate_site_url(Self::FIELDS.url, url, diag);
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddressPatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<ListPatch<Extension>>,
}

impl Merge for OrganizationConfig {
    type Patch = OrganizationPatch;

    fn apply(&mut self, patch: &OrganizationPatch) {
        set_fields!(self, patch; show, kind);
        set_optional_fields!(self, patch; name, url, logo);
        merge_fields!(self, patch; address, extra);
    }
}
