//! JSON-LD schema assembly.
//!
//! Built-in schemas are emitted in a fixed order, each gated by its own
//! `show` flag, followed by the custom `schemas` in configured order:
//!
//! | Schema           | `hid`                               | Template params |
//! |------------------|-------------------------------------|-----------------|
//! | Organization     | `defaultSeoBaseOrganizationSchema`  | no              |
//! | WebSite          | `defaultSeoBaseWebsiteSchema`       | no              |
//! | WebPage          | `defaultSeoBaseWebpageSchema`       | yes             |
//! | BreadcrumbList   | `defaultSeoBaseBreadcrumbSchema`    | no              |
//! | custom           | configured                          | yes             |

use serde_json::{Map, Value, json};

use super::breadcrumb::build_breadcrumbs;
use crate::config::util::non_empty;
use crate::config::{SeoConfig, apply_extensions};
use crate::debug;
use crate::head::ScriptTag;

pub const ORGANIZATION_SCHEMA_ID: &str = "defaultSeoBaseOrganizationSchema";
pub const WEBSITE_SCHEMA_ID: &str = "defaultSeoBaseWebsiteSchema";
pub const WEBPAGE_SCHEMA_ID: &str = "defaultSeoBaseWebpageSchema";
pub const BREADCRUMB_SCHEMA_ID: &str = "defaultSeoBaseBreadcrumbSchema";

/// Reserved `hid`s, unavailable to custom schemas.
pub const BUILTIN_SCHEMA_IDS: [&str; 4] = [
    ORGANIZATION_SCHEMA_ID,
    WEBSITE_SCHEMA_ID,
    WEBPAGE_SCHEMA_ID,
    BREADCRUMB_SCHEMA_ID,
];

const SCHEMA_CONTEXT: &str = "https://schema.org";
const SEARCH_PLACEHOLDER: &str = "{search_term_string}";
const SEARCH_QUERY_INPUT: &str = "required name=search_term_string";

/// Build every enabled schema as a JSON-LD script tag.
pub fn build_schemas(config: &SeoConfig, route: &str, description: Option<&str>) -> Vec<ScriptTag> {
    let mut scripts = Vec::with_capacity(4 + config.schemas.len());

    if config.organization.show {
        scripts.push(ScriptTag::json_ld(
            ORGANIZATION_SCHEMA_ID,
            organization_schema(config),
            false,
        ));
    }
    if config.website.show {
        scripts.push(ScriptTag::json_ld(
            WEBSITE_SCHEMA_ID,
            website_schema(config),
            false,
        ));
    }
    if config.webpage.show {
        scripts.push(ScriptTag::json_ld(
            WEBPAGE_SCHEMA_ID,
            webpage_schema(config, description),
            true,
        ));
    }
    if config.breadcrumbs.show {
        match breadcrumb_schema(config, route) {
            Some(schema) => scripts.push(ScriptTag::json_ld(BREADCRUMB_SCHEMA_ID, schema, false)),
            None => debug!("schema"; "no breadcrumb list for `{}`", route),
        }
    }

    scripts.extend(
        config
            .schemas
            .iter()
            .map(|custom| ScriptTag::json_ld(&custom.hid, custom.schema.clone(), true)),
    );
    scripts
}

/// `@context` + `@type` header shared by every built-in schema.
fn schema_base(kind: &str) -> Map<String, Value> {
    let mut schema = Map::new();
    schema.insert("@context".into(), SCHEMA_CONTEXT.into());
    schema.insert("@type".into(), kind.into());
    schema
}

fn insert_opt(schema: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        schema.insert(key.into(), value.into());
    }
}

fn organization_schema(config: &SeoConfig) -> Value {
    let org = &config.organization;
    let kind = if org.kind.is_empty() { "Organization" } else { org.kind.as_str() };
    let mut schema = schema_base(kind);
    insert_opt(&mut schema, "name", non_empty(&org.name));
    insert_opt(&mut schema, "url", non_empty(&org.url));
    insert_opt(&mut schema, "logo", non_empty(&org.logo));

    let addr = &org.address;
    let mut address = Map::new();
    let address_kind = if addr.kind.is_empty() { "PostalAddress" } else { addr.kind.as_str() };
    address.insert("@type".into(), address_kind.into());
    insert_opt(&mut address, "streetAddress", non_empty(&addr.street_address));
    insert_opt(&mut address, "addressLocality", non_empty(&addr.address_locality));
    insert_opt(&mut address, "addressRegion", non_empty(&addr.address_region));
    insert_opt(&mut address, "postalCode", non_empty(&addr.postal_code));
    insert_opt(&mut address, "addressCountry", non_empty(&addr.address_country));
    schema.insert("address".into(), Value::Object(address));

    if !config.general.social.is_empty() {
        let same_as = config.general.social.iter().map(|s| s.link.as_str());
        schema.insert("sameAs".into(), same_as.collect());
    }

    apply_extensions(&mut schema, &org.extra);
    Value::Object(schema)
}

fn website_schema(config: &SeoConfig) -> Value {
    let site = &config.website;
    let mut schema = schema_base(site.schema_type());
    if let Some(id) = site.schema_id() {
        schema.insert("@id".into(), id.into());
    }
    insert_opt(&mut schema, "name", non_empty(&site.name));
    insert_opt(&mut schema, "url", non_empty(&site.url));

    if site.search.show {
        match non_empty(&site.search.action) {
            Some(action) => {
                schema.insert(
                    "potentialAction".into(),
                    json!({
                        "@type": "SearchAction",
                        "target": format!("{action}{SEARCH_PLACEHOLDER}"),
                        "query-input": SEARCH_QUERY_INPUT,
                    }),
                );
            }
            None => debug!("schema"; "search enabled without an action, skipping SearchAction"),
        }
    }

    apply_extensions(&mut schema, &site.extra);
    Value::Object(schema)
}

fn webpage_schema(config: &SeoConfig, description: Option<&str>) -> Value {
    let site = &config.website;
    let page = &config.webpage;
    let site_url = non_empty(&site.url);
    let page_path = non_empty(&page.url);

    let mut schema = schema_base("WebPage");
    if let (Some(site), Some(path)) = (site_url, page_path) {
        schema.insert("@id".into(), format!("{site}{path}#webpage").into());
    }
    insert_opt(&mut schema, "url", site_url);
    if !config.titles.template.is_empty() {
        schema.insert("name".into(), config.titles.template.as_str().into());
    }

    let mut is_part_of = Map::new();
    is_part_of.insert("@type".into(), site.schema_type().into());
    if let Some(id) = site.schema_id() {
        is_part_of.insert("@id".into(), id.into());
    }
    schema.insert("isPartOf".into(), Value::Object(is_part_of));

    insert_opt(&mut schema, "description", description);
    if !config.locale.is_empty() {
        schema.insert("inLanguage".into(), config.locale.as_str().into());
    }

    let mut read_action = Map::new();
    read_action.insert("@type".into(), "ReadAction".into());
    if let Some(path) = page_path {
        read_action.insert("target".into(), json!([path]));
    }
    schema.insert("potentialAction".into(), json!([read_action]));

    insert_opt(&mut schema, "datePublished", non_empty(&page.date_published));
    insert_opt(&mut schema, "dateModified", non_empty(&page.date_modified));

    apply_extensions(&mut schema, &page.extra);
    Value::Object(schema)
}

/// `None` on the root route, where the trail is empty.
fn breadcrumb_schema(config: &SeoConfig, route: &str) -> Option<Value> {
    let trail = build_breadcrumbs(config, route);
    if trail.is_empty() {
        return None;
    }
    let mut schema = schema_base("BreadcrumbList");
    schema.insert("itemListElement".into(), json!(trail));
    Some(Value::Object(schema))
}
