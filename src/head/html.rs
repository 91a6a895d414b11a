//! HTML head sink.
//!
//! [`HtmlHead`] stands in for a host document head: it applies `hid`
//! deduplication across every injected descriptor, resolves title
//! template parameters, and renders the result as HTML.
//!
//! # Template parameters
//!
//! | Token         | Value                                  |
//! |---------------|----------------------------------------|
//! | `%s`          | the page title                         |
//! | `%separator`  | `titleTemplateParams.separator`        |
//! | `%site.name`  | `titleTemplateParams.site.name`        |
//! | `%a.b.c`      | any dotted path into the params        |
//!
//! Tokens that do not resolve to a string, number or boolean are left
//! verbatim.

use regex::{Captures, Regex};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt::Write;
use std::sync::LazyLock;

use super::{Attrs, HeadDescriptor, HeadSink, LinkTag, MetaTag, ScriptTag};
use crate::utils::html::{escape, escape_attr, escape_script};

static TEMPLATE_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"%([A-Za-z_]\w*(?:\.[A-Za-z_]\w*)*)").unwrap());

/// Replace `%token`s in `input` with values from `params`.
///
/// `%s` is always the page `title`.
pub fn substitute_params<'a>(input: &'a str, title: &str, params: &Value) -> Cow<'a, str> {
    TEMPLATE_PARAM.replace_all(input, |caps: &Captures| {
        let token = &caps[1];
        if token == "s" {
            return title.to_string();
        }
        match lookup(params, token) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => caps[0].to_string(),
        }
    })
}

fn lookup<'v>(params: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(params, |value, key| value.get(key))
}

/// Substitute inside every string of a JSON value.
fn substitute_json(value: &mut Value, title: &str, params: &Value) {
    match value {
        Value::String(s) => {
            let replaced = substitute_params(s, title, params).into_owned();
            *s = replaced;
        }
        Value::Array(items) => {
            for item in items {
                substitute_json(item, title, params);
            }
        }
        Value::Object(map) => {
            for item in map.values_mut() {
                substitute_json(item, title, params);
            }
        }
        _ => {}
    }
}

/// Tag types that carry a deduplication key.
trait Keyed {
    fn hid(&self) -> Option<&str>;
}

impl Keyed for MetaTag {
    fn hid(&self) -> Option<&str> {
        self.hid.as_deref()
    }
}

impl Keyed for LinkTag {
    fn hid(&self) -> Option<&str> {
        self.hid.as_deref()
    }
}

impl Keyed for ScriptTag {
    fn hid(&self) -> Option<&str> {
        self.hid.as_deref()
    }
}

/// Append `incoming`; a tag whose `hid` is already present replaces the
/// existing one in place.
fn merge_keyed<T: Keyed>(existing: &mut Vec<T>, incoming: Vec<T>) {
    for tag in incoming {
        let slot = tag
            .hid()
            .and_then(|hid| existing.iter().position(|t| t.hid() == Some(hid)));
        match slot {
            Some(index) => existing[index] = tag,
            None => existing.push(tag),
        }
    }
}

/// In-memory document head.
#[derive(Debug, Clone, Default)]
pub struct HtmlHead {
    title: String,
    title_template: String,
    params: Value,
    meta: Vec<MetaTag>,
    link: Vec<LinkTag>,
    script: Vec<ScriptTag>,
}

impl HeadSink for HtmlHead {
    fn inject_head(&mut self, head: HeadDescriptor) {
        self.title = head.title;
        self.title_template = head.title_template;
        self.params = serde_json::to_value(&head.title_template_params).unwrap_or_default();
        merge_keyed(&mut self.meta, head.meta);
        merge_keyed(&mut self.link, head.link);
        merge_keyed(&mut self.script, head.script);
    }
}

impl HtmlHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Final `<title>` text, with the template applied.
    pub fn title(&self) -> String {
        if self.title_template.is_empty() {
            return self.title.clone();
        }
        substitute_params(&self.title_template, &self.title, &self.params).into_owned()
    }

    pub fn meta(&self) -> &[MetaTag] {
        &self.meta
    }

    pub fn link(&self) -> &[LinkTag] {
        &self.link
    }

    pub fn script(&self) -> &[ScriptTag] {
        &self.script
    }

    /// Script body after template substitution (when the script asks for it).
    pub fn script_body(&self, script: &ScriptTag) -> Value {
        let mut body = script.inner_html.clone();
        if script.process_template_params {
            substitute_json(&mut body, &self.title, &self.params);
        }
        body
    }

    /// Render the head content, one tag per line.
    pub fn render(&self) -> String {
        let mut html = String::new();
        let _ = writeln!(html, "<title>{}</title>", escape(&self.title()));

        for meta in &self.meta {
            html.push_str("<meta");
            push_attr(&mut html, "name", meta.name.as_deref());
            push_attr(&mut html, "property", meta.property.as_deref());
            let content = substitute_params(&meta.content, &self.title, &self.params);
            push_attr(&mut html, "content", Some(&*content));
            push_extra_attrs(&mut html, &meta.attrs);
            html.push_str(">\n");
        }

        for link in &self.link {
            html.push_str("<link");
            push_attr(&mut html, "rel", Some(link.rel.as_str()));
            push_attr(&mut html, "sizes", Some(link.sizes.as_str()).filter(|s| !s.is_empty()));
            push_attr(&mut html, "href", Some(link.href.as_str()));
            push_attr(&mut html, "color", link.color.as_deref());
            push_extra_attrs(&mut html, &link.attrs);
            html.push_str(">\n");
        }

        for script in &self.script {
            html.push_str("<script");
            push_attr(&mut html, "type", Some(script.kind.as_str()).filter(|k| !k.is_empty()));
            push_extra_attrs(&mut html, &script.attrs);
            html.push('>');
            let body = match self.script_body(script) {
                Value::Null => String::new(),
                Value::String(raw) => raw,
                json => json.to_string(),
            };
            html.push_str(&escape_script(&body));
            html.push_str("</script>\n");
        }

        html
    }
}

fn push_attr(html: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        let _ = write!(html, " {}=\"{}\"", name, escape_attr(value));
    }
}

/// Extra attributes: `true` renders a bare attribute, `false`/`null` nothing.
fn push_extra_attrs(html: &mut String, attrs: &Attrs) {
    for (name, value) in attrs {
        match value {
            Value::Bool(true) => {
                let _ = write!(html, " {}", escape_attr(name));
            }
            Value::Bool(false) | Value::Null => {}
            Value::String(s) => push_attr(html, &escape_attr(name), Some(s.as_str())),
            other => push_attr(html, &escape_attr(name), Some(other.to_string().as_str())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteParams, TitleParams};
    use serde_json::json;

    fn params() -> Value {
        json!({"site": {"name": "Mess"}, "separator": "-", "tagline": null, "n": 3})
    }

    fn descriptor() -> HeadDescriptor {
        HeadDescriptor {
            title: "About".into(),
            title_template: "%s %separator %site.name".into(),
            title_template_params: TitleParams {
                site: SiteParams {
                    name: Some("Mess".into()),
                },
                separator: "-".into(),
                tagline: None,
            },
            ..HeadDescriptor::default()
        }
    }

    #[test]
    fn test_substitute_params() {
        let p = params();
        assert_eq!(
            substitute_params("%s %separator %site.name", "Home", &p),
            "Home - Mess"
        );
        assert_eq!(substitute_params("%n items", "", &p), "3 items");
        assert_eq!(substitute_params("%tagline|%missing.key", "", &p), "%tagline|%missing.key");
        assert_eq!(substitute_params("100% sure", "", &p), "100% sure");
        assert!(matches!(substitute_params("plain", "", &p), Cow::Borrowed(_)));
    }

    #[test]
    fn test_title_uses_template() {
        let mut head = HtmlHead::new();
        head.inject_head(descriptor());
        assert_eq!(head.title(), "About - Mess");

        let mut head = HtmlHead::new();
        head.inject_head(HeadDescriptor {
            title_template: String::new(),
            ..descriptor()
        });
        assert_eq!(head.title(), "About");
    }

    #[test]
    fn test_dedup_replaces_in_place() {
        let mut head = HtmlHead::new();
        head.inject_head(HeadDescriptor {
            meta: vec![
                MetaTag::named("description", "first"),
                MetaTag::property("og:type", "website"),
            ],
            ..descriptor()
        });
        head.inject_head(HeadDescriptor {
            meta: vec![
                MetaTag::named("description", "second"),
                MetaTag {
                    name: Some("robots".into()),
                    content: "noindex".into(),
                    ..MetaTag::default()
                },
            ],
            ..descriptor()
        });

        let contents: Vec<_> = head.meta().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["second", "website", "noindex"]);
    }

    #[test]
    fn test_script_params_only_when_flagged() {
        let mut head = HtmlHead::new();
        head.inject_head(HeadDescriptor {
            script: vec![
                ScriptTag::json_ld("page", json!({"name": "%s %separator %site.name"}), true),
                ScriptTag::json_ld("raw", json!({"name": "%s"}), false),
            ],
            ..descriptor()
        });
        assert_eq!(head.script_body(&head.script()[0])["name"], "About - Mess");
        assert_eq!(head.script_body(&head.script()[1])["name"], "%s");
    }

    #[test]
    fn test_render() {
        let mut head = HtmlHead::new();
        head.inject_head(HeadDescriptor {
            meta: vec![MetaTag::property("og:title", "%s %separator %site.name")],
            link: vec![
                LinkTag {
                    rel: "icon".into(),
                    href: "/favicon.ico".into(),
                    ..LinkTag::default()
                },
                LinkTag {
                    rel: "mask-icon".into(),
                    href: "/pin.svg".into(),
                    color: Some("#37dbff".into()),
                    ..LinkTag::default()
                },
            ],
            script: vec![ScriptTag::json_ld(
                "x",
                json!({"@type": "Thing", "text": "</script>"}),
                false,
            )],
            ..descriptor()
        });

        let html = head.render();
        assert!(html.starts_with("<title>About - Mess</title>\n"));
        assert!(html.contains(r#"<meta property="og:title" content="About - Mess">"#));
        assert!(html.contains(r#"<link rel="icon" href="/favicon.ico">"#));
        assert!(html.contains(r##"<link rel="mask-icon" href="/pin.svg" color="#37dbff">"##));
        assert!(html.contains(r#"<script type="application/ld+json">{"@type":"Thing","text":"<\/script>"}</script>"#));
    }

    #[test]
    fn test_render_escapes_attributes() {
        let mut head = HtmlHead::new();
        head.inject_head(HeadDescriptor {
            title: "Q&A".into(),
            title_template: "%s".into(),
            meta: vec![MetaTag::named("description", "say \"hi\"")],
            ..HeadDescriptor::default()
        });
        let html = head.render();
        assert!(html.contains("<title>Q&amp;A</title>"));
        assert!(html.contains("content=\"say &quot;hi&quot;\""));
    }
}
