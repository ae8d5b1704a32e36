use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Core trait that every catalogued unit implementation provides.
///
/// The catalog only stores and hands back implementations; rendering is the
/// authoring tool's business.
pub trait Renderable: Send + Sync {
    /// Produce markup for this unit given the author-supplied props
    fn render(&self, props: &Value) -> String;
}

/// Shared handle to a unit implementation
pub type Implementation = Arc<dyn Renderable>;

/// Fixed markup with `{{prop}}` placeholders filled from the props object.
///
/// Placeholders with no matching prop are left as-is.
#[derive(Debug, Clone)]
pub struct StaticMarkup {
    markup: String,
}

impl StaticMarkup {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }

    /// Convenience for declaring units inline.
    pub fn shared(markup: impl Into<String>) -> Implementation {
        Arc::new(Self::new(markup))
    }
}

impl Renderable for StaticMarkup {
    fn render(&self, props: &Value) -> String {
        let mut out = self.markup.clone();
        if let Some(map) = props.as_object() {
            for (key, value) in map {
                let placeholder = format!("{{{{{}}}}}", key);
                let text = match value {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                out = out.replace(&placeholder, &text);
            }
        }
        out
    }
}

impl fmt::Debug for dyn Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<unit implementation>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_static_markup_fills_placeholders() {
        let unit = StaticMarkup::new("<button class=\"{{variant}}\">{{label}}</button>");
        let html = unit.render(&json!({ "label": "Save", "variant": "primary" }));
        assert_eq!(html, "<button class=\"primary\">Save</button>");
    }

    #[test]
    fn test_static_markup_keeps_unknown_placeholders() {
        let unit = StaticMarkup::new("<div data-n=\"{{count}}\">{{missing}}</div>");
        let html = unit.render(&json!({ "count": 3 }));
        assert_eq!(html, "<div data-n=\"3\">{{missing}}</div>");
    }

    #[test]
    fn test_non_object_props_render_raw_markup() {
        let unit = StaticMarkup::new("<hr/>");
        assert_eq!(unit.render(&Value::Null), "<hr/>");
    }
}
