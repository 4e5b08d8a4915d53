//! Template engine for personalized replies

use crate::{PepError, Result};
use handlebars::Handlebars;
use serde_json::json;

/// Prefix for negative text tagged suicidal
pub const SUICIDAL_TEMPLATE: &str = "I'm very concerned about what you're saying. {{base}} \
Please know that you're not alone and there are people who care about you. \
If you're having thoughts of self-harm, please call a crisis hotline immediately.";

/// Prefix for negative text tagged depression or loneliness
pub const DISTRESS_TEMPLATE: &str = "I can sense you're going through a difficult time. {{base}} \
It's okay to feel this way, and I'm here to listen.";

/// Prefix for negative text tagged anxiety
pub const ANXIETY_TEMPLATE: &str =
    "I understand this might be causing you anxiety. {{base}} Let's work through this together.";

/// Prefix for any other negative text
pub const NEGATIVE_TEMPLATE: &str = "I hear that you're feeling down. {{base}}";

/// Prefix for positive text
pub const POSITIVE_TEMPLATE: &str = "That's wonderful to hear! {{base}}";

/// Named reply templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyTemplate {
    /// [`SUICIDAL_TEMPLATE`]
    Suicidal,
    /// [`DISTRESS_TEMPLATE`]
    Distress,
    /// [`ANXIETY_TEMPLATE`]
    Anxiety,
    /// [`NEGATIVE_TEMPLATE`]
    Negative,
    /// [`POSITIVE_TEMPLATE`]
    Positive,
}

impl ReplyTemplate {
    /// Every template, in registration order
    pub const ALL: [ReplyTemplate; 5] = [
        ReplyTemplate::Suicidal,
        ReplyTemplate::Distress,
        ReplyTemplate::Anxiety,
        ReplyTemplate::Negative,
        ReplyTemplate::Positive,
    ];

    /// Registered template name
    pub fn name(&self) -> &'static str {
        match self {
            ReplyTemplate::Suicidal => "suicidal",
            ReplyTemplate::Distress => "distress",
            ReplyTemplate::Anxiety => "anxiety",
            ReplyTemplate::Negative => "negative",
            ReplyTemplate::Positive => "positive",
        }
    }

    /// Template source
    pub fn source(&self) -> &'static str {
        match self {
            ReplyTemplate::Suicidal => SUICIDAL_TEMPLATE,
            ReplyTemplate::Distress => DISTRESS_TEMPLATE,
            ReplyTemplate::Anxiety => ANXIETY_TEMPLATE,
            ReplyTemplate::Negative => NEGATIVE_TEMPLATE,
            ReplyTemplate::Positive => POSITIVE_TEMPLATE,
        }
    }
}

/// Template engine wrapper
///
/// HTML escaping is off: replies are plain text and catalog entries contain
/// apostrophes that must come through untouched.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Engine with every [`ReplyTemplate`] registered
    pub fn new() -> Result<Self> {
        let mut engine = Self::empty();
        for template in ReplyTemplate::ALL {
            engine.register_template(template.name(), template.source())?;
        }
        Ok(engine)
    }

    fn empty() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars.register_escape_fn(handlebars::no_escape);
        Self { handlebars }
    }

    /// Register a template
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| PepError::template(e.to_string()))?;
        Ok(())
    }

    /// Render a registered template around a base reply
    pub fn render_reply(&self, template: ReplyTemplate, base: &str) -> Result<String> {
        self.handlebars
            .render(template.name(), &json!({ "base": base }))
            .map_err(|e| PepError::template(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_prefix() {
        let engine = TemplateEngine::new().unwrap();
        let out = engine
            .render_reply(ReplyTemplate::Positive, "Keep it up.")
            .unwrap();
        assert_eq!(out, "That's wonderful to hear! Keep it up.");
    }

    #[test]
    fn test_suicidal_text_is_exact() {
        let engine = TemplateEngine::new().unwrap();
        let out = engine.render_reply(ReplyTemplate::Suicidal, "BASE").unwrap();
        assert_eq!(
            out,
            "I'm very concerned about what you're saying. BASE Please know that you're not alone \
             and there are people who care about you. If you're having thoughts of self-harm, \
             please call a crisis hotline immediately."
        );
    }

    #[test]
    fn test_no_html_escaping() {
        let engine = TemplateEngine::new().unwrap();
        let out = engine
            .render_reply(ReplyTemplate::Negative, "It's <okay> & \"normal\"")
            .unwrap();
        assert_eq!(out, "I hear that you're feeling down. It's <okay> & \"normal\"");
    }

    #[test]
    fn test_invalid_template() {
        let mut engine = TemplateEngine::empty();
        let err = engine.register_template("broken", "{{#if}}").unwrap_err();
        assert!(matches!(err, PepError::Template(_)));
    }
}
