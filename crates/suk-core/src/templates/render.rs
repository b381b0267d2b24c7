//! Placeholder substitution
//!
//! Rendering replaces a closed set of `{{token}}` placeholders in a single left
//! to right pass. Substituted values are never re-scanned, and anything that is
//! not a recognised placeholder is copied through untouched.

use crate::config::ProjectConfig;

/// Recognised placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{componentName}}` - component id, verbatim
    ComponentName,
    /// `{{ComponentName}}` - component id with its first character upper-cased
    CapitalizedName,
    /// `{{typescript}}` - `"true"`/`"false"` from `tsx`
    Typescript,
    /// `{{cssVariables}}` - `"true"`/`"false"` from `tailwind.cssVariables`
    CssVariables,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::ComponentName,
        Placeholder::CapitalizedName,
        Placeholder::Typescript,
        Placeholder::CssVariables,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Placeholder::ComponentName => "{{componentName}}",
            Placeholder::CapitalizedName => "{{ComponentName}}",
            Placeholder::Typescript => "{{typescript}}",
            Placeholder::CssVariables => "{{cssVariables}}",
        }
    }

    fn value(&self, ctx: &RenderContext<'_>) -> String {
        match self {
            Placeholder::ComponentName => ctx.component_name.to_string(),
            Placeholder::CapitalizedName => capitalize(ctx.component_name),
            Placeholder::Typescript => ctx.typescript.to_string(),
            Placeholder::CssVariables => ctx.css_variables.to_string(),
        }
    }
}

/// Values available to placeholders
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub component_name: &'a str,
    pub typescript: bool,
    pub css_variables: bool,
}

impl<'a> RenderContext<'a> {
    pub fn new(component_name: &'a str, config: &ProjectConfig) -> Self {
        Self {
            component_name,
            typescript: config.tsx,
            css_variables: config.tailwind.css_variables,
        }
    }
}

/// Render raw template text with the given context
pub fn render(raw: &str, ctx: &RenderContext<'_>) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = rest.find("{{") {
        out.push_str(&rest[..idx]);
        let candidate = &rest[idx..];

        match Placeholder::ALL
            .iter()
            .find(|p| candidate.starts_with(p.token()))
        {
            Some(placeholder) => {
                out.push_str(&placeholder.value(ctx));
                rest = &candidate[placeholder.token().len()..];
            }
            None => {
                // Advance one brace so "{{{componentName}}" still matches at the next offset
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str) -> RenderContext<'_> {
        RenderContext {
            component_name: name,
            typescript: true,
            css_variables: false,
        }
    }

    #[test]
    fn test_replaces_all_placeholders() {
        let raw = "{{componentName}} {{ComponentName}} ts={{typescript}} css={{cssVariables}}";
        assert_eq!(render(raw, &ctx("button")), "button Button ts=true css=false");
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let raw = "{{ComponentName}}Props extends {{ComponentName}}Base";
        assert_eq!(render(raw, &ctx("card")), "CardProps extends CardBase");
    }

    #[test]
    fn test_unknown_tokens_untouched() {
        let raw = "{{unknown}} {@render children()} {{ componentName }}";
        assert_eq!(render(raw, &ctx("x")), raw);
    }

    #[test]
    fn test_substitution_is_not_recursive() {
        let raw = "<{{componentName}}>";
        assert_eq!(
            render(raw, &ctx("{{ComponentName}}")),
            "<{{ComponentName}}>"
        );
    }

    #[test]
    fn test_extra_leading_brace() {
        assert_eq!(render("{{{componentName}}}", &ctx("grid")), "{grid}");
    }

    #[test]
    fn test_trailing_unclosed_braces() {
        assert_eq!(render("a {{componentName", &ctx("grid")), "a {{componentName");
        assert_eq!(render("{{", &ctx("grid")), "{{");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("button"), "Button");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("ärger"), "Ärger");
        assert_eq!(capitalize("data-table"), "Data-table");
    }

    #[test]
    fn test_context_from_project_config() {
        let mut config = ProjectConfig::default();
        config.tsx = false;
        config.tailwind.css_variables = true;

        let ctx = RenderContext::new("flex", &config);
        assert_eq!(render("{{typescript}}/{{cssVariables}}", &ctx), "false/true");
    }
}
