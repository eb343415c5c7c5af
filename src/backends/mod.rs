//! Backends that write a loaded [`Grammar`] in some output format.
//!
//! Every backend implements [`Renderer`] and is listed in a fixed registry, so
//! a renderer can be picked by name at runtime:
//! ```ignore
//! let grammar = Grammar::builder()
//!     .json_grammar("my-grammar.json").unwrap()
//!     .build().unwrap();
//!
//! let renderer = backends::renderer("ebnf").unwrap();
//! renderer.render(&grammar, &mut std::io::stdout()).unwrap();
//! ```

use std::io::Write;

use crate::{
    error::RenderError,
    grammar::Grammar,
};

pub mod ebnf;
pub mod json;

/// A backend that writes a grammar into an output stream.
///
/// Renderers are stateless and only ever read the grammar, so the same
/// renderer may be used from multiple threads at once.
pub trait Renderer: Send + Sync {
    /// The name this renderer is selected by.
    fn name(&self) -> &'static str;

    /// Other names this renderer can be selected by.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// A one-line description for usage messages.
    fn description(&self) -> &'static str;

    /// Write `grammar` into `sink`.
    ///
    /// Errors of the sink are passed on unchanged as [`RenderError::Io`].
    fn render(&self, grammar: &Grammar, sink: &mut dyn Write) -> Result<(), RenderError>;

    /// Render `grammar` into a string.
    fn render_to_string(&self, grammar: &Grammar) -> Result<String, RenderError> {
        let mut buf = Vec::new();
        self.render(grammar, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

static RENDERERS: &[&dyn Renderer] = &[
    &ebnf::EbnfRenderer,
    &json::JsonRenderer,
];

/// All built-in renderers.
pub fn renderers() -> &'static [&'static dyn Renderer] {
    RENDERERS
}

/// Find the built-in renderer called `name`.
pub fn renderer(name: &str) -> Option<&'static dyn Renderer> {
    RENDERERS
        .iter()
        .copied()
        .find(|renderer| renderer.name() == name || renderer.aliases().contains(&name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(renderer("ebnf").map(|r| r.name()), Some("ebnf"));
        assert_eq!(renderer("ISO14977").map(|r| r.name()), Some("ebnf"));
        assert_eq!(renderer("json").map(|r| r.name()), Some("json"));
        assert!(renderer("railroad").is_none());
        assert!(renderer("").is_none());
    }

    #[test]
    fn test_unique_names() {
        let mut names: Vec<&str> = renderers()
            .iter()
            .flat_map(|r| std::iter::once(r.name()).chain(r.aliases().iter().copied()))
            .collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }
}
