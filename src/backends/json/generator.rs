use serde::ser::Serialize;
use serde_json::{
    json,
    ser::PrettyFormatter,
    Map,
    Serializer,
    Value,
};
use std::io::Write;

use log::debug;

use crate::{
    backends::Renderer,
    error::RenderError,
    grammar::{Grammar, Term},
};

fn enclosed_in(s: &str, start: char, end: char) -> bool {
    s.len() >= 2 && s.starts_with(start) && s.ends_with(end)
}

fn terminal_string(content: &str) -> String {
    if enclosed_in(content, '<', '>') || enclosed_in(content, '\'', '\'') {
        return format!("'{}'", content);
    }

    content.to_string()
}

fn term_value(term: &Term) -> Value {
    match term {
        Term::Literal(term) => Value::String(terminal_string(term.content())),
        Term::NonTerminal(nonterm) => Value::String(format!("<{}>", nonterm.id())),
        Term::Sequence(items) => Value::Array(items.iter().map(term_value).collect()),
        Term::Alternation(branches) => json!({
            "choice": branches.iter().map(term_value).collect::<Vec<_>>(),
        }),
        Term::Repetition(repetition) => match (repetition.min(), repetition.max()) {
            (0, Some(1)) => json!({
                "optional": term_value(repetition.body()),
            }),
            (min, max) => json!({
                "repeat": term_value(repetition.body()),
                "min": min,
                "max": max,
            }),
        },
    }
}

fn alternatives_value(body: &Term) -> Value {
    match body {
        Term::Alternation(branches) => Value::Array(branches.iter().map(term_value).collect()),
        _ => Value::Array(vec![term_value(body)]),
    }
}

/// This is the main struct of the [`json`](crate::backends::json) backend. It writes
/// the productions of a grammar back into a JSON grammar file.
#[derive(Copy, Clone, Debug, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn name(&self) -> &'static str {
        "json"
    }

    fn description(&self) -> &'static str {
        "JSON grammar definition"
    }

    fn render(&self, grammar: &Grammar, sink: &mut dyn Write) -> Result<(), RenderError> {
        let mut object = Map::new();

        for production in grammar.productions() {
            object.insert(format!("<{}>", production.name()), alternatives_value(production.body()));
        }

        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut *sink, formatter);
        Value::Object(object).serialize(&mut ser)?;
        writeln!(sink)?;
        sink.flush()?;

        debug!("Wrote {} productions as JSON", grammar.len());

        Ok(())
    }
}
