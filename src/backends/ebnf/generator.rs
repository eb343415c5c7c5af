use std::io::Write;

use log::{debug, trace};

use crate::{
    backends::{
        Renderer,
        ebnf::{
            formatter::EbnfFormatter,
            printer,
        },
    },
    error::RenderError,
    grammar::{Grammar, Production, Term},
};

/// The top-level alternatives of a production.
fn branches(body: &Term) -> &[Term] {
    match body {
        Term::Alternation(branches) => branches,
        _ => std::slice::from_ref(body),
    }
}

/// Sequences and choices with a single child print as that child.
fn single_child(term: &Term) -> &Term {
    match term {
        Term::Sequence(terms) | Term::Alternation(terms) if terms.len() == 1 => single_child(&terms[0]),
        _ => term,
    }
}

/// Stacked alternatives need parentheses around full sequences to tell
/// them apart from a single sequence containing a choice.
fn render_branch(branch: &Term) -> Result<String, RenderError> {
    let text = printer::render(branch)?;

    match single_child(branch) {
        Term::Sequence(items) if items.len() > 1 => Ok(format!("({})", text)),
        _ => Ok(text),
    }
}

fn emit_production<T: Write>(production: &Production, fmt: &mut EbnfFormatter<T>) -> Result<(), RenderError> {
    let prefix = format!("{} = ", production.name());
    // `|` and `;` of continuation lines go right below the `=`
    let indent = prefix.chars().count() - 2;

    match branches(production.body()) {
        [] => {
            return Err(RenderError::InvalidTerm(format!("production '{}' has no alternatives", production.name())));
        },
        [branch] => {
            fmt.write(format!("{}{} ;", prefix, printer::render(branch)?))?;
        },
        [first, rest @ ..] => {
            fmt.write(format!("{}{}", prefix, render_branch(first)?))?;

            for branch in rest {
                fmt.write_indented(indent, format!("| {}", render_branch(branch)?))?;
            }

            fmt.write_indented(indent, ";")?;
        },
    }

    Ok(())
}

/// This is the main struct of the [`ebnf`](crate::backends::ebnf) backend. It writes
/// every production of a grammar in declaration order, one line per alternative.
#[derive(Copy, Clone, Debug, Default)]
pub struct EbnfRenderer;

impl Renderer for EbnfRenderer {
    fn name(&self) -> &'static str {
        "ebnf"
    }

    fn aliases(&self) -> &'static [&'static str] {
        &["ISO14977"]
    }

    fn description(&self) -> &'static str {
        "ISO/IEC 14977 Extended BNF"
    }

    fn render(&self, grammar: &Grammar, sink: &mut dyn Write) -> Result<(), RenderError> {
        let mut fmt = EbnfFormatter::new(sink);

        for production in grammar.productions() {
            trace!("Rendering production {}", production.name());
            emit_production(production, &mut fmt)?;
        }

        let lines = fmt.finish()?;
        debug!("Wrote {} productions in {} lines", grammar.len(), lines);

        Ok(())
    }
}
