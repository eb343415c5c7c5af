use itertools::Itertools;

use crate::{
    backends::ebnf::decompose::decompose,
    error::RenderError,
    grammar::Term,
};

/// How tightly a piece of EBNF text binds. Text that is used in a position
/// requiring a tighter binding has to be put into parentheses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
    /// `a, b`
    Sequence,
    /// `n * a`
    Factor,
    /// `"a"`, `a`, `(a)`, `[a]` and `{a}`
    Primary,
}

/// Rendered EBNF text of a single term.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Operand {
    text: String,
    precedence: Precedence,
}

impl Operand {
    pub(crate) fn new<S: Into<String>>(text: S, precedence: Precedence) -> Self {
        Self {
            text: text.into(),
            precedence,
        }
    }

    pub(crate) fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub(crate) fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// The text of this operand, grouped if it binds looser than `precedence`.
    pub(crate) fn at(&self, precedence: Precedence) -> String {
        if self.precedence < precedence {
            format!("({})", self.text)
        } else {
            self.text.clone()
        }
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }
}

fn quote(text: &str) -> Result<String, RenderError> {
    if !text.contains('"') {
        Ok(format!("\"{}\"", text))
    } else if !text.contains('\'') {
        Ok(format!("'{}'", text))
    } else {
        Err(RenderError::InvalidTerm(format!("literal {:?} contains both kinds of quotes", text)))
    }
}

fn print_sequence(items: &[Term]) -> Result<Operand, RenderError> {
    match items {
        [] => Err(RenderError::InvalidTerm("empty sequence".to_string())),
        [item] => print(item),
        _ => {
            // Nested sequences have the same precedence and are flattened into this one
            let items = items.iter().map(print).collect::<Result<Vec<_>, _>>()?;
            let text = items.iter().map(|item| item.at(Precedence::Sequence)).join(", ");
            Ok(Operand::new(text, Precedence::Sequence))
        },
    }
}

fn print_alternation(branches: &[Term]) -> Result<Operand, RenderError> {
    match branches {
        [] => Err(RenderError::InvalidTerm("choice without alternatives".to_string())),
        [branch] => print(branch),
        _ => {
            let branches = branches.iter().map(print).collect::<Result<Vec<_>, _>>()?;
            let text = branches.iter().map(Operand::text).join(" | ");
            Ok(Operand::new(format!("({})", text), Precedence::Primary))
        },
    }
}

/// Render `term` into inline EBNF.
pub(crate) fn print(term: &Term) -> Result<Operand, RenderError> {
    match term {
        Term::Literal(term) => Ok(Operand::new(quote(term.content())?, Precedence::Primary)),
        Term::NonTerminal(nonterm) => Ok(Operand::new(nonterm.id(), Precedence::Primary)),
        Term::Sequence(items) => print_sequence(items),
        Term::Alternation(branches) => print_alternation(branches),
        Term::Repetition(repetition) => {
            let body = print(repetition.body())?;
            let mut clauses = decompose(repetition.min(), repetition.max(), &body)?;

            if clauses.len() == 1 {
                Ok(clauses.remove(0))
            } else {
                let text = clauses.iter().map(Operand::text).join(", ");
                Ok(Operand::new(text, Precedence::Sequence))
            }
        },
    }
}

/// Shorthand for the text of [`print`].
pub(crate) fn render(term: &Term) -> Result<String, RenderError> {
    print(term).map(Operand::into_text)
}
