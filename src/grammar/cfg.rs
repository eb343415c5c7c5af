use crate::grammar::GrammarBuilder;

/// The name of a production, used both on the left-hand side of a production
/// and as a reference to it from within other terms.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct NonTerminal(String);

impl NonTerminal {
    /// Create a new non-terminal with the name `s`.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The name of this non-terminal.
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// An exact terminal string.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Terminal(String);

impl Terminal {
    /// Create a new terminal that matches `s` exactly.
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    /// The text of this terminal.
    pub fn content(&self) -> &str {
        &self.0
    }
}

/// Bounded or unbounded repetition of a term.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Repetition {
    min: usize,
    max: Option<usize>,
    body: Box<Term>,
}

impl Repetition {
    /// Repeat `body` at least `min` times and at most `max` times.
    /// A `max` of `None` means there is no upper bound.
    pub fn new(min: usize, max: Option<usize>, body: Term) -> Self {
        Self {
            min,
            max,
            body: Box::new(body),
        }
    }

    /// Minimum number of occurrences.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum number of occurrences or `None` if unbounded.
    pub fn max(&self) -> Option<usize> {
        self.max
    }

    /// The repeated term.
    pub fn body(&self) -> &Term {
        &self.body
    }
}

/// A node in the right-hand side of a production.
///
/// Non-terminals are only names. They are never resolved into the production
/// they refer to, which is why recursive productions need no special care.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub enum Term {
    /// An exact terminal string
    Literal(Terminal),
    /// A reference to another production
    NonTerminal(NonTerminal),
    /// Concatenation of terms
    Sequence(Vec<Term>),
    /// A choice between terms
    Alternation(Vec<Term>),
    /// Repeated occurrence of a term
    Repetition(Repetition),
}

impl Term {
    /// A terminal that matches `text` exactly.
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Term::Literal(Terminal::new(text))
    }

    /// A reference to the production called `name`.
    pub fn non_terminal<S: Into<String>>(name: S) -> Self {
        Term::NonTerminal(NonTerminal::new(name))
    }

    /// The terms in `items`, one after another.
    pub fn sequence<I: IntoIterator<Item = Term>>(items: I) -> Self {
        Term::Sequence(items.into_iter().collect())
    }

    /// Exactly one of the terms in `branches`.
    pub fn one_of<I: IntoIterator<Item = Term>>(branches: I) -> Self {
        Term::Alternation(branches.into_iter().collect())
    }

    /// `body` exactly `times` times.
    pub fn repeat(times: usize, body: Term) -> Self {
        Term::Repetition(Repetition::new(times, Some(times), body))
    }

    /// `body` between `min` and `max` times.
    pub fn repeat_between(min: usize, max: usize, body: Term) -> Self {
        Term::Repetition(Repetition::new(min, Some(max), body))
    }

    /// `body` at least `min` times.
    pub fn at_least(min: usize, body: Term) -> Self {
        Term::Repetition(Repetition::new(min, None, body))
    }

    /// `body` zero times or once.
    pub fn optional(body: Term) -> Self {
        Term::Repetition(Repetition::new(0, Some(1), body))
    }

    /// `body` any number of times.
    pub fn zero_or_more(body: Term) -> Self {
        Self::at_least(0, body)
    }

    /// `body` at least once.
    pub fn one_or_more(body: Term) -> Self {
        Self::at_least(1, body)
    }
}

/// A named grammar rule.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Production {
    lhs: NonTerminal,
    body: Term,
}

impl Production {
    /// Create a production that maps `lhs` to `body`.
    pub fn new(lhs: NonTerminal, body: Term) -> Self {
        Self {
            lhs,
            body,
        }
    }

    /// The non-terminal this production defines.
    pub fn lhs(&self) -> &NonTerminal {
        &self.lhs
    }

    /// Shorthand for `self.lhs().id()`.
    pub fn name(&self) -> &str {
        self.lhs.id()
    }

    /// The right-hand side of this production.
    pub fn body(&self) -> &Term {
        &self.body
    }
}

/// A validated, read-only set of productions in declaration order.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grammar {
    productions: Vec<Production>,
}

impl Grammar {
    /// Start loading a grammar. See [`GrammarBuilder`].
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    pub(crate) fn new(productions: Vec<Production>) -> Self {
        Self {
            productions,
        }
    }

    /// All productions in the order they were declared.
    pub fn productions(&self) -> &[Production] {
        &self.productions
    }

    /// Look up a production by name.
    pub fn production(&self, name: &str) -> Option<&Production> {
        self.productions.iter().find(|production| production.name() == name)
    }

    /// Number of productions.
    pub fn len(&self) -> usize {
        self.productions.len()
    }

    /// Whether this grammar has no productions at all.
    pub fn is_empty(&self) -> bool {
        self.productions.is_empty()
    }
}
