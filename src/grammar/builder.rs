use std::path::Path;
use std::collections::HashSet;

use log::debug;

use crate::{
    parser::json,
    grammar::{Grammar, Production, NonTerminal, Repetition, Term},
    error::{ParsingError, GrammarError},
};

/// The GrammarBuilder loads grammars from disk and returns a unified [`Grammar`].
///
/// Use it like so:
/// ```ignore
/// // Load multiple grammars by joining their productions:
/// let grammar = Grammar::builder()
///     .json_grammar("my-grammar.json").unwrap()
///     .json_grammar("common-definitions.json").unwrap()
///     .build().unwrap();
/// ```
pub struct GrammarBuilder {
    productions: Vec<Production>,
}

fn check_term(production: &str, term: &Term) -> Result<(), GrammarError> {
    match term {
        Term::Literal(_) | Term::NonTerminal(_) => Ok(()),
        Term::Sequence(items) => {
            if items.is_empty() {
                return Err(GrammarError::EmptySequence(production.to_string()));
            }

            items.iter().try_for_each(|item| check_term(production, item))
        },
        Term::Alternation(branches) => {
            if branches.is_empty() {
                return Err(GrammarError::EmptyAlternation(production.to_string()));
            }

            branches.iter().try_for_each(|branch| check_term(production, branch))
        },
        Term::Repetition(repetition) => {
            if let Some(max) = repetition.max() {
                if max < repetition.min() {
                    return Err(GrammarError::InvalidRepetition {
                        production: production.to_string(),
                        min: repetition.min(),
                        max,
                    });
                }
            }

            check_term(production, repetition.body())
        },
    }
}

/// Sequences with a single item and choices with a single branch are
/// replaced by that item.
fn normalize(term: Term) -> Term {
    match term {
        Term::Sequence(mut items) if items.len() == 1 => normalize(items.remove(0)),
        Term::Alternation(mut branches) if branches.len() == 1 => normalize(branches.remove(0)),
        Term::Sequence(items) => Term::Sequence(items.into_iter().map(normalize).collect()),
        Term::Alternation(branches) => Term::Alternation(branches.into_iter().map(normalize).collect()),
        Term::Repetition(repetition) => Term::Repetition(Repetition::new(
            repetition.min(),
            repetition.max(),
            normalize(repetition.body().clone()),
        )),
        term => term,
    }
}

fn find_references<'a>(term: &'a Term, refs: &mut Vec<&'a str>) {
    match term {
        Term::Literal(_) => {},
        Term::NonTerminal(nonterm) => refs.push(nonterm.id()),
        Term::Sequence(terms) | Term::Alternation(terms) => {
            for term in terms {
                find_references(term, refs);
            }
        },
        Term::Repetition(repetition) => find_references(repetition.body(), refs),
    }
}

impl GrammarBuilder {
    pub(crate) fn new() -> Self {
        Self {
            productions: Vec::new(),
        }
    }

    fn check_names(&self) -> Option<String> {
        let mut names = HashSet::new();

        for production in &self.productions {
            if !names.insert(production.name()) {
                return Some(production.name().to_string());
            }
        }

        None
    }

    fn check_terms(&self) -> Result<(), GrammarError> {
        for production in &self.productions {
            check_term(production.name(), production.body())?;
        }

        Ok(())
    }

    fn check_non_terminals(&self) -> Option<String> {
        let defined: HashSet<&str> = self.productions.iter().map(Production::name).collect();

        for production in &self.productions {
            let mut refs = Vec::new();
            find_references(production.body(), &mut refs);

            if let Some(missing) = refs.into_iter().find(|name| !defined.contains(name)) {
                return Some(missing.to_string());
            }
        }

        None
    }
}

impl GrammarBuilder {
    /// Load a grammar from disk that is in JSON format. The format is explained
    /// in the documentation of the [`grammar`](crate::grammar) module.
    ///
    /// A production name that appears twice within the same file is only loaded
    /// once, with its last definition. Duplicates across files or
    /// [`production`](Self::production) calls are rejected by [`build`](Self::build).
    pub fn json_grammar<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ParsingError> {
        let mut new_productions = json::parse_json(path.as_ref())?;
        debug!("Loaded {} productions from {}", new_productions.len(), path.as_ref().display());
        self.productions.append(&mut new_productions);
        Ok(self)
    }

    /// Add a production called `name`. A single alternative becomes the body of the
    /// production, multiple alternatives become a choice.
    pub fn production<S, I>(mut self, name: S, alternatives: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = Term>,
    {
        let mut alternatives: Vec<Term> = alternatives.into_iter().collect();

        let body = if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Term::Alternation(alternatives)
        };

        self.productions.push(Production::new(NonTerminal::new(name), body));
        self
    }

    /// Create a [`Grammar`].
    ///
    /// Sequences with a single item and choices with a single branch are
    /// replaced by that item.
    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(name) = self.check_names() {
            return Err(GrammarError::DuplicateProduction(name));
        }

        self.check_terms()?;

        if let Some(nonterm) = self.check_non_terminals() {
            return Err(GrammarError::MissingProduction(nonterm));
        }

        let productions: Vec<Production> = self.productions
            .into_iter()
            .map(|production| Production::new(production.lhs().clone(), normalize(production.body().clone())))
            .collect();

        debug!("Built grammar with {} productions", productions.len());

        Ok(Grammar::new(productions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_refs() {
        let err = Grammar::builder()
            .json_grammar("test-data/grammars/invalid-refs.json").unwrap()
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::MissingProduction("digit".to_string()));
    }

    #[test]
    fn test_json_grammar() {
        let grammar = Grammar::builder()
            .json_grammar("test-data/grammars/expressions.json").unwrap()
            .build()
            .unwrap();
        assert_eq!(grammar.productions()[0].name(), "Expression");
        assert!(grammar.production("Digit").is_some());
    }

    #[test]
    fn test_duplicate_production() {
        let err = Grammar::builder()
            .production("a", [Term::literal("A")])
            .production("b", [Term::literal("B")])
            .production("a", [Term::literal("C")])
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::DuplicateProduction("a".to_string()));
    }

    #[test]
    fn test_empty_terms() {
        let err = Grammar::builder()
            .production("a", Vec::<Term>::new())
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::EmptyAlternation("a".to_string()));

        let err = Grammar::builder()
            .production("b", [Term::optional(Term::sequence(Vec::<Term>::new()))])
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::EmptySequence("b".to_string()));
    }

    #[test]
    fn test_inverted_repetition() {
        let err = Grammar::builder()
            .production("r", [Term::repeat_between(4, 2, Term::literal("x"))])
            .build()
            .unwrap_err();
        assert_eq!(err, GrammarError::InvalidRepetition {
            production: "r".to_string(),
            min: 4,
            max: 2,
        });
    }

    #[test]
    fn test_single_child_terms() {
        let grammar = Grammar::builder()
            .production("p", [
                Term::sequence([Term::literal("a")]),
                Term::one_of([Term::sequence([Term::sequence([Term::literal("b"), Term::literal("c")])])]),
                Term::optional(Term::one_of([Term::literal("d")])),
            ])
            .build()
            .unwrap();
        assert_eq!(grammar.productions()[0].body(), &Term::one_of([
            Term::literal("a"),
            Term::sequence([Term::literal("b"), Term::literal("c")]),
            Term::optional(Term::literal("d")),
        ]));
    }

    #[test]
    fn test_alternatives() {
        let grammar = Grammar::builder()
            .production("single", [Term::literal("A")])
            .production("multi", [Term::literal("A"), Term::literal("B")])
            .build()
            .unwrap();
        assert_eq!(grammar.productions()[0].body(), &Term::literal("A"));
        assert_eq!(
            grammar.productions()[1].body(),
            &Term::one_of([Term::literal("A"), Term::literal("B")])
        );
    }

    #[test]
    fn test_recursive_reference() {
        let grammar = Grammar::builder()
            .production("rec", [Term::sequence([
                Term::literal("A"),
                Term::optional(Term::non_terminal("rec")),
                Term::literal("B"),
            ])])
            .build()
            .unwrap();
        assert_eq!(grammar.len(), 1);
    }
}
