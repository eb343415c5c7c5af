//! This library contains everything you need to document a grammar.
//!
//! It consists of
//! - __frontend__: Load grammars from JSON files or build them in code.
//! - __backend__: Use the loaded grammar to produce documentation.
//!   Current backends are
//!   - `ebnf`: Write the grammar as ISO/IEC 14977 Extended BNF
//!   - `json`: Write the grammar back into the JSON grammar format
//!
//! ## Getting Started
//! The first step always is to load grammars. To do this use the [`Grammar::builder()`](grammar::Grammar::builder) method
//! that will give you access to a [`GrammarBuilder`](grammar::GrammarBuilder) like this:
//! ```ignore
//! let grammar = Grammar::builder()
//!     // Load a grammar from disk
//!     .json_grammar("my-grammar.json").unwrap()
//!     // Or define productions by hand
//!     .production("opt", [Term::optional(Term::literal("foo"))])
//!     .build().unwrap();
//! ```
//! Then, you can plug the grammar into one of the provided backends:
//! ```ignore
//! backends::ebnf::EbnfRenderer.render(&grammar, &mut std::io::stdout()).unwrap();
//! // or pick one by name
//! backends::renderer("json").unwrap().render(&grammar, &mut std::io::stdout()).unwrap();
//! ```
//! And that's it.
//!
//! ## Grammar files
//! A grammar file is a JSON object (C-style comments are allowed) that maps every
//! production name, enclosed in `<>`, to a list of alternatives. An alternative is a term:
//! - `"<name>"`: a reference to another production
//! - `"'text'"` or `"text"`: a literal
//! - `[term, ...]`: a sequence
//! - `{"choice": [term, ...]}`: a choice
//! - `{"optional": term}`: zero or one occurrence
//! - `{"repeat": term, "min": 1, "max": null}`: a repetition, `max` may be omitted or `null` for no upper bound

#![deny(missing_docs)]

pub(crate) mod parser;

pub mod error;
pub mod grammar;
pub mod backends;
