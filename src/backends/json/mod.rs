//! Write a grammar in the JSON format understood by
//! [`GrammarBuilder::json_grammar`](crate::grammar::GrammarBuilder::json_grammar).
//!
//! Use it like so:
//! ```ignore
//! // First, load multiple grammars from disk. This will merge all the productions.
//! let grammar = Grammar::builder()
//!     .json_grammar("my-grammar.json").unwrap()
//!     .json_grammar("common-definitions.json").unwrap()
//!     .build().unwrap();
//!
//! // Then, write a single new grammar file.
//! let mut file = File::create("merged-grammar.json").unwrap();
//! JsonRenderer.render(&grammar, &mut file).unwrap();
//! ```

mod generator;

pub use generator::JsonRenderer;
