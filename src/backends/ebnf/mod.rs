//! Write a grammar as ISO/IEC 14977 Extended BNF.
//!
//! Use it like so:
//! ```ignore
//! // First, load a grammar from disk
//! let grammar = Grammar::builder()
//!     .json_grammar("my-grammar.json").unwrap()
//!     .build().unwrap();
//!
//! // Then, write one production per block into stdout
//! EbnfRenderer.render(&grammar, &mut std::io::stdout()).unwrap();
//! ```
//!
//! A production with a single alternative is written on one line:
//! ```text
//! rec = "A", [rec], "B" ;
//! ```
//! Multiple alternatives are stacked, with `|` and `;` aligned below `=`:
//! ```text
//! alts = ("A", "B")
//!      | ("C", "D")
//!      ;
//! ```

mod decompose;
mod formatter;
mod generator;
mod printer;

pub use generator::EbnfRenderer;
