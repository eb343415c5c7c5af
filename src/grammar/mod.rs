//! This is the frontend that loads grammars.
//!
//! Use it like so:
//! ```ignore
//! // Load grammars from disk and add productions by hand
//! let grammar = Grammar::builder()
//!     .json_grammar("my-grammar.json").unwrap()
//!     .production("digits", [Term::one_or_more(Term::non_terminal("digit"))])
//!     .build().unwrap();
//! ```
//! You can inspect the grammar contents like this:
//! ```ignore
//! for production in grammar.productions() {
//!     println!("{} = {:?}", production.name(), production.body());
//! }
//! ```

mod builder;
mod cfg;

pub use builder::*;
pub use cfg::*;
