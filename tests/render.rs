use std::fs;

use grammar_render::{
    backends::{self, ebnf::EbnfRenderer, Renderer},
    error::GrammarError,
    grammar::Grammar,
};

fn load(paths: &[&str]) -> Grammar {
    let mut builder = Grammar::builder();

    for path in paths {
        builder = builder.json_grammar(path).unwrap();
    }

    builder.build().unwrap()
}

#[test]
fn test_expressions() {
    let grammar = load(&["test-data/grammars/expressions.json"]);
    let expected = fs::read_to_string("test-data/grammars/expressions.ebnf").unwrap();
    assert_eq!(EbnfRenderer.render_to_string(&grammar).unwrap(), expected);
}

#[test]
fn test_merged_grammars() {
    let grammar = load(&[
        "test-data/grammars/expressions.json",
        "test-data/grammars/statements.json",
    ]);
    let expected = fs::read_to_string("test-data/grammars/expressions.ebnf").unwrap()
        + &fs::read_to_string("test-data/grammars/statements.ebnf").unwrap();

    let renderer = backends::renderer("ebnf").unwrap();
    assert_eq!(renderer.render_to_string(&grammar).unwrap(), expected);
}

#[test]
fn test_unresolved_dependency() {
    let err = Grammar::builder()
        .json_grammar("test-data/grammars/statements.json").unwrap()
        .build()
        .unwrap_err();
    assert_eq!(err, GrammarError::MissingProduction("Expression".to_string()));
}

#[test]
fn test_every_renderer() {
    let grammar = load(&["test-data/grammars/expressions.json"]);

    for renderer in backends::renderers() {
        let first = renderer.render_to_string(&grammar).unwrap();
        let second = renderer.render_to_string(&grammar).unwrap();
        assert!(!first.is_empty(), "{}", renderer.name());
        assert_eq!(first, second, "{}", renderer.name());
    }
}

#[test]
fn test_concurrent_renders() {
    let grammar = load(&["test-data/grammars/expressions.json"]);
    let expected = EbnfRenderer.render_to_string(&grammar).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| EbnfRenderer.render_to_string(&grammar).unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
