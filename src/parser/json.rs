use std::path::Path;
use std::fs::File;
use std::io::BufReader;
use json_comments::{CommentSettings, StripComments};
use serde_json as json;

use crate::{
    grammar::{Production, Repetition, Term, NonTerminal},
    error::ParsingError,
};

pub(crate) fn parse_non_terminal(keyword: &str) -> Option<&str> {
    if keyword.len() > 2 && keyword.starts_with('<') && keyword.ends_with('>') {
        Some(&keyword[1..keyword.len() - 1])
    } else {
        None
    }
}

fn parse_terminal(keyword: &str) -> &str {
    if keyword.len() >= 2 && keyword.starts_with('\'') && keyword.ends_with('\'') {
        &keyword[1..keyword.len() - 1]
    } else {
        keyword
    }
}

fn parse_token(token: &str) -> Term {
    if let Some(nonterm) = parse_non_terminal(token) {
        Term::non_terminal(nonterm)
    } else {
        Term::literal(parse_terminal(token))
    }
}

fn parse_bound(key: &str, object: &json::Map<String, json::Value>, name: &str) -> Result<Option<usize>, String> {
    match object.get(name) {
        None | Some(json::Value::Null) => Ok(None),
        Some(value) => match value.as_u64().and_then(|bound| usize::try_from(bound).ok()) {
            Some(bound) => Ok(Some(bound)),
            None => Err(format!("'{}' of a repetition in '{}' must be a non-negative integer that fits into usize", name, key)),
        },
    }
}

fn parse_operator(key: &str, object: &json::Map<String, json::Value>) -> Result<Term, String> {
    if let Some(branches) = object.get("choice") {
        let branches = match branches {
            json::Value::Array(branches) => branches,
            _ => return Err(format!("Choice in '{}' must be an array", key)),
        };

        if branches.is_empty() {
            return Err(format!("Invalid production rule '{}': Choice without alternatives", key));
        }

        let branches = branches.iter()
            .map(|branch| parse_term(key, branch))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Term::Alternation(branches))
    } else if let Some(body) = object.get("optional") {
        Ok(Term::optional(parse_term(key, body)?))
    } else if let Some(body) = object.get("repeat") {
        let min = parse_bound(key, object, "min")?.unwrap_or(0);
        let max = parse_bound(key, object, "max")?;

        if let Some(max) = max {
            if max < min {
                return Err(format!("Repetition in '{}' has a maximum below its minimum", key));
            }
        }

        Ok(Term::Repetition(Repetition::new(min, max, parse_term(key, body)?)))
    } else {
        Err(format!("Object on the right-hand-side of '{}' must contain 'choice', 'optional' or 'repeat'", key))
    }
}

fn parse_term(key: &str, value: &json::Value) -> Result<Term, String> {
    match value {
        json::Value::String(token) => Ok(parse_token(token)),
        json::Value::Array(items) => {
            if items.is_empty() {
                return Err(format!("Invalid production rule '{}': Empty sequences are not allowed", key));
            }

            let mut items = items.iter()
                .map(|item| parse_term(key, item))
                .collect::<Result<Vec<_>, _>>()?;

            if items.len() == 1 {
                Ok(items.remove(0))
            } else {
                Ok(Term::Sequence(items))
            }
        },
        json::Value::Object(object) => parse_operator(key, object),
        _ => Err(format!("Right-hand-side of '{}' must only contain strings, arrays and objects", key)),
    }
}

fn parse_grammar(value: json::Value) -> Result<Vec<Production>, String> {
    let mut productions = Vec::new();

    let object = match value {
        json::Value::Object(object) => object,
        _ => return Err("Grammar must be specified as an object".to_string()),
    };

    for (key, value) in &object {
        // LHS must be a non-terminal
        let lhs = match parse_non_terminal(key) {
            Some(lhs) => lhs,
            None => return Err(format!("'{}' is not a valid non-terminal", key)),
        };

        // RHS must be an array of alternatives
        let rhs = match value {
            json::Value::Array(rhs) => rhs,
            _ => return Err(format!("Right-hand-side of '{}' must be an array", key)),
        };

        if rhs.is_empty() {
            return Err(format!("Invalid production rule '{}': Must not be empty", key));
        }

        let mut alternatives = rhs.iter()
            .map(|alternative| parse_term(key, alternative))
            .collect::<Result<Vec<_>, _>>()?;

        let body = if alternatives.len() == 1 {
            alternatives.remove(0)
        } else {
            Term::Alternation(alternatives)
        };

        productions.push(Production::new(NonTerminal::new(lhs), body));
    }

    Ok(productions)
}

pub(crate) fn parse_json(path: &Path) -> Result<Vec<Production>, ParsingError> {
    let file = File::open(path).map_err(|e| ParsingError::new(path, format!("Could not open file: {}", e)))?;
    let reader = BufReader::new(file);
    let reader = StripComments::with_settings(CommentSettings::c_style(), reader);

    let value: json::Value = match json::from_reader(reader) {
        Ok(value) => value,
        Err(e) => {
            return Err(ParsingError::new(
                path,
                format!("Invalid JSON syntax: {}", e)
            ));
        },
    };

    parse_grammar(value).map_err(|e| ParsingError::new(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tokens() {
        assert_eq!(parse_token("<expr>"), Term::non_terminal("expr"));
        assert_eq!(parse_token("'<expr>'"), Term::literal("<expr>"));
        assert_eq!(parse_token("+"), Term::literal("+"));
        assert_eq!(parse_token("<>"), Term::literal("<>"));
    }

    #[test]
    fn test_peacock_style() {
        let productions = parse_grammar(json!({
            "<ENTRYPOINT>": [
                ["<number>", "'+'", "<number>"],
                ["<number>"]
            ],
            "<number>": [["1"], ["2"]]
        })).unwrap();

        assert_eq!(productions.len(), 2);
        assert_eq!(productions[0].name(), "ENTRYPOINT");
        assert_eq!(productions[0].body(), &Term::one_of([
            Term::sequence([Term::non_terminal("number"), Term::literal("+"), Term::non_terminal("number")]),
            Term::non_terminal("number"),
        ]));
        assert_eq!(productions[1].body(), &Term::one_of([Term::literal("1"), Term::literal("2")]));
    }

    #[test]
    fn test_operators() {
        let productions = parse_grammar(json!({
            "<list>": [[
                "'['",
                {"optional": ["<item>", {"repeat": [",", "<item>"]}]},
                "']'"
            ]],
            "<item>": [{"repeat": {"choice": ["a", "b"]}, "min": 2, "max": 4}]
        })).unwrap();

        assert_eq!(productions[0].body(), &Term::sequence([
            Term::literal("["),
            Term::optional(Term::sequence([
                Term::non_terminal("item"),
                Term::zero_or_more(Term::sequence([Term::literal(","), Term::non_terminal("item")])),
            ])),
            Term::literal("]"),
        ]));
        assert_eq!(
            productions[1].body(),
            &Term::repeat_between(2, 4, Term::one_of([Term::literal("a"), Term::literal("b")]))
        );
    }

    #[test]
    fn test_declaration_order() {
        let productions = parse_grammar(json!({
            "<zeta>": ["z"],
            "<alpha>": ["a"],
            "<mu>": ["m"]
        })).unwrap();
        let names: Vec<&str> = productions.iter().map(Production::name).collect();
        assert_eq!(names, ["zeta", "alpha", "mu"]);
    }

    #[test]
    fn test_invalid() {
        assert!(parse_grammar(json!([])).is_err());
        assert!(parse_grammar(json!({"expr": ["a"]})).is_err());
        assert!(parse_grammar(json!({"<expr>": []})).is_err());
        assert!(parse_grammar(json!({"<expr>": [[]]})).is_err());
        assert!(parse_grammar(json!({"<expr>": [42]})).is_err());
        assert!(parse_grammar(json!({"<expr>": [{"choice": []}]})).is_err());
        assert!(parse_grammar(json!({"<expr>": [{"many": "a"}]})).is_err());
        assert!(parse_grammar(json!({"<expr>": [{"repeat": "a", "min": -1}]})).is_err());
        assert!(parse_grammar(json!({"<expr>": [{"repeat": "a", "min": 3, "max": 1}]})).is_err());
    }

    #[test]
    fn test_bounds() {
        let object = json!({"min": 3, "max": null, "neg": -1, "frac": 1.5});
        let object = object.as_object().unwrap();
        assert_eq!(parse_bound("r", object, "min"), Ok(Some(3)));
        assert_eq!(parse_bound("r", object, "max"), Ok(None));
        assert_eq!(parse_bound("r", object, "missing"), Ok(None));
        assert!(parse_bound("r", object, "neg").is_err());
        assert!(parse_bound("r", object, "frac").is_err());
    }

    #[test]
    fn test_duplicate_keys() {
        let value: json::Value = serde_json::from_str(r#"{
            "<expr>": ["a"],
            "<other>": ["b"],
            "<expr>": ["c"]
        }"#).unwrap();
        let productions = parse_grammar(value).unwrap();

        assert_eq!(productions.len(), 2);
        assert_eq!(productions[0].name(), "expr");
        assert_eq!(productions[0].body(), &Term::literal("c"));
    }

    #[test]
    fn test_missing_file() {
        let err = parse_json(Path::new("test-data/grammars/does-not-exist.json")).unwrap_err();
        assert_eq!(err.path(), Path::new("test-data/grammars/does-not-exist.json"));
    }

    #[test]
    fn test_comments() {
        let productions = parse_json(Path::new("test-data/grammars/expressions.json")).unwrap();
        assert_eq!(productions[0].name(), "Expression");
    }
}
