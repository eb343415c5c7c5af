//! EBNF knows exactly three ways to repeat something: `n * X` for exactly `n`
//! occurrences, `[X]` for zero or one and `{X}` for any number of occurrences.
//! Arbitrary bounds are expressed as a mandatory prefix of `min` occurrences
//! followed by either `{X}` if the repetition is unbounded or by `n * [X]` for
//! the remaining `max - min` optional occurrences.

use crate::{
    backends::ebnf::printer::{Operand, Precedence},
    error::RenderError,
};

/// `count * body`, or just `body` for a single occurrence.
fn times(count: usize, body: &Operand) -> Operand {
    if count == 1 {
        body.clone()
    } else {
        Operand::new(format!("{} * {}", count, body.at(Precedence::Primary)), Precedence::Factor)
    }
}

fn optional(count: usize, body: &Operand) -> Operand {
    let optional = Operand::new(format!("[{}]", body.text()), Precedence::Primary);
    times(count, &optional)
}

fn repeated(body: &Operand) -> Operand {
    Operand::new(format!("{{{}}}", body.text()), Precedence::Primary)
}

/// Split a repetition of `body` between `min` and `max` times into clauses
/// that, separated by `", "`, match exactly the same number of occurrences.
/// A `max` of `None` means unbounded.
pub(crate) fn decompose(min: usize, max: Option<usize>, body: &Operand) -> Result<Vec<Operand>, RenderError> {
    let clauses = match (min, max) {
        (min, Some(max)) if max < min => {
            return Err(RenderError::InvalidTerm(format!("repetition between {} and {} times", min, max)));
        },
        (0, Some(0)) => {
            return Err(RenderError::InvalidTerm("repetition with at most zero occurrences".to_string()));
        },
        (0, None) => vec![repeated(body)],
        (min, None) => vec![times(min, body), repeated(body)],
        (0, Some(max)) => vec![optional(max, body)],
        (min, Some(max)) if min == max => vec![times(min, body)],
        (min, Some(max)) => vec![times(min, body), optional(max - min, body)],
    };

    Ok(clauses)
}
