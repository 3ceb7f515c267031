// SPDX-License-Identifier: MIT

//! Scalar/sequence broadcasting for comparison predicates

use unicode_normalization::UnicodeNormalization;

use crate::variables::VariableValue;

/// How per-element results are reduced when an operand is a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    /// Every pair must hold (AND)
    #[default]
    Every,
    /// At least one pair must hold (OR)
    Any,
}

impl Reduction {
    fn fold<I, F>(self, items: I, f: F) -> bool
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> bool,
    {
        let mut items = items.into_iter();
        match self {
            Reduction::Every => items.all(f),
            Reduction::Any => items.any(f),
        }
    }
}

/// Apply `pred` to the operands, mapping over whichever side is a sequence.
///
/// The predicate sees scalars as `Some(&str)` and null as `None`. When both
/// sides are sequences every element of `input` is paired with every element
/// of `target`, reduced by `mode` at both levels.
pub fn compare<F>(pred: F, input: &VariableValue, target: &VariableValue, mode: Reduction) -> bool
where
    F: Fn(Option<&str>, Option<&str>) -> bool,
{
    match (input, target) {
        (VariableValue::Sequence(left), VariableValue::Sequence(right)) => mode.fold(left, |a| {
            mode.fold(right, |b| pred(Some(a.as_str()), Some(b.as_str())))
        }),
        (VariableValue::Sequence(left), scalar) => {
            let b = scalar.as_scalar();
            mode.fold(left, |a| pred(Some(a.as_str()), b))
        }
        (scalar, VariableValue::Sequence(right)) => {
            let a = scalar.as_scalar();
            mode.fold(right, |b| pred(a, Some(b.as_str())))
        }
        (a, b) => pred(a.as_scalar(), b.as_scalar()),
    }
}

/// Lowercased, trimmed, NFC form used by the textual operators
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase().nfc().collect()
}

/// NFC form without case folding or trimming
pub fn canonical(s: &str) -> String {
    s.nfc().collect()
}
