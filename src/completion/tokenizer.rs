/// Partial descriptor tokenizer.
///
/// Splits what the user typed into the array/reference markers and the
/// class name fragment that follows them, e.g. `[[Ljava/ut` into prefix
/// `[[L` and fragment `java/ut`.  Class names are matched against the
/// fragment only; the prefix is glued back on to each suggestion.
///
/// The grammar is deliberately loose: any run of `[` and `L` before the
/// first other character is prefix, and anything after that (including
/// further `L`s) is fragment.  Only a `;` inside the fragment, a prefix
/// without `L`, or an empty fragment reject the input.
use crate::types::DescriptorToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ReadingPrefix,
    ReadingFragment,
    Rejected,
}

/// Tokenize a partial reference descriptor.
///
/// Returns `None` when there is nothing that can be completed: blank input,
/// no `L` marker, no name typed yet, or a descriptor already closed by `;`.
pub fn tokenize(raw: &str) -> Option<DescriptorToken> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    let mut state = State::ReadingPrefix;
    let mut prefix = String::with_capacity(2);
    let mut fragment = String::with_capacity(input.len());

    for c in input.chars() {
        state = match (state, c) {
            (State::ReadingPrefix, 'L' | '[') => {
                prefix.push(c);
                State::ReadingPrefix
            }
            (State::ReadingPrefix, _) => {
                fragment.push(c);
                State::ReadingFragment
            }
            (State::ReadingFragment, ';') => State::Rejected,
            (State::ReadingFragment, _) => {
                fragment.push(c);
                State::ReadingFragment
            }
            (State::Rejected, _) => State::Rejected,
        };
        if state == State::Rejected {
            return None;
        }
    }

    if !prefix.contains('L') || fragment.is_empty() {
        return None;
    }

    Some(DescriptorToken { prefix, fragment })
}
