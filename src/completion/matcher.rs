/// Prefix filtering shared by every completion kind.
///
/// All completion kinds boil down to "keep the candidates that start with
/// what was typed".  They differ in what counts as a hit and in whether the
/// result still needs sorting:
///
/// - class names come from the sorted index, so order is kept and the exact
///   name being typed is not offered back;
/// - descriptors come from the same index, with the prefix markers and the
///   closing `;` put back on;
/// - member signatures come from an unordered member list and are sorted.
use crate::types::DescriptorToken;

#[derive(Debug, Clone, Copy)]
pub enum MatchMode<'a> {
    InternalName(&'a str),
    Descriptor(&'a DescriptorToken),
    Member(&'a str),
}

impl MatchMode<'_> {
    /// Filter `candidates` according to this mode.
    pub fn apply<I, S>(&self, candidates: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match *self {
            MatchMode::InternalName(query) => candidates
                .into_iter()
                .filter(|c| {
                    let c = c.as_ref();
                    c.starts_with(query) && c != query
                })
                .map(|c| c.as_ref().to_string())
                .collect(),
            MatchMode::Descriptor(token) => candidates
                .into_iter()
                .filter(|c| c.as_ref().starts_with(token.fragment.as_str()))
                .map(|c| format!("{}{};", token.prefix, c.as_ref()))
                .collect(),
            MatchMode::Member(query) => {
                let mut hits: Vec<String> = candidates
                    .into_iter()
                    .filter(|c| c.as_ref().starts_with(query))
                    .map(|c| c.as_ref().to_string())
                    .collect();
                hits.sort_unstable();
                hits
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_name_skips_exact_match() {
        let names = ["a/B", "a/Bar", "a/Baz", "c/D"];
        let hits = MatchMode::InternalName("a/B").apply(names);
        assert_eq!(hits, vec!["a/Bar", "a/Baz"]);
    }

    #[test]
    fn descriptor_reattaches_prefix_and_terminator() {
        let token = DescriptorToken {
            prefix: "[L".to_string(),
            fragment: "a/B".to_string(),
        };
        let names = ["a/B", "a/Bar", "b/A"];
        let hits = MatchMode::Descriptor(&token).apply(names);
        assert_eq!(hits, vec!["[La/B;", "[La/Bar;"]);
    }

    #[test]
    fn member_results_are_sorted() {
        let sigs = vec!["zip()V".to_string(), "run()V".to_string(), "reset()V".to_string()];
        let hits = MatchMode::Member("r").apply(&sigs);
        assert_eq!(hits, vec!["reset()V", "run()V"]);
    }

    #[test]
    fn member_match_keeps_exact_signature() {
        let hits = MatchMode::Member("run()V").apply(["run()V"]);
        assert_eq!(hits, vec!["run()V"]);
    }
}
