/// Completion-related modules.
///
/// This sub-module groups all completion logic:
/// - **tokenizer**: Splitting a partial descriptor into markers and name fragment
/// - **matcher**: Prefix filtering (and sorting) of candidate strings
/// - **owner**: Resolving an owner class to its member signatures
/// - **handler**: The completion entry points on [`crate::Completer`]
pub mod handler;
pub mod matcher;
pub mod owner;
pub mod tokenizer;
