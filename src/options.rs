//! Configuration options for matching and highlighting.
//!
//! [`MatchOptions`] is what every library entry point takes. With the `cli`
//! feature, [`FzhOptions`] describes the command line of the `fzh` binary and
//! flattens [`MatchOptions`] into it.

use derive_builder::Builder;

use crate::fuzzy_matcher::ScanStrategy;

/// Tag wrapped around matched runs when none is given
pub const DEFAULT_TAG: &str = "strong";

/// Options shared by matching and highlighting.
///
/// ```
/// use fuzzy_highlight::MatchOptionsBuilder;
///
/// let options = MatchOptionsBuilder::default()
///     .case_sensitive(true)
///     .tag("b")
///     .build()
///     .unwrap();
/// assert_eq!(options.tag, "b");
/// ```
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct MatchOptions {
    /// Match case exactly
    ///
    /// By default both needle and candidates are folded to lower case before comparing.
    #[cfg_attr(feature = "cli", arg(short = 'c', long, help_heading = "Search"))]
    pub case_sensitive: bool,

    /// Tag to wrap matched runs with
    ///
    /// Example: `--tag b` outputs `<b>...</b>`.
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_TAG, help_heading = "Display"))]
    #[builder(setter(into))]
    pub tag: String,

    /// How to pick between several valid alignments of the needle
    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value_t = ScanStrategy::Greedy, help_heading = "Search")
    )]
    pub strategy: ScanStrategy,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            tag: DEFAULT_TAG.to_string(),
            strategy: ScanStrategy::default(),
        }
    }
}

impl MatchOptions {
    /// Options that only flip case sensitivity, everything else default
    pub fn respect_case() -> Self {
        Self {
            case_sensitive: true,
            ..Default::default()
        }
    }
}

/// fzh - fuzzy match and highlight
///
/// Prints the candidates matching NEEDLE with every matched run wrapped in a tag.
/// Candidates are read from stdin, one per line, when none are given.
#[cfg(feature = "cli")]
#[derive(clap::Parser, Debug, Clone)]
#[command(name = "fzh", args_override_self = true, verbatim_doc_comment, version, about)]
pub struct FzhOptions {
    /// Query to look for
    #[arg(required_unless_present = "shell")]
    pub needle: Option<String>,

    /// Candidates to match against
    pub candidates: Vec<String>,

    #[command(flatten)]
    #[allow(missing_docs)]
    pub matching: MatchOptions,

    /// Sort matches by score, best first
    ///
    /// Candidates with equal scores keep their input order.
    #[arg(long, help_heading = "Display")]
    pub rank: bool,

    /// Print the score and a tab before each match
    #[arg(long, help_heading = "Display")]
    pub show_score: bool,

    /// Print one JSON object per match instead of highlighted text
    #[arg(long, help_heading = "Display", conflicts_with = "show_score")]
    pub json: bool,

    /// Read stdin candidates delimited by ASCII NUL characters
    #[arg(long, help_heading = "Input")]
    pub read0: bool,

    /// Print output delimited by ASCII NUL characters
    #[arg(long, help_heading = "Display")]
    pub print0: bool,

    /// Generate shell completion script and exit
    #[arg(long, value_enum, help_heading = "Shell")]
    pub shell: Option<crate::completions::Shell>,
}
