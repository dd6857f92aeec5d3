//! Tokenization of the argument vector

use std::collections::btree_map;
use std::collections::BTreeMap;

/// Reserved word that triggers the help path, as a command name or `-help`
pub const HELP_KEYWORD: &str = "help";

/// Options supplied on the command line, keyed by option name.
///
/// Boolean options map to an empty string. Keys that were not supplied are
/// absent. Iteration is in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionSet(BTreeMap<String, String>);

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any earlier value for the same key
    pub fn insert(&mut self, key: String, value: String) {
        self.0.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Whether the option was supplied at all
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// The supplied value, or an empty string when absent
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OptionSet {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        OptionSet(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// The result of tokenizing one argument vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    pub options: OptionSet,
    /// First non-option token, empty if none
    pub command: String,
    /// Remaining non-option tokens in input order
    pub args: Vec<String>,
}

impl ParsedInvocation {
    /// Whether this invocation asks for help instead of running a command
    pub fn wants_help(&self) -> bool {
        self.command.is_empty() || self.command == HELP_KEYWORD || self.options.has(HELP_KEYWORD)
    }

    /// Name of the command to describe on the help path.
    ///
    /// `help start` and `-help start` name `start` through the first argument;
    /// `start -help` names it through the command itself.
    pub fn help_topic(&self) -> &str {
        self.args.first().map_or(self.command.as_str(), String::as_str)
    }
}

/// Tokenize an argument vector. The first element is the program name and is skipped.
pub fn tokenize<S: AsRef<str>>(argv: &[S]) -> ParsedInvocation {
    let mut parsed = ParsedInvocation::default();
    let mut command_seen = false;

    for arg in argv.iter().skip(1) {
        let arg = arg.as_ref();
        if let Some(option) = arg.strip_prefix('-') {
            let (key, value) = option.split_once('=').unwrap_or((option, ""));
            parsed.options.insert(key.to_string(), value.to_string());
        } else if !command_seen {
            // An empty token still fills the command slot
            parsed.command = arg.to_string();
            command_seen = true;
        } else {
            parsed.args.push(arg.to_string());
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_command_and_args() {
        let parsed = tokenize(&["myapp", "start", "/folder1/folder2", "8669"]);
        assert_eq!(parsed.command, "start");
        assert_eq!(parsed.args, vec!["/folder1/folder2", "8669"]);
        assert!(parsed.options.is_empty());
    }

    #[test]
    fn test_tokenize_options_anywhere() {
        let parsed = tokenize(&["myapp", "-z", "run", "a", "-config=x.yml", "b"]);
        assert_eq!(parsed.command, "run");
        assert_eq!(parsed.args, vec!["a", "b"]);
        assert_eq!(parsed.options.get("z"), Some(""));
        assert_eq!(parsed.options.get("config"), Some("x.yml"));
        assert!(!parsed.options.has("missing"));
    }

    #[test]
    fn test_tokenize_value_keeps_later_equals() {
        let parsed = tokenize(&["myapp", "-filter=a=b"]);
        assert_eq!(parsed.options.get("filter"), Some("a=b"));
    }

    #[test]
    fn test_tokenize_last_occurrence_wins() {
        let parsed = tokenize(&["myapp", "-level=1", "go", "-level=3"]);
        assert_eq!(parsed.options.get("level"), Some("3"));
        assert_eq!(parsed.options.len(), 1);
    }

    #[test]
    fn test_key_without_dash_is_positional() {
        let parsed = tokenize(&["myapp", "initialize", "-clean", "strength=2"]);
        assert_eq!(parsed.args, vec!["strength=2"]);
        assert!(parsed.options.has("clean"));
    }

    #[test]
    fn test_empty_token_is_the_command() {
        let parsed = tokenize(&["myapp", "", "start", "a"]);
        assert_eq!(parsed.command, "");
        assert_eq!(parsed.args, vec!["start", "a"]);
        assert!(parsed.wants_help());
        assert_eq!(parsed.help_topic(), "start");
    }

    #[test]
    fn test_help_detection() {
        assert!(tokenize(&["myapp"]).wants_help());
        assert!(tokenize(&["myapp", "help"]).wants_help());
        assert!(tokenize(&["myapp", "start", "-help"]).wants_help());
        assert!(!tokenize(&["myapp", "start"]).wants_help());
    }

    #[test]
    fn test_help_topic() {
        assert_eq!(tokenize(&["myapp", "help", "start"]).help_topic(), "start");
        assert_eq!(tokenize(&["myapp", "start", "-help"]).help_topic(), "start");
        assert_eq!(tokenize(&["myapp", "help"]).help_topic(), "help");
        assert_eq!(tokenize(&["myapp"]).help_topic(), "");
    }

    #[test]
    fn test_option_set_value() {
        let options: OptionSet = [("strength", "2"), ("clean", "")].into_iter().collect();
        assert_eq!(options.value("strength"), "2");
        assert_eq!(options.value("clean"), "");
        assert_eq!(options.value("absent"), "");
        assert!(options.has("clean"));
        assert!(!options.has("absent"));
    }
}
