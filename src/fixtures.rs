//! Expected-result registry for the example corpus.
//!
//! One entry per example file, keyed by file name. Expected outputs carry the
//! `<br/>` line-separator marker already embedded because the comparison
//! target is the HTML-rendered trace text, not raw newlines.

use std::collections::HashMap;

/// Registered expectation for one example: the program input to pass and the
/// rendered output the run must produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub name: String,
    pub args: String,
    pub expected_output: String,
}

/// Immutable name -> fixture map, populated once at suite start from the
/// literal table below.
#[derive(Debug, Clone)]
pub struct FixtureRegistry {
    entries: HashMap<String, Fixture>,
}

impl FixtureRegistry {
    /// Build the registry for the shipped example corpus. The empty-string
    /// key is reserved and always present as a sentinel no-op entry.
    pub fn builtin() -> Self {
        let table: &[(&str, &str, &str)] = &[
            ("Null-checks.kt", "2 3", "6<br/>"),
            ("Use a conditional expression.kt", "10 20", "20<br/>"),
            ("is-checks and smart casts.kt", "", "3<br/>null<br/>"),
            (
                "Use a while-loop.kt",
                "guest1 guest2 guest3 guest4",
                "guest1<br/>guest2<br/>guest3<br/>guest4<br/>",
            ),
            (
                "Use a for-loop.kt",
                "guest1 guest2 guest3",
                "guest1<br/>guest2<br/>guest3<br/><br/>guest1<br/>guest2<br/>guest3<br/>",
            ),
            (
                "Use ranges and in.kt",
                "4",
                "OK<br/>1 2 3 4 5 <br/>Out: array has only 3 elements. x = 4<br/>Yes: array contains aaa<br/>No: array doesn't contains ddd<br/>",
            ),
            (
                "Use when.kt",
                "",
                "Greeting<br/>One<br/>Long<br/>Not a string<br/>Unknown<br/>",
            ),
            ("Creatures.kt", "", "from js file"),
            ("Fancy lines.kt", "", "from js file"),
            ("Hello, Kotlin.kt", "", "from js file"),
            ("Traffic light.kt", "", "from js file"),
            ("A multi-language Hello.kt", "FR", "Salut!<br/>"),
            ("An object-oriented Hello.kt", "guest1", "Hello, guest1<br/>"),
            (
                "Reading a name from the command line.kt",
                "guest1",
                "Hello, guest1!<br/>",
            ),
            (
                "Reading many names from the command line.kt",
                "guest1 guest2 guest3",
                "Hello, guest1!<br/>Hello, guest2!<br/>Hello, guest3!<br/>",
            ),
            ("Simplest version.kt", "", "Hello, world!<br/>"),
            ("99 Bottles of Beer.kt", "", "from txt file"),
            ("HTML Builder.kt", "", "from txt file"),
            ("Maze.kt", "", "from txt file"),
            ("Life.kt", "", "from txt file"),
            // Reserved sentinel entry.
            ("", "", ""),
        ];

        let entries = table
            .iter()
            .map(|(name, args, expected)| {
                (
                    (*name).to_string(),
                    Fixture {
                        name: (*name).to_string(),
                        args: (*args).to_string(),
                        expected_output: (*expected).to_string(),
                    },
                )
            })
            .collect();
        Self { entries }
    }

    /// Look up the fixture registered for an exact file name. Absence is a
    /// valid outcome; the comparator reports it as a distinct failure.
    pub fn lookup(&self, name: &str) -> Option<&Fixture> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_returns_registered_args_and_output() {
        let registry = FixtureRegistry::builtin();
        let fixture = registry.lookup("Null-checks.kt").expect("registered");
        assert_eq!(fixture.args, "2 3");
        assert_eq!(fixture.expected_output, "6<br/>");
    }

    #[test]
    fn lookup_of_unknown_name_is_none() {
        let registry = FixtureRegistry::builtin();
        assert!(registry.lookup("No such example.kt").is_none());
    }

    #[test]
    fn sentinel_entry_is_present_and_empty() {
        let registry = FixtureRegistry::builtin();
        let sentinel = registry.lookup("").expect("sentinel");
        assert_eq!(sentinel.args, "");
        assert_eq!(sentinel.expected_output, "");
    }

    #[test]
    fn registry_holds_full_corpus_table() {
        // 20 examples plus the sentinel.
        assert_eq!(FixtureRegistry::builtin().len(), 21);
    }
}
