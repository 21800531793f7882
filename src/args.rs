use crate::error::InvalidArguments;
use crate::registry::{OptionDef, Registry};
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::path::PathBuf;

/// A structured view of command line arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ParsedArgs {
    /// The first raw argument, as given
    pub executable_path: PathBuf,
    /// Matched options keyed by their full name. Options that take no value map to `""`.
    pub options: BTreeMap<String, String>,
    /// Positional arguments in the order they appeared
    pub arguments: Vec<String>,
    /// Everything after a bare `--`, untouched
    pub remaining: Vec<String>,
}

impl ParsedArgs {
    /// Classifies `items` against `registry`. The input is expected to be in the same format
    /// that [args()](std::env::args) returns (i.e. the name of the executable is first)
    pub(crate) fn classify<I, T>(
        registry: &Registry,
        items: I,
        accept_remaining: bool,
    ) -> Result<ParsedArgs, InvalidArguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut iter = items.into_iter().map(Into::<String>::into).peekable();

        let mut result = ParsedArgs {
            executable_path: PathBuf::from(iter.next().unwrap_or_default()),
            ..ParsedArgs::default()
        };

        while let Some(arg) = iter.next() {
            if let Some(long) = arg.strip_prefix("--") {
                if long.is_empty() && accept_remaining {
                    result.remaining = iter.by_ref().collect();
                    tracing::debug!(
                        count = result.remaining.len(),
                        "`--` terminator, passing the rest through"
                    );
                    break;
                }

                // e.g. --message=hello
                //        ^^^^^^^ ^^^^^
                //         name   inline
                let (name, inline) = match long.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (long, None),
                };

                let Some(def) = registry.find_long(name) else {
                    return Err(InvalidArguments::UnrecognizedLong(name.to_string()));
                };

                let value = if !def.expects_value() {
                    String::new()
                } else if let Some(inline) = inline {
                    inline.to_string()
                } else {
                    take_value(&mut iter)
                        .ok_or_else(|| InvalidArguments::MissingLongValue(name.to_string()))?
                };

                result.record(def, value);
                continue;
            }

            if let Some(short) = arg.strip_prefix('-') {
                let mut chars = short.chars();

                // A lone `-` conventionally means stdin, treat it like any other positional
                let Some(c) = chars.next() else {
                    tracing::trace!(arg = %arg, "positional");
                    result.arguments.push(arg);
                    continue;
                };

                let ignored = chars.as_str();
                if !ignored.is_empty() {
                    tracing::debug!(
                        option = %c,
                        ignored,
                        "short options are matched on their first character only"
                    );
                }

                let Some(def) = registry.find_short(c) else {
                    return Err(InvalidArguments::UnrecognizedShort(c));
                };

                let value = if def.expects_value() {
                    take_value(&mut iter).ok_or(InvalidArguments::MissingShortValue(c))?
                } else {
                    String::new()
                };

                result.record(def, value);
                continue;
            }

            tracing::trace!(arg = %arg, "positional");
            result.arguments.push(arg);
        }

        Ok(result)
    }

    fn record(&mut self, def: &OptionDef, value: String) {
        tracing::trace!(option = def.full_name(), value = %value, "option");
        self.options.insert(def.full_name().to_string(), value);
    }
}

// A token that looks like an option is never taken as a value
fn take_value<I>(iter: &mut Peekable<I>) -> Option<String>
where
    I: Iterator<Item = String>,
{
    iter.next_if(|next| !next.starts_with('-'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> Registry {
        Registry::new([
            OptionDef::new("verbose", "be loud"),
            OptionDef::new("name", "who to greet").takes_value(),
            OptionDef::new("count", "how many").takes_value(),
        ])
        .unwrap()
    }

    fn classify(cmdline: &[&str]) -> Result<ParsedArgs, InvalidArguments> {
        ParsedArgs::classify(&registry(), cmdline.iter().copied(), true)
    }

    #[test]
    fn no_args() {
        let cmdline: [&str; 0] = [];
        let args = ParsedArgs::classify(&registry(), cmdline, true).unwrap();
        assert_eq!(args, ParsedArgs::default());
    }

    #[test]
    fn executable_path_is_verbatim() {
        let args = classify(&["./bin/prog"]).unwrap();
        assert_eq!(args.executable_path, PathBuf::from("./bin/prog"));
        assert!(args.options.is_empty());
        assert!(args.arguments.is_empty());
    }

    #[test]
    fn options_and_positionals_interleave() {
        let args = classify(&["prog", "a", "--verbose", "b", "-c", "3", "c"]).unwrap();
        assert_eq!(args.arguments, ["a", "b", "c"]);
        assert_eq!(args.options.get("verbose").map(String::as_str), Some(""));
        assert_eq!(args.options.get("count").map(String::as_str), Some("3"));
        assert!(args.remaining.is_empty());
    }

    #[test]
    fn every_value_form_stores_the_same_thing() {
        let cmdlines: [&[&str]; 3] = [
            &["prog", "--name=ferris"],
            &["prog", "--name", "ferris"],
            &["prog", "-n", "ferris"],
        ];

        for cmdline in cmdlines {
            let args = ParsedArgs::classify(
                &Registry::new([OptionDef::new("name", "").takes_value()]).unwrap(),
                cmdline.iter().copied(),
                true,
            )
            .unwrap();
            assert_eq!(args.options.get("name").map(String::as_str), Some("ferris"));
        }
    }

    #[test]
    fn inline_value_may_be_empty_or_contain_equals() {
        let args = classify(&["prog", "--name="]).unwrap();
        assert_eq!(args.options["name"], "");

        let args = classify(&["prog", "--name=a=b"]).unwrap();
        assert_eq!(args.options["name"], "a=b");
    }

    #[test]
    fn inline_value_is_dropped_for_flags() {
        let args = classify(&["prog", "--verbose=yes"]).unwrap();
        assert_eq!(args.options["verbose"], "");
    }

    #[test]
    fn flag_does_not_consume_following_token() {
        let args = classify(&["prog", "--verbose", "file"]).unwrap();
        assert_eq!(args.arguments, ["file"]);
    }

    #[test]
    fn last_occurrence_wins() {
        let args = classify(&["prog", "--count=1", "-c", "2", "--verbose", "-v"]).unwrap();
        assert_eq!(args.options["count"], "2");
        assert_eq!(args.options.len(), 2);
    }

    #[test]
    fn dash_dash_stops_scanning() {
        let args = classify(&["prog", "a", "--", "b", "-c", "--bogus"]).unwrap();
        assert_eq!(args.arguments, ["a"]);
        assert_eq!(args.remaining, ["b", "-c", "--bogus"]);
        assert!(args.options.is_empty());
    }

    #[test]
    fn dash_dash_is_unrecognized_when_not_accepted() {
        let err = ParsedArgs::classify(&registry(), ["prog", "--", "b"], false).unwrap_err();
        assert_eq!(err, InvalidArguments::UnrecognizedLong(String::new()));
        assert_eq!(err.to_string(), "unrecognized option '--'");
    }

    #[test]
    fn missing_values() {
        let err = classify(&["prog", "--name"]).unwrap_err();
        assert_eq!(err, InvalidArguments::MissingLongValue("name".into()));

        let err = classify(&["prog", "-n"]).unwrap_err();
        assert_eq!(err, InvalidArguments::MissingShortValue('n'));
    }

    #[test]
    fn dashed_token_is_never_a_value() {
        let err = classify(&["prog", "--count", "-5"]).unwrap_err();
        assert_eq!(err, InvalidArguments::MissingLongValue("count".into()));

        let err = classify(&["prog", "-n", "--verbose"]).unwrap_err();
        assert_eq!(err, InvalidArguments::MissingShortValue('n'));
    }

    #[test]
    fn empty_token_can_be_a_value_or_a_positional() {
        let args = classify(&["prog", "--name", "", ""]).unwrap();
        assert_eq!(args.options["name"], "");
        assert_eq!(args.arguments, [""]);
    }

    #[test]
    fn unrecognized_options() {
        let err = classify(&["prog", "--bogus"]).unwrap_err();
        assert_eq!(err, InvalidArguments::UnrecognizedLong("bogus".into()));

        let err = classify(&["prog", "--bogus=1"]).unwrap_err();
        assert_eq!(err, InvalidArguments::UnrecognizedLong("bogus".into()));

        let err = classify(&["prog", "-x"]).unwrap_err();
        assert_eq!(err, InvalidArguments::UnrecognizedShort('x'));
    }

    #[test]
    fn short_cluster_matches_first_character_only() {
        let args = classify(&["prog", "-vxyz"]).unwrap();
        assert_eq!(args.options.keys().collect::<Vec<_>>(), ["verbose"]);

        let args = classify(&["prog", "-c5", "7"]).unwrap();
        assert_eq!(args.options["count"], "7");
    }

    #[test]
    fn lone_dash_is_positional() {
        let args = classify(&["prog", "-", "--verbose"]).unwrap();
        assert_eq!(args.arguments, ["-"]);
        assert!(args.options.contains_key("verbose"));
    }
}
