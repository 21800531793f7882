/// Returned when the option table handed to [`ArgParser`](crate::ArgParser) is malformed.
///
/// This is a programming error in the caller, not something a user of the program can fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDefinition {
    #[error("found short option duplicates for -{short} (--{first} and --{second})")]
    DuplicateShortName {
        short: char,
        first: &'static str,
        second: &'static str,
    },
    #[error("option --{0} is defined more than once")]
    DuplicateFullName(&'static str),
    #[error("option with description '{0}' has an empty name")]
    EmptyFullName(&'static str),
}

/// A variant of this enum is returned when the command line arguments don't match the option
/// table, or when a value can't be read the way the caller asked for it
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidArguments {
    #[error("unrecognized option '--{0}'")]
    UnrecognizedLong(String),
    #[error("unrecognized option '-{0}'")]
    UnrecognizedShort(char),
    #[error("expected value for option '--{0}'")]
    MissingLongValue(String),
    #[error("expected value for option '-{0}'")]
    MissingShortValue(char),
    #[error("missing required option --{0}")]
    MissingOption(String),
    /// Holds the zero-based index; the message reports it one-based.
    #[error("missing required argument at position {}", .0 + 1)]
    MissingArgument(usize),
    #[error("{0} is not a valid numeric value")]
    NotNumeric(String),
    #[error("{0} is out of range for the requested integer type")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = InvalidDefinition::DuplicateShortName {
            short: 'v',
            first: "verbose",
            second: "version",
        };
        assert_eq!(
            err.to_string(),
            "found short option duplicates for -v (--verbose and --version)"
        );

        assert_eq!(
            InvalidArguments::UnrecognizedLong("bogus".into()).to_string(),
            "unrecognized option '--bogus'"
        );
        assert_eq!(
            InvalidArguments::MissingShortValue('n').to_string(),
            "expected value for option '-n'"
        );
        assert_eq!(
            InvalidArguments::MissingArgument(0).to_string(),
            "missing required argument at position 1"
        );
        assert_eq!(
            InvalidArguments::NotNumeric("x".into()).to_string(),
            "x is not a valid numeric value"
        );
    }
}
