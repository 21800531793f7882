use crate::args::ParsedArgs;
use crate::error::{InvalidArguments, InvalidDefinition};
use crate::registry::{help, OptionDef, Registry};
use crate::value::{Key, ValueRef};
use std::fmt;
use std::io::stdout;
use std::path::Path;

/// A parser for `--long`, `--long=value`, `--long value`, `-s`, `-s value` and `--` style
/// command lines.
///
/// The option table is fixed at construction. Each call to one of the `parse_*` methods
/// replaces whatever the previous call produced.
#[derive(Debug, Clone)]
pub struct ArgParser {
    registry: Registry,
    parsed: ParsedArgs,
}

impl ArgParser {
    /// Creates a parser for the given options.
    ///
    /// # Panics
    ///
    /// Panics if the option table is invalid (e.g. two options share a short name). Use
    /// [`try_new`](Self::try_new) to handle that case instead.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = OptionDef>,
    {
        match Self::try_new(options) {
            Ok(parser) => parser,
            Err(e) => panic!("{e}"),
        }
    }

    /// Creates a parser for the given options, returning an error if the table is invalid
    pub fn try_new<I>(options: I) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = OptionDef>,
    {
        Ok(ArgParser {
            registry: Registry::new(options)?,
            parsed: ParsedArgs::default(),
        })
    }

    /// Parses `items`, honoring a bare `--`. The first item is the executable path.
    pub fn parse_from<I, T>(&mut self, items: I) -> Result<(), InvalidArguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parse_from_with(items, true)
    }

    /// Parses `items`. When `accept_remaining` is false a bare `--` is looked up like any other
    /// long option (and so rejected).
    ///
    /// On error the parser is left holding an empty result.
    pub fn parse_from_with<I, T>(
        &mut self,
        items: I,
        accept_remaining: bool,
    ) -> Result<(), InvalidArguments>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.parsed = ParsedArgs::default();

        let items = items.into_iter().map(Into::into).collect::<Vec<String>>();
        tracing::debug!(tokens = items.len(), accept_remaining, "parsing command line");

        self.parsed = ParsedArgs::classify(&self.registry, items, accept_remaining)?;

        tracing::debug!(
            options = self.parsed.options.len(),
            arguments = self.parsed.arguments.len(),
            remaining = self.parsed.remaining.len(),
            "parsed command line"
        );
        Ok(())
    }

    /// Parses the arguments this process was started with
    ///
    /// # Panics
    ///
    /// Panics if any argument, including those after `--`, is not valid Unicode (see
    /// [`std::env::args`]).
    pub fn parse_env(&mut self) -> Result<(), InvalidArguments> {
        self.parse_from(std::env::args())
    }

    /// Like [`parse_env`](Self::parse_env), with control over `--`.
    ///
    /// # Panics
    ///
    /// Panics if any argument is not valid Unicode.
    pub fn parse_env_with(&mut self, accept_remaining: bool) -> Result<(), InvalidArguments> {
        self.parse_from_with(std::env::args(), accept_remaining)
    }

    /// Returns a view of an option (by full name, e.g. `"output"`) or of a positional argument
    /// (by index).
    ///
    /// Only `usize` converts into an index, so an integer literal needs a suffix
    /// (`get(0usize)`). [`positional`](Self::positional) avoids that.
    pub fn get<'a>(&'a self, key: impl Into<Key<'a>>) -> ValueRef<'a> {
        ValueRef::new(&self.parsed, key.into())
    }

    /// Returns a view of the option with the given full name
    pub fn option<'a>(&'a self, name: &'a str) -> ValueRef<'a> {
        self.get(Key::Name(name))
    }

    /// Returns a view of the positional argument at `index`
    pub fn positional(&self, index: usize) -> ValueRef<'_> {
        self.get(Key::Index(index))
    }

    pub fn executable_path(&self) -> &Path {
        &self.parsed.executable_path
    }

    pub fn argument_count(&self) -> usize {
        self.parsed.arguments.len()
    }

    pub fn option_count(&self) -> usize {
        self.parsed.options.len()
    }

    pub fn arguments(&self) -> &[String] {
        &self.parsed.arguments
    }

    /// Matched options and their values, ordered by name
    pub fn options(&self) -> impl Iterator<Item = (&str, &str)> {
        self.parsed
            .options
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Everything that followed a bare `--`
    pub fn remaining_arguments(&self) -> &[String] {
        &self.parsed.remaining
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Writes one aligned line per option to `w`
    pub fn write_help(&self, w: impl std::io::Write) -> std::io::Result<()> {
        help::write_help(w, &self.registry)
    }

    /// Writes the option list to stdout
    pub fn print_help(&self) -> std::io::Result<()> {
        self.write_help(stdout().lock())
    }
}

impl fmt::Display for ArgParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = vec![];
        self.write_help(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}
