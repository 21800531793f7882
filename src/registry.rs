use crate::error::InvalidDefinition;
use itertools::Itertools;

pub mod help;

/// A blueprint for a command line option (e.g. `--output=file`, `-o file` or `--verbose`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDef {
    full_name: &'static str,
    short_name: char,
    description: &'static str,
    expects_value: bool,
}

impl OptionDef {
    /// Defines a new option that does not take a value.
    ///
    /// The short name defaults to the first character of `full_name`.
    pub fn new(full_name: &'static str, description: &'static str) -> Self {
        OptionDef {
            full_name,
            short_name: full_name.chars().next().unwrap_or_default(),
            description,
            expects_value: false,
        }
    }

    /// Overrides the short name
    pub fn short(mut self, short_name: char) -> Self {
        self.short_name = short_name;
        self
    }

    /// Makes this option consume a value
    pub fn takes_value(mut self) -> Self {
        self.expects_value = true;
        self
    }

    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    pub fn short_name(&self) -> char {
        self.short_name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn expects_value(&self) -> bool {
        self.expects_value
    }
}

/// The fixed set of options a parser recognizes
#[derive(Debug, Clone, Default)]
pub struct Registry {
    options: Vec<OptionDef>,
}

impl Registry {
    /// Builds a registry, rejecting tables where two options would be indistinguishable on the
    /// command line
    pub fn new<I>(options: I) -> Result<Self, InvalidDefinition>
    where
        I: IntoIterator<Item = OptionDef>,
    {
        let options = options.into_iter().collect::<Vec<_>>();

        if let Some(empty) = options.iter().find(|o| o.full_name.is_empty()) {
            return Err(InvalidDefinition::EmptyFullName(empty.description));
        }

        for (current, other) in options.iter().tuple_combinations() {
            if current.short_name == other.short_name {
                return Err(InvalidDefinition::DuplicateShortName {
                    short: current.short_name,
                    first: current.full_name,
                    second: other.full_name,
                });
            }

            if current.full_name == other.full_name {
                return Err(InvalidDefinition::DuplicateFullName(current.full_name));
            }
        }

        Ok(Registry { options })
    }

    /// Returns the option with the given full name
    pub fn find_long(&self, full_name: &str) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.full_name == full_name)
    }

    /// Returns the option with the given short name
    pub fn find_short(&self, short_name: char) -> Option<&OptionDef> {
        self.options.iter().find(|o| o.short_name == short_name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionDef> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = &'r OptionDef;
    type IntoIter = std::slice::Iter<'r, OptionDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_name_defaults_to_first_character() {
        let def = OptionDef::new("verbose", "be loud");
        assert_eq!(def.short_name(), 'v');
        assert!(!def.expects_value());

        let def = OptionDef::new("output", "where to write").short('O').takes_value();
        assert_eq!(def.short_name(), 'O');
        assert!(def.expects_value());
    }

    #[test]
    fn lookups_by_either_name() {
        let registry = Registry::new([
            OptionDef::new("verbose", ""),
            OptionDef::new("output", "").short('O').takes_value(),
        ])
        .unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.find_long("output").unwrap().short_name(), 'O');
        assert_eq!(registry.find_short('v').unwrap().full_name(), "verbose");
        assert!(registry.find_short('o').is_none());
        assert!(registry.find_long("v").is_none());
    }

    #[test]
    fn duplicate_short_names_are_rejected() {
        let err = Registry::new([
            OptionDef::new("alpha", ""),
            OptionDef::new("verbose", ""),
            OptionDef::new("version", ""),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            InvalidDefinition::DuplicateShortName {
                short: 'v',
                first: "verbose",
                second: "version",
            }
        );
    }

    #[test]
    fn explicit_short_names_resolve_collisions() {
        let registry = Registry::new([
            OptionDef::new("verbose", ""),
            OptionDef::new("version", "").short('V'),
        ]);
        assert!(registry.is_ok());
    }

    #[test]
    fn empty_and_repeated_full_names_are_rejected() {
        let err = Registry::new([OptionDef::new("", "nameless").short('x')]).unwrap_err();
        assert_eq!(err, InvalidDefinition::EmptyFullName("nameless"));

        let err = Registry::new([
            OptionDef::new("level", ""),
            OptionDef::new("level", "").short('L'),
        ])
        .unwrap_err();
        assert_eq!(err, InvalidDefinition::DuplicateFullName("level"));
    }

    #[test]
    fn empty_registry_is_valid() {
        let registry = Registry::new([]).unwrap();
        assert!(registry.is_empty());
    }
}
