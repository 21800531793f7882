use super::{OptionDef, Registry};
use std::io::{self, Write};

/// Writes one line per option, with the descriptions lined up in a single column:
///
/// ```text
/// -v, --verbose        - Be loud
/// -o, --output=<value> - Where to write
/// ```
pub fn write_help(mut w: impl Write, registry: &Registry) -> io::Result<()> {
    let col_width = calculate_col_width(registry);

    for option in registry {
        writeln!(
            &mut w,
            "-{}, --{:col_width$} - {}",
            option.short_name,
            label(option),
            option.description
        )?;
    }

    w.flush()
}

fn label(option: &OptionDef) -> String {
    if option.expects_value {
        format!("{}=<value>", option.full_name)
    } else {
        option.full_name.to_string()
    }
}

fn calculate_col_width(registry: &Registry) -> usize {
    registry
        .iter()
        .map(|o| label(o).chars().count())
        .max()
        .unwrap_or(0)
}
