//! UI helper functions for terminal output formatting.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Signed chip amount with an explicit `+` for gains.
pub fn format_net(net: i128) -> String {
    if net > 0 {
        format!("+{}", net)
    } else {
        net.to_string()
    }
}
