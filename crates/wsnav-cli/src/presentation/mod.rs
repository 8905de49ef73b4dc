mod bytes;
mod meta;

pub use bytes::format_bytes;
pub use meta::print_meta;

use owo_colors::OwoColorize;
use wsnav_engine::Diagnostic;

/// Render recovered errors as warnings on stderr, alongside whatever the
/// command printed on stdout.
pub fn emit_warnings(diagnostics: &[Diagnostic]) {
    for diag in diagnostics {
        eprintln!("{} {}", "Warning:".yellow().bold(), diag);
    }
}
