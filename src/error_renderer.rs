//! Error rendering using miette
//!
//! Renders ArrayLib errors as miette reports, with the diagnostic code and
//! help text attached to each error variant.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme, Report};

// Wide enough that messages and help text are never wrapped.
const RENDER_WIDTH: usize = 400;

/// Render an error with rich formatting to stderr
///
/// # Example
/// ```no_run
/// use arraylib::{ArrayLib, Type, render_error};
///
/// match ArrayLib::with_providers([Type::string()], Vec::<arraylib::Slot>::new()) {
///     Ok(array) => {
///         if let Err(e) = array.first() {
///             render_error(&e);
///         }
///     }
///     Err(e) => render_error(&e),
/// }
/// ```
pub fn render_error(error: &Error) {
    eprintln!("{:?}", Report::new(error.clone()));
}

/// Render an error to a String (useful for logs, UIs, etc.)
pub fn render_error_to_string(error: &Error) -> String {
    render_with_theme(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
///
/// This is the same as `render_error_to_string` but without ANSI color codes,
/// making the output easier to compare in tests.
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render_with_theme(error, GraphicalTheme::unicode_nocolor())
}

fn render_with_theme(error: &Error, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail; fall back to the plain message anyway.
    if GraphicalReportHandler::new_themed(theme)
        .with_width(RENDER_WIDTH)
        .render_report(&mut out, error)
        .is_err()
    {
        return error.to_string();
    }
    out
}
