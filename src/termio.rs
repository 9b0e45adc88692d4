//! Terminal I/O, with colors!

use crate::Alert;
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print an OK message, in green.
pub fn print_ok(msg: &str) {
    print_tagged(Color::Green, "OK   ", msg);
}

/// Print a warning message, in yellow.
pub fn print_warn(msg: &str) {
    print_tagged(Color::Yellow, "WARN ", msg);
}

/// Print an alert, in red.
///
/// Alerts go to stderr so that listings can still be piped.
pub fn print_alert(alert: &Alert) {
    let mut stderr = StandardStream::stderr(ColorChoice::Auto);

    stderr
        .set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))
        .expect("set color");
    write!(&mut stderr, "{:<6}", alert.title()).expect("write title");
    stderr.reset().expect("reset color");
    writeln!(&mut stderr, "{}", alert.message()).expect("write message");
}

fn print_tagged(color: Color, tag: &str, msg: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)))
        .expect("set color");
    write!(&mut stdout, "{tag} ").expect("write tag");
    stdout.reset().expect("reset color");
    writeln!(&mut stdout, "{msg}").expect("write message");
}
