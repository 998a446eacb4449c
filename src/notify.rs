use std::io::{self, Write};

use colored::Colorize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
    Success,
    Error,
}

/// End-user notification capability. Fire-and-forget; nothing consumes a
/// return value.
pub trait Notifier {
    fn notify(&self, kind: Kind, message: &str);
}

/// Yes/no confirmation capability.
pub trait Confirmer {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Prints success to stdout and errors to stderr, colored.
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, kind: Kind, message: &str) {
        match kind {
            Kind::Success => println!("{}", message.green()),
            Kind::Error => eprintln!("{}", message.red()),
        }
    }
}

/// Interactive y/N prompt on the terminal. With `assume_yes` every prompt is
/// answered affirmatively (the `--yes` flag).
pub struct TermConfirmer {
    assume_yes: bool,
}

impl TermConfirmer {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirmer for TermConfirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        print!("{prompt} [y/N] ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        input.trim().eq_ignore_ascii_case("y")
    }
}
