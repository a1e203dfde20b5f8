//! Terminal-backed selectors.
//!
//! Values given on the command line are used as-is. Anything missing is asked
//! for through a dialog when a terminal is attached; otherwise, or when the
//! dialog is dismissed, the selection counts as declined.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{FuzzySelect, Input};
use tracing::debug;

use crate::pipeline::{DestinationSelector, SheetSelector};

/// Resolves selections from command-line values before falling back to a
/// dialog.
pub struct Prompter<D = TerminalDialog> {
    dialog: Option<D>,
    sheet: Option<String>,
    destination: Option<PathBuf>,
}

impl Prompter<TerminalDialog> {
    /// Uses a terminal dialog on stderr when both stdin and stderr are terminals.
    pub fn stdio(sheet: Option<String>, destination: Option<PathBuf>) -> Self {
        let term = Term::stderr();
        let attended = term.is_term() && io::stdin().is_terminal();
        let dialog = attended.then(|| TerminalDialog::new(term));
        Self::new(dialog)
            .with_sheet(sheet)
            .with_destination(destination)
    }
}

impl<D> Prompter<D> {
    /// `None` makes every unanswered question a decline.
    pub fn new(dialog: Option<D>) -> Self {
        Self {
            dialog,
            sheet: None,
            destination: None,
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: Option<PathBuf>) -> Self {
        self.destination = destination;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.dialog.is_some()
    }

    pub fn into_dialog(self) -> Option<D> {
        self.dialog
    }
}

impl<D: SheetSelector> SheetSelector for Prompter<D> {
    fn select_sheet(&mut self, sheets: &[String]) -> Option<String> {
        if let Some(sheet) = self.sheet.take() {
            return Some(sheet);
        }
        if let [only] = sheets {
            debug!(sheet = %only, "single sheet selected automatically");
            return Some(only.clone());
        }
        if sheets.is_empty() {
            return None;
        }
        self.dialog.as_mut()?.select_sheet(sheets)
    }
}

impl<D: DestinationSelector> DestinationSelector for Prompter<D> {
    fn select_destination(&mut self) -> Option<PathBuf> {
        if let Some(path) = self.destination.take() {
            return Some(path);
        }
        self.dialog.as_mut()?.select_destination()
    }
}

/// Fuzzy sheet picker and path input on a terminal.
pub struct TerminalDialog {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalDialog {
    pub fn new(term: Term) -> Self {
        Self {
            term,
            theme: ColorfulTheme::default(),
        }
    }
}

impl SheetSelector for TerminalDialog {
    fn select_sheet(&mut self, sheets: &[String]) -> Option<String> {
        let selection = FuzzySelect::with_theme(&self.theme)
            .with_prompt("Select a sheet")
            .items(sheets)
            .default(0)
            .highlight_matches(true)
            .interact_on_opt(&self.term);
        match selection {
            Ok(choice) => choice.and_then(|idx| sheets.get(idx).cloned()),
            Err(error) => {
                debug!(%error, "sheet dialog closed");
                None
            }
        }
    }
}

impl DestinationSelector for TerminalDialog {
    fn select_destination(&mut self) -> Option<PathBuf> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt("Save report as")
            .allow_empty(true)
            .interact_text_on(&self.term);
        match answer {
            Ok(answer) => non_empty_path(&answer),
            Err(error) => {
                debug!(%error, "destination dialog closed");
                None
            }
        }
    }
}

/// An empty or blank answer declines.
fn non_empty_path(answer: &str) -> Option<PathBuf> {
    let trimmed = answer.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheets() -> Vec<String> {
        vec!["Demographics".to_string(), "Labs".to_string()]
    }

    /// Dialog with canned answers that counts how often it was shown.
    #[derive(Default)]
    struct Canned {
        sheet: Option<String>,
        destination: Option<PathBuf>,
        shown: usize,
    }

    impl SheetSelector for Canned {
        fn select_sheet(&mut self, _sheets: &[String]) -> Option<String> {
            self.shown += 1;
            self.sheet.clone()
        }
    }

    impl DestinationSelector for Canned {
        fn select_destination(&mut self) -> Option<PathBuf> {
            self.shown += 1;
            self.destination.clone()
        }
    }

    fn interactive(dialog: Canned) -> Prompter<Canned> {
        Prompter::new(Some(dialog))
    }

    fn non_interactive() -> Prompter<Canned> {
        Prompter::new(None)
    }

    #[test]
    fn requested_sheet_wins() {
        let mut prompter = interactive(Canned::default()).with_sheet(Some("Labs".to_string()));
        assert_eq!(prompter.select_sheet(&sheets()), Some("Labs".to_string()));
        assert_eq!(prompter.into_dialog().map(|dialog| dialog.shown), Some(0));
    }

    #[test]
    fn single_sheet_needs_no_dialog() {
        let mut prompter = non_interactive();
        assert_eq!(
            prompter.select_sheet(&["Only".to_string()]),
            Some("Only".to_string())
        );
    }

    #[test]
    fn non_interactive_declines() {
        let mut prompter = non_interactive();
        assert!(!prompter.is_interactive());
        assert_eq!(prompter.select_sheet(&sheets()), None);
        assert_eq!(prompter.select_destination(), None);
    }

    #[test]
    fn dialog_answers_missing_values() {
        let mut prompter = interactive(Canned {
            sheet: Some("Labs".to_string()),
            destination: Some(PathBuf::from("results/report.json")),
            shown: 0,
        });
        assert_eq!(prompter.select_sheet(&sheets()), Some("Labs".to_string()));
        assert_eq!(
            prompter.select_destination(),
            Some(PathBuf::from("results/report.json"))
        );
        assert_eq!(prompter.into_dialog().map(|dialog| dialog.shown), Some(2));
    }

    #[test]
    fn dismissed_dialog_declines() {
        let mut prompter = interactive(Canned::default());
        assert_eq!(prompter.select_sheet(&sheets()), None);
        assert_eq!(prompter.select_destination(), None);
    }

    #[test]
    fn command_line_destination_skips_dialog() {
        let mut prompter =
            interactive(Canned::default()).with_destination(Some(PathBuf::from("out.csv")));
        assert_eq!(prompter.select_destination(), Some(PathBuf::from("out.csv")));
        assert_eq!(prompter.into_dialog().map(|dialog| dialog.shown), Some(0));
    }

    #[test]
    fn blank_destination_answer_declines() {
        assert_eq!(non_empty_path(""), None);
        assert_eq!(non_empty_path("   "), None);
        assert_eq!(
            non_empty_path(" results/report.csv \n"),
            Some(PathBuf::from("results/report.csv"))
        );
    }
}
