use contracts::shared::tabs::Diagnostic;
use leptos::prelude::*;

/// Hands each diagnostic to `on_diagnostic`, or writes it to the console
/// when the host did not ask for them.
pub fn report_diagnostics(diagnostics: &[Diagnostic], on_diagnostic: Option<Callback<Diagnostic>>) {
    for diagnostic in diagnostics {
        match on_diagnostic {
            Some(handler) => handler.run(diagnostic.clone()),
            None => log::warn!("{}", diagnostic),
        }
    }
}
