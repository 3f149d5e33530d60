use log::{Level, Log};
use melior::diagnostic::{Diagnostic, DiagnosticSeverity};

fn level(severity: DiagnosticSeverity) -> (Level, &'static str) {
    match severity {
        DiagnosticSeverity::Error => (Level::Error, ""),
        DiagnosticSeverity::Warning => (Level::Warn, ""),
        DiagnosticSeverity::Note => (Level::Info, "note: "),
        DiagnosticSeverity::Remark => (Level::Info, "remark: "),
    }
}

fn log_msg(diag: &Diagnostic, logger: &dyn Log) {
    let (level, prefix) = level(diag.severity());
    log::log!(logger: logger, level, "[{}] {prefix}{}", diag.location(), diag);
}

fn log_notes(diag: &Diagnostic, logger: &dyn Log) -> Result<(), bool> {
    for note_no in 0..diag.note_count() {
        match diag.note(note_no) {
            Ok(note) => {
                log_msg(&note, logger);
                log_notes(&note, logger)?;
            }
            Err(err) => {
                log::error!(logger: logger, "Error while obtaining note #{note_no}: {err}");
                return Err(false);
            }
        }
    }
    Ok(())
}

/// Diagnostics handler that writes the diagnostics to the given [`Log`].
///
/// Returns whether the diagnostic was handled; errors are left to other handlers too.
pub fn log_diagnostic(diag: Diagnostic, logger: &dyn Log) -> bool {
    log_msg(&diag, logger);
    if let Err(res) = log_notes(&diag, logger) {
        return res;
    }

    !matches!(diag.severity(), DiagnosticSeverity::Error)
}
