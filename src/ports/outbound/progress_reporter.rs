/// ProgressReporter port for user-facing diagnostics
///
/// Everything reported here goes to a side channel (stderr for the CLI) so
/// it never mixes with the formulated output.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
