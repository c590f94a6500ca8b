/// ProgressReporter port for user-facing progress and warnings
///
/// Output goes to a side channel (stderr for the CLI) so it never mixes
/// with the VEX document written to stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports progress through the batch of package configurations
    ///
    /// # Arguments
    /// * `current` - Number of packages processed so far
    /// * `total` - Number of packages in the batch
    /// * `message` - Optional message, usually the current package name
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the generation
    fn report_completion(&self, message: &str);
}
