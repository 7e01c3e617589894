/// Configuration for [`IntInput`](crate::IntInput).
///
/// # Examples
///
/// ```rust
/// use drillkit::InputOptions;
///
/// let options = InputOptions {
///     sentinel: "quit".into(),
///     max_line_bytes: Some(64),
///     ..Default::default()
/// };
/// assert!(options.echo_errors);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// A line exactly equal to this text ends input, just like closing the
    /// stream does. It is checked before the line is parsed.
    ///
    /// # Default
    ///
    /// `"q"`
    pub sentinel: String,

    /// Upper bound, in bytes and including the terminator, for the buffer
    /// holding one line. A longer line is reported as an allocation failure.
    ///
    /// # Default
    ///
    /// `None` (bounded only by available memory)
    pub max_line_bytes: Option<usize>,

    /// Bytes reserved for the line buffer up front.
    ///
    /// # Default
    ///
    /// `0`
    pub initial_line_capacity: usize,

    /// Whether recoverable errors are written to the diagnostics writer
    /// before the prompt is repeated.
    ///
    /// # Default
    ///
    /// `true`
    pub echo_errors: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            sentinel: String::from("q"),
            max_line_bytes: None,
            initial_line_capacity: 0,
            echo_errors: true,
        }
    }
}
