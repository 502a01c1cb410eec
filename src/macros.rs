/// Prints a formatted message to stderr and exits the process with status 1.
///
/// ```no_run
/// # use aws_caller::fast_exit;
/// let account = "";
/// if account.is_empty() {
///     fast_exit!("no account id for {}", "default");
/// }
/// ```
#[macro_export]
macro_rules! fast_exit {
    ($($arg:tt)*) => {{
        eprintln!($($arg)*);
        std::process::exit(1);
    }};
}
