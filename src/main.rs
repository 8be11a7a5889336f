use todo::cli::error::user_error;
use todo::cli::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    #[cfg(windows)]
    let _ = enable_ansi_support::enable_ansi_support();

    if let Err(e) = run() {
        // Show the error chain, outermost first
        let message = e
            .chain()
            .map(|cause| cause.to_string())
            .collect::<Vec<_>>()
            .join("\n  Caused by: ");
        user_error(&message);
    }
}
