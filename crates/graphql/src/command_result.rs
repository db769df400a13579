use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// Successful output on stdout, with a summary for the user on stderr.
    pub fn stdout_with_summary(
        stdout: String,
        summary: std::fmt::Arguments<'_>,
    ) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: Some(format!("{summary}")),
            stdout: Some(stdout),
        }
    }
}
