use once_cell::sync::Lazy;
use std::{
    env,
    ffi::OsStr,
    fs,
    path::{Path, PathBuf},
    process::Command,
};
use uuid::Uuid;

pub struct TestCli {
    cli_path: PathBuf,
}

static TEST_CLI: Lazy<TestCli> = Lazy::new(|| TestCli {
    cli_path: PathBuf::from(env!("CARGO_BIN_EXE_dfo")),
});

impl TestCli {
    pub fn get() -> &'static Self {
        &TEST_CLI
    }

    pub fn command(&self) -> Command {
        let mut command = Command::new(&self.cli_path);
        command.env_remove("RUST_LOG").env("NO_COLOR", "1");
        command
    }

    pub fn run(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output(self.command().args(args))
    }

    pub fn run_and_error(&self, args: impl IntoIterator<Item = impl AsRef<OsStr>>) -> String {
        self.output_error(self.command().args(args))
    }

    pub fn output(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if !output.status.success() {
            panic!(
                "failed to run command:\n{}",
                String::from_utf8_lossy(&output.stderr)
            );
        }

        String::from_utf8(output.stdout).unwrap()
    }

    pub fn output_error(&self, command: &mut Command) -> String {
        let output = command.output().unwrap();

        if output.status.success() {
            panic!(
                "succeeded running command (expected failure):\n{}",
                String::from_utf8_lossy(&output.stdout)
            );
        }

        String::from_utf8(output.stderr).unwrap()
    }
}

/// An options file in the system temp dir, removed on drop.
pub struct TestOptionsFile {
    path: PathBuf,
}

impl TestOptionsFile {
    pub fn new(contents: &str) -> Self {
        let path = Self::unused();
        fs::write(&path.path, contents).unwrap();
        path
    }

    pub fn unused() -> Self {
        let path = env::temp_dir().join(format!("dfo-test-options-{}.json", Uuid::new_v4()));
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn arg(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

impl Drop for TestOptionsFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
