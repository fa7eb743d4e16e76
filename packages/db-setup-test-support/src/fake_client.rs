//! Recording stand-in for the external database client.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A stub client binary that records every invocation's argument vector and
/// exits with a fixed code.
///
/// The stub is a shell script in a temporary directory. It appends one line
/// per argument to a log file, then a `--end--` marker line, so tests can
/// recover the exact argv of each run without a database server anywhere in
/// sight.
pub struct FakeClient {
    // Keeps the script and log alive until the fake is dropped.
    _dir: TempDir,
    program: PathBuf,
    record: PathBuf,
}

impl FakeClient {
    /// Creates a stub that exits with `exit_code` on every invocation.
    ///
    /// # Panics
    ///
    /// Panics if the temporary script cannot be written (test-only code).
    pub fn with_exit_code(exit_code: i32) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir for fake client");
        let record = dir.path().join("invocations.log");
        let program = dir.path().join("fake-client");

        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$@\" >> \"{record}\"\n\
             echo '--end--' >> \"{record}\"\n\
             exit {exit_code}\n",
            record = record.display(),
        );
        fs::write(&program, script).expect("write fake client script");

        let mut perms = fs::metadata(&program)
            .expect("stat fake client script")
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&program, perms).expect("mark fake client executable");

        Self {
            _dir: dir,
            program,
            record,
        }
    }

    /// Path to pass in place of the real client binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Argument vectors of every completed invocation, oldest first.
    pub fn invocations(&self) -> Vec<Vec<String>> {
        let contents = match fs::read_to_string(&self.record) {
            Ok(contents) => contents,
            Err(_) => return Vec::new(),
        };

        let mut invocations = Vec::new();
        let mut current = Vec::new();
        for line in contents.lines() {
            if line == "--end--" {
                invocations.push(std::mem::take(&mut current));
            } else {
                current.push(line.to_string());
            }
        }
        invocations
    }
}
