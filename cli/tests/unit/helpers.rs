//! Shared test doubles for the application ports.
//!
//! `FakeRunner` answers `find` with a canned descriptor listing, `launchctl
//! list` with a canned process table, and `load`/`unload` with success unless
//! the descriptor was marked as failing. Every call is recorded.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};
use std::sync::Mutex;

use anyhow::Result;
use lunchy_cli::application::ports::{CommandRunner, LocalFs, ProgressReporter};
use lunchy_cli::domain::config::LunchyConfig;

pub const AGENTS_DIR: &str = "/agents";

pub fn config() -> LunchyConfig {
    LunchyConfig::new(AGENTS_DIR)
}

// ── Cross-platform ExitStatus construction ───────────────────────────────────

#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── FakeRunner ───────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeRunner {
    listing: String,
    find_fails: bool,
    spawn_fails: bool,
    process_list: Option<String>,
    failing: HashSet<(String, String)>,
    interactive_code: i32,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeRunner {
    /// A runner whose `find` reports `names` under `/agents`.
    pub fn with_descriptors(names: &[&str]) -> Self {
        let listing = names
            .iter()
            .map(|n| format!("{AGENTS_DIR}/{n}.plist\n"))
            .collect();
        Self {
            listing,
            ..Self::default()
        }
    }

    pub fn find_fails(mut self) -> Self {
        self.find_fails = true;
        self
    }

    pub fn spawn_fails(mut self) -> Self {
        self.spawn_fails = true;
        self
    }

    pub fn process_list(mut self, table: &str) -> Self {
        self.process_list = Some(table.to_string());
        self
    }

    /// Make `<verb> <name>` exit 1.
    pub fn failing(mut self, verb: &str, name: &str) -> Self {
        self.failing.insert((verb.to_string(), name.to_string()));
        self
    }

    pub fn interactive_exit(mut self, code: i32) -> Self {
        self.interactive_code = code;
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().expect("lock").clone()
    }

    /// `(verb, name)` for every load/unload issued, in order.
    pub fn control_calls(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter(|c| c[0] == "launchctl" && c.len() == 3)
            .map(|c| {
                let name = Path::new(&c[2])
                    .file_stem()
                    .expect("stem")
                    .to_string_lossy()
                    .into_owned();
                (c[1].clone(), name)
            })
            .collect()
    }

    fn record(&self, program: &str, args: &[&str]) {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(ToString::to_string));
        self.calls.lock().expect("lock").push(call);
    }
}

impl CommandRunner for FakeRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.record(program, args);
        if self.spawn_fails {
            anyhow::bail!("failed to spawn {program}");
        }
        if program == "find" {
            if self.find_fails {
                return Ok(err_output(1, b"find: No such file or directory"));
            }
            return Ok(ok_output(self.listing.as_bytes()));
        }
        match args {
            ["list"] => Ok(match &self.process_list {
                Some(table) => ok_output(table.as_bytes()),
                None => err_output(1, b""),
            }),
            [verb, path] => {
                let name = Path::new(path)
                    .file_stem()
                    .expect("stem")
                    .to_string_lossy()
                    .into_owned();
                if self.failing.contains(&((*verb).to_string(), name)) {
                    Ok(err_output(1, b"Could not find specified service"))
                } else {
                    Ok(ok_output(b""))
                }
            }
            _ => anyhow::bail!("unexpected call {program} {args:?}"),
        }
    }

    async fn run_interactive(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        self.record(program, args);
        Ok(exit_status(self.interactive_code))
    }
}

// ── MemoryFs ─────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryFs {
    files: Mutex<BTreeMap<PathBuf, Vec<u8>>>,
    unreadable: HashSet<PathBuf>,
    remove_fails: bool,
    copies: Mutex<Vec<(PathBuf, PathBuf)>>,
}

impl MemoryFs {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        Self {
            files: Mutex::new(
                files
                    .iter()
                    .map(|(p, c)| (PathBuf::from(p), c.as_bytes().to_vec()))
                    .collect(),
            ),
            ..Self::default()
        }
    }

    pub fn with_bytes(self, path: &str, bytes: &[u8]) -> Self {
        self.files
            .lock()
            .expect("lock")
            .insert(PathBuf::from(path), bytes.to_vec());
        self
    }

    pub fn unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(PathBuf::from(path));
        self
    }

    pub fn remove_fails(mut self) -> Self {
        self.remove_fails = true;
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files
            .lock()
            .expect("lock")
            .get(Path::new(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn copy_count(&self) -> usize {
        self.copies.lock().expect("lock").len()
    }
}

impl LocalFs for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.files.lock().expect("lock").contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes)
            .map_err(|_| anyhow::anyhow!("stream did not contain valid UTF-8: {}", path.display()))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        if self.unreadable.contains(path) {
            anyhow::bail!("permission denied: {}", path.display());
        }
        self.files
            .lock()
            .expect("lock")
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
    }

    fn remove_file(&self, path: &Path) -> Result<()> {
        if self.remove_fails {
            anyhow::bail!("operation not permitted: {}", path.display());
        }
        self.files
            .lock()
            .expect("lock")
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", path.display()))
    }

    fn copy(&self, from: &Path, to: &Path) -> Result<()> {
        let mut files = self.files.lock().expect("lock");
        let content = files
            .get(from)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no such file: {}", from.display()))?;
        files.insert(to.to_path_buf(), content);
        self.copies
            .lock()
            .expect("lock")
            .push((from.to_path_buf(), to.to_path_buf()));
        Ok(())
    }
}

// ── RecordingReporter ────────────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingReporter {
    messages: Mutex<Vec<(&'static str, String)>>,
}

impl RecordingReporter {
    pub fn messages(&self, level: &str) -> Vec<String> {
        self.messages
            .lock()
            .expect("lock")
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    fn push(&self, level: &'static str, message: &str) {
        self.messages
            .lock()
            .expect("lock")
            .push((level, message.to_string()));
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push("step", message);
    }
    fn success(&self, message: &str) {
        self.push("success", message);
    }
    fn warn(&self, message: &str) {
        self.push("warn", message);
    }
    fn error(&self, message: &str) {
        self.push("error", message);
    }
}
