use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use std::time::{SystemTime, UNIX_EPOCH};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
    pub log_path: PathBuf,
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis())
}

fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_undashed") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) {
        "undashed.exe"
    } else {
        "undashed"
    };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve undashed binary path for integration test"),
    }
}

/// Run the binary with a scratch HOME so default config and log paths never
/// touch the invoking user's real home directory.
pub fn run_cli_case(case_name: &str, args: &[&str]) -> CmdResult {
    run_cli_case_with_env(case_name, args, &[])
}

pub fn run_cli_case_with_env(case_name: &str, args: &[&str], envs: &[(&str, &str)]) -> CmdResult {
    let root = std::env::temp_dir().join("undashed-test-logs");
    fs::create_dir_all(&root).expect("create temp test log dir");

    let case_id = format!("{}-{}", sanitize(case_name), now_millis());
    let log_path = root.join(format!("{case_id}.log"));
    let scratch_home = root.join(format!("{case_id}-home"));
    fs::create_dir_all(&scratch_home).expect("create scratch home");

    let bin_path = resolve_bin_path();

    let mut command = Command::new(&bin_path);
    command
        .args(args)
        .env("HOME", &scratch_home)
        .env("RUST_BACKTRACE", "1");
    for (name, value) in envs {
        command.env(name, value);
    }

    let output = command.output().expect("execute undashed command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    let mut log_content = String::new();
    log_content.push_str(&format!("case: {case_name}\nargs: {args:?}\n"));
    log_content.push_str(&format!("status: {:?}\n", output.status.code()));
    log_content.push_str(&format!("--- stdout ---\n{stdout}\n--- stderr ---\n{stderr}\n"));
    let _ = fs::write(&log_path, log_content);

    CmdResult {
        status: output.status,
        stdout,
        stderr,
        log_path,
    }
}

/// Create a fixture directory populated with the given entry names.
pub fn fixture_dir(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), b"").expect("create fixture file");
    }
}
