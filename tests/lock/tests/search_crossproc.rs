//! Cross-process determinism test.
//!
//! Spawns the `trace_fixture` binary under several environment variants and
//! asserts that all produce identical output. Search results must not depend
//! on cwd, locale, or unrelated env vars.

use std::path::{Path, PathBuf};
use std::process::Command;

use maze_kernel::proof::hash::ContentHash;

/// `cargo test` puts test binaries in `target/<profile>/deps/`; the
/// `trace_fixture` binary lives one level up.
fn binary_path() -> PathBuf {
    let mut path = std::env::current_exe()
        .expect("can resolve test binary path")
        .parent()
        .expect("binary dir exists")
        .parent()
        .expect("deps parent exists")
        .to_path_buf();
    path.push("trace_fixture");
    path
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../..")
}

/// Run the binary with the given cwd, optional layout file, and env
/// overrides. Returns stdout.
fn run_variant(work_dir: &Path, layout: Option<&Path>, env_overrides: &[(&str, &str)]) -> String {
    let bin = binary_path();
    let mut command = Command::new(&bin);
    if let Some(layout) = layout {
        command.arg(layout);
    }
    command
        .current_dir(work_dir)
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("RUST_LOG");
    for &(key, val) in env_overrides {
        command.env(key, val);
    }

    let output = command.output().unwrap_or_else(|e| {
        panic!(
            "failed to spawn {} (work_dir={}, overrides={env_overrides:?}): {e}",
            bin.display(),
            work_dir.display()
        )
    });
    assert!(
        output.status.success(),
        "trace_fixture exited with {}: stderr={}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is valid UTF-8")
}

/// The `key=` line of fixture output, parsed as a content hash.
fn digest_line(output: &str, key: &str) -> ContentHash {
    let prefix = format!("{key}=");
    let raw = output
        .lines()
        .find_map(|line| line.strip_prefix(prefix.as_str()))
        .unwrap_or_else(|| panic!("missing {key} line in {output:?}"));
    ContentHash::parse(raw).unwrap_or_else(|| panic!("{key} is not a content hash: {raw:?}"))
}

#[test]
fn crossproc_digests_are_sha256() {
    let output = run_variant(&workspace_root(), None, &[]);
    for key in ["layout_digest", "trace_digest", "chain_digest"] {
        let hash = digest_line(&output, key);
        assert_eq!(hash.algorithm(), "sha256", "{key}");
        assert_eq!(hash.hex_digest().len(), 64, "{key}");
        assert!(
            hash.hex_digest().bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
            "{key} is not lowercase hex"
        );
    }
    assert_ne!(
        digest_line(&output, "trace_digest"),
        digest_line(&output, "chain_digest")
    );
}

#[test]
fn crossproc_determinism_env_variants() {
    let root = workspace_root();
    let baseline = run_variant(&root, None, &[]);

    assert!(baseline.contains("termination=found"));
    assert!(baseline.contains("path_len=15"));

    let alt_cwd = std::env::temp_dir();
    assert_eq!(
        baseline,
        run_variant(&alt_cwd, None, &[]),
        "output differs when cwd changes"
    );
    assert_eq!(
        baseline,
        run_variant(&root, None, &[("LC_ALL", "C"), ("LANG", "C")]),
        "output differs when LC_ALL=C LANG=C"
    );
    assert_eq!(
        baseline,
        run_variant(
            &root,
            None,
            &[
                ("MAZE_NOISE", "should_not_matter"),
                ("TZ", "America/New_York"),
                ("RUST_LOG", "debug"),
            ],
        ),
        "output differs with spurious env vars"
    );
}

#[test]
fn crossproc_layout_file_matches_in_process() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("walled.txt");
    std::fs::write(&file, "S#.\n##.\n..E\n").unwrap();

    let first = run_variant(&workspace_root(), Some(&file), &[]);
    let second = run_variant(dir.path(), Some(&file), &[]);
    assert_eq!(first, second);
    assert!(first.contains("termination=not_found"));
    assert!(first.contains("steps=1"));

    let grid = lock_tests::layout("S#.\n##.\n..E");
    assert_eq!(digest_line(&first, "layout_digest"), grid.layout_digest());
}
