//! Command-line tests for the supervideo binary

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the caller's environment and config file
fn supervideo(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("supervideo").unwrap();
    cmd.current_dir(dir)
        .env_remove("SUPERVIDEO_CONFIG")
        .env_remove("SUPERVIDEO_TIMEOUT")
        .env_remove("SUPERVIDEO_LOG")
        .env_remove("RUST_LOG")
        .env("SUPERVIDEO_FFMPEG", "/nonexistent/ffmpeg")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_exits_zero() {
    let temp_dir = TempDir::new().unwrap();
    supervideo(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("timelapse"))
        .stdout(predicate::str::contains("Examples"));
}

#[test]
fn test_no_arguments_prints_help() {
    let temp_dir = TempDir::new().unwrap();
    supervideo(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_concat_without_output_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    supervideo(temp_dir.path())
        .args(["concat", "a.mp4", "b.mp4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("concat requires --output"));
}

#[test]
fn test_timelapse_without_output_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    supervideo(temp_dir.path())
        .args(["timelapse", "video.mp4", "--speed", "0.05"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("timelapse requires --output"));
}

#[test]
fn test_split_without_range_file_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("video.mp4"), b"fake").unwrap();
    supervideo(temp_dir.path())
        .args(["split", "video.mp4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("video.txt"));
}

#[test]
fn test_missing_engine_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("video.mp4"), b"fake").unwrap();
    supervideo(temp_dir.path())
        .args(["info", "video.mp4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Transcoding engine not found"));
}

#[test]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("supervideo.toml"), "[engine]\nspeed = 1\n").unwrap();
    supervideo(temp_dir.path())
        .args(["info", "video.mp4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("supervideo.toml"));
}

#[cfg(unix)]
mod with_fake_engine {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    const INFO_SCRIPT: &str = r#"#!/bin/sh
cat >&2 <<'EOF'
Input #0, mov,mp4,m4a,3gp,3g2,mj2, from 'clip.mp4':
  Duration: 00:00:42.10, start: 0.000000, bitrate: 900 kb/s
    Stream #0:0(und): Video: h264 (High), yuv420p, 1280x720, 800 kb/s, 25 fps (default)
    Stream #0:1(und): Audio: aac (LC), 44100 Hz, stereo, fltp, 96 kb/s (default)
At least one output file must be specified
EOF
exit 1
"#;

    const WRITE_LAST_ARG_SCRIPT: &str = r#"#!/bin/sh
for last; do :; done
printf 'encoded' > "$last"
"#;

    fn install_engine(dir: &Path, script: &str) -> PathBuf {
        let path = dir.join("fake-ffmpeg");
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_info_report_from_engine_diagnostics() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), INFO_SCRIPT);
        fs::write(temp_dir.path().join("clip.mp4"), vec![0u8; 2048]).unwrap();

        supervideo(temp_dir.path())
            .args(["info", "clip.mp4", "--no-color"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .success()
            .stdout(predicate::str::contains("Size: 2.00 KB"))
            .stdout(predicate::str::contains("Duration: 00:00:42.10"))
            .stdout(predicate::str::contains("Channel #0:0:\n Video: h264 (High)"))
            .stdout(predicate::str::contains("Channel #0:1:\n Audio: aac (LC)"));
    }

    #[test]
    fn test_info_json_report() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), INFO_SCRIPT);
        fs::write(temp_dir.path().join("clip.mp4"), b"x").unwrap();

        let output = supervideo(temp_dir.path())
            .args(["info", "clip.mp4", "--format", "json"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .output()
            .unwrap();

        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(value["duration"], "00:00:42.10");
        assert_eq!(value["streams"][0]["media_type"], "video");
    }

    #[test]
    fn test_split_writes_clips_then_skips_on_rerun() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), WRITE_LAST_ARG_SCRIPT);
        fs::write(temp_dir.path().join("video.mp4"), b"fake").unwrap();
        fs::write(
            temp_dir.path().join("video.txt"),
            "00:00 00:05 intro.mp4\n00:05 00:10 main part.mp4\n",
        )
        .unwrap();

        supervideo(temp_dir.path())
            .args(["split", "video.mp4"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .success()
            .stdout(predicate::str::contains("File intro.mp4...Ok"))
            .stdout(predicate::str::contains("File main part.mp4...Ok"));

        assert!(temp_dir.path().join("main part.mp4").exists());

        supervideo(temp_dir.path())
            .args(["split", "video.mp4"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .success()
            .stdout(predicate::str::contains("File intro.mp4...Exists. Skipping"));
    }

    const FAILING_SCRIPT: &str = r#"#!/bin/sh
echo "clip.mp4: Permission denied" >&2
exit 1
"#;

    #[test]
    fn test_split_failures_reported_once_on_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), FAILING_SCRIPT);
        fs::write(temp_dir.path().join("video.mp4"), b"fake").unwrap();
        fs::write(
            temp_dir.path().join("video.txt"),
            "00:00 00:05 clip.mp4\nonly-two tokens\n",
        )
        .unwrap();

        supervideo(temp_dir.path())
            .args(["split", "video.mp4"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("File clip.mp4...Error 1 clip.mp4: Permission denied"))
            .stdout(predicate::str::contains("Malformed range entry on line 2"))
            .stderr(predicate::str::contains("Permission denied").not())
            .stderr(predicate::str::contains("Malformed range entry").not());
    }

    #[test]
    fn test_config_file_load_is_logged() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), INFO_SCRIPT);
        fs::write(temp_dir.path().join("clip.mp4"), b"x").unwrap();
        fs::write(
            temp_dir.path().join("supervideo.toml"),
            "[logging]\nlevel = \"info\"\n",
        )
        .unwrap();

        supervideo(temp_dir.path())
            .args(["info", "clip.mp4"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .success()
            .stderr(predicate::str::contains("Loaded configuration from supervideo.toml"));
    }

    #[test]
    fn test_concat_leaves_no_manifest_behind() {
        let temp_dir = TempDir::new().unwrap();
        let engine = install_engine(temp_dir.path(), WRITE_LAST_ARG_SCRIPT);

        supervideo(temp_dir.path())
            .args(["concat", "a.mp4", "b.mp4", "-o", "joined.mp4"])
            .env("SUPERVIDEO_FFMPEG", &engine)
            .assert()
            .success()
            .stdout(predicate::str::contains("joined.mp4"));

        let names: Vec<String> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().all(|n| !n.starts_with(".supervideo-concat-")));
        assert!(names.contains(&"joined.mp4".to_string()));
    }
}
