use std::path::PathBuf;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_cohortviz")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "cohortviz.exe"
            } else {
                "cohortviz"
            });
            p
        })
}

#[test]
fn cli_frame_writes_png_and_svg() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    for name in ["out.png", "out.svg"] {
        let out_path = dir.join(name);
        let _ = std::fs::remove_file(&out_path);

        let status = std::process::Command::new(exe())
            .args([
                "frame",
                "--in",
                "tests/data/processed_data.csv",
                "--year",
                "2001",
                "--out",
            ])
            .arg(&out_path)
            .status()
            .unwrap();

        assert!(status.success());
        assert!(out_path.exists());
    }
}

#[test]
fn cli_play_writes_one_svg_per_year() {
    let dir = PathBuf::from("target").join("cli_smoke_play");
    let _ = std::fs::remove_dir_all(&dir);

    let status = std::process::Command::new(exe())
        .args(["play", "--in", "tests/data/processed_data.csv", "--out-dir"])
        .arg(&dir)
        .status()
        .unwrap();

    assert!(status.success());
    for year in 2000..=2002 {
        assert!(dir.join(format!("{year}.svg")).exists());
    }
}

#[test]
fn cli_reports_missing_input() {
    let status = std::process::Command::new(exe())
        .args(["inspect", "--in", "tests/data/nope.csv"])
        .status()
        .unwrap();
    assert!(!status.success());
}
