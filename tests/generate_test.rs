use std::fs;
use std::path::Path;
use std::process::Command;

use gradientgen::cli::parse_keypoints;
use gradientgen::{create_colorschemes, GradientTable, Options};
use pretty_assertions::assert_eq;

const ARTIFACTS: [&str; 6] = [
    "rgb.h",
    "rgb.c",
    "rgb_discrete.png",
    "rgb_soft.png",
    "rgb_mixed.png",
    "rgb_mixed_exp.png",
];

fn table(args: &[&str]) -> GradientTable {
    GradientTable::new(parse_keypoints(args).unwrap()).unwrap()
}

fn options(name: &str, width: u32, height: u32, dir: &Path) -> Options {
    Options {
        name: name.to_string(),
        width,
        height,
        out_dir: dir.to_path_buf(),
    }
}

/// Bytes of `<sampler>_data[]` in a generated source file.
fn data_bytes(source: &str, sampler: &str) -> Vec<u8> {
    let open = format!("static const unsigned char {sampler}_data[] = {{\n    ");
    let start = source.find(&open).expect("array present") + open.len();
    let end = start + source[start..].find("\n};").expect("array closed");
    source[start..end]
        .split(", ")
        .map(|b| b.parse().expect("byte"))
        .collect()
}

fn png_size(path: &Path) -> (u32, u32) {
    let decoder = png::Decoder::new(fs::File::open(path).unwrap());
    let reader = decoder.read_info().unwrap();
    (reader.info().width, reader.info().height)
}

#[test]
fn writes_all_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let g = table(&["#ff0000", "0.0", "#00ff00", "0.5", "#0000ff", "1.0"]);
    let written = create_colorschemes(&g, &options("rgb", 7, 2, dir.path())).unwrap();

    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ARTIFACTS);
    for name in ARTIFACTS {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }

    assert_eq!(png_size(&dir.path().join("rgb_discrete.png")), (7, 3));
    for s in ["soft", "mixed", "mixed_exp"] {
        assert_eq!(png_size(&dir.path().join(format!("rgb_{s}.png"))), (7, 2));
    }
}

#[test]
fn source_tables() {
    let dir = tempfile::tempdir().unwrap();
    let g = table(&["#ff0000", "0.0", "#00ff00", "0.5", "#0000ff", "1.0"]);
    create_colorschemes(&g, &options("rgb", 1, 2, dir.path())).unwrap();
    let source = fs::read_to_string(dir.path().join("rgb.c")).unwrap();
    assert!(source.is_ascii());
    assert!(!source.contains('\r'));

    let discrete = data_bytes(&source, "discrete");
    assert_eq!(
        discrete,
        [0, 0, 0, 0, 255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255]
    );
    for s in ["soft", "mixed", "mixed_exp"] {
        let bytes = data_bytes(&source, s);
        assert_eq!(bytes.len(), 4 * (2 + 1), "{s}");
        assert_eq!(&bytes[..4], [0, 0, 0, 0], "{s}");
    }
    // Row 1 sits on the green keypoint, which is also the nearest one.
    assert_eq!(&data_bytes(&source, "mixed")[8..], [0, 255, 0, 255]);

    for s in ["discrete", "soft", "mixed", "mixed_exp"] {
        assert!(source.contains(&format!(
            "static const heatmap_colorscheme_t {s} = {{ {s}_data, \
             sizeof({s}_data)/sizeof({s}_data[0]/4) }};\n\
             const heatmap_colorscheme_t* heatmap_cs_rgb_{s} = &{s};\n"
        )));
    }
}

#[test]
fn soft_black_to_white() {
    let dir = tempfile::tempdir().unwrap();
    let g = table(&["#000000", "0.0", "#ffffff", "1.0"]);
    create_colorschemes(&g, &options("bw", 1, 2, dir.path())).unwrap();
    let source = fs::read_to_string(dir.path().join("bw.c")).unwrap();
    let soft = data_bytes(&source, "soft");
    assert_eq!(&soft[..8], [0, 0, 0, 0, 0, 0, 0, 0]);
    let (r, g, b, a) = (soft[8], soft[9], soft[10], soft[11]);
    assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1, "{r} {g} {b}");
    assert_eq!(a, 255);
}

#[test]
fn header_declares_handles() {
    let dir = tempfile::tempdir().unwrap();
    let g = table(&["#7f7f7f", "0.0", "#7f7f7f", "1.0"]);
    create_colorschemes(&g, &options("Gray_2", 1, 4, dir.path())).unwrap();
    let header = fs::read_to_string(dir.path().join("Gray_2.h")).unwrap();
    assert!(header.contains("#ifndef _HEATMAP_COLORSCHEMES_GRAY_2_H\n"));
    assert!(header.contains("#define _HEATMAP_COLORSCHEMES_GRAY_2_H\n"));
    for s in ["discrete", "soft", "mixed", "mixed_exp"] {
        assert!(header.contains(&format!(
            "extern const heatmap_colorscheme_t* heatmap_cs_Gray_2_{s};\n"
        )));
    }
    assert!(header.ends_with("#endif /* _HEATMAP_COLORSCHEMES_GRAY_2_H */\n"));
}

#[test]
fn deterministic() {
    let g = table(&["#ff0000", "0.0", "#00ff00", "0.5", "#0000ff", "1.0"]);
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    create_colorschemes(&g, &options("rgb", 4, 64, a.path())).unwrap();
    create_colorschemes(&g, &options("rgb", 4, 64, b.path())).unwrap();
    for name in ARTIFACTS {
        assert!(
            fs::read(a.path().join(name)).unwrap() == fs::read(b.path().join(name)).unwrap(),
            "{name} differs"
        );
    }
}

#[test]
fn cli_generates_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gradientgen"))
        .current_dir(dir.path())
        .args(["--name", "rgb", "--w", "2", "--h", "8"])
        .args(["#ff0000", "0.0", "#00ff00", "0.5", "#0000ff", "1.0"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    for name in ARTIFACTS {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }
}

#[test]
fn cli_rejects_invalid_color() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gradientgen"))
        .current_dir(dir.path())
        .args(["#gghhii", "0.5", "#000000", "0.7"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.contains("#gghhii"), "{stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_rejects_odd_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gradientgen"))
        .current_dir(dir.path())
        .args(["#000000", "0.0", "#ffffff"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Need at least two gradient keypoints"), "{stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_bad_option_is_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gradientgen"))
        .current_dir(dir.path())
        .args(["--w", "abc", "#000000", "0.0", "#ffffff", "1.0"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    assert!(stderr.starts_with("gradientgen: "), "{stderr}");
    assert!(stderr.contains("abc"), "{stderr}");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn cli_error_keeps_cause() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_gradientgen"))
        .current_dir(dir.path())
        .args(["#000000", "0.0", "#ffffff", "1.5"])
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr,
        "gradientgen: Bad gradient keypoints: Invalid keypoint position: 1.5: \
         keypoints must lie within 0.0 and 1.0\n"
    );
}
