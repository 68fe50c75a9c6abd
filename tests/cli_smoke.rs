use std::{fs::File, path::PathBuf, process::Command};

use image::{Delay, Frame, RgbaImage, codecs::gif::GifEncoder};

fn bootanim_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_bootanim"))
}

#[test]
fn cli_list_prints_the_device_table() {
    let output = bootanim_cmd().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("MAKO 768x1270"), "{stdout}");
}

#[test]
fn cli_build_then_preview() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let gif_path = dir.join("input.gif");
    {
        let file = File::create(&gif_path).unwrap();
        let mut encoder = GifEncoder::new(file);
        for _ in 0..2 {
            let buffer = RgbaImage::from_pixel(10, 10, image::Rgba([200, 0, 0, 255]));
            let frame = Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(50, 1));
            encoder.encode_frame(frame).unwrap();
        }
    }

    let out_path = dir.join("smoke.zip");
    let _ = std::fs::remove_file(&out_path);

    let status = bootanim_cmd()
        .arg("build")
        .arg("mako")
        .arg(&gif_path)
        .arg("-o")
        .arg(&out_path)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(out_path.exists());

    let output = bootanim_cmd().arg("preview").arg(&out_path).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("768x1270"), "{stdout}");
    assert!(stdout.contains("2 frame(s)"), "{stdout}");
    assert!(stdout.contains("part part0"), "{stdout}");
}

#[test]
fn cli_build_rejects_bad_dimensions() {
    let dir = PathBuf::from("target").join("cli_smoke");
    std::fs::create_dir_all(&dir).unwrap();

    let status = bootanim_cmd()
        .arg("build")
        .arg("not-a-device")
        .arg(dir.join("missing.gif"))
        .status()
        .unwrap();
    assert!(!status.success());
}
