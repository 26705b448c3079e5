//! Tests for the carousel engine and icon resolution.

mod common;

use std::fs;
use std::path::PathBuf;

use common::{write_ico, write_png};
use icon_carousel::carousel::{prepare_icon, resolve_icons, IconCarousel, IconData, StartError};
use icon_carousel::error::IconError;

fn carousel(count: usize) -> IconCarousel {
    let mut carousel = IconCarousel::new();
    carousel.load((0..count).map(|i| PathBuf::from(format!("{i}.ico"))).collect());
    carousel
}

// === Cycling ===

#[test]
fn cycle_returns_to_start_after_n_ticks() {
    for n in 2..=5 {
        let mut c = carousel(n);
        c.start().unwrap();
        for _ in 0..n {
            c.advance();
        }
        assert_eq!(c.current_index(), 0, "period {n}");
    }
}

#[test]
fn advance_visits_icons_in_order() {
    let mut c = carousel(3);
    let visited: Vec<usize> = (0..4).map(|_| c.advance()).collect();
    assert_eq!(visited, [1, 2, 0, 1]);
}

#[test]
fn single_icon_never_moves() {
    let mut c = carousel(1);
    assert_eq!(c.advance(), 0);
    assert_eq!(c.advance(), 0);
}

#[test]
fn start_requires_two_icons() {
    for n in 0..2 {
        let mut c = carousel(n);
        assert_eq!(c.start(), Err(StartError::NotEnoughIcons { found: n }));
        assert!(!c.is_running());
    }
}

#[test]
fn stop_keeps_position() {
    let mut c = carousel(3);
    c.start().unwrap();
    c.advance();
    c.stop();
    assert!(!c.is_running());
    assert_eq!(c.current_index(), 1);
}

// === Resolution ===

#[test]
fn existing_configured_icons_keep_their_order() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("b.png");
    let a = dir.path().join("a.ico");
    write_png(&b);
    write_ico(&a);
    let missing = dir.path().join("gone.ico");

    let icons = resolve_icons(&[b.clone(), missing, a.clone()], &dir.path().join("Icons"));
    assert_eq!(icons, [b, a]);
}

#[test]
fn fallback_scan_orders_by_extension_then_name() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.png", "a.ico", "c.bmp", "a.png", "readme.txt"] {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    let icons = resolve_icons(&[dir.path().join("missing.ico")], dir.path());
    let names: Vec<String> = icons
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["a.ico", "a.png", "b.png", "c.bmp"]);
}

#[test]
fn nothing_found_anywhere_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(resolve_icons(&[], &dir.path().join("Icons")).is_empty());
}

// === Preparation ===

#[test]
fn ico_files_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tray.ico");
    write_ico(&path);

    let icon = prepare_icon(&path).unwrap();
    assert!(icon.is_native());
}

#[test]
fn png_is_scaled_to_small_icon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.png");
    write_png(&path);

    let icon = prepare_icon(&path).unwrap();
    match icon.data {
        IconData::Rgba {
            width,
            height,
            pixels,
        } => {
            assert_eq!((width, height), (16, 16));
            assert_eq!(pixels.len(), 16 * 16 * 4);
        }
        IconData::File => panic!("png should be decoded"),
    }
}

#[test]
fn unknown_extension_is_rejected() {
    let err = prepare_icon(&PathBuf::from("notes.txt")).unwrap_err();
    assert!(matches!(err, IconError::UnsupportedFormat(_)));
}

#[test]
fn repeated_configured_icon_is_kept_once() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.ico");
    let b = dir.path().join("b.ico");
    write_ico(&a);
    write_ico(&b);

    let icons = resolve_icons(&[a.clone(), b.clone(), a.clone()], dir.path());
    assert_eq!(icons, [a, b]);
}
