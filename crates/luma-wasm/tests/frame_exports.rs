#![cfg(target_arch = "wasm32")]

use luma_wasm::{
    apply_grayscale, apply_grayscale_range, frame_buffer_capacity, frame_buffer_ptr, read_frame,
    write_frame,
};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn frame_buffer_ptr_is_non_null_and_stable() {
    let first = frame_buffer_ptr();
    let second = frame_buffer_ptr();
    assert_ne!(first, 0);
    assert_eq!(first, second);
}

#[wasm_bindgen_test]
fn capacity_covers_exactly_480x480_rgba() {
    assert_eq!(frame_buffer_capacity(), 480 * 480 * 4);
}

#[wasm_bindgen_test]
fn grayscale_round_trips_through_the_exports() {
    write_frame(&[200, 100, 50, 255], 0).expect("write_frame");
    apply_grayscale(1, 1).expect("apply_grayscale");

    let out = read_frame(0, 4).expect("read_frame");
    assert_eq!(out.to_vec(), vec![117, 117, 117, 255]);
}

#[wasm_bindgen_test]
fn ranged_export_matches_the_full_pass() {
    write_frame(&[255, 0, 0, 9, 0, 255, 0, 8], 0).expect("write_frame");
    apply_grayscale_range(0, 2).expect("apply_grayscale_range");

    let out = read_frame(0, 8).expect("read_frame");
    assert_eq!(out.to_vec(), vec![54, 54, 54, 9, 182, 182, 182, 8]);
}

#[wasm_bindgen_test]
fn invalid_dimensions_surface_as_js_errors() {
    assert!(apply_grayscale(-1, 1).is_err());
    assert!(apply_grayscale(480, 481).is_err());
    assert!(read_frame(0, frame_buffer_capacity() + 1).is_err());
}
