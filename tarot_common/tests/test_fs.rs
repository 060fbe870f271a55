/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
#![allow(unused)]

use std::fs;
use tarot_common::fs::{ensure_dir,file_path_with_ext};

// run with "cargo test test_xx -- --nocapture"

#[test]
fn test_ensure_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("symbols").join("cropped");

    assert!( !dir.exists());
    ensure_dir( &dir).unwrap();
    assert!( dir.is_dir());

    // second call on existing dir has to succeed
    ensure_dir( &dir).unwrap();
    assert!( dir.is_dir());
}

#[test]
fn test_ensure_dir_rejects_file() {
    let tmp = tempfile::tempdir().unwrap();
    let file = tmp.path().join("not_a_dir");
    fs::write( &file, b"x").unwrap();

    assert!( ensure_dir( &file).is_err());
    assert!( ensure_dir( file.join("cropped")).is_err());
}

#[test]
fn test_file_path_with_ext() {
    let p = file_path_with_ext( "public/symbols/cropped", "sphinx-left", "jpg");
    assert_eq!( p.to_str(), Some("public/symbols/cropped/sphinx-left.jpg"));
}

#[test]
fn test_file_path_with_dotted_stem() {
    let p = file_path_with_ext( "out", "v1.moon", "jpg");
    assert_eq!( p.file_name().and_then(|n| n.to_str()), Some("v1.moon.jpg"));
}
