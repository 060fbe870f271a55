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

use std::fs;
use std::io::{self,ErrorKind};
use std::path::{Path,PathBuf};

use crate::macros::io_error;

/// create dir (including parents) if it does not exist yet. Existing dirs are accepted as-is,
/// a non-directory at `path` is an error
pub fn ensure_dir (path: impl AsRef<Path>)->io::Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        Ok(())
    } else if path.exists() {
        Err(io_error!(ErrorKind::AlreadyExists, "{:?} is not a directory", &path))
    } else {
        fs::create_dir_all(path)
    }
}

/// `dir/stem.ext`
pub fn file_path_with_ext (dir: impl AsRef<Path>, stem: &str, ext: &str) -> PathBuf {
    let mut pb = dir.as_ref().to_path_buf();
    pb.push( format!("{stem}.{ext}"));
    pb
}
