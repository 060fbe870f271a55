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

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tarot_symbols::{run, SYMBOL_CROPS, SOURCE_DIR, OUTPUT_DIR};

/// cut all symbols of the static crop table out of the card images in SOURCE_DIR.
/// Individual card failures are logged and do not change the exit status
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter( EnvFilter::try_from_default_env().unwrap_or_else( |_| EnvFilter::new("info")))
        .init();

    run( SYMBOL_CROPS, SOURCE_DIR, OUTPUT_DIR)?;

    Ok(())
}
