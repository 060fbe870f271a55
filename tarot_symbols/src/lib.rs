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

//! batch extraction of symbol images from tarot card images.
//!
//! Each [`CardCrops`] entry of a crop table names a source image and the symbol regions within it. Running
//! a table writes one `<symbol>.jpg` per region into the output dir. Per-card failures (missing source,
//! decode or encode errors) are logged and recorded in the returned [`CropReport`] but never abort the run,
//! the only fatal condition is an output dir that cannot be created.

use std::{fmt, fs::File, io::{BufWriter, Write}, path::{Path, PathBuf}};
use image::{codecs::jpeg::JpegEncoder, imageops, DynamicImage, GenericImageView, RgbImage};
use tracing::{info, warn, error};
use tarot_common::fs::{ensure_dir, file_path_with_ext};

mod errors;
pub use errors::{Result, TarotSymbolsError};

pub mod crop_table;
pub use crop_table::{CardCrops, CropRect, SymbolCrop, SYMBOL_CROPS};

pub const SOURCE_DIR: &str = "public/symbols";
pub const OUTPUT_DIR: &str = "public/symbols/cropped";
pub const JPEG_QUALITY: u8 = 95;
pub const SYMBOL_EXT: &str = "jpg";

/* #region run report ***********************************************************************************/

#[derive(Debug)]
pub enum EntryOutcome {
    /// all symbols written, in table order
    Cropped(Vec<PathBuf>),
    /// source image did not exist
    Missing(PathBuf),
    /// decode, crop or encode error. Remaining symbols of the entry were skipped
    Failed(String)
}

#[derive(Debug)]
pub struct EntryReport {
    pub file: &'static str,
    pub outcome: EntryOutcome
}

#[derive(Debug, Default)]
pub struct CropReport {
    pub entries: Vec<EntryReport>
}

impl CropReport {
    pub fn written_files (&self)->impl Iterator<Item=&PathBuf> {
        self.entries.iter().flat_map( |e| match &e.outcome {
            EntryOutcome::Cropped(paths) => paths.as_slice(),
            _ => &[][..]
        })
    }

    pub fn n_written (&self)->usize { self.written_files().count() }

    pub fn n_missing (&self)->usize {
        self.entries.iter().filter( |e| matches!( e.outcome, EntryOutcome::Missing(_))).count()
    }

    pub fn n_failed (&self)->usize {
        self.entries.iter().filter( |e| matches!( e.outcome, EntryOutcome::Failed(_))).count()
    }
}

impl fmt::Display for CropReport {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "{} source images: {} symbols written, {} missing, {} failed",
               self.entries.len(), self.n_written(), self.n_missing(), self.n_failed())
    }
}

/* #endregion run report */

/// process all entries of `table` in order. Only fails if `output_dir` cannot be created
pub fn run (table: &[CardCrops], source_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>)->Result<CropReport> {
    let source_dir = source_dir.as_ref();
    let output_dir = output_dir.as_ref();

    ensure_dir( output_dir)?;
    info!("cropping symbols from {:?} to {:?}", source_dir, output_dir);

    let mut report = CropReport::default();

    for entry in table {
        let card_path = source_dir.join( entry.file);

        let outcome = if !card_path.exists() {
            warn!("{:?} not found", card_path);
            EntryOutcome::Missing( card_path)

        } else {
            info!("processing {}", entry.file);
            match crop_card( entry, &card_path, output_dir) {
                Ok(paths) => EntryOutcome::Cropped( paths),
                Err(e) => {
                    error!("error processing {}: {}", entry.file, e);
                    EntryOutcome::Failed( e.to_string())
                }
            }
        };

        report.entries.push( EntryReport { file: entry.file, outcome });
    }

    info!("{report}");
    info!("symbol cropping complete");
    Ok(report)
}

/// crop all symbols of one existing card image. The first error aborts the card
pub fn crop_card (entry: &CardCrops, card_path: &Path, output_dir: &Path)->Result<Vec<PathBuf>> {
    let img = image::open( card_path)?;
    info!("  image size: ({}, {})", img.width(), img.height());

    let mut paths = Vec::with_capacity( entry.symbols.len());
    for sym in entry.symbols {
        info!("  cropping {}: {} [{}x{}]", sym.name, sym.rect, sym.rect.width(), sym.rect.height());

        let symbol_img = crop_symbol( &img, &sym.rect);
        let path = symbol_path( output_dir, sym.name);
        save_jpeg( &symbol_img, &path, JPEG_QUALITY)?;

        info!("  saved: {:?}", path);
        paths.push( path);
    }

    Ok(paths)
}

/// cut `rect` out of `img`. The result always has the rect's extent, parts outside of `img` are black
pub fn crop_symbol (img: &DynamicImage, rect: &CropRect)->DynamicImage {
    let (w,h) = (rect.width(), rect.height());
    let clipped = img.crop_imm( rect.left, rect.top, w, h);

    if clipped.dimensions() == (w,h) {
        clipped
    } else {
        let mut padded = RgbImage::new( w, h);
        imageops::replace( &mut padded, &clipped.to_rgb8(), 0, 0);
        DynamicImage::ImageRgb8( padded)
    }
}

pub fn symbol_path (output_dir: impl AsRef<Path>, name: &str)->PathBuf {
    file_path_with_ext( output_dir, name, SYMBOL_EXT)
}

/// encode as RGB JPEG (no alpha support), replacing any existing file at `path`.
/// Zero-sized images (from inverted or degenerate rects) cannot be encoded and are rejected before creating the file
pub fn save_jpeg (img: &DynamicImage, path: &Path, quality: u8)->Result<()> {
    let (w,h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err( TarotSymbolsError::OpFailed( format!("empty symbol region for {:?}", path)))
    }

    let mut writer = BufWriter::new( File::create(path)?);
    let mut encoder = JpegEncoder::new_with_quality( &mut writer, quality);
    encoder.encode_image( &img.to_rgb8())?;
    writer.flush()?;

    Ok(())
}
