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

//! static table of symbol regions within the tarot card source images

use std::fmt;

/// pixel rectangle with top-left origin, `right` and `bottom` are exclusive.
/// Rectangles are not checked against the image they are applied to
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32
}

impl CropRect {
    pub const fn new (left: u32, top: u32, right: u32, bottom: u32)->Self {
        CropRect { left, top, right, bottom }
    }

    pub fn width (&self)->u32 { self.right.saturating_sub(self.left) }
    pub fn height (&self)->u32 { self.bottom.saturating_sub(self.top) }
}

impl fmt::Display for CropRect {
    fn fmt (&self, f: &mut fmt::Formatter<'_>)->fmt::Result {
        write!(f, "({}, {}, {}, {})", self.left, self.top, self.right, self.bottom)
    }
}

/// named region that becomes `<name>.jpg`
#[derive(Debug,Clone,Copy)]
pub struct SymbolCrop {
    pub name: &'static str,
    pub rect: CropRect
}

/// all symbols that are cut out of one source image
#[derive(Debug,Clone,Copy)]
pub struct CardCrops {
    pub file: &'static str,
    pub symbols: &'static [SymbolCrop]
}

const fn sym (name: &'static str, left: u32, top: u32, right: u32, bottom: u32)->SymbolCrop {
    SymbolCrop { name, rect: CropRect::new( left, top, right, bottom) }
}

pub const SYMBOL_CROPS: &[CardCrops] = &[
    CardCrops { file: "SymbolCardMoon-1.jpg", symbols: &[
        sym( "moon", 432, 40, 572, 140),  // top right
    ]},
    CardCrops { file: "SymbolCardSphinx-1.jpg", symbols: &[
        sym( "sphinx-left", 120, 280, 200, 360),
        sym( "sphinx-right", 350, 280, 430, 360),
    ]},
    CardCrops { file: "SymbolCardPillars-1.jpg", symbols: &[
        sym( "pillars", 50, 100, 200, 400),
    ]},
    CardCrops { file: "SymbolCardSnake-1.jpg", symbols: &[
        sym( "snake", 100, 150, 300, 350),
    ]},
    CardCrops { file: "SymbolCardCity-1.jpg", symbols: &[
        sym( "castle", 150, 50, 400, 200),
    ]},
    CardCrops { file: "SymbolCardGrapes-1.jpg", symbols: &[
        sym( "grapes", 200, 100, 350, 250),
    ]},
    CardCrops { file: "SymbolCardHorse-1.jpg", symbols: &[
        sym( "horse", 100, 200, 300, 400),
    ]},
    CardCrops { file: "SymbolCardLemniscate-1.jpg", symbols: &[
        sym( "lemniscate", 200, 80, 350, 130),  // above head
    ]},
    CardCrops { file: "SymbolCardLilly-1.jpg", symbols: &[
        sym( "lilies", 50, 300, 200, 450),
    ]},
];
