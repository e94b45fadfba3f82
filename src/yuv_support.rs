/*
 * Copyright (c) Radzivon Bartoshyk, 7/2025. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */

use crate::yuv_error::check_overflow_v2;
use crate::YuvError;

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Order of chroma samples in the interleaved plane of a semi-planar image
pub enum YuvNVOrder {
    UV = 0,
    VU = 1,
}

impl From<u8> for YuvNVOrder {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => YuvNVOrder::UV,
            1 => YuvNVOrder::VU,
            _ => {
                panic!("Unknown value")
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Byte order of a packed 4:2:2 macro-pixel
pub(crate) enum Yuy2Description {
    YUYV = 0,
    UYVY = 1,
}

impl From<u8> for Yuy2Description {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Yuy2Description::YUYV,
            1 => Yuy2Description::UYVY,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

impl Yuy2Description {
    #[inline]
    pub(crate) const fn get_first_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 0,
            Yuy2Description::UYVY => 1,
        }
    }

    #[inline]
    pub(crate) const fn get_second_y_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 2,
            Yuy2Description::UYVY => 3,
        }
    }

    #[inline]
    pub(crate) const fn get_u_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 1,
            Yuy2Description::UYVY => 0,
        }
    }

    #[inline]
    pub(crate) const fn get_v_position(&self) -> usize {
        match self {
            Yuy2Description::YUYV => 3,
            Yuy2Description::UYVY => 2,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Channel order of a 24-bit RGB row in memory
pub(crate) enum Rgb24Order {
    /// `B, G, R`, usually called RGB24
    Bgr = 0,
    /// `R, G, B`, usually called RAW
    Rgb = 1,
}

impl From<u8> for Rgb24Order {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Rgb24Order::Bgr,
            1 => Rgb24Order::Rgb,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
/// Bit layout of a 16-bit packed pixel, stored little endian
pub(crate) enum Rgb16Layout {
    Rgb565 = 0,
    Argb1555 = 1,
    Argb4444 = 2,
}

impl From<u8> for Rgb16Layout {
    #[inline(always)]
    fn from(value: u8) -> Self {
        match value {
            0 => Rgb16Layout::Rgb565,
            1 => Rgb16Layout::Argb1555,
            2 => Rgb16Layout::Argb4444,
            _ => {
                panic!("Not supported value {}", value)
            }
        }
    }
}

impl Rgb16Layout {
    /// Packs one `B, G, R, A` pixel
    #[inline(always)]
    pub(crate) const fn pack(&self, b: u8, g: u8, r: u8, a: u8) -> u16 {
        let (b, g, r, a) = (b as u16, g as u16, r as u16, a as u16);
        match self {
            Rgb16Layout::Rgb565 => (b >> 3) | ((g >> 2) << 5) | ((r >> 3) << 11),
            Rgb16Layout::Argb1555 => {
                (b >> 3) | ((g >> 3) << 5) | ((r >> 3) << 10) | ((a >> 7) << 15)
            }
            Rgb16Layout::Argb4444 => (b >> 4) | (g & 0xF0) | ((r >> 4) << 8) | ((a >> 4) << 12),
        }
    }
}

/// Geometry of a single plane relative to the image size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaneLayout {
    /// Horizontal subsampling, how many pixels share one sample
    pub h_sub: usize,
    /// Vertical subsampling
    pub v_sub: usize,
    /// Bytes one sample occupies in a row
    pub bytes_per_sample: usize,
}

impl PlaneLayout {
    const fn new(h_sub: usize, v_sub: usize, bytes_per_sample: usize) -> Self {
        PlaneLayout {
            h_sub,
            v_sub,
            bytes_per_sample,
        }
    }

    /// Bytes a single row of this plane spans for an image of `width` pixels
    #[inline]
    pub fn row_bytes(&self, width: usize) -> Result<usize, YuvError> {
        check_overflow_v2(width.div_ceil(self.h_sub), self.bytes_per_sample)
    }

    /// Count of rows this plane has for an image of `height` rows
    #[inline]
    pub const fn rows(&self, height: usize) -> usize {
        height.div_ceil(self.v_sub)
    }
}

const PACKED_32: [PlaneLayout; 1] = [PlaneLayout::new(1, 1, 4)];
const PACKED_24: [PlaneLayout; 1] = [PlaneLayout::new(1, 1, 3)];
const PACKED_16: [PlaneLayout; 1] = [PlaneLayout::new(1, 1, 2)];
const PACKED_422: [PlaneLayout; 1] = [PlaneLayout::new(2, 1, 4)];
const LUMA: [PlaneLayout; 1] = [PlaneLayout::new(1, 1, 1)];
const PLANAR_444: [PlaneLayout; 3] = [
    PlaneLayout::new(1, 1, 1),
    PlaneLayout::new(1, 1, 1),
    PlaneLayout::new(1, 1, 1),
];
const PLANAR_422: [PlaneLayout; 3] = [
    PlaneLayout::new(1, 1, 1),
    PlaneLayout::new(2, 1, 1),
    PlaneLayout::new(2, 1, 1),
];
const PLANAR_411: [PlaneLayout; 3] = [
    PlaneLayout::new(1, 1, 1),
    PlaneLayout::new(4, 1, 1),
    PlaneLayout::new(4, 1, 1),
];
const PLANAR_420: [PlaneLayout; 3] = [
    PlaneLayout::new(1, 1, 1),
    PlaneLayout::new(2, 2, 1),
    PlaneLayout::new(2, 2, 1),
];
const BI_PLANAR_420: [PlaneLayout; 2] = [PlaneLayout::new(1, 1, 1), PlaneLayout::new(2, 2, 2)];

/// Every pixel layout this crate reads or writes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// Packed 32-bit, `B, G, R, A` in memory
    Argb,
    I444,
    I422,
    I411,
    I420,
    /// Luma plane followed by interleaved `U, V` plane
    Nv12,
    /// Luma plane followed by interleaved `V, U` plane
    Nv21,
    /// Packed 4:2:2, `Y0, U, Y1, V`
    Yuy2,
    /// Packed 4:2:2, `U, Y0, V, Y1`
    Uyvy,
    /// Luma only
    I400,
    /// Packed 32-bit, `A, B, G, R` in memory
    Rgba,
    /// Packed 24-bit, `B, G, R` in memory
    Rgb24,
    /// Packed 24-bit, `R, G, B` in memory
    Raw,
    Rgb565,
    Argb1555,
    Argb4444,
}

/// What a plane holds, used to report which buffer failed validation
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum PlaneRole {
    Source,
    Luma,
    Chroma,
    Destination,
}

impl PixelFormat {
    pub const fn planes(&self) -> &'static [PlaneLayout] {
        match self {
            PixelFormat::Argb | PixelFormat::Rgba => &PACKED_32,
            PixelFormat::I444 => &PLANAR_444,
            PixelFormat::I422 => &PLANAR_422,
            PixelFormat::I411 => &PLANAR_411,
            PixelFormat::I420 => &PLANAR_420,
            PixelFormat::Nv12 | PixelFormat::Nv21 => &BI_PLANAR_420,
            PixelFormat::Yuy2 | PixelFormat::Uyvy => &PACKED_422,
            PixelFormat::I400 => &LUMA,
            PixelFormat::Rgb24 | PixelFormat::Raw => &PACKED_24,
            PixelFormat::Rgb565 | PixelFormat::Argb1555 | PixelFormat::Argb4444 => &PACKED_16,
        }
    }

    #[inline]
    pub const fn plane_count(&self) -> usize {
        self.planes().len()
    }

    /// Formats that stage rows in fixed-capacity scratch storage before a merge
    /// or repack step, their width is bounded by [crate::MAX_ROW_WIDTH].
    #[inline]
    pub const fn requires_scratch_rows(&self) -> bool {
        matches!(
            self,
            PixelFormat::Nv12 | PixelFormat::Nv21 | PixelFormat::Yuy2 | PixelFormat::Uyvy
        )
    }

    /// Smallest stride `plane` may have for an image of `width` pixels.
    ///
    /// Returns `None` when the plane does not exist.
    pub fn min_stride(&self, plane: usize, width: u32) -> Option<usize> {
        let layout = self.planes().get(plane)?;
        layout.row_bytes(width as usize).ok()
    }

    /// Bytes a buffer holding `plane` must span with the given stride.
    ///
    /// Returns `None` when the plane does not exist or the size overflows.
    pub fn plane_size(&self, plane: usize, width: u32, height: u32, stride: u32) -> Option<usize> {
        let layout = self.planes().get(plane)?;
        let row_bytes = layout.row_bytes(width as usize).ok()?;
        let rows = layout.rows(height as usize);
        crate::yuv_error::plane_min_len(stride as usize, row_bytes, rows).ok()
    }

    pub(crate) const fn plane_role(&self, plane: usize) -> PlaneRole {
        match self {
            PixelFormat::Argb => PlaneRole::Source,
            PixelFormat::I444
            | PixelFormat::I422
            | PixelFormat::I411
            | PixelFormat::I420
            | PixelFormat::Nv12
            | PixelFormat::Nv21
            | PixelFormat::I400 => {
                if plane == 0 {
                    PlaneRole::Luma
                } else {
                    PlaneRole::Chroma
                }
            }
            PixelFormat::Yuy2
            | PixelFormat::Uyvy
            | PixelFormat::Rgba
            | PixelFormat::Rgb24
            | PixelFormat::Raw
            | PixelFormat::Rgb565
            | PixelFormat::Argb1555
            | PixelFormat::Argb4444 => PlaneRole::Destination,
        }
    }

    /// Whether a negative height mirrors the destination rather than the source
    #[inline]
    pub(crate) const fn flips_destination(&self) -> bool {
        matches!(self, PixelFormat::Yuy2 | PixelFormat::Uyvy)
    }
}
