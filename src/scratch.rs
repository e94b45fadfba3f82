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

use crate::yuv_error::MismatchedSize;
use crate::YuvError;

/// Widest row, in pixels, formats staging rows in scratch storage accept.
pub const MAX_ROW_WIDTH: usize = 2560 * 4;

/// Capacity of a subsampled chroma scratch row
pub(crate) const MAX_CHROMA_ROW_WIDTH: usize = MAX_ROW_WIDTH.div_ceil(2);

#[repr(C, align(32))]
struct AlignedRow<const N: usize>([u8; N]);

/// Call-scoped staging rows, one full width luma row and two half width
/// chroma rows. Lives on the stack of the converting call.
pub(crate) struct ScratchRows {
    luma: AlignedRow<MAX_ROW_WIDTH>,
    u: AlignedRow<MAX_CHROMA_ROW_WIDTH>,
    v: AlignedRow<MAX_CHROMA_ROW_WIDTH>,
}

impl ScratchRows {
    #[inline]
    pub(crate) fn new() -> Self {
        ScratchRows {
            luma: AlignedRow([0u8; MAX_ROW_WIDTH]),
            u: AlignedRow([0u8; MAX_CHROMA_ROW_WIDTH]),
            v: AlignedRow([0u8; MAX_CHROMA_ROW_WIDTH]),
        }
    }

    /// # Panics
    ///
    /// If `chroma_width` exceeds the chroma capacity, callers validate
    /// the width with [check_row_capacity] first.
    #[inline]
    pub(crate) fn chroma_rows(&mut self, chroma_width: usize) -> (&mut [u8], &mut [u8]) {
        (
            &mut self.u.0[..chroma_width],
            &mut self.v.0[..chroma_width],
        )
    }

    /// # Panics
    ///
    /// If `width` exceeds [MAX_ROW_WIDTH].
    #[inline]
    pub(crate) fn rows(
        &mut self,
        width: usize,
        chroma_width: usize,
    ) -> (&mut [u8], &mut [u8], &mut [u8]) {
        (
            &mut self.luma.0[..width],
            &mut self.u.0[..chroma_width],
            &mut self.v.0[..chroma_width],
        )
    }
}

#[inline]
pub(crate) fn check_row_capacity(width: usize) -> Result<(), YuvError> {
    if width > MAX_ROW_WIDTH {
        return Err(YuvError::WidthExceedsRowCapacity(MismatchedSize {
            expected: MAX_ROW_WIDTH,
            received: width,
        }));
    }
    Ok(())
}
