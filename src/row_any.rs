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

//! Tier wrappers around SIMD row bodies.
//!
//! A SIMD body processes whole blocks only and returns how many pixels it
//! consumed. From one body every family derives:
//!
//! * `Any`: the body followed by the reference kernel on the remainder,
//! * `Unaligned`: the body alone, width is a multiple of the block,
//! * `Aligned`: the body with aligned memory access, rows are aligned too.
//!
//! Bodies are `#[target_feature]` functions; wrappers are only ever handed out
//! by the kernel selector after the capability was detected.

macro_rules! pixel_row_tiers {
    (
        $any:ident, $unaligned:ident $(, $aligned:ident)?;
        $body:expr, $body_aligned:expr, $reference:expr, $src_bpp:expr, $dst_bpp:expr, $alignment:expr
    ) => {
        pub(crate) fn $any(src: &[u8], dst: &mut [u8], width: usize) {
            let cx = unsafe { $body(src, dst, width) };
            if cx < width {
                $reference(&src[cx * $src_bpp..], &mut dst[cx * $dst_bpp..], width - cx);
            }
        }

        pub(crate) fn $unaligned(src: &[u8], dst: &mut [u8], width: usize) {
            unsafe {
                $body(src, dst, width);
            }
        }

        $(
        pub(crate) fn $aligned(src: &[u8], dst: &mut [u8], width: usize) {
            debug_assert_eq!(src.as_ptr() as usize % $alignment, 0);
            debug_assert_eq!(dst.as_ptr() as usize % $alignment, 0);
            unsafe {
                $body_aligned(src, dst, width);
            }
        }
        )?
    };
}

macro_rules! chroma_pair_row_tiers {
    (
        $any:ident, $unaligned:ident $(, $aligned:ident)?;
        $body:expr, $body_aligned:expr, $reference:expr, $alignment:expr
    ) => {
        pub(crate) fn $any(row0: &[u8], row1: &[u8], u: &mut [u8], v: &mut [u8], width: usize) {
            let cx = unsafe { $body(row0, row1, u, v, width) };
            if cx < width {
                $reference(
                    &row0[cx * 4..],
                    &row1[cx * 4..],
                    &mut u[cx / 2..],
                    &mut v[cx / 2..],
                    width - cx,
                );
            }
        }

        pub(crate) fn $unaligned(
            row0: &[u8],
            row1: &[u8],
            u: &mut [u8],
            v: &mut [u8],
            width: usize,
        ) {
            unsafe {
                $body(row0, row1, u, v, width);
            }
        }

        $(
        pub(crate) fn $aligned(row0: &[u8], row1: &[u8], u: &mut [u8], v: &mut [u8], width: usize) {
            debug_assert_eq!(row0.as_ptr() as usize % $alignment, 0);
            debug_assert_eq!(row1.as_ptr() as usize % $alignment, 0);
            unsafe {
                $body_aligned(row0, row1, u, v, width);
            }
        }
        )?
    };
}

macro_rules! chroma_row_tiers {
    (
        $any:ident, $unaligned:ident $(, $aligned:ident)?;
        $body:expr, $body_aligned:expr, $reference:expr, $chroma_shift:expr, $alignment:expr
    ) => {
        pub(crate) fn $any(src: &[u8], u: &mut [u8], v: &mut [u8], width: usize) {
            let cx = unsafe { $body(src, u, v, width) };
            if cx < width {
                $reference(
                    &src[cx * 4..],
                    &mut u[cx >> $chroma_shift..],
                    &mut v[cx >> $chroma_shift..],
                    width - cx,
                );
            }
        }

        pub(crate) fn $unaligned(src: &[u8], u: &mut [u8], v: &mut [u8], width: usize) {
            unsafe {
                $body(src, u, v, width);
            }
        }

        $(
        pub(crate) fn $aligned(src: &[u8], u: &mut [u8], v: &mut [u8], width: usize) {
            debug_assert_eq!(src.as_ptr() as usize % $alignment, 0);
            unsafe {
                $body_aligned(src, u, v, width);
            }
        }
        )?
    };
}

macro_rules! merge_row_tiers {
    (
        $any:ident, $unaligned:ident $(, $aligned:ident)?;
        $body:expr, $body_aligned:expr, $reference:expr, $alignment:expr
    ) => {
        pub(crate) fn $any(first: &[u8], second: &[u8], dst: &mut [u8], width: usize) {
            let cx = unsafe { $body(first, second, dst, width) };
            if cx < width {
                $reference(&first[cx..], &second[cx..], &mut dst[cx * 2..], width - cx);
            }
        }

        pub(crate) fn $unaligned(first: &[u8], second: &[u8], dst: &mut [u8], width: usize) {
            unsafe {
                $body(first, second, dst, width);
            }
        }

        $(
        pub(crate) fn $aligned(first: &[u8], second: &[u8], dst: &mut [u8], width: usize) {
            debug_assert_eq!(first.as_ptr() as usize % $alignment, 0);
            debug_assert_eq!(second.as_ptr() as usize % $alignment, 0);
            debug_assert_eq!(dst.as_ptr() as usize % $alignment, 0);
            unsafe {
                $body_aligned(first, second, dst, width);
            }
        }
        )?
    };
}

macro_rules! packed_row_tiers {
    (
        $any:ident, $unaligned:ident $(, $aligned:ident)?;
        $body:expr, $body_aligned:expr, $reference:expr, $alignment:expr
    ) => {
        pub(crate) fn $any(y: &[u8], u: &[u8], v: &[u8], dst: &mut [u8], width: usize) {
            let cx = unsafe { $body(y, u, v, dst, width) };
            if cx < width {
                $reference(
                    &y[cx..],
                    &u[cx / 2..],
                    &v[cx / 2..],
                    &mut dst[cx * 2..],
                    width - cx,
                );
            }
        }

        pub(crate) fn $unaligned(y: &[u8], u: &[u8], v: &[u8], dst: &mut [u8], width: usize) {
            unsafe {
                $body(y, u, v, dst, width);
            }
        }

        $(
        pub(crate) fn $aligned(y: &[u8], u: &[u8], v: &[u8], dst: &mut [u8], width: usize) {
            debug_assert_eq!(y.as_ptr() as usize % $alignment, 0);
            debug_assert_eq!(dst.as_ptr() as usize % $alignment, 0);
            unsafe {
                $body_aligned(y, u, v, dst, width);
            }
        }
        )?
    };
}

pub(crate) use chroma_pair_row_tiers;
pub(crate) use chroma_row_tiers;
pub(crate) use merge_row_tiers;
pub(crate) use packed_row_tiers;
pub(crate) use pixel_row_tiers;
