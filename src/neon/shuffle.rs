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

use crate::row_any::pixel_row_tiers;
use crate::row_reference::{argb_to_rgb24_row, argb_to_rgba_row};
use crate::yuv_support::Rgb24Order;
use std::arch::aarch64::*;

pixel_row_tiers!(
    neon_argb_to_rgba_row_any, neon_argb_to_rgba_row;
    neon_argb_to_rgba_impl, neon_argb_to_rgba_impl, argb_to_rgba_row, 4, 4, 16
);

pixel_row_tiers!(
    neon_argb_to_rgb24_row_any, neon_argb_to_rgb24_row;
    neon_argb_to_rgb24_impl::<{ Rgb24Order::Bgr as u8 }>,
    neon_argb_to_rgb24_impl::<{ Rgb24Order::Bgr as u8 }>,
    argb_to_rgb24_row::<{ Rgb24Order::Bgr as u8 }>,
    4, 3, 16
);

pixel_row_tiers!(
    neon_argb_to_raw_row_any, neon_argb_to_raw_row;
    neon_argb_to_rgb24_impl::<{ Rgb24Order::Rgb as u8 }>,
    neon_argb_to_rgb24_impl::<{ Rgb24Order::Rgb as u8 }>,
    argb_to_rgb24_row::<{ Rgb24Order::Rgb as u8 }>,
    4, 3, 16
);

#[inline(always)]
unsafe fn neon_argb_to_rgba_impl(src: &[u8], dst: &mut [u8], width: usize) -> usize {
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(dst[..width * 4].chunks_exact_mut(32))
    {
        let bgra = vld4_u8(src.as_ptr());
        vst4_u8(dst.as_mut_ptr(), uint8x8x4_t(bgra.3, bgra.0, bgra.1, bgra.2));
        cx += 8;
    }
    cx
}

#[inline(always)]
unsafe fn neon_argb_to_rgb24_impl<const ORDER: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let order: Rgb24Order = ORDER.into();
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(dst[..width * 3].chunks_exact_mut(24))
    {
        let bgra = vld4_u8(src.as_ptr());
        let storage = match order {
            Rgb24Order::Bgr => uint8x8x3_t(bgra.0, bgra.1, bgra.2),
            Rgb24Order::Rgb => uint8x8x3_t(bgra.2, bgra.1, bgra.0),
        };
        vst3_u8(dst.as_mut_ptr(), storage);
        cx += 8;
    }
    cx
}
