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
use crate::row_reference::argb_to_rgb16_row;
use crate::yuv_support::Rgb16Layout;
use std::arch::aarch64::*;

pixel_row_tiers!(
    neon_argb_to_rgb565_row_any, neon_argb_to_rgb565_row;
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Rgb565 as u8 }>,
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Rgb565 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Rgb565 as u8 }>,
    4, 2, 16
);

pixel_row_tiers!(
    neon_argb_to_argb1555_row_any, neon_argb_to_argb1555_row;
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Argb1555 as u8 }>,
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Argb1555 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Argb1555 as u8 }>,
    4, 2, 16
);

pixel_row_tiers!(
    neon_argb_to_argb4444_row_any, neon_argb_to_argb4444_row;
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Argb4444 as u8 }>,
    neon_argb_to_rgb16_impl::<{ Rgb16Layout::Argb4444 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Argb4444 as u8 }>,
    4, 2, 16
);

#[inline(always)]
unsafe fn neon_argb_to_rgb16_impl<const LAYOUT: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let layout: Rgb16Layout = LAYOUT.into();
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(dst[..width * 2].chunks_exact_mut(16))
    {
        let bgra = vld4_u8(src.as_ptr());
        // every channel moved to the top byte of a 16-bit lane
        let b = vshll_n_u8::<8>(bgra.0);
        let g = vshll_n_u8::<8>(bgra.1);
        let r = vshll_n_u8::<8>(bgra.2);
        let a = vshll_n_u8::<8>(bgra.3);
        let packed = match layout {
            Rgb16Layout::Rgb565 => vorrq_u16(
                vorrq_u16(
                    vshrq_n_u16::<11>(b),
                    vandq_u16(vshrq_n_u16::<5>(g), vdupq_n_u16(0x07E0)),
                ),
                vandq_u16(r, vdupq_n_u16(0xF800)),
            ),
            Rgb16Layout::Argb1555 => vorrq_u16(
                vorrq_u16(
                    vshrq_n_u16::<11>(b),
                    vandq_u16(vshrq_n_u16::<6>(g), vdupq_n_u16(0x03E0)),
                ),
                vorrq_u16(
                    vandq_u16(vshrq_n_u16::<1>(r), vdupq_n_u16(0x7C00)),
                    vandq_u16(a, vdupq_n_u16(0x8000)),
                ),
            ),
            Rgb16Layout::Argb4444 => vorrq_u16(
                vorrq_u16(
                    vshrq_n_u16::<12>(b),
                    vandq_u16(vshrq_n_u16::<8>(g), vdupq_n_u16(0x00F0)),
                ),
                vorrq_u16(
                    vandq_u16(vshrq_n_u16::<4>(r), vdupq_n_u16(0x0F00)),
                    vandq_u16(a, vdupq_n_u16(0xF000)),
                ),
            ),
        };
        vst1q_u8(dst.as_mut_ptr(), vreinterpretq_u8_u16(packed));
        cx += 8;
    }
    cx
}
