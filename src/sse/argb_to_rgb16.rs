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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pixel_row_tiers!(
    sse_argb_to_rgb565_row_any, sse_argb_to_rgb565_row;
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Rgb565 as u8 }>,
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Rgb565 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Rgb565 as u8 }>,
    4, 2, 16
);

pixel_row_tiers!(
    sse_argb_to_argb1555_row_any, sse_argb_to_argb1555_row;
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Argb1555 as u8 }>,
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Argb1555 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Argb1555 as u8 }>,
    4, 2, 16
);

pixel_row_tiers!(
    sse_argb_to_argb4444_row_any, sse_argb_to_argb4444_row;
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Argb4444 as u8 }>,
    sse_argb_to_rgb16_impl::<{ Rgb16Layout::Argb4444 as u8 }>,
    argb_to_rgb16_row::<{ Rgb16Layout::Argb4444 as u8 }>,
    4, 2, 16
);

/// Packs four pixels held in 32-bit lanes, the result sits in the low half
/// of every lane.
#[inline(always)]
unsafe fn pack_rgb16_epi32<const LAYOUT: u8>(v: __m128i) -> __m128i {
    let layout: Rgb16Layout = LAYOUT.into();
    match layout {
        Rgb16Layout::Rgb565 => {
            let b = _mm_and_si128(_mm_srli_epi32::<3>(v), _mm_set1_epi32(0x001F));
            let g = _mm_and_si128(_mm_srli_epi32::<5>(v), _mm_set1_epi32(0x07E0));
            let r = _mm_and_si128(_mm_srli_epi32::<8>(v), _mm_set1_epi32(0xF800));
            _mm_or_si128(_mm_or_si128(b, g), r)
        }
        Rgb16Layout::Argb1555 => {
            let b = _mm_and_si128(_mm_srli_epi32::<3>(v), _mm_set1_epi32(0x001F));
            let g = _mm_and_si128(_mm_srli_epi32::<6>(v), _mm_set1_epi32(0x03E0));
            let r = _mm_and_si128(_mm_srli_epi32::<9>(v), _mm_set1_epi32(0x7C00));
            let a = _mm_and_si128(_mm_srli_epi32::<16>(v), _mm_set1_epi32(0x8000));
            _mm_or_si128(_mm_or_si128(b, g), _mm_or_si128(r, a))
        }
        Rgb16Layout::Argb4444 => {
            let b = _mm_and_si128(_mm_srli_epi32::<4>(v), _mm_set1_epi32(0x000F));
            let g = _mm_and_si128(_mm_srli_epi32::<8>(v), _mm_set1_epi32(0x00F0));
            let r = _mm_and_si128(_mm_srli_epi32::<12>(v), _mm_set1_epi32(0x0F00));
            let a = _mm_and_si128(_mm_srli_epi32::<16>(v), _mm_set1_epi32(0xF000));
            _mm_or_si128(_mm_or_si128(b, g), _mm_or_si128(r, a))
        }
    }
}

#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_rgb16_impl<const LAYOUT: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(dst[..width * 2].chunks_exact_mut(16))
    {
        let v0 = _mm_loadu_si128(src.as_ptr() as *const __m128i);
        let v1 = _mm_loadu_si128(src.as_ptr().add(16) as *const __m128i);
        // sign extend the low half so the saturating pack keeps the bits
        let p0 = _mm_srai_epi32::<16>(_mm_slli_epi32::<16>(pack_rgb16_epi32::<LAYOUT>(v0)));
        let p1 = _mm_srai_epi32::<16>(_mm_slli_epi32::<16>(pack_rgb16_epi32::<LAYOUT>(v1)));
        _mm_storeu_si128(dst.as_mut_ptr() as *mut __m128i, _mm_packs_epi32(p0, p1));
        cx += 8;
    }
    cx
}
