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
use crate::sse::sse_support::_mm_load_argb_x4;
use crate::yuv_support::Rgb24Order;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pixel_row_tiers!(
    ssse3_argb_to_rgba_row_any, ssse3_argb_to_rgba_row;
    ssse3_argb_to_rgba_impl, ssse3_argb_to_rgba_impl, argb_to_rgba_row, 4, 4, 16
);

pixel_row_tiers!(
    ssse3_argb_to_rgb24_row_any, ssse3_argb_to_rgb24_row;
    ssse3_argb_to_rgb24_impl::<{ Rgb24Order::Bgr as u8 }>,
    ssse3_argb_to_rgb24_impl::<{ Rgb24Order::Bgr as u8 }>,
    argb_to_rgb24_row::<{ Rgb24Order::Bgr as u8 }>,
    4, 3, 16
);

pixel_row_tiers!(
    ssse3_argb_to_raw_row_any, ssse3_argb_to_raw_row;
    ssse3_argb_to_rgb24_impl::<{ Rgb24Order::Rgb as u8 }>,
    ssse3_argb_to_rgb24_impl::<{ Rgb24Order::Rgb as u8 }>,
    argb_to_rgb24_row::<{ Rgb24Order::Rgb as u8 }>,
    4, 3, 16
);

#[rustfmt::skip]
const ARGB_TO_RGBA_TABLE: [u8; 16] = [
    3, 0, 1, 2,
    3 + 4, 4, 1 + 4, 2 + 4,
    3 + 8, 8, 1 + 8, 2 + 8,
    3 + 12, 12, 1 + 12, 2 + 12,
];

#[rustfmt::skip]
const ARGB_TO_RGB24_TABLE: [u8; 16] = [
    0, 1, 2, 4, 5, 6, 8, 9, 10, 12, 13, 14,
    0x80, 0x80, 0x80, 0x80,
];

#[rustfmt::skip]
const ARGB_TO_RAW_TABLE: [u8; 16] = [
    2, 1, 0, 6, 5, 4, 10, 9, 8, 14, 13, 12,
    0x80, 0x80, 0x80, 0x80,
];

#[target_feature(enable = "ssse3")]
unsafe fn ssse3_argb_to_rgba_impl(src: &[u8], dst: &mut [u8], width: usize) -> usize {
    let q_table = _mm_loadu_si128(ARGB_TO_RGBA_TABLE.as_ptr() as *const __m128i);
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(16)
        .zip(dst[..width * 4].chunks_exact_mut(16))
    {
        let row = _mm_loadu_si128(src.as_ptr() as *const __m128i);
        _mm_storeu_si128(
            dst.as_mut_ptr() as *mut __m128i,
            _mm_shuffle_epi8(row, q_table),
        );
        cx += 4;
    }
    cx
}

#[target_feature(enable = "ssse3")]
unsafe fn ssse3_argb_to_rgb24_impl<const ORDER: u8>(
    src: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let order: Rgb24Order = ORDER.into();
    let q_table = match order {
        Rgb24Order::Bgr => _mm_loadu_si128(ARGB_TO_RGB24_TABLE.as_ptr() as *const __m128i),
        Rgb24Order::Rgb => _mm_loadu_si128(ARGB_TO_RAW_TABLE.as_ptr() as *const __m128i),
    };
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(64)
        .zip(dst[..width * 3].chunks_exact_mut(48))
    {
        let (v0, v1, v2, v3) = _mm_load_argb_x4::<false>(src.as_ptr());
        // twelve packed bytes in the low part of every register
        let s0 = _mm_shuffle_epi8(v0, q_table);
        let s1 = _mm_shuffle_epi8(v1, q_table);
        let s2 = _mm_shuffle_epi8(v2, q_table);
        let s3 = _mm_shuffle_epi8(v3, q_table);

        let out0 = _mm_or_si128(s0, _mm_slli_si128::<12>(s1));
        let out1 = _mm_or_si128(_mm_srli_si128::<4>(s1), _mm_slli_si128::<8>(s2));
        let out2 = _mm_or_si128(_mm_srli_si128::<8>(s2), _mm_slli_si128::<4>(s3));

        _mm_storeu_si128(dst.as_mut_ptr() as *mut __m128i, out0);
        _mm_storeu_si128(dst.as_mut_ptr().add(16) as *mut __m128i, out1);
        _mm_storeu_si128(dst.as_mut_ptr().add(32) as *mut __m128i, out2);
        cx += 16;
    }
    cx
}
