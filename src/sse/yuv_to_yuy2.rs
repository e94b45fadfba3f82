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

use crate::row_any::packed_row_tiers;
use crate::row_reference::yuv422_to_packed_row;
use crate::sse::sse_support::{_mm_load_si128_x, _mm_loadl_u8x8, _mm_store_si128_x};
use crate::yuv_support::Yuy2Description;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

packed_row_tiers!(
    sse_yuv422_to_yuy2_row_any, sse_yuv422_to_yuy2_row, sse_yuv422_to_yuy2_row_aligned;
    sse_yuv422_to_packed_impl::<{ Yuy2Description::YUYV as u8 }, false>,
    sse_yuv422_to_packed_impl::<{ Yuy2Description::YUYV as u8 }, true>,
    yuv422_to_packed_row::<{ Yuy2Description::YUYV as u8 }>,
    16
);

packed_row_tiers!(
    sse_yuv422_to_uyvy_row_any, sse_yuv422_to_uyvy_row, sse_yuv422_to_uyvy_row_aligned;
    sse_yuv422_to_packed_impl::<{ Yuy2Description::UYVY as u8 }, false>,
    sse_yuv422_to_packed_impl::<{ Yuy2Description::UYVY as u8 }, true>,
    yuv422_to_packed_row::<{ Yuy2Description::UYVY as u8 }>,
    16
);

#[target_feature(enable = "sse2")]
unsafe fn sse_yuv422_to_packed_impl<const TARGET: u8, const ALIGNED: bool>(
    y_plane: &[u8],
    u_plane: &[u8],
    v_plane: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let yuy2_target: Yuy2Description = TARGET.into();
    let mut cx = 0usize;
    for (((y_src, u_src), v_src), dst) in y_plane[..width]
        .chunks_exact(16)
        .zip(u_plane.chunks_exact(8))
        .zip(v_plane.chunks_exact(8))
        .zip(dst.chunks_exact_mut(32))
    {
        let y_pixels = _mm_load_si128_x::<ALIGNED>(y_src.as_ptr());
        let u_pixels = _mm_loadl_u8x8(u_src.as_ptr());
        let v_pixels = _mm_loadl_u8x8(v_src.as_ptr());
        let uv = _mm_unpacklo_epi8(u_pixels, v_pixels);

        let (lo, hi) = match yuy2_target {
            Yuy2Description::YUYV => (_mm_unpacklo_epi8(y_pixels, uv), _mm_unpackhi_epi8(y_pixels, uv)),
            Yuy2Description::UYVY => (_mm_unpacklo_epi8(uv, y_pixels), _mm_unpackhi_epi8(uv, y_pixels)),
        };

        _mm_store_si128_x::<ALIGNED>(dst.as_mut_ptr(), lo);
        _mm_store_si128_x::<ALIGNED>(dst.as_mut_ptr().add(16), hi);
        cx += 16;
    }
    cx
}
