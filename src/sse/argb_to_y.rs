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
use crate::row_reference::argb_to_y_row;
use crate::sse::sse_support::{
    _mm_bgr_to_y_epi16, _mm_deinterleave_bgr_epi16, _mm_load_argb_x4, _mm_store_si128_x,
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pixel_row_tiers!(
    sse_argb_to_y_row_any, sse_argb_to_y_row, sse_argb_to_y_row_aligned;
    sse_argb_to_y_impl::<false>, sse_argb_to_y_impl::<true>, argb_to_y_row, 4, 1, 16
);

#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_y_impl<const ALIGNED: bool>(
    src: &[u8],
    y_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for (src, dst) in src[..width * 4]
        .chunks_exact(64)
        .zip(y_plane[..width].chunks_exact_mut(16))
    {
        let (v0, v1, v2, v3) = _mm_load_argb_x4::<ALIGNED>(src.as_ptr());
        let (b0, g0, r0) = _mm_deinterleave_bgr_epi16(v0, v1);
        let (b1, g1, r1) = _mm_deinterleave_bgr_epi16(v2, v3);
        let y0 = _mm_bgr_to_y_epi16(b0, g0, r0);
        let y1 = _mm_bgr_to_y_epi16(b1, g1, r1);
        _mm_store_si128_x::<ALIGNED>(dst.as_mut_ptr(), _mm_packus_epi16(y0, y1));
        cx += 16;
    }
    cx
}
