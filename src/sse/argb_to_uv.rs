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

use crate::row_any::{chroma_pair_row_tiers, chroma_row_tiers};
use crate::row_reference::{
    argb_to_uv411_row, argb_to_uv422_row, argb_to_uv444_row, argb_to_uv_row,
};
use crate::sse::sse_support::{
    _mm_bgr_to_u_epi16, _mm_bgr_to_v_epi16, _mm_deinterleave_bgr_epi16, _mm_hadd_pairs_epi16,
    _mm_load_argb_x4, _mm_load_si128_x, _mm_storel_u8x8,
};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

chroma_pair_row_tiers!(
    sse_argb_to_uv_row_any, sse_argb_to_uv_row, sse_argb_to_uv_row_aligned;
    sse_argb_to_uv_impl::<false>, sse_argb_to_uv_impl::<true>, argb_to_uv_row, 16
);

chroma_row_tiers!(
    sse_argb_to_uv422_row_any, sse_argb_to_uv422_row, sse_argb_to_uv422_row_aligned;
    sse_argb_to_uv422_impl::<false>, sse_argb_to_uv422_impl::<true>, argb_to_uv422_row, 1, 16
);

chroma_row_tiers!(
    sse_argb_to_uv444_row_any, sse_argb_to_uv444_row, sse_argb_to_uv444_row_aligned;
    sse_argb_to_uv444_impl::<false>, sse_argb_to_uv444_impl::<true>, argb_to_uv444_row, 0, 16
);

chroma_row_tiers!(
    sse_argb_to_uv411_row_any, sse_argb_to_uv411_row, sse_argb_to_uv411_row_aligned;
    sse_argb_to_uv411_impl::<false>, sse_argb_to_uv411_impl::<true>, argb_to_uv411_row, 2, 16
);

/// Sixteen pixels of a row pair into eight box-averaged `B`, `G`, `R` lanes
#[inline(always)]
unsafe fn box_average_16<const ALIGNED: bool>(
    row0: *const u8,
    row1: *const u8,
) -> (__m128i, __m128i, __m128i) {
    let (a0, a1, a2, a3) = _mm_load_argb_x4::<ALIGNED>(row0);
    let (c0, c1, c2, c3) = _mm_load_argb_x4::<ALIGNED>(row1);

    let (b00, g00, r00) = _mm_deinterleave_bgr_epi16(a0, a1);
    let (b01, g01, r01) = _mm_deinterleave_bgr_epi16(a2, a3);
    let (b10, g10, r10) = _mm_deinterleave_bgr_epi16(c0, c1);
    let (b11, g11, r11) = _mm_deinterleave_bgr_epi16(c2, c3);

    let rounding = _mm_set1_epi16(2);

    let b = _mm_hadd_pairs_epi16(_mm_add_epi16(b00, b10), _mm_add_epi16(b01, b11));
    let g = _mm_hadd_pairs_epi16(_mm_add_epi16(g00, g10), _mm_add_epi16(g01, g11));
    let r = _mm_hadd_pairs_epi16(_mm_add_epi16(r00, r10), _mm_add_epi16(r01, r11));

    (
        _mm_srli_epi16::<2>(_mm_add_epi16(b, rounding)),
        _mm_srli_epi16::<2>(_mm_add_epi16(g, rounding)),
        _mm_srli_epi16::<2>(_mm_add_epi16(r, rounding)),
    )
}

#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_uv_impl<const ALIGNED: bool>(
    row0: &[u8],
    row1: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    let zeros = _mm_setzero_si128();
    for (((src0, src1), u_dst), v_dst) in row0[..width * 4]
        .chunks_exact(64)
        .zip(row1[..width * 4].chunks_exact(64))
        .zip(u_plane.chunks_exact_mut(8))
        .zip(v_plane.chunks_exact_mut(8))
    {
        let (b, g, r) = box_average_16::<ALIGNED>(src0.as_ptr(), src1.as_ptr());
        let u = _mm_bgr_to_u_epi16(b, g, r);
        let v = _mm_bgr_to_v_epi16(b, g, r);
        _mm_storel_u8x8(u_dst.as_mut_ptr(), _mm_packus_epi16(u, zeros));
        _mm_storel_u8x8(v_dst.as_mut_ptr(), _mm_packus_epi16(v, zeros));
        cx += 16;
    }
    cx
}

/// Horizontal pairs only, which is the box average of a row with itself
#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_uv422_impl<const ALIGNED: bool>(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    sse_argb_to_uv_impl::<ALIGNED>(src, src, u_plane, v_plane, width)
}

#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_uv444_impl<const ALIGNED: bool>(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    let zeros = _mm_setzero_si128();
    for ((src, u_dst), v_dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(u_plane.chunks_exact_mut(8))
        .zip(v_plane.chunks_exact_mut(8))
    {
        let v0 = _mm_load_si128_x::<ALIGNED>(src.as_ptr());
        let v1 = _mm_load_si128_x::<ALIGNED>(src.as_ptr().add(16));
        let (b, g, r) = _mm_deinterleave_bgr_epi16(v0, v1);
        let u = _mm_bgr_to_u_epi16(b, g, r);
        let v = _mm_bgr_to_v_epi16(b, g, r);
        _mm_storel_u8x8(u_dst.as_mut_ptr(), _mm_packus_epi16(u, zeros));
        _mm_storel_u8x8(v_dst.as_mut_ptr(), _mm_packus_epi16(v, zeros));
        cx += 8;
    }
    cx
}

#[target_feature(enable = "sse2")]
unsafe fn sse_argb_to_uv411_impl<const ALIGNED: bool>(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    let zeros = _mm_setzero_si128();
    let rounding = _mm_set1_epi16(2);
    for ((src, u_dst), v_dst) in src[..width * 4]
        .chunks_exact(64)
        .zip(u_plane.chunks_exact_mut(4))
        .zip(v_plane.chunks_exact_mut(4))
    {
        let (v0, v1, v2, v3) = _mm_load_argb_x4::<ALIGNED>(src.as_ptr());
        let (b0, g0, r0) = _mm_deinterleave_bgr_epi16(v0, v1);
        let (b1, g1, r1) = _mm_deinterleave_bgr_epi16(v2, v3);

        // pairs, then pairs of pairs; the upper four lanes are zero
        let b = _mm_hadd_pairs_epi16(_mm_hadd_pairs_epi16(b0, b1), zeros);
        let g = _mm_hadd_pairs_epi16(_mm_hadd_pairs_epi16(g0, g1), zeros);
        let r = _mm_hadd_pairs_epi16(_mm_hadd_pairs_epi16(r0, r1), zeros);

        let b = _mm_srli_epi16::<2>(_mm_add_epi16(b, rounding));
        let g = _mm_srli_epi16::<2>(_mm_add_epi16(g, rounding));
        let r = _mm_srli_epi16::<2>(_mm_add_epi16(r, rounding));

        let u = _mm_packus_epi16(_mm_bgr_to_u_epi16(b, g, r), zeros);
        let v = _mm_packus_epi16(_mm_bgr_to_v_epi16(b, g, r), zeros);

        u_dst.copy_from_slice(&(_mm_cvtsi128_si32(u) as u32).to_le_bytes());
        v_dst.copy_from_slice(&(_mm_cvtsi128_si32(v) as u32).to_le_bytes());
        cx += 16;
    }
    cx
}
