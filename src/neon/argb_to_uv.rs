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

use crate::neon::neon_support::{neon_bgr_to_u, neon_bgr_to_v};
use crate::row_any::{chroma_pair_row_tiers, chroma_row_tiers};
use crate::row_reference::{
    argb_to_uv411_row, argb_to_uv422_row, argb_to_uv444_row, argb_to_uv_row,
};
use std::arch::aarch64::*;

chroma_pair_row_tiers!(
    neon_argb_to_uv_row_any, neon_argb_to_uv_row;
    neon_argb_to_uv_impl, neon_argb_to_uv_impl, argb_to_uv_row, 16
);

chroma_row_tiers!(
    neon_argb_to_uv422_row_any, neon_argb_to_uv422_row;
    neon_argb_to_uv422_impl, neon_argb_to_uv422_impl, argb_to_uv422_row, 1, 16
);

chroma_row_tiers!(
    neon_argb_to_uv444_row_any, neon_argb_to_uv444_row;
    neon_argb_to_uv444_impl, neon_argb_to_uv444_impl, argb_to_uv444_row, 0, 16
);

chroma_row_tiers!(
    neon_argb_to_uv411_row_any, neon_argb_to_uv411_row;
    neon_argb_to_uv411_impl, neon_argb_to_uv411_impl, argb_to_uv411_row, 2, 16
);

#[inline(always)]
unsafe fn neon_argb_to_uv_impl(
    row0: &[u8],
    row1: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for (((src0, src1), u_dst), v_dst) in row0[..width * 4]
        .chunks_exact(64)
        .zip(row1[..width * 4].chunks_exact(64))
        .zip(u_plane.chunks_exact_mut(8))
        .zip(v_plane.chunks_exact_mut(8))
    {
        let top = vld4q_u8(src0.as_ptr());
        let bottom = vld4q_u8(src1.as_ptr());

        let b = vpadalq_u8(vpaddlq_u8(top.0), bottom.0);
        let g = vpadalq_u8(vpaddlq_u8(top.1), bottom.1);
        let r = vpadalq_u8(vpaddlq_u8(top.2), bottom.2);

        let b = vmovn_u16(vrshrq_n_u16::<2>(b));
        let g = vmovn_u16(vrshrq_n_u16::<2>(g));
        let r = vmovn_u16(vrshrq_n_u16::<2>(r));

        vst1_u8(u_dst.as_mut_ptr(), neon_bgr_to_u(b, g, r));
        vst1_u8(v_dst.as_mut_ptr(), neon_bgr_to_v(b, g, r));
        cx += 16;
    }
    cx
}

#[inline(always)]
unsafe fn neon_argb_to_uv422_impl(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for ((src, u_dst), v_dst) in src[..width * 4]
        .chunks_exact(64)
        .zip(u_plane.chunks_exact_mut(8))
        .zip(v_plane.chunks_exact_mut(8))
    {
        let bgra = vld4q_u8(src.as_ptr());

        let b = vmovn_u16(vrshrq_n_u16::<1>(vpaddlq_u8(bgra.0)));
        let g = vmovn_u16(vrshrq_n_u16::<1>(vpaddlq_u8(bgra.1)));
        let r = vmovn_u16(vrshrq_n_u16::<1>(vpaddlq_u8(bgra.2)));

        vst1_u8(u_dst.as_mut_ptr(), neon_bgr_to_u(b, g, r));
        vst1_u8(v_dst.as_mut_ptr(), neon_bgr_to_v(b, g, r));
        cx += 16;
    }
    cx
}

#[inline(always)]
unsafe fn neon_argb_to_uv444_impl(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for ((src, u_dst), v_dst) in src[..width * 4]
        .chunks_exact(32)
        .zip(u_plane.chunks_exact_mut(8))
        .zip(v_plane.chunks_exact_mut(8))
    {
        let bgra = vld4_u8(src.as_ptr());
        vst1_u8(u_dst.as_mut_ptr(), neon_bgr_to_u(bgra.0, bgra.1, bgra.2));
        vst1_u8(v_dst.as_mut_ptr(), neon_bgr_to_v(bgra.0, bgra.1, bgra.2));
        cx += 8;
    }
    cx
}

#[inline(always)]
unsafe fn neon_argb_to_uv411_impl(
    src: &[u8],
    u_plane: &mut [u8],
    v_plane: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for ((src, u_dst), v_dst) in src[..width * 4]
        .chunks_exact(64)
        .zip(u_plane.chunks_exact_mut(4))
        .zip(v_plane.chunks_exact_mut(4))
    {
        let bgra = vld4q_u8(src.as_ptr());

        // quads land in the low four lanes
        let quad = |x: uint8x16_t| -> uint8x8_t {
            let sums = vrshrn_n_u32::<2>(vpaddlq_u16(vpaddlq_u8(x)));
            vmovn_u16(vcombine_u16(sums, vdup_n_u16(0)))
        };

        let b = quad(bgra.0);
        let g = quad(bgra.1);
        let r = quad(bgra.2);

        let u = vreinterpret_u32_u8(neon_bgr_to_u(b, g, r));
        let v = vreinterpret_u32_u8(neon_bgr_to_v(b, g, r));
        u_dst.copy_from_slice(&vget_lane_u32::<0>(u).to_le_bytes());
        v_dst.copy_from_slice(&vget_lane_u32::<0>(v).to_le_bytes());
        cx += 16;
    }
    cx
}
