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
use crate::yuv_support::Yuy2Description;
use std::arch::aarch64::*;

packed_row_tiers!(
    neon_yuv422_to_yuy2_row_any, neon_yuv422_to_yuy2_row;
    neon_yuv422_to_packed_impl::<{ Yuy2Description::YUYV as u8 }>,
    neon_yuv422_to_packed_impl::<{ Yuy2Description::YUYV as u8 }>,
    yuv422_to_packed_row::<{ Yuy2Description::YUYV as u8 }>,
    16
);

packed_row_tiers!(
    neon_yuv422_to_uyvy_row_any, neon_yuv422_to_uyvy_row;
    neon_yuv422_to_packed_impl::<{ Yuy2Description::UYVY as u8 }>,
    neon_yuv422_to_packed_impl::<{ Yuy2Description::UYVY as u8 }>,
    yuv422_to_packed_row::<{ Yuy2Description::UYVY as u8 }>,
    16
);

#[inline(always)]
unsafe fn neon_yuv422_to_packed_impl<const TARGET: u8>(
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
        let y = vld2_u8(y_src.as_ptr());
        let u = vld1_u8(u_src.as_ptr());
        let v = vld1_u8(v_src.as_ptr());
        let storage = match yuy2_target {
            Yuy2Description::YUYV => uint8x8x4_t(y.0, u, y.1, v),
            Yuy2Description::UYVY => uint8x8x4_t(u, y.0, v, y.1),
        };
        vst4_u8(dst.as_mut_ptr(), storage);
        cx += 16;
    }
    cx
}
