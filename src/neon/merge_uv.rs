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

use crate::row_any::merge_row_tiers;
use crate::row_reference::merge_uv_row;
use std::arch::aarch64::*;

merge_row_tiers!(
    neon_merge_uv_row_any, neon_merge_uv_row;
    neon_merge_uv_impl, neon_merge_uv_impl, merge_uv_row, 16
);

#[inline(always)]
unsafe fn neon_merge_uv_impl(first: &[u8], second: &[u8], dst: &mut [u8], width: usize) -> usize {
    let mut cx = 0usize;
    for ((first, second), dst) in first[..width]
        .chunks_exact(16)
        .zip(second[..width].chunks_exact(16))
        .zip(dst[..width * 2].chunks_exact_mut(32))
    {
        let pair = uint8x16x2_t(vld1q_u8(first.as_ptr()), vld1q_u8(second.as_ptr()));
        vst2q_u8(dst.as_mut_ptr(), pair);
        cx += 16;
    }
    cx
}
