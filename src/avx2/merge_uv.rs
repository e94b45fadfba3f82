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
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

merge_row_tiers!(
    avx2_merge_uv_row_any, avx2_merge_uv_row, avx2_merge_uv_row_aligned;
    avx2_merge_uv_impl::<false>, avx2_merge_uv_impl::<true>, merge_uv_row, 32
);

#[inline(always)]
unsafe fn _mm256_load_si256_x<const ALIGNED: bool>(ptr: *const u8) -> __m256i {
    if ALIGNED {
        _mm256_load_si256(ptr as *const __m256i)
    } else {
        _mm256_loadu_si256(ptr as *const __m256i)
    }
}

#[inline(always)]
unsafe fn _mm256_store_si256_x<const ALIGNED: bool>(ptr: *mut u8, v: __m256i) {
    if ALIGNED {
        _mm256_store_si256(ptr as *mut __m256i, v)
    } else {
        _mm256_storeu_si256(ptr as *mut __m256i, v)
    }
}

#[target_feature(enable = "avx2")]
unsafe fn avx2_merge_uv_impl<const ALIGNED: bool>(
    first: &[u8],
    second: &[u8],
    dst: &mut [u8],
    width: usize,
) -> usize {
    let mut cx = 0usize;
    for ((first, second), dst) in first[..width]
        .chunks_exact(32)
        .zip(second[..width].chunks_exact(32))
        .zip(dst[..width * 2].chunks_exact_mut(64))
    {
        let a = _mm256_load_si256_x::<ALIGNED>(first.as_ptr());
        let b = _mm256_load_si256_x::<ALIGNED>(second.as_ptr());
        // unpack works per 128-bit lane, lanes are put back in order
        let lo = _mm256_unpacklo_epi8(a, b);
        let hi = _mm256_unpackhi_epi8(a, b);
        let row0 = _mm256_permute2x128_si256::<0x20>(lo, hi);
        let row1 = _mm256_permute2x128_si256::<0x31>(lo, hi);
        _mm256_store_si256_x::<ALIGNED>(dst.as_mut_ptr(), row0);
        _mm256_store_si256_x::<ALIGNED>(dst.as_mut_ptr().add(32), row1);
        cx += 32;
    }
    cx
}
