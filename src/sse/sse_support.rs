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

#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

#[inline(always)]
pub(crate) unsafe fn _mm_load_si128_x<const ALIGNED: bool>(ptr: *const u8) -> __m128i {
    if ALIGNED {
        _mm_load_si128(ptr as *const __m128i)
    } else {
        _mm_loadu_si128(ptr as *const __m128i)
    }
}

#[inline(always)]
pub(crate) unsafe fn _mm_store_si128_x<const ALIGNED: bool>(ptr: *mut u8, v: __m128i) {
    if ALIGNED {
        _mm_store_si128(ptr as *mut __m128i, v)
    } else {
        _mm_storeu_si128(ptr as *mut __m128i, v)
    }
}

#[inline(always)]
pub(crate) unsafe fn _mm_load_argb_x4<const ALIGNED: bool>(
    ptr: *const u8,
) -> (__m128i, __m128i, __m128i, __m128i) {
    (
        _mm_load_si128_x::<ALIGNED>(ptr),
        _mm_load_si128_x::<ALIGNED>(ptr.add(16)),
        _mm_load_si128_x::<ALIGNED>(ptr.add(32)),
        _mm_load_si128_x::<ALIGNED>(ptr.add(48)),
    )
}

/// Eight `B, G, R, A` pixels held in two registers into `B`, `G`, `R`
/// 16-bit lanes.
#[inline(always)]
pub(crate) unsafe fn _mm_deinterleave_bgr_epi16(
    v0: __m128i,
    v1: __m128i,
) -> (__m128i, __m128i, __m128i) {
    let mask = _mm_set1_epi32(0xFF);
    let b = _mm_packs_epi32(_mm_and_si128(v0, mask), _mm_and_si128(v1, mask));
    let g = _mm_packs_epi32(
        _mm_and_si128(_mm_srli_epi32::<8>(v0), mask),
        _mm_and_si128(_mm_srli_epi32::<8>(v1), mask),
    );
    let r = _mm_packs_epi32(
        _mm_and_si128(_mm_srli_epi32::<16>(v0), mask),
        _mm_and_si128(_mm_srli_epi32::<16>(v1), mask),
    );
    (b, g, r)
}

// Products and sums wrap in 16 bits, the exact results fit in u16 so the
// logical shift restores them.

#[inline(always)]
pub(crate) unsafe fn _mm_bgr_to_y_epi16(b: __m128i, g: __m128i, r: __m128i) -> __m128i {
    let y = _mm_add_epi16(
        _mm_add_epi16(
            _mm_mullo_epi16(r, _mm_set1_epi16(66)),
            _mm_mullo_epi16(g, _mm_set1_epi16(129)),
        ),
        _mm_add_epi16(
            _mm_mullo_epi16(b, _mm_set1_epi16(25)),
            _mm_set1_epi16(0x1080),
        ),
    );
    _mm_srli_epi16::<8>(y)
}

#[inline(always)]
pub(crate) unsafe fn _mm_bgr_to_u_epi16(b: __m128i, g: __m128i, r: __m128i) -> __m128i {
    let u = _mm_sub_epi16(
        _mm_add_epi16(
            _mm_mullo_epi16(b, _mm_set1_epi16(112)),
            _mm_set1_epi16(0x8080u16 as i16),
        ),
        _mm_add_epi16(
            _mm_mullo_epi16(g, _mm_set1_epi16(74)),
            _mm_mullo_epi16(r, _mm_set1_epi16(38)),
        ),
    );
    _mm_srli_epi16::<8>(u)
}

#[inline(always)]
pub(crate) unsafe fn _mm_bgr_to_v_epi16(b: __m128i, g: __m128i, r: __m128i) -> __m128i {
    let v = _mm_sub_epi16(
        _mm_add_epi16(
            _mm_mullo_epi16(r, _mm_set1_epi16(112)),
            _mm_set1_epi16(0x8080u16 as i16),
        ),
        _mm_add_epi16(
            _mm_mullo_epi16(g, _mm_set1_epi16(94)),
            _mm_mullo_epi16(b, _mm_set1_epi16(18)),
        ),
    );
    _mm_srli_epi16::<8>(v)
}

/// Sums adjacent 16-bit lanes of two registers into eight 16-bit lanes
#[inline(always)]
pub(crate) unsafe fn _mm_hadd_pairs_epi16(v0: __m128i, v1: __m128i) -> __m128i {
    let ones = _mm_set1_epi16(1);
    _mm_packs_epi32(_mm_madd_epi16(v0, ones), _mm_madd_epi16(v1, ones))
}

#[inline(always)]
pub(crate) unsafe fn _mm_storel_u8x8(ptr: *mut u8, v: __m128i) {
    _mm_storel_epi64(ptr as *mut __m128i, v);
}

#[inline(always)]
pub(crate) unsafe fn _mm_loadl_u8x8(ptr: *const u8) -> __m128i {
    _mm_loadl_epi64(ptr as *const __m128i)
}
