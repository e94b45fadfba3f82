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

use std::arch::aarch64::*;

// Products wrap in 16-bit lanes, the exact results fit in u16.

#[inline(always)]
pub(crate) unsafe fn neon_bgr_to_y(b: uint8x8_t, g: uint8x8_t, r: uint8x8_t) -> uint8x8_t {
    let mut y = vmull_u8(r, vdup_n_u8(66));
    y = vmlal_u8(y, g, vdup_n_u8(129));
    y = vmlal_u8(y, b, vdup_n_u8(25));
    vshrn_n_u16::<8>(vaddq_u16(y, vdupq_n_u16(0x1080)))
}

#[inline(always)]
pub(crate) unsafe fn neon_bgr_to_u(b: uint8x8_t, g: uint8x8_t, r: uint8x8_t) -> uint8x8_t {
    let mut u = vmull_u8(b, vdup_n_u8(112));
    u = vmlsl_u8(u, g, vdup_n_u8(74));
    u = vmlsl_u8(u, r, vdup_n_u8(38));
    vshrn_n_u16::<8>(vaddq_u16(u, vdupq_n_u16(0x8080)))
}

#[inline(always)]
pub(crate) unsafe fn neon_bgr_to_v(b: uint8x8_t, g: uint8x8_t, r: uint8x8_t) -> uint8x8_t {
    let mut v = vmull_u8(r, vdup_n_u8(112));
    v = vmlsl_u8(v, g, vdup_n_u8(94));
    v = vmlsl_u8(v, b, vdup_n_u8(18));
    vshrn_n_u16::<8>(vaddq_u16(v, vdupq_n_u16(0x8080)))
}
