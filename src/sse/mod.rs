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

#![deny(unreachable_code, unreachable_pub)]
mod argb_to_rgb16;
mod argb_to_uv;
mod argb_to_y;
mod merge_uv;
mod shuffle;
pub(crate) mod sse_support;
mod yuv_to_yuy2;

pub(crate) use argb_to_rgb16::{
    sse_argb_to_argb1555_row, sse_argb_to_argb1555_row_any, sse_argb_to_argb4444_row,
    sse_argb_to_argb4444_row_any, sse_argb_to_rgb565_row, sse_argb_to_rgb565_row_any,
};
pub(crate) use argb_to_uv::{
    sse_argb_to_uv411_row, sse_argb_to_uv411_row_aligned, sse_argb_to_uv411_row_any,
    sse_argb_to_uv422_row, sse_argb_to_uv422_row_aligned, sse_argb_to_uv422_row_any,
    sse_argb_to_uv444_row, sse_argb_to_uv444_row_aligned, sse_argb_to_uv444_row_any,
    sse_argb_to_uv_row, sse_argb_to_uv_row_aligned, sse_argb_to_uv_row_any,
};
pub(crate) use argb_to_y::{sse_argb_to_y_row, sse_argb_to_y_row_aligned, sse_argb_to_y_row_any};
pub(crate) use merge_uv::{sse_merge_uv_row, sse_merge_uv_row_aligned, sse_merge_uv_row_any};
pub(crate) use shuffle::{
    ssse3_argb_to_raw_row, ssse3_argb_to_raw_row_any, ssse3_argb_to_rgb24_row,
    ssse3_argb_to_rgb24_row_any, ssse3_argb_to_rgba_row, ssse3_argb_to_rgba_row_any,
};
pub(crate) use yuv_to_yuy2::{
    sse_yuv422_to_uyvy_row, sse_yuv422_to_uyvy_row_aligned, sse_yuv422_to_uyvy_row_any,
    sse_yuv422_to_yuy2_row, sse_yuv422_to_yuy2_row_aligned, sse_yuv422_to_yuy2_row_any,
};
