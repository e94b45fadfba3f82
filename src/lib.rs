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

#![cfg_attr(docsrs, feature(doc_cfg))]
mod argb_to_nv;
mod argb_to_rgb;
mod argb_to_yuv;
mod argb_to_yuy2;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx2;
#[cfg(feature = "c_api")]
#[cfg_attr(docsrs, doc(cfg(feature = "c_api")))]
#[doc(hidden)]
pub mod c_api;
mod cpu_features;
mod dispatch;
mod images;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        any(feature = "sse", feature = "avx")
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
mod row_any;
mod row_kernels;
mod row_reference;
mod scratch;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;
mod yuv_error;
mod yuv_support;

pub use yuv_error::MismatchedSize;
pub use yuv_error::YuvError;

pub use yuv_support::PixelFormat;
pub use yuv_support::PlaneLayout;
pub use yuv_support::YuvNVOrder;

pub use scratch::MAX_ROW_WIDTH;

pub use cpu_features::cpu_features;
pub use cpu_features::describe_acceleration;
pub use cpu_features::CpuFeatures;
pub use cpu_features::CpuFlag;

pub use dispatch::select_tier;
pub use dispatch::with_reference_kernels;
pub use dispatch::DispatchPolicy;
pub use dispatch::KernelTier;

pub use argb_to_yuv::argb_to_i400;
pub use argb_to_yuv::argb_to_i411;
pub use argb_to_yuv::argb_to_i420;
pub use argb_to_yuv::argb_to_i422;
pub use argb_to_yuv::argb_to_i444;

pub use argb_to_nv::argb_to_nv12;
pub use argb_to_nv::argb_to_nv21;

pub use argb_to_yuy2::argb_to_uyvy;
pub use argb_to_yuy2::argb_to_yuy2;

pub use argb_to_rgb::argb_to_argb1555;
pub use argb_to_rgb::argb_to_argb4444;
pub use argb_to_rgb::argb_to_raw;
pub use argb_to_rgb::argb_to_rgb24;
pub use argb_to_rgb::argb_to_rgb565;
pub use argb_to_rgb::argb_to_rgba;
