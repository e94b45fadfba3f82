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

//! C ABI over the conversion entry points.
//!
//! Planes are raw pointers with signed strides, a negative stride means the
//! plane is stored bottom-up starting at the given pointer. Every function
//! returns `0` on success and `-1` on any rejected argument.
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::too_many_arguments)]

use crate::argb_to_nv::convert_nv_rows;
use crate::argb_to_rgb::convert_reshuffle_rows;
use crate::argb_to_yuv::{convert_argb_to_i400, convert_argb_to_planar};
use crate::argb_to_yuy2::convert_yuy2_rows;
use crate::dispatch::{DispatchPolicy, KernelCatalog};
use crate::images::{ImageGeometry, PlaneMut, PlaneRef};
use crate::row_kernels::{
    PixelRowFn, ARGB_TO_ARGB1555, ARGB_TO_ARGB4444, ARGB_TO_RAW, ARGB_TO_RGB24, ARGB_TO_RGB565,
    ARGB_TO_RGBA,
};
use crate::yuv_error::{log_rejected, plane_min_len};
use crate::yuv_support::{PixelFormat, Yuy2Description, YuvNVOrder};
use crate::YuvError;

/// Lowest address and byte length a plane spans with a signed stride
fn raw_plane_extent(
    stride: i32,
    format: PixelFormat,
    plane: usize,
    geometry: &ImageGeometry,
) -> Result<(usize, usize), YuvError> {
    let layout = format.planes()[plane];
    let row_bytes = layout.row_bytes(geometry.width)?;
    let rows = layout.rows(geometry.height);
    let abs_stride = stride.unsigned_abs() as usize;
    let len = plane_min_len(abs_stride, row_bytes, rows)?;
    let back = if stride < 0 {
        abs_stride * rows.saturating_sub(1)
    } else {
        0
    };
    if back > isize::MAX as usize || len > isize::MAX as usize {
        return Err(YuvError::PointerOverflow);
    }
    Ok((back, len))
}

unsafe fn raw_plane_ref<'a>(
    ptr: *const u8,
    stride: i32,
    format: PixelFormat,
    plane: usize,
    geometry: &ImageGeometry,
    flip: bool,
) -> Result<PlaneRef<'a>, YuvError> {
    let (back, len) = raw_plane_extent(stride, format, plane, geometry)?;
    let data = std::slice::from_raw_parts(ptr.sub(back), len);
    PlaneRef::new(
        data,
        stride.unsigned_abs() as usize,
        format,
        plane,
        geometry,
        flip ^ (stride < 0),
    )
}

unsafe fn raw_plane_mut<'a>(
    ptr: *mut u8,
    stride: i32,
    format: PixelFormat,
    plane: usize,
    geometry: &ImageGeometry,
    flip: bool,
) -> Result<PlaneMut<'a>, YuvError> {
    let (back, len) = raw_plane_extent(stride, format, plane, geometry)?;
    let data = std::slice::from_raw_parts_mut(ptr.sub(back), len);
    PlaneMut::new(
        data,
        stride.unsigned_abs() as usize,
        format,
        plane,
        geometry,
        flip ^ (stride < 0),
    )
}

fn raw_geometry(width: i32, height: i32, target: PixelFormat) -> Result<ImageGeometry, YuvError> {
    if width <= 0 {
        return Err(YuvError::ZeroBaseSize);
    }
    ImageGeometry::new(width as u32, height, target)
}

fn check_pointers(pointers: &[*const u8]) -> Result<(), YuvError> {
    if pointers.iter().any(|x| x.is_null()) {
        return Err(YuvError::NullPointer);
    }
    Ok(())
}

#[inline]
fn status(target: PixelFormat, result: Result<(), YuvError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(error) => {
            log_rejected(target, &error);
            error.status_code()
        }
    }
}

unsafe fn raw_planar(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_y: *mut u8,
    dst_stride_y: i32,
    dst_u: *mut u8,
    dst_stride_u: i32,
    dst_v: *mut u8,
    dst_stride_v: i32,
    width: i32,
    height: i32,
    target: PixelFormat,
) -> Result<(), YuvError> {
    check_pointers(&[src_argb, dst_y, dst_u, dst_v])?;
    let geometry = raw_geometry(width, height, target)?;
    let flip = geometry.flip_source(target);
    let src = raw_plane_ref(src_argb, src_stride_argb, PixelFormat::Argb, 0, &geometry, flip)?;
    let y_plane = raw_plane_mut(dst_y, dst_stride_y, target, 0, &geometry, false)?;
    let u_plane = raw_plane_mut(dst_u, dst_stride_u, target, 1, &geometry, false)?;
    let v_plane = raw_plane_mut(dst_v, dst_stride_v, target, 2, &geometry, false)?;
    convert_argb_to_planar(
        src,
        y_plane,
        u_plane,
        v_plane,
        &geometry,
        target,
        DispatchPolicy::current(),
    );
    Ok(())
}

macro_rules! planar_c_entry {
    ($name:ident, $target:expr) => {
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            src_argb: *const u8,
            src_stride_argb: i32,
            dst_y: *mut u8,
            dst_stride_y: i32,
            dst_u: *mut u8,
            dst_stride_u: i32,
            dst_v: *mut u8,
            dst_stride_v: i32,
            width: i32,
            height: i32,
        ) -> i32 {
            status(
                $target,
                raw_planar(
                    src_argb,
                    src_stride_argb,
                    dst_y,
                    dst_stride_y,
                    dst_u,
                    dst_stride_u,
                    dst_v,
                    dst_stride_v,
                    width,
                    height,
                    $target,
                ),
            )
        }
    };
}

planar_c_entry!(yuvpack_argb_to_i444, PixelFormat::I444);
planar_c_entry!(yuvpack_argb_to_i422, PixelFormat::I422);
planar_c_entry!(yuvpack_argb_to_i411, PixelFormat::I411);
planar_c_entry!(yuvpack_argb_to_i420, PixelFormat::I420);

unsafe fn raw_nv<const UV_ORDER: u8>(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_y: *mut u8,
    dst_stride_y: i32,
    dst_uv: *mut u8,
    dst_stride_uv: i32,
    width: i32,
    height: i32,
    target: PixelFormat,
) -> Result<(), YuvError> {
    check_pointers(&[src_argb, dst_y, dst_uv])?;
    let geometry = raw_geometry(width, height, target)?;
    let flip = geometry.flip_source(target);
    let src = raw_plane_ref(src_argb, src_stride_argb, PixelFormat::Argb, 0, &geometry, flip)?;
    let y_plane = raw_plane_mut(dst_y, dst_stride_y, target, 0, &geometry, false)?;
    let uv_plane = raw_plane_mut(dst_uv, dst_stride_uv, target, 1, &geometry, false)?;
    convert_nv_rows::<UV_ORDER>(src, y_plane, uv_plane, &geometry, DispatchPolicy::current());
    Ok(())
}

#[no_mangle]
pub unsafe extern "C" fn yuvpack_argb_to_nv12(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_y: *mut u8,
    dst_stride_y: i32,
    dst_uv: *mut u8,
    dst_stride_uv: i32,
    width: i32,
    height: i32,
) -> i32 {
    status(
        PixelFormat::Nv12,
        raw_nv::<{ YuvNVOrder::UV as u8 }>(
            src_argb,
            src_stride_argb,
            dst_y,
            dst_stride_y,
            dst_uv,
            dst_stride_uv,
            width,
            height,
            PixelFormat::Nv12,
        ),
    )
}

#[no_mangle]
pub unsafe extern "C" fn yuvpack_argb_to_nv21(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_y: *mut u8,
    dst_stride_y: i32,
    dst_vu: *mut u8,
    dst_stride_vu: i32,
    width: i32,
    height: i32,
) -> i32 {
    status(
        PixelFormat::Nv21,
        raw_nv::<{ YuvNVOrder::VU as u8 }>(
            src_argb,
            src_stride_argb,
            dst_y,
            dst_stride_y,
            dst_vu,
            dst_stride_vu,
            width,
            height,
            PixelFormat::Nv21,
        ),
    )
}

unsafe fn raw_yuy2<const TARGET: u8>(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst: *mut u8,
    dst_stride: i32,
    width: i32,
    height: i32,
    target: PixelFormat,
) -> Result<(), YuvError> {
    check_pointers(&[src_argb, dst])?;
    let geometry = raw_geometry(width, height, target)?;
    let src = raw_plane_ref(
        src_argb,
        src_stride_argb,
        PixelFormat::Argb,
        0,
        &geometry,
        geometry.flip_source(target),
    )?;
    let dst_plane = raw_plane_mut(
        dst,
        dst_stride,
        target,
        0,
        &geometry,
        geometry.flip_destination(target),
    )?;
    convert_yuy2_rows::<TARGET>(src, dst_plane, &geometry, DispatchPolicy::current());
    Ok(())
}

#[no_mangle]
pub unsafe extern "C" fn yuvpack_argb_to_yuy2(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_yuy2: *mut u8,
    dst_stride_yuy2: i32,
    width: i32,
    height: i32,
) -> i32 {
    status(
        PixelFormat::Yuy2,
        raw_yuy2::<{ Yuy2Description::YUYV as u8 }>(
            src_argb,
            src_stride_argb,
            dst_yuy2,
            dst_stride_yuy2,
            width,
            height,
            PixelFormat::Yuy2,
        ),
    )
}

#[no_mangle]
pub unsafe extern "C" fn yuvpack_argb_to_uyvy(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_uyvy: *mut u8,
    dst_stride_uyvy: i32,
    width: i32,
    height: i32,
) -> i32 {
    status(
        PixelFormat::Uyvy,
        raw_yuy2::<{ Yuy2Description::UYVY as u8 }>(
            src_argb,
            src_stride_argb,
            dst_uyvy,
            dst_stride_uyvy,
            width,
            height,
            PixelFormat::Uyvy,
        ),
    )
}

#[no_mangle]
pub unsafe extern "C" fn yuvpack_argb_to_i400(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst_y: *mut u8,
    dst_stride_y: i32,
    width: i32,
    height: i32,
) -> i32 {
    let target = PixelFormat::I400;
    let result = (|| -> Result<(), YuvError> {
        check_pointers(&[src_argb, dst_y])?;
        let geometry = raw_geometry(width, height, target)?;
        let flip = geometry.flip_source(target);
        let src = raw_plane_ref(src_argb, src_stride_argb, PixelFormat::Argb, 0, &geometry, flip)?;
        let y_plane = raw_plane_mut(dst_y, dst_stride_y, target, 0, &geometry, false)?;
        convert_argb_to_i400(src, y_plane, &geometry, DispatchPolicy::current());
        Ok(())
    })();
    status(target, result)
}

unsafe fn raw_reshuffle(
    src_argb: *const u8,
    src_stride_argb: i32,
    dst: *mut u8,
    dst_stride: i32,
    width: i32,
    height: i32,
    target: PixelFormat,
    catalog: &KernelCatalog<PixelRowFn>,
) -> Result<(), YuvError> {
    check_pointers(&[src_argb, dst])?;
    let geometry = raw_geometry(width, height, target)?;
    let flip = geometry.flip_source(target);
    let src = raw_plane_ref(src_argb, src_stride_argb, PixelFormat::Argb, 0, &geometry, flip)?;
    let dst_plane = raw_plane_mut(dst, dst_stride, target, 0, &geometry, false)?;
    convert_reshuffle_rows(src, dst_plane, &geometry, DispatchPolicy::current(), catalog);
    Ok(())
}

macro_rules! reshuffle_c_entry {
    ($name:ident, $target:expr, $catalog:expr) => {
        #[no_mangle]
        pub unsafe extern "C" fn $name(
            src_argb: *const u8,
            src_stride_argb: i32,
            dst: *mut u8,
            dst_stride: i32,
            width: i32,
            height: i32,
        ) -> i32 {
            status(
                $target,
                raw_reshuffle(
                    src_argb,
                    src_stride_argb,
                    dst,
                    dst_stride,
                    width,
                    height,
                    $target,
                    &$catalog,
                ),
            )
        }
    };
}

reshuffle_c_entry!(yuvpack_argb_to_rgba, PixelFormat::Rgba, ARGB_TO_RGBA);
reshuffle_c_entry!(yuvpack_argb_to_rgb24, PixelFormat::Rgb24, ARGB_TO_RGB24);
reshuffle_c_entry!(yuvpack_argb_to_raw, PixelFormat::Raw, ARGB_TO_RAW);
reshuffle_c_entry!(yuvpack_argb_to_rgb565, PixelFormat::Rgb565, ARGB_TO_RGB565);
reshuffle_c_entry!(yuvpack_argb_to_argb1555, PixelFormat::Argb1555, ARGB_TO_ARGB1555);
reshuffle_c_entry!(yuvpack_argb_to_argb4444, PixelFormat::Argb4444, ARGB_TO_ARGB4444);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{argb_to_i420, argb_to_nv12, argb_to_yuy2};
    use rand::Rng;

    fn random_argb(len: usize) -> Vec<u8> {
        let mut rng = rand::rng();
        (0..len).map(|_| rng.random_range(0..=255u8)).collect()
    }

    #[test]
    fn test_rejections_return_minus_one() {
        let src = random_argb(8 * 4 * 2);
        let mut y = vec![0x11u8; 16];
        let mut uv = vec![0x11u8; 8];
        unsafe {
            assert_eq!(
                yuvpack_argb_to_nv12(
                    std::ptr::null(),
                    32,
                    y.as_mut_ptr(),
                    8,
                    uv.as_mut_ptr(),
                    8,
                    8,
                    2
                ),
                -1
            );
            assert_eq!(
                yuvpack_argb_to_nv12(src.as_ptr(), 32, y.as_mut_ptr(), 8, uv.as_mut_ptr(), 8, 0, 2),
                -1
            );
            assert_eq!(
                yuvpack_argb_to_nv12(src.as_ptr(), 32, y.as_mut_ptr(), 8, uv.as_mut_ptr(), 8, -8, 2),
                -1
            );
            assert_eq!(
                yuvpack_argb_to_nv12(src.as_ptr(), 32, y.as_mut_ptr(), 8, uv.as_mut_ptr(), 8, 8, 0),
                -1
            );
            assert_eq!(
                yuvpack_argb_to_i400(src.as_ptr(), 32, std::ptr::null_mut(), 8, 8, 2),
                -1
            );
        }
        assert!(y.iter().all(|&x| x == 0x11));
        assert!(uv.iter().all(|&x| x == 0x11));
    }

    #[test]
    fn test_matches_safe_api() {
        let (width, height) = (13usize, 5usize);
        let src = random_argb(width * height * 4);
        let chroma_width = width.div_ceil(2);
        let chroma_rows = height.div_ceil(2);

        let mut y = vec![0u8; width * height];
        let mut uv = vec![0u8; chroma_width * 2 * chroma_rows];
        argb_to_nv12(
            &src,
            (width * 4) as u32,
            &mut y,
            width as u32,
            &mut uv,
            (chroma_width * 2) as u32,
            width as u32,
            height as i32,
        )
        .unwrap();

        let mut raw_y = vec![0u8; y.len()];
        let mut raw_uv = vec![0u8; uv.len()];
        let status = unsafe {
            yuvpack_argb_to_nv12(
                src.as_ptr(),
                (width * 4) as i32,
                raw_y.as_mut_ptr(),
                width as i32,
                raw_uv.as_mut_ptr(),
                (chroma_width * 2) as i32,
                width as i32,
                height as i32,
            )
        };
        assert_eq!(status, 0);
        assert_eq!(y, raw_y);
        assert_eq!(uv, raw_uv);
    }

    #[test]
    fn test_negative_stride_equals_negative_height() {
        let (width, height) = (9usize, 4usize);
        let stride = width * 4;
        let src = random_argb(stride * height);
        let chroma_width = width.div_ceil(2);
        let chroma_rows = height.div_ceil(2);

        let mut y = vec![0u8; width * height];
        let mut u = vec![0u8; chroma_width * chroma_rows];
        let mut v = vec![0u8; chroma_width * chroma_rows];
        argb_to_i420(
            &src,
            stride as u32,
            &mut y,
            width as u32,
            &mut u,
            chroma_width as u32,
            &mut v,
            chroma_width as u32,
            width as u32,
            -(height as i32),
        )
        .unwrap();

        let mut raw_y = vec![0u8; y.len()];
        let mut raw_u = vec![0u8; u.len()];
        let mut raw_v = vec![0u8; v.len()];
        let status = unsafe {
            yuvpack_argb_to_i420(
                src.as_ptr().add(stride * (height - 1)),
                -(stride as i32),
                raw_y.as_mut_ptr(),
                width as i32,
                raw_u.as_mut_ptr(),
                chroma_width as i32,
                raw_v.as_mut_ptr(),
                chroma_width as i32,
                width as i32,
                height as i32,
            )
        };
        assert_eq!(status, 0);
        assert_eq!(y, raw_y);
        assert_eq!(u, raw_u);
        assert_eq!(v, raw_v);

        // both flips cancel out
        let mut twice_y = vec![0u8; y.len()];
        let mut twice_u = vec![0u8; u.len()];
        let mut twice_v = vec![0u8; v.len()];
        let status = unsafe {
            yuvpack_argb_to_i420(
                src.as_ptr().add(stride * (height - 1)),
                -(stride as i32),
                twice_y.as_mut_ptr(),
                width as i32,
                twice_u.as_mut_ptr(),
                chroma_width as i32,
                twice_v.as_mut_ptr(),
                chroma_width as i32,
                width as i32,
                -(height as i32),
            )
        };
        assert_eq!(status, 0);
        let mut direct_y = vec![0u8; y.len()];
        argb_to_i420(
            &src,
            stride as u32,
            &mut direct_y,
            width as u32,
            &mut raw_u,
            chroma_width as u32,
            &mut raw_v,
            chroma_width as u32,
            width as u32,
            height as i32,
        )
        .unwrap();
        assert_eq!(twice_y, direct_y);
    }

    #[test]
    fn test_packed_destination_with_negative_stride() {
        let (width, height) = (7usize, 3usize);
        let src = random_argb(width * height * 4);
        let dst_stride = width.div_ceil(2) * 4;
        let mut expected = vec![0u8; dst_stride * height];
        argb_to_yuy2(
            &src,
            (width * 4) as u32,
            &mut expected,
            dst_stride as u32,
            width as u32,
            -(height as i32),
        )
        .unwrap();

        let mut dst = vec![0u8; dst_stride * height];
        let status = unsafe {
            yuvpack_argb_to_yuy2(
                src.as_ptr(),
                (width * 4) as i32,
                dst.as_mut_ptr().add(dst_stride * (height - 1)),
                -(dst_stride as i32),
                width as i32,
                height as i32,
            )
        };
        assert_eq!(status, 0);
        assert_eq!(dst, expected);
    }
}
