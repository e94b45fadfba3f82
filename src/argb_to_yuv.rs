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

use crate::cpu_features::cpu_features;
use crate::dispatch::{DispatchPolicy, KernelCatalog};
use crate::images::{ImageGeometry, PlaneMut, PlaneRef};
use crate::row_kernels::{
    ChromaRowFn, ARGB_TO_UV, ARGB_TO_UV411, ARGB_TO_UV422, ARGB_TO_UV444, ARGB_TO_Y,
};
use crate::yuv_error::log_rejected;
use crate::yuv_support::PixelFormat;
use crate::YuvError;

/// Planar conversion without vertical subsampling, every source row
/// produces one luma row and one row of each chroma plane.
fn convert_planar_rows(
    src: PlaneRef,
    mut y_plane: PlaneMut,
    mut u_plane: PlaneMut,
    mut v_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
    chroma: &KernelCatalog<ChromaRowFn>,
) {
    let features = cpu_features();
    let width = geometry.width;
    let luma_kernel = ARGB_TO_Y.resolve(
        policy,
        features,
        width,
        &[src.alignment(), y_plane.alignment()],
    );
    let chroma_kernel = chroma.resolve(policy, features, width, &[src.alignment()]);
    log::trace!(
        "{} {}x{}: {:?}, {}: {:?}",
        chroma.name,
        width,
        geometry.height,
        chroma_kernel,
        ARGB_TO_Y.name,
        luma_kernel
    );

    for y in 0..geometry.height {
        let src_row = src.row(y);
        (chroma_kernel.func)(src_row, u_plane.row_mut(y), v_plane.row_mut(y), width);
        (luma_kernel.func)(src_row, y_plane.row_mut(y), width);
    }
}

/// 4:2:0, one chroma row per source row pair. An unpaired last row is
/// paired with itself.
fn convert_i420_rows(
    src: PlaneRef,
    mut y_plane: PlaneMut,
    mut u_plane: PlaneMut,
    mut v_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
) {
    let features = cpu_features();
    let width = geometry.width;
    let luma_kernel = ARGB_TO_Y.resolve(
        policy,
        features,
        width,
        &[src.alignment(), y_plane.alignment()],
    );
    let chroma_kernel = ARGB_TO_UV.resolve(policy, features, width, &[src.alignment()]);
    log::trace!(
        "I420 {}x{}: {}: {:?}, {}: {:?}",
        width,
        geometry.height,
        ARGB_TO_UV.name,
        chroma_kernel,
        ARGB_TO_Y.name,
        luma_kernel
    );

    let pairs = geometry.height / 2;
    for pair in 0..pairs {
        let row0 = src.row(pair * 2);
        let row1 = src.row(pair * 2 + 1);
        (chroma_kernel.func)(
            row0,
            row1,
            u_plane.row_mut(pair),
            v_plane.row_mut(pair),
            width,
        );
        (luma_kernel.func)(row0, y_plane.row_mut(pair * 2), width);
        (luma_kernel.func)(row1, y_plane.row_mut(pair * 2 + 1), width);
    }

    if geometry.height & 1 != 0 {
        let last = geometry.height - 1;
        let row = src.row(last);
        (chroma_kernel.func)(
            row,
            row,
            u_plane.row_mut(pairs),
            v_plane.row_mut(pairs),
            width,
        );
        (luma_kernel.func)(row, y_plane.row_mut(last), width);
    }
}

#[allow(clippy::too_many_arguments)]
fn argb_to_planar_impl(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_u: &mut [u8],
    dst_stride_u: u32,
    dst_v: &mut [u8],
    dst_stride_v: u32,
    width: u32,
    height: i32,
    target: PixelFormat,
) -> Result<(), YuvError> {
    let geometry = ImageGeometry::new(width, height, target)?;
    let src = PlaneRef::new(
        src_argb,
        src_stride_argb as usize,
        PixelFormat::Argb,
        0,
        &geometry,
        geometry.flip_source(target),
    )?;
    let y_plane = PlaneMut::new(dst_y, dst_stride_y as usize, target, 0, &geometry, false)?;
    let u_plane = PlaneMut::new(dst_u, dst_stride_u as usize, target, 1, &geometry, false)?;
    let v_plane = PlaneMut::new(dst_v, dst_stride_v as usize, target, 2, &geometry, false)?;

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

/// Runs a validated three plane conversion, `target` selects the chroma layout
pub(crate) fn convert_argb_to_planar(
    src: PlaneRef,
    y_plane: PlaneMut,
    u_plane: PlaneMut,
    v_plane: PlaneMut,
    geometry: &ImageGeometry,
    target: PixelFormat,
    policy: DispatchPolicy,
) {
    match target {
        PixelFormat::I420 => convert_i420_rows(src, y_plane, u_plane, v_plane, geometry, policy),
        PixelFormat::I422 => convert_planar_rows(
            src,
            y_plane,
            u_plane,
            v_plane,
            geometry,
            policy,
            &ARGB_TO_UV422,
        ),
        PixelFormat::I411 => convert_planar_rows(
            src,
            y_plane,
            u_plane,
            v_plane,
            geometry,
            policy,
            &ARGB_TO_UV411,
        ),
        _ => convert_planar_rows(
            src,
            y_plane,
            u_plane,
            v_plane,
            geometry,
            policy,
            &ARGB_TO_UV444,
        ),
    }
}

/// Convert ARGB image data to planar YUV 4:4:4.
///
/// Coefficients are BT.601 limited range. Chroma planes have full resolution.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_u` - Target U plane.
/// * `dst_stride_u` - Bytes per U row.
/// * `dst_v` - Target V plane.
/// * `dst_stride_v` - Bytes per V row.
/// * `width` - Image width.
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero or any plane is too short,
/// nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_i444(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_u: &mut [u8],
    dst_stride_u: u32,
    dst_v: &mut [u8],
    dst_stride_v: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_planar_impl(
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
        PixelFormat::I444,
    )
    .inspect_err(|e| log_rejected(PixelFormat::I444, e))
}

/// Convert ARGB image data to planar YUV 4:2:2.
///
/// Each chroma sample averages two horizontally adjacent pixels, an odd
/// last column keeps its own chroma.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_u` - Target U plane, `(width + 1) / 2` samples per row.
/// * `dst_stride_u` - Bytes per U row.
/// * `dst_v` - Target V plane, `(width + 1) / 2` samples per row.
/// * `dst_stride_v` - Bytes per V row.
/// * `width` - Image width.
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero or any plane is too short,
/// nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_i422(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_u: &mut [u8],
    dst_stride_u: u32,
    dst_v: &mut [u8],
    dst_stride_v: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_planar_impl(
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
        PixelFormat::I422,
    )
    .inspect_err(|e| log_rejected(PixelFormat::I422, e))
}

/// Convert ARGB image data to planar YUV 4:1:1.
///
/// Each chroma sample averages four horizontally adjacent pixels, a
/// trailing group of one to three pixels is averaged on its own.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_u` - Target U plane, `(width + 3) / 4` samples per row.
/// * `dst_stride_u` - Bytes per U row.
/// * `dst_v` - Target V plane, `(width + 3) / 4` samples per row.
/// * `dst_stride_v` - Bytes per V row.
/// * `width` - Image width.
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero or any plane is too short,
/// nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_i411(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_u: &mut [u8],
    dst_stride_u: u32,
    dst_v: &mut [u8],
    dst_stride_v: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_planar_impl(
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
        PixelFormat::I411,
    )
    .inspect_err(|e| log_rejected(PixelFormat::I411, e))
}

/// Convert ARGB image data to planar YUV 4:2:0.
///
/// Chroma averages 2x2 blocks. With odd height the last row is used as its
/// own pair partner, with odd width the last column averages only vertically.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `dst_u` - Target U plane, `(width + 1) / 2` x `(height + 1) / 2`.
/// * `dst_stride_u` - Bytes per U row.
/// * `dst_v` - Target V plane, `(width + 1) / 2` x `(height + 1) / 2`.
/// * `dst_stride_v` - Bytes per V row.
/// * `width` - Image width.
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero or any plane is too short,
/// nothing is written in that case.
///
#[allow(clippy::too_many_arguments)]
pub fn argb_to_i420(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    dst_u: &mut [u8],
    dst_stride_u: u32,
    dst_v: &mut [u8],
    dst_stride_v: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_planar_impl(
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
        PixelFormat::I420,
    )
    .inspect_err(|e| log_rejected(PixelFormat::I420, e))
}

fn argb_to_i400_impl(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    let target = PixelFormat::I400;
    let geometry = ImageGeometry::new(width, height, target)?;
    let src = PlaneRef::new(
        src_argb,
        src_stride_argb as usize,
        PixelFormat::Argb,
        0,
        &geometry,
        geometry.flip_source(target),
    )?;
    let y_plane = PlaneMut::new(dst_y, dst_stride_y as usize, target, 0, &geometry, false)?;
    convert_argb_to_i400(src, y_plane, &geometry, DispatchPolicy::current());
    Ok(())
}

pub(crate) fn convert_argb_to_i400(
    src: PlaneRef,
    mut y_plane: PlaneMut,
    geometry: &ImageGeometry,
    policy: DispatchPolicy,
) {
    let kernel = ARGB_TO_Y.resolve(
        policy,
        cpu_features(),
        geometry.width,
        &[src.alignment(), y_plane.alignment()],
    );
    log::trace!(
        "I400 {}x{}: {}: {:?}",
        geometry.width,
        geometry.height,
        ARGB_TO_Y.name,
        kernel
    );

    for y in 0..geometry.height {
        (kernel.func)(src.row(y), y_plane.row_mut(y), geometry.width);
    }
}

/// Convert ARGB image data to a luma only plane.
///
/// # Arguments
///
/// * `src_argb` - Source ARGB data, `B, G, R, A` in memory.
/// * `src_stride_argb` - Bytes per source row.
/// * `dst_y` - Target luma plane.
/// * `dst_stride_y` - Bytes per luma row.
/// * `width` - Image width.
/// * `height` - Image height, negative when the source is stored bottom-up.
///
/// # Errors
///
/// Returns [YuvError] when the size is zero or any plane is too short,
/// nothing is written in that case.
///
pub fn argb_to_i400(
    src_argb: &[u8],
    src_stride_argb: u32,
    dst_y: &mut [u8],
    dst_stride_y: u32,
    width: u32,
    height: i32,
) -> Result<(), YuvError> {
    argb_to_i400_impl(src_argb, src_stride_argb, dst_y, dst_stride_y, width, height)
        .inspect_err(|e| log_rejected(PixelFormat::I400, e))
}
