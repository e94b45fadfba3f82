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

use crate::dispatch::PlaneAlignment;
use crate::scratch::check_row_capacity;
use crate::yuv_error::{plane_min_len, MismatchedSize};
use crate::yuv_support::{PixelFormat, PlaneRole};
use crate::YuvError;

/// Validated image size, orientation is carried separately by each plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct ImageGeometry {
    pub(crate) width: usize,
    pub(crate) height: usize,
    /// Height was negative, the image is stored bottom-up
    pub(crate) bottom_up: bool,
}

impl ImageGeometry {
    /// Checks the size for a conversion into `target`.
    pub(crate) fn new(width: u32, height: i32, target: PixelFormat) -> Result<Self, YuvError> {
        if width == 0 || height == 0 {
            return Err(YuvError::ZeroBaseSize);
        }
        if target.requires_scratch_rows() {
            check_row_capacity(width as usize)?;
        }
        Ok(ImageGeometry {
            width: width as usize,
            height: height.unsigned_abs() as usize,
            bottom_up: height < 0,
        })
    }

    /// Whether the source plane is read from its last row upward
    #[inline]
    pub(crate) const fn flip_source(&self, target: PixelFormat) -> bool {
        self.bottom_up && !target.flips_destination()
    }

    /// Whether the destination planes are written from their last row upward
    #[inline]
    pub(crate) const fn flip_destination(&self, target: PixelFormat) -> bool {
        self.bottom_up && target.flips_destination()
    }
}

#[derive(Debug, Copy, Clone)]
struct PlaneShape {
    stride: usize,
    row_bytes: usize,
    rows: usize,
    flipped: bool,
}

impl PlaneShape {
    fn new(
        len: usize,
        stride: usize,
        format: PixelFormat,
        plane: usize,
        geometry: &ImageGeometry,
        flipped: bool,
    ) -> Result<Self, YuvError> {
        let layout = format.planes()[plane];
        let row_bytes = layout.row_bytes(geometry.width)?;
        let rows = layout.rows(geometry.height);
        let required = plane_min_len(stride, row_bytes, rows)?;
        if len < required {
            let size = MismatchedSize {
                expected: required,
                received: len,
            };
            return Err(match format.plane_role(plane) {
                PlaneRole::Source => YuvError::SourceMinimumSizeMismatch(size),
                PlaneRole::Luma => YuvError::LumaPlaneMinimumSizeMismatch(size),
                PlaneRole::Chroma => YuvError::ChromaPlaneMinimumSizeMismatch(size),
                PlaneRole::Destination => YuvError::DestinationMinimumSizeMismatch(size),
            });
        }
        Ok(PlaneShape {
            stride,
            row_bytes,
            rows,
            flipped,
        })
    }

    #[inline]
    fn row_offset(&self, y: usize) -> usize {
        let physical = if self.flipped { self.rows - 1 - y } else { y };
        physical * self.stride
    }

    #[inline]
    fn alignment(&self, base: usize) -> PlaneAlignment {
        PlaneAlignment {
            address: base + self.row_offset(0),
            stride: self.stride,
        }
    }
}

/// Read-only plane, rows are addressed in processing order.
///
/// A flipped plane yields its last stored row first, which is how bottom-up
/// storage is walked without copying.
#[derive(Debug)]
pub(crate) struct PlaneRef<'a> {
    data: &'a [u8],
    shape: PlaneShape,
}

impl<'a> PlaneRef<'a> {
    pub(crate) fn new(
        data: &'a [u8],
        stride: usize,
        format: PixelFormat,
        plane: usize,
        geometry: &ImageGeometry,
        flipped: bool,
    ) -> Result<Self, YuvError> {
        let shape = PlaneShape::new(data.len(), stride, format, plane, geometry, flipped)?;
        Ok(PlaneRef { data, shape })
    }

    #[inline]
    pub(crate) fn row(&self, y: usize) -> &'a [u8] {
        let offset = self.shape.row_offset(y);
        &self.data[offset..offset + self.shape.row_bytes]
    }

    #[inline]
    pub(crate) fn alignment(&self) -> PlaneAlignment {
        self.shape.alignment(self.data.as_ptr() as usize)
    }
}

/// Writable counterpart of [PlaneRef]
#[derive(Debug)]
pub(crate) struct PlaneMut<'a> {
    data: &'a mut [u8],
    shape: PlaneShape,
}

impl<'a> PlaneMut<'a> {
    pub(crate) fn new(
        data: &'a mut [u8],
        stride: usize,
        format: PixelFormat,
        plane: usize,
        geometry: &ImageGeometry,
        flipped: bool,
    ) -> Result<Self, YuvError> {
        let shape = PlaneShape::new(data.len(), stride, format, plane, geometry, flipped)?;
        Ok(PlaneMut { data, shape })
    }

    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let offset = self.shape.row_offset(y);
        &mut self.data[offset..offset + self.shape.row_bytes]
    }

    #[inline]
    pub(crate) fn alignment(&self) -> PlaneAlignment {
        self.shape.alignment(self.data.as_ptr() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_preconditions() {
        assert_eq!(
            ImageGeometry::new(0, 4, PixelFormat::I420),
            Err(YuvError::ZeroBaseSize)
        );
        assert_eq!(
            ImageGeometry::new(4, 0, PixelFormat::I420),
            Err(YuvError::ZeroBaseSize)
        );
        assert!(ImageGeometry::new(crate::MAX_ROW_WIDTH as u32 + 1, 1, PixelFormat::I420).is_ok());
        assert!(ImageGeometry::new(crate::MAX_ROW_WIDTH as u32 + 1, 1, PixelFormat::Nv12).is_err());
        let geometry = ImageGeometry::new(4, -3, PixelFormat::Yuy2).unwrap();
        assert_eq!(geometry.height, 3);
        assert!(geometry.flip_destination(PixelFormat::Yuy2));
        assert!(!geometry.flip_source(PixelFormat::Yuy2));
    }

    #[test]
    fn test_flipped_rows() {
        let geometry = ImageGeometry::new(1, 3, PixelFormat::Argb).unwrap();
        let data = [0u8, 1, 2, 3, 9, 9, 4, 5, 6, 7, 9, 9, 8, 9, 10, 11];
        let plane = PlaneRef::new(&data, 6, PixelFormat::Argb, 0, &geometry, true).unwrap();
        assert_eq!(plane.row(0), &[8, 9, 10, 11]);
        assert_eq!(plane.row(2), &[0, 1, 2, 3]);
        assert_eq!(
            plane.alignment(),
            PlaneAlignment {
                address: data.as_ptr() as usize + 12,
                stride: 6
            }
        );
    }

    #[test]
    fn test_short_planes_are_rejected_by_role() {
        let geometry = ImageGeometry::new(5, 3, PixelFormat::I420).unwrap();
        let luma = vec![0u8; 14];
        assert_eq!(
            PlaneRef::new(&luma, 5, PixelFormat::I420, 0, &geometry, false).unwrap_err(),
            YuvError::LumaPlaneMinimumSizeMismatch(MismatchedSize {
                expected: 15,
                received: 14
            })
        );
        let mut chroma = vec![0u8; 5];
        assert_eq!(
            PlaneMut::new(&mut chroma, 3, PixelFormat::I420, 1, &geometry, false).unwrap_err(),
            YuvError::ChromaPlaneMinimumSizeMismatch(MismatchedSize {
                expected: 6,
                received: 5
            })
        );
        let mut packed = vec![0u8; 5];
        assert!(matches!(
            PlaneMut::new(&mut packed, 12, PixelFormat::Yuy2, 0, &geometry, false),
            Err(YuvError::DestinationMinimumSizeMismatch(_))
        ));
    }
}
