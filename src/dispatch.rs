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

use crate::cpu_features::{CpuFeatures, CpuFlag};
use std::cell::Cell;

/// Speed/alignment tier of a row kernel.
///
/// All tiers of one operation produce bit-identical output, they only differ
/// in what they require from the width and the buffers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KernelTier {
    /// Portable implementation, any width and alignment
    Reference,
    /// SIMD body with the remainder finished by the reference kernel
    Any,
    /// SIMD only, width must be a multiple of the block
    Unaligned,
    /// SIMD with aligned loads and stores, needs aligned rows and strides too
    Aligned,
}

/// Kernel selection configuration, passed to every resolution explicitly.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DispatchPolicy {
    /// Short-circuits every tier ladder to [KernelTier::Reference]
    pub force_reference: bool,
}

thread_local! {
    static FORCE_REFERENCE: Cell<bool> = const { Cell::new(false) };
}

impl DispatchPolicy {
    /// Policy in effect on the calling thread,
    /// see [with_reference_kernels].
    pub fn current() -> Self {
        DispatchPolicy {
            force_reference: FORCE_REFERENCE.with(|x| x.get()),
        }
    }

    pub const fn reference_only() -> Self {
        DispatchPolicy {
            force_reference: true,
        }
    }
}

struct ReferenceScope {
    previous: bool,
}

impl Drop for ReferenceScope {
    fn drop(&mut self) {
        FORCE_REFERENCE.with(|x| x.set(self.previous));
    }
}

/// Runs `f` with every conversion started on this thread restricted to
/// reference kernels.
///
/// The override is scoped to the closure and to the calling thread, other
/// threads keep their own policy. It is restored even if `f` panics.
///
/// # Examples
/// ```
/// let argb = vec![128u8; 4 * 4 * 2];
/// let mut fast = vec![0u8; 4 * 2];
/// let mut reference = vec![0u8; 4 * 2];
/// yuvpack::argb_to_i400(&argb, 16, &mut fast, 4, 4, 2).unwrap();
/// yuvpack::with_reference_kernels(|| {
///     yuvpack::argb_to_i400(&argb, 16, &mut reference, 4, 4, 2).unwrap();
/// });
/// assert_eq!(fast, reference);
/// ```
pub fn with_reference_kernels<R, F: FnOnce() -> R>(f: F) -> R {
    let previous = FORCE_REFERENCE.with(|x| x.replace(true));
    let _scope = ReferenceScope { previous };
    f()
}

/// Tier ladder for a single SIMD family.
///
/// # Arguments
///
/// * `policy`: active dispatch policy.
/// * `has_capability`: whether the family's instruction set is usable.
/// * `width`: pixels the kernel processes per call.
/// * `block`: pixels the family processes per SIMD iteration.
/// * `aligned`: every relevant row address and stride meets the family alignment.
/// * `has_aligned_variant`: the family provides an aligned kernel for this operation.
pub const fn select_tier(
    policy: DispatchPolicy,
    has_capability: bool,
    width: usize,
    block: usize,
    aligned: bool,
    has_aligned_variant: bool,
) -> KernelTier {
    if policy.force_reference || !has_capability || width < block {
        return KernelTier::Reference;
    }
    if width % block != 0 {
        return KernelTier::Any;
    }
    if aligned && has_aligned_variant {
        return KernelTier::Aligned;
    }
    KernelTier::Unaligned
}

/// Address of the first processed row of a plane and the distance between rows
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct PlaneAlignment {
    pub(crate) address: usize,
    pub(crate) stride: usize,
}

impl PlaneAlignment {
    /// Scratch storage is always aligned, its rows are never stepped through
    pub(crate) const SCRATCH: PlaneAlignment = PlaneAlignment {
        address: 0,
        stride: 0,
    };

    #[inline]
    pub(crate) const fn is_aligned(&self, alignment: usize) -> bool {
        self.address % alignment == 0 && self.stride % alignment == 0
    }
}

/// Variants of one operation provided by a single SIMD family
pub(crate) struct KernelFamily<F: 'static> {
    pub(crate) flag: CpuFlag,
    pub(crate) block: usize,
    pub(crate) alignment: usize,
    pub(crate) any: F,
    pub(crate) unaligned: F,
    pub(crate) aligned: Option<F>,
}

/// Every variant of one row operation compiled into this build
pub(crate) struct KernelCatalog<F: 'static> {
    pub(crate) name: &'static str,
    pub(crate) reference: F,
    /// Tried in order, a later family replaces the choice only when it reaches at least `Any`
    pub(crate) families: &'static [KernelFamily<F>],
}

/// Resolved kernel, `func` is called for every row of the image
#[derive(Copy, Clone)]
pub(crate) struct RowKernel<F> {
    pub(crate) tier: KernelTier,
    pub(crate) func: F,
}

impl<F> std::fmt::Debug for RowKernel<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}", self.tier))
    }
}

impl<F: Copy + 'static> KernelCatalog<F> {
    pub(crate) fn resolve(
        &self,
        policy: DispatchPolicy,
        features: &CpuFeatures,
        width: usize,
        planes: &[PlaneAlignment],
    ) -> RowKernel<F> {
        let mut kernel = RowKernel {
            tier: KernelTier::Reference,
            func: self.reference,
        };
        for family in self.families.iter() {
            let aligned = planes.iter().all(|x| x.is_aligned(family.alignment));
            let tier = select_tier(
                policy,
                features.has(family.flag),
                width,
                family.block,
                aligned,
                family.aligned.is_some(),
            );
            let func = match tier {
                KernelTier::Reference => continue,
                KernelTier::Any => family.any,
                KernelTier::Unaligned => family.unaligned,
                KernelTier::Aligned => match family.aligned {
                    Some(aligned) => aligned,
                    None => family.unaligned,
                },
            };
            kernel = RowKernel { tier, func };
        }
        kernel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ladder() {
        let policy = DispatchPolicy::default();
        assert_eq!(
            select_tier(policy, false, 64, 16, true, true),
            KernelTier::Reference
        );
        assert_eq!(
            select_tier(policy, true, 15, 16, true, true),
            KernelTier::Reference
        );
        assert_eq!(select_tier(policy, true, 17, 16, true, true), KernelTier::Any);
        assert_eq!(
            select_tier(policy, true, 32, 16, false, true),
            KernelTier::Unaligned
        );
        assert_eq!(
            select_tier(policy, true, 32, 16, true, false),
            KernelTier::Unaligned
        );
        assert_eq!(
            select_tier(policy, true, 32, 16, true, true),
            KernelTier::Aligned
        );
        assert_eq!(
            select_tier(DispatchPolicy::reference_only(), true, 32, 16, true, true),
            KernelTier::Reference
        );
    }

    #[test]
    fn test_reference_scope_is_restored() {
        assert!(!DispatchPolicy::current().force_reference);
        with_reference_kernels(|| {
            assert!(DispatchPolicy::current().force_reference);
            with_reference_kernels(|| {
                assert!(DispatchPolicy::current().force_reference);
            });
            assert!(DispatchPolicy::current().force_reference);
        });
        assert!(!DispatchPolicy::current().force_reference);

        let result = std::panic::catch_unwind(|| {
            with_reference_kernels(|| panic!("unwinding through the scope"));
        });
        assert!(result.is_err());
        assert!(!DispatchPolicy::current().force_reference);
    }

    #[test]
    fn test_reference_scope_is_thread_local() {
        with_reference_kernels(|| {
            let other = std::thread::spawn(|| DispatchPolicy::current().force_reference);
            assert!(!other.join().unwrap());
        });
    }

    fn reference(_: &mut u32) {}
    fn first_any(_: &mut u32) {}
    fn first_unaligned(_: &mut u32) {}
    fn second_any(_: &mut u32) {}
    fn second_unaligned(_: &mut u32) {}
    fn second_aligned(_: &mut u32) {}

    static FAMILIES: [KernelFamily<fn(&mut u32)>; 2] = [
        KernelFamily {
            flag: CpuFlag::Sse2,
            block: 16,
            alignment: 16,
            any: first_any,
            unaligned: first_unaligned,
            aligned: None,
        },
        KernelFamily {
            flag: CpuFlag::Avx2,
            block: 32,
            alignment: 32,
            any: second_any,
            unaligned: second_unaligned,
            aligned: Some(second_aligned),
        },
    ];

    static CATALOG: KernelCatalog<fn(&mut u32)> = KernelCatalog {
        name: "test",
        reference,
        families: &FAMILIES,
    };

    #[test]
    fn test_later_family_upgrades_only_when_usable() {
        let policy = DispatchPolicy::default();
        let both = CpuFeatures::none()
            .with(CpuFlag::Sse2)
            .with(CpuFlag::Avx2);
        let aligned = [PlaneAlignment {
            address: 64,
            stride: 128,
        }];
        let misaligned = [PlaneAlignment {
            address: 65,
            stride: 128,
        }];

        // 24 is below the second family block, the first one is kept
        let kernel = CATALOG.resolve(policy, &both, 24, &aligned);
        assert_eq!(kernel.tier, KernelTier::Any);
        assert!(kernel.func == first_any as fn(&mut u32));

        let kernel = CATALOG.resolve(policy, &both, 64, &aligned);
        assert_eq!(kernel.tier, KernelTier::Aligned);
        assert!(kernel.func == second_aligned as fn(&mut u32));

        let kernel = CATALOG.resolve(policy, &both, 64, &misaligned);
        assert_eq!(kernel.tier, KernelTier::Unaligned);
        assert!(kernel.func == second_unaligned as fn(&mut u32));

        let kernel = CATALOG.resolve(policy, &CpuFeatures::none(), 64, &aligned);
        assert_eq!(kernel.tier, KernelTier::Reference);
        assert!(kernel.func == reference as fn(&mut u32));

        let kernel = CATALOG.resolve(DispatchPolicy::reference_only(), &both, 64, &aligned);
        assert_eq!(kernel.tier, KernelTier::Reference);
    }
}
