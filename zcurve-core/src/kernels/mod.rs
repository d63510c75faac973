// =============================================================================
// Kernels Module
// =============================================================================
//
// The 2x2x2x7 kernel matrix: (dimensionality, Morton width, direction,
// strategy). Every function is monomorphic and width-specialised; dispatch
// is a matter of picking the right `fn` item, never of runtime branching.
//
// Naming: morton_<encode|decode>_<strategy>_<dims>d_<width>.
//
// Contract shared by the whole matrix: encoders mask each coordinate to the
// usable floor(width / dims) bits before interleaving, decoders read only
// the low dims * floor(width / dims) Morton bits. All strategies of one
// (dims, width, direction) therefore agree on every input, and encode
// results keep their top width % dims bits zero.

/// 2D kernels at 32 and 64 bits.
pub mod dim2;

/// 3D kernels at 32 and 64 bits.
pub mod dim3;

pub use dim2::*;
pub use dim3::*;
