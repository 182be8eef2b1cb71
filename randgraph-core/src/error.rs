//! Error types for the randgraph core library.
//!
//! Defines the generation error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when a random graph cannot be generated.
///
/// Every variant is raised before the returned [`crate::GraphStore`] exists,
/// so a failed request never leaves a partially populated graph behind.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GenerationError {
    /// A node-count bound asks for more nodes than the label pool can supply.
    #[error("node range {min}..={max} exceeds the label pool of {pool} labels")]
    NodeRangeExceedsPool {
        /// Requested lower bound on the node count.
        min: usize,
        /// Requested upper bound on the node count.
        max: usize,
        /// Number of labels supplied by the caller.
        pool: usize,
    },
    /// The drawn edge target exceeds what a simple graph over the sampled
    /// nodes can hold.
    #[error(
        "edge target {requested} exceeds the maximum of {capacity} edges for {nodes} nodes (directed: {directed})"
    )]
    EdgeCapacityExceeded {
        /// Edge count drawn from the requested range.
        requested: usize,
        /// Maximum number of simple edges for the sampled node count.
        capacity: usize,
        /// Number of distinct nodes that were sampled.
        nodes: usize,
        /// Whether the capacity was computed for a directed graph.
        directed: bool,
    },
    /// The node range is empty because its lower bound exceeds its upper bound.
    #[error("node range is empty: min {min} is greater than max {max}")]
    InvalidNodeRange {
        /// Requested lower bound on the node count.
        min: usize,
        /// Requested upper bound on the node count.
        max: usize,
    },
    /// The edge range is empty because its lower bound exceeds its upper bound.
    #[error("edge range is empty: min {min} is greater than max {max}")]
    InvalidEdgeRange {
        /// Requested lower bound on the edge count.
        min: usize,
        /// Requested upper bound on the edge count.
        max: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GenerationError`] variants.
    enum GenerationErrorCode for GenerationError {
        /// A node-count bound asks for more nodes than the label pool can supply.
        NodeRangeExceedsPool => NodeRangeExceedsPool { .. } => "GENERATOR_NODE_RANGE_EXCEEDS_POOL",
        /// The drawn edge target exceeds the simple-graph capacity.
        EdgeCapacityExceeded => EdgeCapacityExceeded { .. } => "GENERATOR_EDGE_CAPACITY_EXCEEDED",
        /// The node range lower bound exceeds its upper bound.
        InvalidNodeRange => InvalidNodeRange { .. } => "GENERATOR_INVALID_NODE_RANGE",
        /// The edge range lower bound exceeds its upper bound.
        InvalidEdgeRange => InvalidEdgeRange { .. } => "GENERATOR_INVALID_EDGE_RANGE",
    }
}

impl GenerationError {
    /// Reports whether the failure stems from the caller's bounds rather than
    /// from the sampled graph size.
    ///
    /// # Examples
    /// ```
    /// use randgraph_core::GenerationError;
    ///
    /// let err = GenerationError::InvalidNodeRange { min: 4, max: 2 };
    /// assert!(err.is_range_error());
    /// ```
    #[must_use]
    pub const fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::NodeRangeExceedsPool { .. }
                | Self::InvalidNodeRange { .. }
                | Self::InvalidEdgeRange { .. }
        )
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GenerationError>;
