use snafu::prelude::*;

/// Errors reported by output sinks once a frame is complete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SinkError {
    /// The frame did not fit into the output buffer.
    #[snafu(display("frame of {required} bytes does not fit into {capacity} bytes"))]
    Overflow {
        /// Bytes the encoder produced
        required: usize,
        /// Bytes the buffer can hold
        capacity: usize,
    },
}
