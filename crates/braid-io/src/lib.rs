//! Byte-stream input/output codec for braid networks.
//!
//! The inference core speaks `f32`; the outside world often speaks
//! bytes. This crate implements the byte contract:
//!
//! - **input**: each byte is normalized to `byte / 256.0`, giving values
//!   in `[0, 1)`, and fed to the network through `set_input_nodes`;
//! - **output**: each output value is scaled by 256, rounded, clamped to
//!   `0..=255`, and emitted as one byte.
//!
//! The numeric range assumes a squashing activation such as
//! `braid_core::soft_step`, whose outputs live in `(0, 1)`. Outputs
//! outside `[0, 1]` are clamped rather than wrapped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::io::{self, Read, Write};

use braid_net::Network;

/// Read up to `input_node_count` bytes from `reader`, normalize each to
/// `byte / 256.0`, and set them as the network's input values.
///
/// Returns the number of bytes consumed. A stream shorter than the input
/// array follows the network's truncate-and-keep policy: only the first
/// `n` input nodes are overwritten, the rest keep their prior values.
///
/// # Errors
///
/// Propagates any I/O error from the reader.
pub fn read_inputs<R>(mut reader: R, network: &mut Network) -> io::Result<usize>
where
    R: Read,
{
    let mut bytes = vec![0u8; network.input_node_count()];
    let mut filled = 0;
    // Read::read may return short counts; keep pulling until the buffer
    // is full or the stream ends.
    while filled < bytes.len() {
        let n = reader.read(&mut bytes[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    let values: Vec<f32> = bytes[..filled]
        .iter()
        .map(|&byte| f32::from(byte) / 256.0)
        .collect();
    network.set_input_nodes(&values);
    Ok(filled)
}

/// Scale each output value by 256, round, clamp to `0..=255`, and write
/// one byte per output node to `writer`.
///
/// # Errors
///
/// Propagates any I/O error from the writer.
pub fn write_outputs<W>(mut writer: W, network: &Network) -> io::Result<()>
where
    W: Write,
{
    let bytes: Vec<u8> = network
        .outputs()
        .iter()
        .map(|&value| (value * 256.0).round().clamp(0.0, 255.0) as u8)
        .collect();
    writer.write_all(&bytes)
}
