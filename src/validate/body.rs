//! Bounded body reading.

use futures::StreamExt;

use crate::error_handling::ValidationError;

/// Streams a response body into memory, stopping at `max_size` bytes.
///
/// A declared `Content-Length` above the cap is rejected before any body
/// bytes are read.
pub(crate) async fn read_body_with_limit(
    response: reqwest::Response,
    max_size: usize,
) -> Result<Vec<u8>, ValidationError> {
    if response
        .content_length()
        .is_some_and(|len| len > max_size as u64)
    {
        return Err(ValidationError::BodyTooLarge { limit: max_size });
    }

    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(max_size.min(16 * 1024));

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if buf.len() + chunk.len() > max_size {
            return Err(ValidationError::BodyTooLarge { limit: max_size });
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}
