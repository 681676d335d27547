// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use crate::{Error, NativeCallError, Result};

/// Outcome of one call in a two-call (size probe, then fetch) sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizedQuery {
    /// The call succeeded and wrote this many elements.
    Complete(usize),
    /// The buffer was too small; this many elements are required.
    BufferTooSmall(usize),
}

/// Runs `query` once with an empty buffer to learn the required size, then once more with a buffer of
/// exactly that size.
///
/// `query` receives the buffer to fill (empty on the probe) and maps the native result onto
/// [`SizedQuery`]; any other failure is returned as an error and ends the sequence. The returned vector
/// is truncated to the element count the second call reports. There is no retry: if the second call
/// still reports an insufficient buffer, [`Error::BufferSizeChanged`] is returned.
pub fn query_with_size_probe<T, F>(fill: T, mut query: F) -> Result<Vec<T>>
where
    T: Clone,
    F: FnMut(&mut [T]) -> Result<SizedQuery>,
{
    let required = match query(&mut [])? {
        SizedQuery::Complete(_) => return Ok(Vec::new()),
        SizedQuery::BufferTooSmall(0) => return Ok(Vec::new()),
        SizedQuery::BufferTooSmall(required) => required,
    };

    let mut buffer = vec![fill; required];
    match query(&mut buffer)? {
        SizedQuery::Complete(written) => {
            buffer.truncate(written);
            Ok(buffer)
        },
        SizedQuery::BufferTooSmall(now_required) => Err(Error::BufferSizeChanged { probed: required, required: now_required }),
    }
}

/// Maps one native call of a two-call sequence onto [`SizedQuery`].
///
/// `reported` is the count the call wrote back: the elements it filled on success, or the elements it
/// needs when it failed with `too_small_code`. The buffer length is never trusted as the written count.
pub fn classify_sized_call(result: std::result::Result<(), NativeCallError>, reported: u32, too_small_code: u32) -> Result<SizedQuery> {
    match result {
        Ok(()) => Ok(SizedQuery::Complete(reported as usize)),
        Err(error) if error.code == too_small_code => Ok(SizedQuery::BufferTooSmall(reported as usize)),
        Err(error) => Err(error.into()),
    }
}

/// Pointer to pass for a possibly-empty output buffer; native APIs expect null alongside a zero size.
pub fn buffer_ptr<T>(buffer: &mut [T]) -> *mut T {
    if buffer.is_empty() {
        std::ptr::null_mut()
    } else {
        buffer.as_mut_ptr()
    }
}
