//! C ABI over the meowhash engine.
//!
//! Streams are opaque heap handles created by [`meow_new`] and released by
//! [`meow_free`]. Every call returns one of the `MEOW_*` status codes; a
//! failing call leaves the stream exactly as it was.

mod error;
mod ffi_json;

pub use error::{
    ErrorCode, MEOW_ERR_INTERNAL, MEOW_ERR_INVALID_ARG, MEOW_ERR_INVALID_STATE,
    MEOW_ERR_INVALID_WIDTH, MEOW_OK,
};
use ffi_json::{ok, with_field};

use std::ffi::{c_char, c_int, CString};
use std::{ptr, slice};

use meowhash_corelib::{self as core, HashWidth, Hasher, MeowError};

/// Opaque stream handle.
pub struct MeowHasher {
    inner: Hasher,
}

fn status(result: Result<(), MeowError>) -> c_int {
    match result {
        Ok(()) => MEOW_OK,
        Err(e) => {
            log::debug!("meowhash ffi call failed: {e}");
            ErrorCode::from(&e).code()
        }
    }
}

unsafe fn input<'a>(data: *const u8, len: usize) -> Result<&'a [u8], MeowError> {
    if data.is_null() {
        if len == 0 {
            return Ok(&[]);
        }
        return Err(MeowError::InvalidArgument(
            "null data pointer with non-zero length".into(),
        ));
    }
    Ok(slice::from_raw_parts(data, len))
}

unsafe fn hasher<'a>(handle: *mut MeowHasher) -> Result<&'a mut Hasher, MeowError> {
    handle
        .as_mut()
        .map(|h| &mut h.inner)
        .ok_or_else(|| MeowError::InvalidArgument("null stream handle".into()))
}

unsafe fn write_usize(out: *mut usize, value: usize) -> Result<(), MeowError> {
    if out.is_null() {
        return Err(MeowError::InvalidArgument("null output pointer".into()));
    }
    *out = value;
    Ok(())
}

unsafe fn check_output(out: *mut u8, cap: usize, needed: usize) -> Result<(), MeowError> {
    if out.is_null() {
        return Err(MeowError::InvalidArgument("null digest buffer".into()));
    }
    if cap < needed {
        return Err(MeowError::InvalidArgument(format!(
            "digest buffer holds {cap} bytes, need {needed}"
        )));
    }
    Ok(())
}

unsafe fn emit(digest: &core::Digest, out: *mut u8, out_len: *mut usize) {
    ptr::copy_nonoverlapping(digest.as_bytes().as_ptr(), out, digest.len());
    if !out_len.is_null() {
        *out_len = digest.len();
    }
}

/// Open a stream of `width` bits (128, 256 or 512).
///
/// # Safety
/// `out_handle` must be null or valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn meow_new(
    width: c_int,
    seed: u64,
    out_handle: *mut *mut MeowHasher,
) -> c_int {
    if out_handle.is_null() {
        return MEOW_ERR_INVALID_ARG;
    }
    *out_handle = ptr::null_mut();
    status(HashWidth::try_from(width).map(|width| {
        let handle = Box::new(MeowHasher {
            inner: Hasher::with_seed(width, seed),
        });
        *out_handle = Box::into_raw(handle);
    }))
}

/// # Safety
/// `handle` must come from [`meow_new`] and not be freed; `data` must be
/// null (with `len == 0`) or valid for `len` reads.
#[no_mangle]
pub unsafe extern "C" fn meow_update(handle: *mut MeowHasher, data: *const u8, len: usize) -> c_int {
    status(input(data, len).and_then(|bytes| hasher(handle)?.update(bytes)))
}

/// Finalize the stream into `out`. Allowed once per stream.
///
/// # Safety
/// `handle` as for [`meow_update`]; `out` valid for `cap` writes;
/// `out_len` null or valid for a write.
#[no_mangle]
pub unsafe extern "C" fn meow_finalize(
    handle: *mut MeowHasher,
    out: *mut u8,
    cap: usize,
    out_len: *mut usize,
) -> c_int {
    status(finalize_into(handle, out, cap, out_len))
}

unsafe fn finalize_into(
    handle: *mut MeowHasher,
    out: *mut u8,
    cap: usize,
    out_len: *mut usize,
) -> Result<(), MeowError> {
    let h = hasher(handle)?;
    check_output(out, cap, h.digest_size())?;
    let digest = h.finalize()?;
    emit(&digest, out, out_len);
    Ok(())
}

/// Alias of [`meow_finalize`].
///
/// # Safety
/// See [`meow_finalize`].
#[no_mangle]
pub unsafe extern "C" fn meow_digest(
    handle: *mut MeowHasher,
    out: *mut u8,
    cap: usize,
    out_len: *mut usize,
) -> c_int {
    meow_finalize(handle, out, cap, out_len)
}

/// # Safety
/// `handle` as for [`meow_update`]; `out` valid for a write.
#[no_mangle]
pub unsafe extern "C" fn meow_digest_size(handle: *mut MeowHasher, out: *mut usize) -> c_int {
    status(hasher(handle).and_then(|h| write_usize(out, h.digest_size())))
}

/// # Safety
/// `handle` as for [`meow_update`]; `out` valid for a write.
#[no_mangle]
pub unsafe extern "C" fn meow_block_size(handle: *mut MeowHasher, out: *mut usize) -> c_int {
    status(hasher(handle).and_then(|h| write_usize(out, h.block_size())))
}

/// Release a stream, finalized or not. Null is ignored.
///
/// # Safety
/// `handle` must be null or come from [`meow_new`], and must not be used
/// afterwards.
#[no_mangle]
pub unsafe extern "C" fn meow_free(handle: *mut MeowHasher) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// One-shot hash of `data` into `out`.
///
/// # Safety
/// `data` as for [`meow_update`]; `out`/`out_len` as for [`meow_finalize`].
#[no_mangle]
pub unsafe extern "C" fn meow_hash(
    width: c_int,
    data: *const u8,
    len: usize,
    seed: u64,
    out: *mut u8,
    cap: usize,
    out_len: *mut usize,
) -> c_int {
    status(hash_into(width, input(data, len), seed, out, cap, out_len))
}

unsafe fn hash_into(
    width: c_int,
    data: Result<&[u8], MeowError>,
    seed: u64,
    out: *mut u8,
    cap: usize,
    out_len: *mut usize,
) -> Result<(), MeowError> {
    let width = HashWidth::try_from(width)?;
    let bytes = data?;
    check_output(out, cap, width.digest_size())?;
    let digest = core::hash(width, bytes, seed);
    emit(&digest, out, out_len);
    Ok(())
}

/// JSON envelope with the library version and supported widths. Release the
/// string with [`meow_string_free`].
///
/// # Safety
/// `out_json` must be null or valid for a pointer write.
#[no_mangle]
pub unsafe extern "C" fn meow_version(out_json: *mut *mut c_char) -> c_int {
    if out_json.is_null() {
        return MEOW_ERR_INVALID_ARG;
    }
    let envelope = with_field(ok(), "version", core::version());
    let envelope = with_field(envelope, "widths", core::list_widths());
    match envelope.into_cstring() {
        Some(cstr) => {
            *out_json = cstr.into_raw();
            MEOW_OK
        }
        None => {
            *out_json = ptr::null_mut();
            MEOW_ERR_INTERNAL
        }
    }
}

/// # Safety
/// `s` must be null or a string returned by this library.
#[no_mangle]
pub unsafe extern "C" fn meow_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::ffi::CStr;

    fn open(width: c_int, seed: u64) -> *mut MeowHasher {
        let mut handle = ptr::null_mut();
        let rc = unsafe { meow_new(width, seed, &mut handle) };
        assert_eq!(rc, MEOW_OK);
        assert!(!handle.is_null());
        handle
    }

    #[test]
    fn stream_roundtrip_matches_core() {
        let h = open(256, 5);
        let data = b"hello from c";
        let mut out = [0u8; 64];
        let mut len = 0usize;
        unsafe {
            assert_eq!(meow_update(h, data.as_ptr(), 5), MEOW_OK);
            assert_eq!(meow_update(h, data[5..].as_ptr(), data.len() - 5), MEOW_OK);
            assert_eq!(meow_finalize(h, out.as_mut_ptr(), out.len(), &mut len), MEOW_OK);
            meow_free(h);
        }
        assert_eq!(len, 32);
        assert_eq!(&out[..len], core::hash(HashWidth::W256, data, 5).as_bytes());
    }

    #[test]
    fn rejects_bad_width() {
        let mut handle = ptr::null_mut();
        let rc = unsafe { meow_new(384, 0, &mut handle) };
        assert_eq!(rc, MEOW_ERR_INVALID_WIDTH);
        assert!(handle.is_null());
    }

    #[test]
    fn second_finalize_is_invalid_state() {
        let h = open(128, 0);
        let mut out = [0u8; 16];
        unsafe {
            assert_eq!(meow_digest(h, out.as_mut_ptr(), 16, ptr::null_mut()), MEOW_OK);
            assert_eq!(
                meow_finalize(h, out.as_mut_ptr(), 16, ptr::null_mut()),
                MEOW_ERR_INVALID_STATE
            );
            assert_eq!(meow_update(h, ptr::null(), 0), MEOW_ERR_INVALID_STATE);
            meow_free(h);
        }
    }

    #[test]
    fn version_envelope_lists_widths() {
        let mut out: *mut c_char = ptr::null_mut();
        unsafe {
            assert_eq!(meow_version(&mut out), MEOW_OK);
            let json = CStr::from_ptr(out).to_str().unwrap().to_owned();
            meow_string_free(out);
            let value: Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["ok"], Value::Bool(true));
            assert_eq!(value["version"], Value::from(env!("CARGO_PKG_VERSION")));
            assert_eq!(value["widths"].as_array().unwrap().len(), 3);
        }
    }
}
