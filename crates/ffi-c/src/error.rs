use meowhash_corelib::MeowError;

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArg = 1,
    InvalidWidth = 2,
    InvalidState = 3,
    Internal = 4,
}

impl ErrorCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl From<&MeowError> for ErrorCode {
    fn from(err: &MeowError) -> Self {
        match err {
            MeowError::InvalidWidth(_) => ErrorCode::InvalidWidth,
            MeowError::InvalidState { .. } => ErrorCode::InvalidState,
            MeowError::InvalidArgument(_) => ErrorCode::InvalidArg,
        }
    }
}

pub const MEOW_OK: i32 = ErrorCode::Ok.code();
pub const MEOW_ERR_INVALID_ARG: i32 = ErrorCode::InvalidArg.code();
pub const MEOW_ERR_INVALID_WIDTH: i32 = ErrorCode::InvalidWidth.code();
pub const MEOW_ERR_INVALID_STATE: i32 = ErrorCode::InvalidState.code();
pub const MEOW_ERR_INTERNAL: i32 = ErrorCode::Internal.code();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_codes() {
        assert_eq!(
            ErrorCode::from(&MeowError::InvalidWidth(384)).code(),
            MEOW_ERR_INVALID_WIDTH
        );
        assert_eq!(
            ErrorCode::from(&MeowError::InvalidState { op: "update" }).code(),
            MEOW_ERR_INVALID_STATE
        );
        assert_eq!(
            ErrorCode::from(&MeowError::InvalidArgument("x".into())).code(),
            MEOW_ERR_INVALID_ARG
        );
    }
}
