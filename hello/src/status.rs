use strum::FromRepr;

/// Status codes returned across the C ABI by call-outs that can fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromRepr)]
#[repr(i32)]
pub enum CallStatus {
    /// The call completed.
    Ok = 0,
    /// `hello_call_from_rust` was given a null call-back.
    MissingCallback = -1,
}

impl CallStatus {
    /// Decode a raw status. Unknown codes come back as `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::from_repr(code)
    }

    /// The raw code as it crosses the ABI.
    pub fn code(self) -> i32 {
        self as i32
    }
}
