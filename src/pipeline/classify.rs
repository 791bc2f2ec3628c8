//! Status-code classification.

/// The only status code that selects the success path.
const OK_STATUS: u16 = 200;

/// Which result path a status code selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum StatusClass {
    /// Status exactly 200
    Ok,
    /// Any other status: 4xx, 5xx, or anything else the transport reports
    Failed,
}

/// Classify a transport status code.
pub(crate) fn classify(status: u16) -> StatusClass {
    if status == OK_STATUS {
        StatusClass::Ok
    } else {
        StatusClass::Failed
    }
}
