use bytes::Bytes;

/// Raw transport outcome of a completed fetch.
///
/// Carries the wire status verbatim together with the payload bytes. The net
/// layer performs no status validation; that is the consumer's concern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
