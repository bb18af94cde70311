//  OUTCOME.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 09:21:17
//  Last edited:
//    27 Aug 2026, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`AuthOutcome`] type, which carries the terminal signal
//!   of one authentication attempt.
//

use http::{HeaderMap, StatusCode};


/***** LIBRARY *****/
/// The terminal signal of one authentication attempt.
///
/// Every attempt produces exactly one of the three signals; being an enum, producing more
/// than one (or none) is unrepresentable.
///
/// The distinction between [`Failure`](AuthOutcome::Failure) and
/// [`Pass`](AuthOutcome::Pass) matters to the surrounding middleware chain: a failure is
/// terminal for the request, whereas a pass means "this strategy doesn't recognise the
/// credential shape" and the chain may hand the request to the next strategy.
#[derive(Debug)]
pub enum AuthOutcome<I> {
    /// The request authenticated. Carries the identity to forward downstream.
    Success(I),
    /// The request matched this strategy's scheme but was rejected.
    Failure {
        /// The status code to answer the client with.
        status:  StatusCode,
        /// Any headers to attach to the response (e.g., a challenge).
        headers: HeaderMap,
    },
    /// The request doesn't carry this strategy's credential shape; another strategy in the
    /// chain may still recognise it. The status and headers apply only if no strategy does.
    Pass {
        /// The status code to answer the client with if no other strategy accepts.
        status:  StatusCode,
        /// Any headers to attach to the response (e.g., a challenge).
        headers: HeaderMap,
    },
}
impl<I> AuthOutcome<I> {
    /// Constructor for an [`AuthOutcome::Failure`].
    ///
    /// # Arguments
    /// - `status`: The status code to answer the client with.
    /// - `headers`: Any headers to attach to the response.
    ///
    /// # Returns
    /// A new AuthOutcome carrying the failure signal.
    #[inline]
    pub fn failure(status: StatusCode, headers: HeaderMap) -> Self { Self::Failure { status, headers } }

    /// Constructor for an [`AuthOutcome::Pass`].
    ///
    /// # Arguments
    /// - `status`: The status code to answer the client with if no other strategy accepts.
    /// - `headers`: Any headers to attach to the response.
    ///
    /// # Returns
    /// A new AuthOutcome carrying the pass signal.
    #[inline]
    pub fn pass(status: StatusCode, headers: HeaderMap) -> Self { Self::Pass { status, headers } }

    /// Checks whether this outcome is a [`Success`](AuthOutcome::Success).
    #[inline]
    pub fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

    /// Checks whether this outcome is a [`Failure`](AuthOutcome::Failure).
    #[inline]
    pub fn is_failure(&self) -> bool { matches!(self, Self::Failure { .. }) }

    /// Checks whether this outcome is a [`Pass`](AuthOutcome::Pass).
    #[inline]
    pub fn is_pass(&self) -> bool { matches!(self, Self::Pass { .. }) }

    /// Returns the identity if this outcome is a [`Success`](AuthOutcome::Success).
    #[inline]
    pub fn into_identity(self) -> Option<I> {
        match self {
            Self::Success(identity) => Some(identity),
            _ => None,
        }
    }

    /// Returns the status code if this outcome carries one (i.e., is not a success).
    #[inline]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Success(_) => None,
            Self::Failure { status, .. } | Self::Pass { status, .. } => Some(*status),
        }
    }

    /// Returns the response headers if this outcome carries any (i.e., is not a success).
    #[inline]
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::Success(_) => None,
            Self::Failure { headers, .. } | Self::Pass { headers, .. } => Some(headers),
        }
    }
}
