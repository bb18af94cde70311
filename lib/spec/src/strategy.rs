//  STRATEGY.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 09:18:36
//  Last edited:
//    27 Aug 2026, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the [`Strategy`] trait, which can take an HTTP request and
//!   use it to authenticate it.
//

use std::future::Future;

use http::{HeaderMap, Uri};

use crate::outcome::AuthOutcome;


/***** LIBRARY *****/
/// A strategy that takes an HTTP request and (hopefully) authenticates it.
///
/// Strategies are registered in a middleware chain that tries them in order; a strategy
/// that doesn't recognise the request's credential shape emits a pass signal so the next
/// one may have a go.
///
/// Note that a Strategy serves many in-flight requests at once. As such, any reference to
/// `self` is done immutably only.
pub trait Strategy {
    /// The authenticated principal produced on success (e.g., some profile record).
    type Identity;


    /// Returns the name by which the surrounding chain knows this strategy.
    ///
    /// # Returns
    /// A static name string (e.g., `"HTTPBasic"`).
    fn name(&self) -> &'static str;

    /// Whether this strategy redirects the client instead of challenging it.
    ///
    /// # Returns
    /// True if the chain should treat failures as redirects. Defaults to false.
    #[inline]
    fn redirecting(&self) -> bool { false }

    /// Authenticates the given request.
    ///
    /// # Arguments
    /// - `uri`: The parsed URL of the request, which may embed credentials as userinfo.
    /// - `headers`: The headers of the HTTP request to authenticate.
    ///
    /// # Returns
    /// An [`AuthOutcome`] carrying exactly one of the three terminal signals:
    /// - [`AuthOutcome::Success`] with the authenticated identity;
    /// - [`AuthOutcome::Failure`] with a status code and response headers; or
    /// - [`AuthOutcome::Pass`], deferring the request to the next strategy in the chain.
    fn authenticate(&self, uri: &Uri, headers: &HeaderMap) -> impl Send + Future<Output = AuthOutcome<Self::Identity>>;
}
