//  PROFILE.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 09:15:02
//  Last edited:
//    22 Aug 2026, 14:31:50
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the profile record that identifies an authenticated
//!   principal.
//

use serde::{Deserialize, Serialize};


/***** LIBRARY *****/
/// The authenticated principal as produced by loosely-typed strategies.
///
/// The profile is owned by whoever verifies credentials; strategies only store and forward
/// it. Strongly-typed strategies produce their own concrete identity type instead (see the
/// implementation crates).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UserProfile {
    /// Identifies the principal uniquely within its provider.
    pub id: String,
    /// Some human-readable name for the principal. Doesn't have to be unique.
    pub display_name: String,
    /// The name of the strategy that authenticated this profile.
    pub provider: String,
}
impl UserProfile {
    /// Constructor for the UserProfile.
    ///
    /// # Arguments
    /// - `id`: The identifier of the principal, unique within `provider`.
    /// - `display_name`: Some human-readable name for the principal.
    /// - `provider`: The name of the strategy that authenticated the principal.
    ///
    /// # Returns
    /// A new UserProfile with the given fields.
    #[inline]
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, provider: impl Into<String>) -> Self {
        Self { id: id.into(), display_name: display_name.into(), provider: provider.into() }
    }
}
