//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 09:12:44
//  Last edited:
//    27 Aug 2026, 10:48:31
//  Auto updated?
//    Yes
//
//  Description:
//!   Provides public interfaces for authentication strategies to be
//!   compatible with the credentials library.
//

// Declare modules
pub mod outcome;
pub mod profile;
pub mod strategy;

// Import some things into the main scope
pub use outcome::AuthOutcome;
pub use profile::UserProfile;
pub use strategy::Strategy;
