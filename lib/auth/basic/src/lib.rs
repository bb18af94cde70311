//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 10:02:19
//  Last edited:
//    27 Aug 2026, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the HTTP Basic scheme (RFC 7617) as a `Strategy`.
//

// Modules
pub mod cache;
pub mod extract;
mod strategy;
mod typed;

// Use some of it into the main namespace
pub use strategy::*;
pub use typed::*;
