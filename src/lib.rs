//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Aug 2026, 09:02:11
//  Last edited:
//    27 Aug 2026, 11:02:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Pluggable HTTP Basic authentication strategies for web server
//!   middleware chains.
//

// Import the libraries
pub mod auth {
    #[cfg(feature = "basic-auth")]
    pub use basic_auth as basic;
}

pub use specifications as spec;
