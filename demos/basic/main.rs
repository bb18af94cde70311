//  MAIN.rs
//    by Lut99
//
//  Created:
//    15 Aug 2026, 13:40:26
//  Last edited:
//    28 Aug 2026, 16:20:12
//  Auto updated?
//    Yes
//
//  Description:
//!   Shows the Basic strategy authenticating a synthesized request.
//

use std::sync::Arc;

use base64ct::{Base64, Encoding as _};
use clap::Parser;
use credentials_http::auth::basic::cache::ProfileCache;
use credentials_http::auth::basic::BasicStrategy;
use credentials_http::spec::{AuthOutcome, Strategy as _, UserProfile};
use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue, Uri};
use tracing::{error, Level};


/***** ARGUMENTS *****/
/// Defines the arguments for this binary.
#[derive(Debug, Parser)]
struct Arguments {
    /// Whether to enable INFO- and DEBUG-level logging.
    #[clap(long)]
    debug: bool,
    /// Whether to enable TRACE-level logging. Implies '--debug'.
    #[clap(long)]
    trace: bool,

    /// The realm reported in challenge headers.
    #[clap(short, long, default_value = "demo")]
    realm:    String,
    /// The userid of the one account the demo verifier accepts.
    #[clap(short, long, default_value = "Mary")]
    userid:   String,
    /// The password of the one account the demo verifier accepts.
    #[clap(short, long, default_value = "qwerasdf")]
    password: String,

    /// The userid to embed in the synthesized request (defaults to '--userid').
    #[clap(long)]
    send_userid:   Option<String>,
    /// The password to embed in the synthesized request (defaults to '--password').
    #[clap(long)]
    send_password: Option<String>,
}


/***** ENTRYPOINT *****/
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse the arguments
    let args = Arguments::parse();

    // Setup the logger
    tracing_subscriber::fmt()
        .with_max_level(if args.trace {
            Level::TRACE
        } else if args.debug {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    // Setup the strategy over a single account
    let (acc_userid, acc_password) = (args.userid.clone(), args.password.clone());
    let mut strategy = BasicStrategy::new(args.realm).with_verifier(move |userid, password| {
        let (acc_userid, acc_password) = (acc_userid.clone(), acc_password.clone());
        async move {
            if userid == acc_userid && password == acc_password { Some(UserProfile::new(userid, "Demo User", "HTTPBasic")) } else { None }
        }
    });
    strategy.set_cache(Arc::new(ProfileCache::new()));

    // Synthesize the request
    let userid: String = args.send_userid.unwrap_or(args.userid);
    let password: String = args.send_password.unwrap_or(args.password);
    let payload: String = Base64::encode_string(format!("{userid}:{password}").as_bytes());
    let mut headers = HeaderMap::new();
    match HeaderValue::from_str(&format!("Basic {payload}")) {
        Ok(value) => {
            headers.insert(AUTHORIZATION, value);
        },
        Err(err) => {
            error!("Failed to build the Authorization header: {err}");
            std::process::exit(1);
        },
    }
    let uri = Uri::from_static("http://localhost:8080/protected");

    // Authenticate it twice; the second attempt hits the cache (run with '--debug' to see)
    for attempt in 1..=2 {
        match strategy.authenticate(&uri, &headers).await {
            AuthOutcome::Success(profile) => println!("Attempt {attempt}: authenticated as {:?} (provider {:?})", profile.id, profile.provider),
            AuthOutcome::Failure { status, headers } => {
                println!("Attempt {attempt}: rejected with status {status} (challenge: {:?})", headers.get(http::header::WWW_AUTHENTICATE))
            },
            AuthOutcome::Pass { status, .. } => println!("Attempt {attempt}: not recognised; deferring with status {status}"),
        }
    }
}
