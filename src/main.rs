//! View VMware licenses (vCenter or standalone ESXi) over the REST API.
//!
//! One-shot flow: parse flags, open a session, print the endpoint
//! identity, list the installed licenses, close the session. Failures
//! are printed with a `[-]` prefix; the process always exits 0.

mod cli;
mod report;

use clap::Parser;
use vlicense_vsphere::session::VsphereSession;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = cli::Cli::parse().into_config();

    let session = match VsphereSession::connect(config).await {
        Ok(session) => session,
        Err(e) => {
            println!("[-] Connection failed: {e}");
            return;
        }
    };

    run(&session).await;

    // Every post-connect path funnels through here, so no session is
    // left open on normal termination.
    let _ = session.disconnect().await;
}

async fn run(session: &VsphereSession) {
    match session.about().await {
        Ok(about) => report::print_identity(&about),
        Err(e) => {
            println!("[-] Unable to read endpoint identity: {e}");
            return;
        }
    }

    report::report_licenses(session).await;
}
