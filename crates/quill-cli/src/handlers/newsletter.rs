#![deny(clippy::all, clippy::pedantic)]

use crate::args::NewsletterCmd;
use crate::client::{CliError, Ctx};

pub async fn handle(
    ctx: &Ctx,
    endpoint: Option<&str>,
    cmd: NewsletterCmd,
) -> Result<(), CliError> {
    match cmd {
        NewsletterCmd::Subscribe { email } => {
            let endpoint = endpoint.ok_or(CliError::MissingNewsletterUrl)?;
            ctx.subscribe(endpoint, &email).await?;
            println!("Subscribed {email}");
        }
    }
    Ok(())
}
