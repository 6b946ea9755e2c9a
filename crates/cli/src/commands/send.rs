use clap::Args;
use herald_router::Router;
use tracing::debug;

use super::message::MessageArgs;

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Destination webhook URL.
    #[arg(long, env = "WEBHOOK_URL")]
    pub url: String,
    #[command(flatten)]
    pub message: MessageArgs,
}

pub async fn run(router: &Router, args: &SendArgs) -> anyhow::Result<()> {
    let message = args.message.build()?;
    let platform = router.resolve(&args.url)?;
    debug!(%platform, attachments = message.attachments.len(), "sending message");
    router.send_to(platform, &args.url, &message).await?;
    println!("delivered to {platform}");
    Ok(())
}
