use anyhow::Context;
use clap::Args;
use herald_core::Platform;
use herald_router::Router;

use super::message::MessageArgs;

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub message: MessageArgs,
}

pub fn run(router: &Router, platform: Option<&str>, args: &RenderArgs) -> anyhow::Result<()> {
    let platform: Platform = platform
        .context("render needs a target platform; pass --platform")?
        .parse()?;
    let payload = router.render(platform, &args.message.build()?)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
