use clap::Args;
use herald_router::Router;

#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Webhook URL to inspect.
    #[arg(long)]
    pub url: String,
}

pub fn run(router: &Router, args: &DetectArgs) -> anyhow::Result<()> {
    println!("{}", router.resolve(&args.url)?);
    Ok(())
}
