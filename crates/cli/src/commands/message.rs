use std::io::Read;

use clap::Args;
use herald_core::{Attachment, Block, WebhookMessage};

/// Flags describing the message to send or render.
#[derive(Args, Debug, Default)]
pub struct MessageArgs {
    /// Slack-shaped JSON message file, or `-` for stdin.
    #[arg(long, conflicts_with_all = ["title", "color", "text", "field", "divider"])]
    pub message: Option<String>,
    /// Target channel, where the platform supports overriding it.
    #[arg(long)]
    pub channel: Option<String>,
    /// Attachment title.
    #[arg(long)]
    pub title: Option<String>,
    /// Attachment accent color (`#RRGGBB`).
    #[arg(long)]
    pub color: Option<String>,
    /// Text block; repeat for several.
    #[arg(long)]
    pub text: Vec<String>,
    /// Field entry in `*Title*\nValue` form; a literal `\n` is a newline.
    #[arg(long)]
    pub field: Vec<String>,
    /// End the attachment with a divider.
    #[arg(long)]
    pub divider: bool,
}

impl MessageArgs {
    /// Build the message from `--message` or from the individual flags.
    pub fn build(&self) -> anyhow::Result<WebhookMessage> {
        let message = match self.message.as_deref() {
            Some(source) => read_message(source)?,
            None => self.assemble(),
        };
        Ok(match &self.channel {
            Some(channel) => message.with_channel(channel.clone()),
            None => message,
        })
    }

    fn assemble(&self) -> WebhookMessage {
        let mut attachment = Attachment::new(self.title.clone().unwrap_or_default());
        if let Some(color) = &self.color {
            attachment = attachment.with_color(color.clone());
        }
        for text in &self.text {
            attachment = attachment.with_block(Block::text(unescape_newlines(text)));
        }
        if !self.field.is_empty() {
            attachment = attachment.with_block(Block::fields(
                self.field.iter().map(|f| unescape_newlines(f)),
            ));
        }
        if self.divider {
            attachment = attachment.with_block(Block::Divider);
        }
        WebhookMessage::new().with_attachment(attachment)
    }
}

fn read_message(source: &str) -> anyhow::Result<WebhookMessage> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(source)?
    };
    Ok(serde_json::from_str(&content)?)
}

fn unescape_newlines(s: &str) -> String {
    s.replace("\\n", "\n")
}
