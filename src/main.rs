//! Main application entry point (CLI binary).
//!
//! Thin wrapper around the `avatar_resolver` library that handles argument
//! parsing, logger initialization, and writing the resolved image to disk.
//! A missing avatar is a normal outcome and exits successfully.

use anyhow::{Context, Result};
use structopt::StructOpt;

use avatar_resolver::config::Opt;
use avatar_resolver::initialization::init_logger_with;
use avatar_resolver::{AvatarResolver, AvatarResult};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();

    init_logger_with(opt.log_level.into(), opt.log_format)
        .context("Failed to initialize logger")?;

    let size = opt.avatar_size()?;
    let config = opt.to_config()?;
    let resolver = AvatarResolver::new(config).context("Failed to initialize resolver")?;

    match resolver.resolve(&opt.email, size).await {
        AvatarResult::Found(image) => {
            let path = opt.output.join(&image.file_name);
            tokio::fs::write(&path, &image.bytes)
                .await
                .with_context(|| format!("Failed to write avatar to {}", path.display()))?;
            println!("{} ({})", path.display(), image.content_type);
        }
        AvatarResult::NotFound => {
            println!("No avatar found for {}", opt.email.trim());
        }
    }

    Ok(())
}
