use clap::Parser;
use std::path::PathBuf;

/// # Summary
/// 命令行参数定义。
///
/// # Invariants
/// - 渠道开关互相独立，可同时开启多个渠道。
#[derive(Parser, Debug)]
#[command(name = "oshirase")]
#[command(about = "Send a message to your own email / social accounts")]
pub struct Args {
    /// Settings file
    #[arg(long, default_value_os_t = crate::settings::default_settings_path())]
    pub settings: PathBuf,

    /// Create a settings file template and exit
    #[arg(short, long)]
    pub create: bool,

    /// Verbose logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Notify me via email
    #[arg(short, long)]
    pub email: bool,

    /// Notify me via the social channel
    #[arg(short, long)]
    pub social: bool,

    /// Don't actually notify anyone
    #[arg(long)]
    pub dry_run: bool,

    /// Message
    #[arg(default_value = "")]
    pub message: String,

    /// Capture additional message content from stdin
    #[arg(short, long)]
    pub input: bool,

    /// Subject (if applicable)
    #[arg(long, default_value = "")]
    pub subject: String,
}
