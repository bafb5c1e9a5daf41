use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "audiodrop")]
#[command(author, version, about = "Telegram bot that downloads audio and video from links", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Download a single link locally through yt-dlp, without Telegram
    Fetch {
        /// Link to download
        url: String,

        /// Fetch the default video stream instead of audio only
        #[arg(long)]
        video: bool,

        /// Output directory (defaults to DOWNLOAD_FOLDER)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the installed yt-dlp version
    VersionCheck,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
