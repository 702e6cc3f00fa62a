// shotscale/src/cli.rs
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shotscale", version, about = "Interactive screenshot resizer with interpolation comparison")]
pub struct Cli {
    /// Keep only files whose name contains this substring
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Directory to find images (defaults to the screenshots folder under
    /// the user's home)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Render every interpolation method into one stacked comparison image
    #[arg(short, long)]
    pub compare: bool,

    /// Interpolation method: linear, area, cubic or lanc (ignored when
    /// --compare is set)
    #[arg(short, long)]
    pub method: Option<String>,

    /// Width of the resized image in pixels
    #[arg(short, long, default_value_t = 300)]
    pub width: u32,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
