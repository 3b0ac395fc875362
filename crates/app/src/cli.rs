//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cmf-swap", author, version, about = "Render procedural CMF material previews", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one JPEG preview per material
    Render(RenderArgs),

    /// Answer JSON render requests read line by line from stdin
    Serve(CanvasArgs),

    /// List the available material presets
    List {
        /// Show Korean labels
        #[arg(long)]
        korean: bool,
    },
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Material ids (wood, metal, fabric, leather, marble, carbon).
    /// Anything else renders the neutral fallback.
    #[arg(required = true)]
    pub materials: Vec<String>,

    /// Output directory for the JPEG files
    #[arg(short, long, default_value = ".")]
    pub out: PathBuf,

    /// Seed for reproducible textures
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub canvas: CanvasArgs,

    /// Print one JSON response per material instead of writing files
    #[arg(long)]
    pub json: bool,
}

/// Canvas overrides shared by `render` and `serve`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct CanvasArgs {
    /// Square canvas edge in pixels, overrides CMF_CANVAS_SIZE
    #[arg(long)]
    pub size: Option<u32>,

    /// JPEG quality 1-100, overrides CMF_JPEG_QUALITY
    #[arg(short, long)]
    pub quality: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from([
            "cmf-swap", "render", "wood", "marble", "--seed", "4", "--size", "400", "--json",
        ])
        .unwrap();

        let Command::Render(args) = cli.command else {
            panic!("expected render subcommand");
        };
        assert_eq!(args.materials, vec!["wood", "marble"]);
        assert_eq!(args.seed, Some(4));
        assert_eq!(args.canvas.size, Some(400));
        assert_eq!(args.canvas.quality, None);
        assert_eq!(args.out, PathBuf::from("."));
        assert!(args.json);
    }

    #[test]
    fn test_render_requires_material() {
        assert!(Cli::try_parse_from(["cmf-swap", "render"]).is_err());
    }

    #[test]
    fn test_parse_serve() {
        let cli = Cli::try_parse_from(["cmf-swap", "serve", "-q", "75"]).unwrap();
        let Command::Serve(canvas) = cli.command else {
            panic!("expected serve subcommand");
        };
        assert_eq!(canvas.size, None);
        assert_eq!(canvas.quality, Some(75));
    }

    #[test]
    fn test_parse_list() {
        let cli = Cli::try_parse_from(["cmf-swap", "list", "--korean"]).unwrap();
        assert!(matches!(cli.command, Command::List { korean: true }));
    }
}
