use crate::config::load_config;
use crate::layout::compute_layout;
use crate::layout_dump::write_layout_dump;
use crate::logging::init_logger;
use crate::render::{render_svg, write_output_svg};
use crate::scene::Scene;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[cfg(feature = "png")]
use crate::render::write_output_png;

pub const DEFAULT_OUTPUT_STEM: &str = "docs/catamm-board-layout";

#[derive(Parser, Debug)]
#[command(
    name = "catamm-layout",
    version,
    about = "Render the CATAMM board-layout mockup (Catan board with AMM trading widgets)"
)]
pub struct Args {
    /// Output file (png/svg), or '-' to print SVG to stdout.
    /// Defaults to docs/catamm-board-layout.<ext>
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "png")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme, themeVariables, render, board)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Also write a JSON summary of the computed layout
    #[arg(long = "dumpLayout")]
    pub dump_layout: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Png,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
        }
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);
    if let Some(path) = run_with_args(args)? {
        println!("Board layout image created: {}", path.display());
    }
    Ok(())
}

/// Renders the mockup for already-parsed arguments. Returns the written
/// image path, or `None` when the SVG went to stdout.
pub fn run_with_args(args: Args) -> Result<Option<PathBuf>> {
    let config = load_config(args.config.as_deref())?;
    debug!(config = ?args.config, "config loaded");

    let scene = Scene::sample();
    let layout = compute_layout(&scene, &config);
    info!(
        width = layout.width,
        height = layout.height,
        hexes = layout.hexes.len(),
        ports = layout.ports.len(),
        "layout ready"
    );

    if let Some(path) = args.dump_layout.as_deref() {
        ensure_parent_dir(path)?;
        write_layout_dump(&layout, path)?;
        debug!(path = %path.display(), "layout dump written");
    }

    let svg = render_svg(&layout);
    let output = resolve_output(args.output.as_deref(), args.output_format);

    match (args.output_format, output) {
        (OutputFormat::Svg, None) => {
            write_output_svg(&svg, None)?;
            Ok(None)
        }
        (OutputFormat::Png, None) => Err(anyhow::anyhow!("PNG output cannot be written to stdout")),
        (format, Some(path)) => {
            ensure_parent_dir(&path)?;
            match format {
                OutputFormat::Svg => write_output_svg(&svg, Some(&path))?,
                #[cfg(feature = "png")]
                OutputFormat::Png => write_output_png(&svg, &path, &config.render, &config.theme)?,
                #[cfg(not(feature = "png"))]
                OutputFormat::Png => {
                    return Err(anyhow::anyhow!("PNG output requires the `png` feature"));
                }
            }
            Ok(Some(path))
        }
    }
}

/// `None` means stdout.
fn resolve_output(output: Option<&Path>, format: OutputFormat) -> Option<PathBuf> {
    match output {
        Some(path) if path == Path::new("-") => None,
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(format!(
            "{DEFAULT_OUTPUT_STEM}.{}",
            format.extension()
        ))),
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_follows_format() {
        assert_eq!(
            resolve_output(None, OutputFormat::Png),
            Some(PathBuf::from("docs/catamm-board-layout.png"))
        );
        assert_eq!(
            resolve_output(None, OutputFormat::Svg),
            Some(PathBuf::from("docs/catamm-board-layout.svg"))
        );
        assert_eq!(resolve_output(Some(Path::new("-")), OutputFormat::Svg), None);
        assert_eq!(
            resolve_output(Some(Path::new("out/x.png")), OutputFormat::Png),
            Some(PathBuf::from("out/x.png"))
        );
    }

    #[test]
    fn args_parse_flags() {
        let args = Args::try_parse_from([
            "catamm-layout",
            "-e",
            "svg",
            "-o",
            "board.svg",
            "--dumpLayout",
            "layout.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.output_format, OutputFormat::Svg);
        assert_eq!(args.output, Some(PathBuf::from("board.svg")));
        assert_eq!(args.dump_layout, Some(PathBuf::from("layout.json")));
        assert!(args.verbose);

        let defaults = Args::try_parse_from(["catamm-layout"]).unwrap();
        assert_eq!(defaults.output_format, OutputFormat::Png);
        assert!(defaults.output.is_none());
    }

    #[test]
    fn parent_dirs_are_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("deeper").join("out.svg");
        ensure_parent_dir(&target).unwrap();
        assert!(target.parent().unwrap().is_dir());
        ensure_parent_dir(Path::new("bare.svg")).unwrap();
    }

    fn args(flags: &[&str]) -> Args {
        let mut argv = vec!["catamm-layout"];
        argv.extend_from_slice(flags);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn svg_run_writes_the_reported_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("docs").join("board.svg");
        let dump = dir.path().join("dump").join("layout.json");
        let target_arg = target.to_string_lossy().into_owned();
        let dump_arg = dump.to_string_lossy().into_owned();

        let written = run_with_args(args(&[
            "-e",
            "svg",
            "-o",
            target_arg.as_str(),
            "--dumpLayout",
            dump_arg.as_str(),
        ]))
        .unwrap();

        assert_eq!(written.as_deref(), Some(target.as_path()));
        let svg = std::fs::read_to_string(&target).unwrap();
        assert!(svg.contains("CATAMM - Catan with AMM Trading"));
        assert!(dump.is_file());
    }

    #[cfg(feature = "png")]
    #[test]
    fn png_run_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a").join("b").join("board.png");
        let target_arg = target.to_string_lossy().into_owned();

        let written = run_with_args(args(&["-o", target_arg.as_str()])).unwrap();

        assert_eq!(written.as_deref(), Some(target.as_path()));
        assert!(std::fs::metadata(&target).unwrap().len() > 0);
    }

    #[test]
    fn png_to_stdout_is_rejected() {
        let err = run_with_args(args(&["-e", "png", "-o", "-"])).unwrap_err();
        assert!(err.to_string().contains("stdout"));
    }

    #[test]
    fn missing_config_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        let missing_arg = missing.to_string_lossy().into_owned();
        let target = dir.path().join("board.svg");
        let target_arg = target.to_string_lossy().into_owned();

        let result = run_with_args(args(&[
            "-e",
            "svg",
            "-c",
            missing_arg.as_str(),
            "-o",
            target_arg.as_str(),
        ]));
        assert!(result.is_err());
        assert!(!target.exists());
    }
}
