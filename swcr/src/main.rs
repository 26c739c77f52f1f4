//! # swcr
//!
//! A CLI tool that generates the source-code listing for a software copyright
//! submission.
//!
//! ## Overview
//!
//! swcr is built on top of swcrlib. It scans one or more directories for code
//! files, drops blank and comment lines, and writes the rest into a Word
//! document with the project title in the page header.
//!
//! ## Usage
//!
//! ```bash
//! # List C sources under the current directory into code.docx
//! swcr --title "My Project V1.0"
//!
//! # Several directories and extensions, skipping vendored code
//! swcr -t "My Project V1.0" -i src include -e c h cpp -x src/third_party
//!
//! # Python project with '#' comments and a custom font
//! swcr -t "Tool V2.0" -e py -c '#' --font-name Consolas --font-size 9
//!
//! # Only show which files would be listed
//! swcr -i src --list
//!
//! # Machine-readable run report
//! swcr -i src --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::Style;
use swcrlib::options::{DEFAULT_FONT_NAME, DEFAULT_OUTPUT, DEFAULT_TITLE};
use swcrlib::{
    discover, generate_listing, CommentMarkerSet, ExclusionSet, FileExtensionSet, ListingConfig,
    ListingReport, StyleProfile,
};
use tracing_subscriber::EnvFilter;

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("swcr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate the source-code listing document for a software copyright submission")
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .default_value(DEFAULT_TITLE)
                .help("Text placed in the page header"),
        )
        .arg(
            Arg::new("indir")
                .short('i')
                .long("indir")
                .alias("indirs")
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Input directory (repeatable, defaults to the current directory)"),
        )
        .arg(
            Arg::new("ext")
                .short('e')
                .long("ext")
                .alias("exts")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("File extension without the dot (repeatable, defaults to c and h)"),
        )
        .arg(
            Arg::new("comment-char")
                .short('c')
                .long("comment-char")
                .alias("comment_chars")
                .alias("comment-chars")
                .num_args(1..)
                .action(ArgAction::Append)
                .help("Comment marker (repeatable, defaults to /* * */ //)"),
        )
        .arg(
            Arg::new("font-name")
                .long("font-name")
                .alias("font_name")
                .default_value(DEFAULT_FONT_NAME)
                .help("Font for the header and every line"),
        )
        .arg(point_arg("font-size", "font_size", "10.5", "Font size in points"))
        .arg(point_arg(
            "space-before",
            "space_before",
            "0",
            "Space before each line in points",
        ))
        .arg(point_arg(
            "space-after",
            "space_after",
            "2.3",
            "Space after each line in points",
        ))
        .arg(point_arg(
            "line-spacing",
            "line_spacing",
            "10.5",
            "Exact line height in points",
        ))
        .arg(
            Arg::new("exclude")
                .short('x')
                .long("exclude")
                .alias("excludes")
                .num_args(1..)
                .action(ArgAction::Append)
                .value_parser(value_parser!(PathBuf))
                .help("Path prefix to leave out (repeatable)"),
        )
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .default_value(DEFAULT_OUTPUT)
                .value_parser(value_parser!(PathBuf))
                .help("Output document (.docx, or .txt for plain text)"),
        )
        .arg(
            Arg::new("sorted")
                .long("sorted")
                .action(ArgAction::SetTrue)
                .help("Visit files in name order instead of file system order"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Only list the files that would be included"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print results as JSON"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print debug logs"),
        )
}

/// A numeric style option measured in points
fn point_arg(
    name: &'static str,
    alias: &'static str,
    default: &'static str,
    help: &'static str,
) -> Arg {
    Arg::new(name)
        .long(name)
        .alias(alias)
        .value_parser(value_parser!(f32))
        .default_value(default)
        .help(help)
}

/// Extract a repeatable string option
fn extract_strings(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

/// Extract a repeatable path option
fn extract_paths(matches: &ArgMatches, id: &str) -> Vec<PathBuf> {
    matches
        .get_many::<PathBuf>(id)
        .map(|v| v.cloned().collect())
        .unwrap_or_default()
}

fn extract_points(matches: &ArgMatches, id: &str) -> f32 {
    matches.get_one::<f32>(id).copied().unwrap_or_default()
}

/// Build the run configuration from matches
fn build_config(matches: &ArgMatches) -> anyhow::Result<ListingConfig> {
    let style = StyleProfile::new()
        .font_name(
            matches
                .get_one::<String>("font-name")
                .cloned()
                .unwrap_or_default(),
        )
        .font_size(extract_points(matches, "font-size"))
        .space_before(extract_points(matches, "space-before"))
        .space_after(extract_points(matches, "space-after"))
        .line_spacing(extract_points(matches, "line-spacing"));

    let exclusions = ExclusionSet::new().exclude_many(extract_paths(matches, "exclude"))?;

    let mut config = ListingConfig::new()
        .input_dirs(extract_paths(matches, "indir"))
        .extensions(FileExtensionSet::new(extract_strings(matches, "ext")))
        .comment_markers(CommentMarkerSet::new(extract_strings(matches, "comment-char")))
        .exclusions(exclusions)
        .style(style)
        .sorted(matches.get_flag("sorted"));

    if let Some(title) = matches.get_one::<String>("title") {
        config = config.title(title);
    }
    if let Some(output) = matches.get_one::<PathBuf>("outfile") {
        config = config.output(output);
    }

    Ok(config)
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Handler for --list
fn list_handler(config: &ListingConfig, json: bool) -> anyhow::Result<()> {
    let files = discover(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in &files {
            println!("{}", file.display());
        }
    }

    Ok(())
}

/// Handler for the default generate command
fn generate_handler(config: &ListingConfig, json: bool) -> anyhow::Result<()> {
    let report = generate_listing(config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn print_summary(report: &ListingReport) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();
    let lines = &report.lines;

    println!(
        "{} {}",
        bold.apply_to("Wrote"),
        bold.apply_to(report.output.display())
    );
    println!(
        "  {} files, {} of {} lines kept {}",
        report.file_count(),
        lines.kept,
        lines.total,
        dim.apply_to(format!(
            "({} dropped: {} blank, {} comment)",
            lines.dropped(),
            lines.blank,
            lines.comment
        ))
    );

    let lossy: Vec<_> = report.files.iter().filter(|f| f.lossy).collect();
    if !lossy.is_empty() {
        let warn = Style::new().yellow();
        println!(
            "  {}",
            warn.apply_to(format!("{} files had undecodable bytes:", lossy.len()))
        );
        for file in lossy {
            println!("    {} ({})", file.path.display(), file.encoding);
        }
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = build_config(matches)?;
    tracing::debug!("configuration: {:?}", config);
    let json = matches.get_flag("json");

    if matches.get_flag("list") {
        list_handler(&config, json)
    } else {
        generate_handler(&config, json)
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ArgMatches {
        let mut argv = vec!["swcr"];
        argv.extend(args);
        build_command().try_get_matches_from(argv).unwrap()
    }

    #[test]
    fn test_command_is_well_formed() {
        build_command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = build_config(&parse(&[])).unwrap();

        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.input_dirs, vec![PathBuf::from(".")]);
        assert_eq!(config.extensions, FileExtensionSet::default());
        assert_eq!(config.comment_markers, CommentMarkerSet::default());
        assert_eq!(config.style, StyleProfile::default());
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(config.exclusions.is_empty());
    }

    #[test]
    fn test_multiple_values_and_repeats() {
        let config = build_config(&parse(&[
            "-i", "src", "include", "-i", "lib", "-e", "c", "h", "-e", "cpp",
        ]))
        .unwrap();

        assert_eq!(
            config.input_dirs,
            vec![
                PathBuf::from("src"),
                PathBuf::from("include"),
                PathBuf::from("lib")
            ]
        );
        assert_eq!(config.extensions.as_slice(), &["c", "h", "cpp"]);
    }

    #[test]
    fn test_comment_markers() {
        let config = build_config(&parse(&["-c", "#", "REM", "-c", "'"])).unwrap();
        assert_eq!(config.comment_markers.as_slice(), &["#", "REM", "'"]);
    }

    #[test]
    fn test_style_options() {
        let config = build_config(&parse(&[
            "--font-name",
            "Consolas",
            "--font-size",
            "9",
            "--space-before",
            "1",
            "--space-after",
            "0",
            "--line-spacing",
            "12",
        ]))
        .unwrap();

        assert_eq!(config.style.font_name, "Consolas");
        assert_eq!(config.style.font_size, 9.0);
        assert_eq!(config.style.space_before, 1.0);
        assert_eq!(config.style.space_after, 0.0);
        assert_eq!(config.style.line_spacing, 12.0);
    }

    #[test]
    fn test_underscore_aliases() {
        let config = build_config(&parse(&[
            "--indirs",
            "src",
            "--exts",
            "py",
            "--comment_chars",
            "#",
            "--font_size",
            "12",
        ]))
        .unwrap();

        assert_eq!(config.input_dirs, vec![PathBuf::from("src")]);
        assert_eq!(config.extensions.as_slice(), &["py"]);
        assert_eq!(config.comment_markers.as_slice(), &["#"]);
        assert_eq!(config.style.font_size, 12.0);
    }

    #[test]
    fn test_exclusions_are_absolute() {
        let config = build_config(&parse(&["-x", "vendor/"])).unwrap();
        let cwd = std::env::current_dir().unwrap();

        assert!(config.exclusions.is_excluded(&cwd.join("vendor/zlib.c")));
    }
}
