use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::{debug, error, warn};
use tracing_subscriber::EnvFilter;

use extract_css::args::{effective_target, flag_pair, inject_default_subcommand, languages_table};
use extract_css::destination::{Destination, Target, file_name_hint, source_stem};
use extract_css::settings::{DEFAULT_SETTINGS_FILE, Overrides, Settings};
use extract_css::test_runner;
use stylesheet::{Config, TargetLanguage};

#[derive(Parser)]
#[command(
    name = "extract-css",
    version,
    about = "Generate a stylesheet skeleton from the class names used in markup"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (TOML)
    #[arg(short, long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a stylesheet from markup files
    Generate(GenerateArgs),

    /// Run markup fixtures
    Test(TestArgs),

    /// List the supported target languages
    Languages,
}

#[derive(clap::Args)]
struct GenerateArgs {
    /// HTML or JSX files to extract class names from (`-` reads stdin)
    files: Vec<PathBuf>,

    /// Use these whitespace-separated class names instead of scanning files
    #[arg(long, conflicts_with = "files")]
    classes: Option<String>,

    /// Target language: css, sass, scss, less or stylus
    #[arg(short, long)]
    language: Option<TargetLanguage>,

    /// Where to put the result
    #[arg(short, long, value_enum)]
    target: Option<Target>,

    /// Nest elements and modifiers under their block
    #[arg(long, conflicts_with = "no_bem")]
    bem: bool,

    /// Emit every class name as a flat rule
    #[arg(long)]
    no_bem: bool,

    /// Precede nested rules with a comment naming the full selector
    #[arg(long, conflicts_with = "no_comments")]
    comments: bool,

    #[arg(long)]
    no_comments: bool,

    #[arg(long)]
    element_separator: Option<String>,

    #[arg(long)]
    modifier_separator: Option<String>,

    /// Directory for the `scratch` target
    #[arg(long)]
    scratch_dir: Option<PathBuf>,

    /// Print the extracted class names instead of generating
    #[arg(long)]
    list_classes: bool,

    /// Save the effective settings back to the settings file
    #[arg(long)]
    save: bool,
}

impl GenerateArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            language: self.language,
            target: self.target,
            bem: flag_pair(self.bem, self.no_bem),
            bem_comments: flag_pair(self.comments, self.no_comments),
            element_separator: self.element_separator.clone(),
            modifier_separator: self.modifier_separator.clone(),
            scratch_dir: self.scratch_dir.clone(),
        }
    }
}

#[derive(clap::Args)]
struct TestArgs {
    /// A fixture file or a directory containing them
    path: PathBuf,

    /// Run only fixtures in these categories (subfolder names). Repeatable.
    #[arg(long)]
    category: Vec<String>,

    /// List available categories and exit
    #[arg(long)]
    list_categories: bool,
}

fn main() {
    let args = inject_default_subcommand(std::env::args().collect());
    let cli = Cli::parse_from(&args);
    init_logging(cli.verbose);

    match cli.command {
        Command::Generate(ref generate_args) => {
            let exit_code = do_generate(&cli, generate_args);
            process::exit(exit_code);
        }
        Command::Test(ref test_args) => {
            if test_args.list_categories {
                test_runner::list_categories(&test_args.path);
                return;
            }
            let exit_code =
                test_runner::run_tests(&test_args.path, cli.no_color, &test_args.category);
            process::exit(exit_code);
        }
        Command::Languages => print_languages(),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "extract_css=debug,bem=debug,stylesheet=debug"
    } else {
        "extract_css=info,bem=warn,stylesheet=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn do_generate(cli: &Cli, args: &GenerateArgs) -> i32 {
    let mut settings = match Settings::load_from_path(&cli.config) {
        Ok(Some(settings)) => settings,
        Ok(None) => {
            debug!(path = %cli.config.display(), "no settings file, using defaults");
            Settings::default()
        }
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    settings.apply(&args.overrides());

    let config = match settings.to_config() {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    if args.save {
        if let Err(e) = settings.save_to_path(&cli.config) {
            error!("{}", e);
            return 1;
        }
    }

    let target = effective_target(args.classes.is_some(), args.target, settings.target);
    let destination = Destination::new(target, settings.scratch_dir());

    if let Some(classes) = &args.classes {
        let class_names: Vec<String> = classes.split_whitespace().map(str::to_string).collect();
        return emit(&config, &destination, None, "classes", &class_names, args.list_classes);
    }

    if args.files.is_empty() {
        error!("no input files (pass markup files, `-` for stdin, or --classes)");
        return 1;
    }

    let color_choice = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let writer = StandardStream::stderr(color_choice);
    let term_config = term::Config::default();
    let mut files = SimpleFiles::new();
    let mut exit_code = 0;

    for file in &args.files {
        let from_stdin = file.as_os_str() == "-";
        let source = match read_source(file, from_stdin) {
            Ok(source) => source,
            Err(e) => {
                error!("cannot read '{}': {}", file.display(), e);
                exit_code = 1;
                continue;
            }
        };

        let file_id = files.add(file.display().to_string(), source.clone());
        let scan = bem::scan_class_names(&source, file_id);
        for diagnostic in &scan.diagnostics {
            let _ = term::emit_to_write_style(
                &mut writer.lock(),
                &term_config,
                &files,
                &diagnostic.to_diagnostic(),
            );
        }
        if scan.has_errors() {
            exit_code = 1;
            continue;
        }
        if scan.class_names.is_empty() {
            warn!("no class names found in '{}'", file.display());
        }

        let source_path = (!from_stdin).then_some(file.as_path());
        let stem = source_stem(source_path);
        let code = emit(
            &config,
            &destination,
            source_path,
            &stem,
            &scan.class_names,
            args.list_classes,
        );
        exit_code = exit_code.max(code);
    }

    exit_code
}

fn read_source(path: &Path, from_stdin: bool) -> std::io::Result<String> {
    if from_stdin {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path)
    }
}

fn emit(
    config: &Config,
    destination: &Destination,
    source: Option<&Path>,
    stem: &str,
    class_names: &[String],
    list_only: bool,
) -> i32 {
    if list_only {
        for name in class_names {
            println!("{}", name);
        }
        return 0;
    }

    let text = stylesheet::generate(config, class_names);
    let file_name = file_name_hint(stem, config.language);
    match destination.deliver(source, &file_name, &text, &mut std::io::stdout()) {
        Ok(_) => 0,
        Err(e) => {
            error!("{}", e);
            1
        }
    }
}

fn print_languages() {
    println!("{}", languages_table());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut full = vec!["extract-css".to_string()];
        full.extend(args.iter().map(|a| a.to_string()));
        Cli::try_parse_from(inject_default_subcommand(full)).expect("arguments should parse")
    }

    #[test]
    fn options_before_the_file_reach_generate() {
        let cli = parse(&["--language", "scss", "--bem", "page.html", "-t", "stdout"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.language, Some(TargetLanguage::Scss));
        assert!(args.bem);
        assert_eq!(args.target, Some(Target::Stdout));
        assert_eq!(args.files, vec![PathBuf::from("page.html")]);
    }

    #[test]
    fn classes_alone_reach_generate() {
        let cli = parse(&["--no-color", "--classes", "a b"]);
        assert!(cli.no_color);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.classes.as_deref(), Some("a b"));
        assert!(args.files.is_empty());
    }

    #[test]
    fn overrides_follow_flag_pairs() {
        let cli = parse(&["--no-bem", "--comments", "x.html"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        let overrides = args.overrides();
        assert_eq!(overrides.bem, Some(false));
        assert_eq!(overrides.bem_comments, Some(true));
        assert_eq!(overrides.language, None);
    }

    #[test]
    fn config_before_the_subcommand() {
        let cli = parse(&["-c", "other.toml", "test", "fixtures"]);
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert!(matches!(cli.command, Command::Test(_)));
    }
}
