use clap::{Args, Parser, Subcommand};
use smartcv_data::CvData;
use smartcv_render::{Escaping, RenderOptions};
use std::path::Path;

#[derive(Parser)]
#[command(name = "smartcv")]
#[command(about = "SmartCV: build an HTML résumé from a YAML file")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    build: BuildArgs,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Render a CV to HTML (the default when no subcommand is given)
    Build(BuildArgs),

    /// Load a CV and check it can be rendered, without writing anything
    Check {
        /// Input YAML file
        path: String,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Input YAML file
    #[arg(default_value = "templates/template.yml")]
    yaml: String,

    /// Stylesheet linked from the generated page
    #[arg(default_value = "styles/style01.css")]
    css: String,

    /// Directory receiving CV_<name>.html (created if missing)
    #[arg(default_value = "output")]
    output_dir: String,

    /// Insert field values without HTML escaping
    #[arg(long)]
    raw: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Command::Build(args)) => cmd_build(&args),
        Some(Command::Check { path }) => cmd_check(&path),
        None => cmd_build(&cli.build),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_cv(path: &str) -> CvData {
    match CvData::load(path) {
        Ok(cv) => cv,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(args: &BuildArgs) {
    let cv = load_cv(&args.yaml);

    let output_dir = Path::new(&args.output_dir);
    if let Err(e) = std::fs::create_dir_all(output_dir) {
        eprintln!("Error creating {}: {e}", output_dir.display());
        std::process::exit(1);
    }

    let options = RenderOptions::with_escaping(if args.raw {
        Escaping::Raw
    } else {
        Escaping::Html
    });

    match smartcv_render::render(&cv, &args.css, output_dir, &options) {
        Ok(path) => eprintln!("Built: {}", path.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_check(path: &str) {
    let cv = load_cv(path);

    match smartcv_render::output_file_name(cv.personal_info()) {
        Ok(file_name) => {
            log::info!(
                "{} job(s), {} education entr(ies), {} skill(s), {} hobb(ies)",
                cv.work_experience().len(),
                cv.education().len(),
                cv.skills().len(),
                cv.hobbies().len()
            );
            eprintln!("OK: {path} -> {file_name}");
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
