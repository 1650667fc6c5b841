use clap::Parser;
use gtk4::prelude::*;
use gtk4::{Application, ApplicationWindow, ScrolledWindow};
use log::{info, warn};
use rec_intake::config::AppConfig;
use rec_intake::core::catalog::{scan_lecturer_images, scan_pattern_templates};
use rec_intake::ui::IntakeForm;
use std::path::PathBuf;

const APP_ID: &str = "com.github.rec_intake";

/// rec-intake - Desktop intake form for scheduling lecture recordings
#[derive(Parser, Debug, Clone)]
#[command(name = "rec-intake")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory holding the lecturer images (overrides config)
    #[arg(long = "lecturer-images", value_name = "DIR")]
    lecturer_images: Option<PathBuf>,

    /// Directory holding the pattern template directories (overrides config)
    #[arg(long = "templates", value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Configuration file to load instead of the default config
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

/// Global CLI options accessible from build_ui
static CLI_OPTIONS: std::sync::OnceLock<Cli> = std::sync::OnceLock::new();

fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logger with verbosity based on -d/--debug flag
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    warn!("Starting rec-intake v{}", env!("CARGO_PKG_VERSION"));

    // Store CLI options for access in build_ui
    CLI_OPTIONS.set(cli).expect("CLI options already set");

    // Create GTK application
    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(build_ui);

    // Run the application (pass empty args since we already parsed them)
    app.run_with_args(&["rec-intake"]);
}

fn build_ui(app: &Application) {
    info!("Building UI");

    // Get CLI options
    let cli = CLI_OPTIONS.get().cloned().unwrap_or(Cli {
        lecturer_images: None,
        templates: None,
        debug: 0,
        config_file: None,
    });

    // Load configuration - from the given file if specified, otherwise from
    // the default config location
    let app_config = if let Some(ref config_path) = cli.config_file {
        match AppConfig::load_from_path(config_path) {
            Ok(config) => {
                info!("Loaded configuration from: {}", config_path.display());
                config
            }
            Err(e) => {
                warn!(
                    "Failed to load config file '{}': {}",
                    config_path.display(),
                    e
                );
                AppConfig::load().unwrap_or_default()
            }
        }
    } else {
        match AppConfig::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        }
    };

    // Resolve asset directories - CLI options override config
    let lecturer_dir = cli
        .lecturer_images
        .unwrap_or_else(|| app_config.assets.lecturer_image_dir.clone());
    let template_dir = cli
        .templates
        .unwrap_or_else(|| app_config.assets.template_dir.clone());

    // Scan the option catalogs; a missing directory degrades to an empty
    // picker rather than failing the app
    let lecturers = match scan_lecturer_images(&lecturer_dir) {
        Ok(lecturers) => lecturers,
        Err(e) => {
            warn!("Failed to scan lecturer images: {}", e);
            Vec::new()
        }
    };
    let templates = match scan_pattern_templates(&template_dir) {
        Ok(templates) => templates,
        Err(e) => {
            warn!("Failed to scan pattern templates: {}", e);
            Vec::new()
        }
    };
    info!(
        "Loaded {} lecturer images and {} pattern templates",
        lecturers.len(),
        templates.len()
    );

    // Create the main window with configured dimensions
    let window = ApplicationWindow::builder()
        .application(app)
        .title("rec-intake - 収録入力フォーム")
        .default_width(app_config.window.width)
        .default_height(app_config.window.height)
        .build();

    let form = IntakeForm::new(&lecturers, &templates);
    form.set_on_submit(|record| match serde_json::to_string_pretty(record) {
        Ok(json) => info!("Collected intake record:\n{}", json),
        Err(e) => warn!("Failed to serialize intake record: {}", e),
    });

    // Wrap in ScrolledWindow so long option lists stay reachable
    let scrolled_window = ScrolledWindow::new();
    scrolled_window.set_policy(gtk4::PolicyType::Never, gtk4::PolicyType::Automatic);
    scrolled_window.set_child(Some(form.widget()));

    window.set_child(Some(&scrolled_window));
    window.present();
}
