mod input;
mod paths;
mod sample;
mod settings;
mod terminal;
mod view;

use std::fs::{self, File};
use std::io;
use std::time::Duration;

use disclosure::{DisclosureConfig, DisclosurePage};
use log::LevelFilter;
use navdom::Document;
use simplelog::{Config, WriteLogger};

use input::{handle_input, InputAction};
use settings::Settings;
use terminal::Terminal;

/// Install the file logger. Failures are reported on stderr, before the
/// terminal switches to raw mode, and the app runs without a log.
fn init_logging(level: LevelFilter) {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        eprintln!("Warning: no cache directory, logging disabled");
        return;
    };
    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: failed to create {}: {}", dir.display(), e);
            return;
        }
    }
    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: failed to create log file {}: {}", path.display(), e);
            return;
        }
    };
    if let Err(e) = WriteLogger::init(level, Config::default(), file) {
        eprintln!("Warning: failed to initialize logger: {}", e);
    }
}

fn header(page: &DisclosurePage) -> Vec<String> {
    vec![
        "Tab/Shift+Tab: move focus   Enter/Space: toggle   Esc: close   q: quit".to_string(),
        format!(
            "Arrow key navigation: {} (press 'a' to toggle)",
            if page.arrow_keys_enabled() { "on" } else { "off" }
        ),
    ]
}

fn run(settings: &Settings) -> io::Result<()> {
    let config = DisclosureConfig::new().use_arrow_keys(settings.use_arrow_keys);
    let mut page = DisclosurePage::new(Document::new(sample::page()), config);
    page.init();

    let mut term = Terminal::new()?;

    loop {
        term.draw(&header(&page), &view::render_lines(page.document()))?;

        let raw = term.poll(Some(Duration::from_millis(250)))?;
        if handle_input(&mut page, &raw) == InputAction::Quit {
            return Ok(());
        }
    }
}

fn main() {
    let settings = Settings::from_env();
    init_logging(settings.log_level);
    log::info!("starting with {:?}", settings);

    if let Err(e) = run(&settings) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
