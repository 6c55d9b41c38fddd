//! Portfolio page entry point for native builds.
//!
//! Renders the page to the terminal and drives the application from
//! line-based input: section names switch tabs, `toggle` flips the theme.

#[cfg(not(target_arch = "wasm32"))]
fn parse_input(input: &str) -> Option<folio::Message> {
    use folio::{Message, Section};

    match input {
        "about" | "a" => Some(Message::SelectSection(Section::About)),
        "projects" | "p" => Some(Message::SelectSection(Section::Projects)),
        "experience" | "e" => Some(Message::SelectSection(Section::Experience)),
        "toggle" | "t" => Some(Message::ToggleTheme),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::io::{self, BufRead, Write};

    use folio::{
        ambient_prefers_dark, render_page, FileStore, MemoryStore, PortfolioApp,
        PortfolioContent, PreferenceStore, ThemePreferences,
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let store: Box<dyn PreferenceStore> = match FileStore::default_path() {
        Some(path) => Box::new(FileStore::new(path)),
        None => {
            log::warn!("Could not determine config directory; theme preference will not persist");
            Box::new(MemoryStore::new())
        }
    };

    let prefs = ThemePreferences::new(store, ambient_prefers_dark());
    let content = PortfolioContent::load_or_default();
    let mut app = PortfolioApp::new(prefs);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    print!("{}", render_page(&app, &content));
    let _ = write!(stdout, "\n> ");
    let _ = stdout.flush();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let input = line.trim().to_lowercase();

        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            _ => match parse_input(&input) {
                Some(message) => {
                    app.update(message);
                    println!();
                    print!("{}", render_page(&app, &content));
                }
                None => {
                    println!("Commands: about, projects, experience, toggle, quit");
                }
            },
        }

        let _ = write!(stdout, "\n> ");
        let _ = stdout.flush();
    }
}

// WASM builds only use the library; there is no terminal to drive
#[cfg(target_arch = "wasm32")]
fn main() {}
